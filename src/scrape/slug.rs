//! File-system safe identifiers

use unicode_normalization::UnicodeNormalization;

/// Convert some text into an ASCII, lowercase, hyphen-delimited slug
///
/// Accented characters are decomposed and stripped of their diacritics, other
/// non-ASCII characters are dropped, and every run of non-alphanumeric ASCII
/// characters becomes a single hyphen. The result never starts or ends with a
/// hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.nfkd().filter(char::is_ascii) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presidential_names() {
        assert_eq!(slugify("2021-Joseph R. Biden, Jr."), "2021-joseph-r-biden-jr");
        assert_eq!(slugify("1789-George Washington"), "1789-george-washington");
        assert_eq!(slugify("1933-Franklin D. Roosevelt"), "1933-franklin-d-roosevelt");
    }

    #[test]
    fn accents_and_non_ascii() {
        assert_eq!(slugify("Élysée Café"), "elysee-cafe");
        assert_eq!(slugify("naïve — résumé"), "naive-resume");
        assert_eq!(slugify("東京 2020"), "2020");
    }

    #[test]
    fn hyphen_runs_are_collapsed_and_trimmed() {
        assert_eq!(slugify("--Hello,,  World!!--"), "hello-world");
        assert_eq!(slugify("...."), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn output_charset_and_determinism() {
        for input in ["1861-Abraham Lincoln", "  Ünïcödé   & co. ", "A_B-C'D"] {
            let slug = slugify(input);
            assert_eq!(slug, slugify(input));
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }
}
