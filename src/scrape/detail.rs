//! Extraction of an inaugural address from its archive page

use super::slug;
use scraper::{Html, Selector};

/// Name of the president who delivered the address
const AUTHOR_SELECTOR: &str = "div.field-docs-person > div > div.field-title > h3.diet-title";

/// Textual date of the address, e.g. "January 20, 2021"
const DATE_SELECTOR: &str = "div.field-docs-start-date-time > span";

/// Full text of the address
const BODY_SELECTOR: &str = "div.field-docs-content";

/// Inaugural address extracted from its archive page
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Document {
    /// Name of the president
    pub author: Box<str>,

    /// Four-digit year, as it appears in the page
    pub year: Box<str>,

    /// Text of the address
    pub body: Box<str>,
}
//
impl Document {
    /// File name stem under which this address is stored
    ///
    /// Distinct addresses may map to the same stem, in which case the last
    /// one to be stored wins.
    pub fn slug(&self) -> String {
        slug::slugify(&format!("{}-{}", self.year, self.author))
    }
}

/// Fields of an address page, each of which may be missing
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DetailFields {
    /// Name of the president
    pub author: Option<Box<str>>,

    /// Year extracted from the textual date
    pub year: Option<Box<str>>,

    /// Text of the address
    pub body: Option<Box<str>>,
}
//
impl DetailFields {
    /// Extract the fields from an address page's markup
    ///
    /// A field whose selector does not match, or whose text is blank, is
    /// reported as missing.
    pub fn parse(markup: &str) -> Self {
        let document = Html::parse_document(markup);
        let author = select_text(&document, AUTHOR_SELECTOR);
        let year = select_text(&document, DATE_SELECTOR).and_then(|date| year_of(&date));
        let body = select_text(&document, BODY_SELECTOR);
        Self { author, year, body }
    }

    /// Turn into a complete record, if no field is missing
    pub fn into_document(self) -> Option<Document> {
        Some(Document {
            author: self.author?,
            year: self.year?,
            body: self.body?,
        })
    }
}

/// Parse an address page, dropping it if any field is missing
pub fn parse(markup: &str) -> Option<Document> {
    DetailFields::parse(markup).into_document()
}

/// Extract the year from a "Month Day, Year" textual date
///
/// This is a textual heuristic: the last comma-separated segment is taken as
/// the year, without any validation. Dates laid out differently produce a
/// wrong year, and blank trailing segments produce none.
pub fn year_of(date: &str) -> Option<Box<str>> {
    let year = date.rsplit(',').next()?.trim();
    (!year.is_empty()).then(|| year.into())
}

/// Trimmed text of the first element matching a selector, if not blank
fn select_text(document: &Html, selector: &str) -> Option<Box<str>> {
    let selector = Selector::parse(selector)
        .expect("address page selectors should be valid CSS selectors");
    let element = document.select(&selector).next()?;
    let text = element.text().collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(author: Option<&str>, date: Option<&str>, body: Option<&str>) -> String {
        let author = author
            .map(|a| {
                format!(
                    r#"<div class="field-docs-person"><div><div class="field-title">
                         <h3 class="diet-title"><a href="/people/president">{a}</a></h3>
                       </div></div></div>"#
                )
            })
            .unwrap_or_default();
        let date = date
            .map(|d| format!(r#"<div class="field-docs-start-date-time"><span>{d}</span></div>"#))
            .unwrap_or_default();
        let body = body
            .map(|b| format!(r#"<div class="field-docs-content">{b}</div>"#))
            .unwrap_or_default();
        format!("<html><body>{author}{date}{body}</body></html>")
    }

    #[test]
    fn complete_page() {
        let markup = page(
            Some(" Joseph R. Biden, Jr. "),
            Some("January 20, 2021"),
            Some("<p>Chief Justice Roberts, Vice President Harris...</p>\n<p>This is America's day.</p>"),
        );
        let document = parse(&markup).unwrap();
        assert_eq!(&*document.author, "Joseph R. Biden, Jr.");
        assert_eq!(&*document.year, "2021");
        assert_eq!(
            &*document.body,
            "Chief Justice Roberts, Vice President Harris...\nThis is America's day."
        );
        assert_eq!(document.slug(), "2021-joseph-r-biden-jr");
    }

    #[test]
    fn missing_body_drops_the_page() {
        let markup = page(Some("George Washington"), Some("April 30, 1789"), None);
        let fields = DetailFields::parse(&markup);
        assert_eq!(fields.author.as_deref(), Some("George Washington"));
        assert_eq!(fields.year.as_deref(), Some("1789"));
        assert_eq!(fields.body, None);
        assert_eq!(fields.into_document(), None);
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let markup = page(Some("   "), Some("March 4, 1801"), Some("Friends and fellow citizens"));
        assert_eq!(parse(&markup), None);
        let markup = page(Some("Thomas Jefferson"), Some("March 4, "), Some("Friends"));
        assert_eq!(parse(&markup), None);
    }

    #[test]
    fn year_heuristic() {
        assert_eq!(year_of("January 20, 2021").as_deref(), Some("2021"));
        assert_eq!(year_of("Monday, March 4, 1861").as_deref(), Some("1861"));
        // No trailing year segment: the whole text is taken as-is
        assert_eq!(year_of("1789").as_deref(), Some("1789"));
        assert_eq!(year_of("April 30 1789").as_deref(), Some("April 30 1789"));
        assert_eq!(year_of("April 30,  "), None);
    }
}
