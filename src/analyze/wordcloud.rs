//! Word cloud rendering of a frequency table
//!
//! Words are laid out in order of decreasing frequency, each at a random free
//! spot of the canvas, with a size that grows with frequency. Free spots are
//! tracked on a coarse occupancy grid with a summed-area table, so checking
//! whether a word fits somewhere is a constant-time operation. A word which
//! fits nowhere is shrunk until it does, and subsequent words are never drawn
//! larger than it. Text is drawn using an embedded 8x8 bitmap font, scaled up
//! by an integer factor.

use super::frequency::FrequencyTable;
use crate::Result;
use anyhow::Context;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{ImageFormat, Rgb, RgbImage};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::path::Path;

/// Title drawn at the top of the word cloud
pub const WORDCLOUD_TITLE: &str = "Inaugural Addresses - Raw Word Cloud";

/// Side of a font glyph in pixels, before scaling
const GLYPH_SIZE: u32 = 8;

/// Side of an occupancy grid cell in pixels
const CELL_SIZE: u32 = 4;

/// Scale factor of the title glyphs
const TITLE_SCALE: u32 = 3;

/// Blank space around the title, in pixels
const TITLE_MARGIN: u32 = 8;

/// Word colors, sampled from the viridis colormap
const PALETTE: [Rgb<u8>; 8] = [
    Rgb([68, 1, 84]),
    Rgb([70, 50, 127]),
    Rgb([54, 92, 141]),
    Rgb([39, 127, 142]),
    Rgb([31, 161, 135]),
    Rgb([74, 194, 109]),
    Rgb([159, 218, 58]),
    Rgb([210, 226, 27]),
];

/// Color of the title
const TITLE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Word cloud renderer configuration
#[derive(Clone, Debug, PartialEq)]
pub struct WordCloud {
    /// Canvas width in pixels
    width: u32,

    /// Canvas height in pixels
    height: u32,

    /// Canvas background color
    background: Rgb<u8>,

    /// Maximal number of words drawn
    max_words: usize,

    /// Importance of relative word frequencies for word sizes, from 0 (only
    /// the frequency order matters) to 1 (sizes are proportional to
    /// frequencies)
    relative_scaling: f64,

    /// Seed of the layout and color randomness
    seed: u64,

    /// Title drawn at the top of the canvas, if any
    title: Option<Box<str>>,
}
//
impl WordCloud {
    /// Renderer for a canvas of a certain size, white and untitled
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Rgb([255, 255, 255]),
            max_words: 200,
            relative_scaling: 0.5,
            seed: 42,
            title: None,
        }
    }

    /// Draw a title at the top of the canvas
    pub fn with_title(self, title: impl Into<Box<str>>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Render the word cloud of a frequency table
    pub fn render(&self, table: &FrequencyTable) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, self.background);
        let mut occupancy = Occupancy::new(
            self.width.div_ceil(CELL_SIZE) as usize,
            self.height.div_ceil(CELL_SIZE) as usize,
        );
        let mut rng = StdRng::seed_from_u64(self.seed);

        // Draw the title and keep words away from it
        if let Some(title) = &self.title {
            let glyphs = glyphs_of(title);
            let (title_width, _) = text_size(glyphs.len(), TITLE_SCALE);
            let x = self.width.saturating_sub(title_width) / 2;
            draw_text(&mut image, &glyphs, (x, TITLE_MARGIN), TITLE_SCALE, TITLE_COLOR);
            let band_height = GLYPH_SIZE * TITLE_SCALE + 2 * TITLE_MARGIN;
            occupancy.fill(0, 0, occupancy.cols, cells(band_height));
        }

        // Lay out words by decreasing frequency
        let mut words = table.by_decreasing_frequency();
        words.truncate(self.max_words);
        let Some(&(_, max_frequency)) = words.first() else {
            log::warn!("Rendering a word cloud without any word");
            return image;
        };
        let max_scale = (self.height / (5 * GLYPH_SIZE)).max(1);
        let mut last_scale = max_scale;
        let mut num_drawn = 0;
        'words: for (word, frequency) in words {
            let glyphs = glyphs_of(word);
            let weight = self.relative_scaling * (frequency as f64 / max_frequency as f64)
                + (1.0 - self.relative_scaling);
            let mut scale = ((max_scale as f64 * weight).round() as u32).clamp(1, last_scale);
            let (x, y) = loop {
                let (width, height) = text_size(glyphs.len(), scale);
                let (cols, rows) = (cells(width) + 1, cells(height) + 1);
                if let Some(position) = occupancy.random_free_position(cols, rows, &mut rng) {
                    occupancy.fill(position.0, position.1, cols, rows);
                    break position;
                }
                if scale == 1 {
                    log::trace!("No room left for {word:?} in the word cloud");
                    continue 'words;
                }
                scale -= 1;
            };
            last_scale = scale;
            let color = *PALETTE.choose(&mut rng).unwrap_or(&PALETTE[0]);
            let origin = (x as u32 * CELL_SIZE, y as u32 * CELL_SIZE);
            draw_text(&mut image, &glyphs, origin, scale, color);
            num_drawn += 1;
        }
        log::debug!("Drew {num_drawn} words in the word cloud");
        image
    }

    /// Render the word cloud of a frequency table into a PNG file
    ///
    /// Parent directories are created as needed.
    pub fn save(&self, table: &FrequencyTable, path: &Path) -> Result<()> {
        let context = || format!("saving word cloud to {}", path.display());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(context)?;
        }
        self.render(table)
            .save_with_format(path, ImageFormat::Png)
            .with_context(context)
    }
}
//
impl Default for WordCloud {
    fn default() -> Self {
        Self::new(1600, 800).with_title(WORDCLOUD_TITLE)
    }
}

/// Number of occupancy grid cells needed to cover some pixels
fn cells(pixels: u32) -> usize {
    pixels.div_ceil(CELL_SIZE) as usize
}

/// Size in pixels of a line of text
fn text_size(num_glyphs: usize, scale: u32) -> (u32, u32) {
    let side = GLYPH_SIZE * scale;
    (side * num_glyphs as u32, side)
}

/// Bitmap glyphs of some text
///
/// Typographic punctuation is drawn as its ASCII equivalent, characters that
/// the font does not know are drawn as question marks.
fn glyphs_of(text: &str) -> Vec<[u8; 8]> {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .map(|c| {
            BASIC_FONTS
                .get(c)
                .or_else(|| LATIN_FONTS.get(c))
                .or_else(|| BASIC_FONTS.get('?'))
                .unwrap_or([0xFF; 8])
        })
        .collect()
}

/// Draw a line of text with its top-left corner at `origin`
///
/// Pixels falling outside of the image are clipped.
fn draw_text(
    image: &mut RgbImage,
    glyphs: &[[u8; 8]],
    origin: (u32, u32),
    scale: u32,
    color: Rgb<u8>,
) {
    let (x0, y0) = origin;
    for (index, glyph) in glyphs.iter().enumerate() {
        let glyph_x = x0 + index as u32 * GLYPH_SIZE * scale;
        for (row, &bits) in (0u32..).zip(glyph) {
            for col in 0..GLYPH_SIZE {
                // Least significant bit is the leftmost pixel
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = glyph_x + col * scale + dx;
                        let y = y0 + row * scale + dy;
                        if x < image.width() && y < image.height() {
                            image.put_pixel(x, y, color);
                        }
                    }
                }
            }
        }
    }
}

/// Coarse map of the canvas areas that are already drawn on
#[derive(Clone, Debug)]
struct Occupancy {
    /// Number of grid columns
    cols: usize,

    /// Number of grid rows
    rows: usize,

    /// Truth that each cell is occupied, row-major
    occupied: Vec<bool>,

    /// Summed-area table of `occupied`, with an extra leading row and column
    /// of zeros, row-major
    sums: Vec<u32>,
}
//
impl Occupancy {
    /// Set up an empty grid
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            occupied: vec![false; cols * rows],
            sums: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    /// Mark a rectangle of cells as occupied, clipping it to the grid
    fn fill(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for row in y..(y + height).min(self.rows) {
            for col in x..(x + width).min(self.cols) {
                self.occupied[row * self.cols + col] = true;
            }
        }
        self.update_sums();
    }

    /// Recompute the summed-area table
    fn update_sums(&mut self) {
        let stride = self.cols + 1;
        for row in 0..self.rows {
            let mut row_sum = 0;
            for col in 0..self.cols {
                row_sum += u32::from(self.occupied[row * self.cols + col]);
                self.sums[(row + 1) * stride + col + 1] = self.sums[row * stride + col + 1] + row_sum;
            }
        }
    }

    /// Number of occupied cells within a rectangle that fits in the grid
    fn occupied_cells(&self, x: usize, y: usize, width: usize, height: usize) -> u32 {
        let stride = self.cols + 1;
        let sum = |row: usize, col: usize| self.sums[row * stride + col];
        (sum(y + height, x + width) + sum(y, x)) - (sum(y, x + width) + sum(y + height, x))
    }

    /// Pick a uniformly random position where a rectangle of cells fits
    /// without overlapping anything, if there is one
    fn random_free_position(
        &self,
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> Option<(usize, usize)> {
        if width > self.cols || height > self.rows {
            return None;
        }
        let free_positions = || {
            (0..=self.rows - height)
                .flat_map(move |y| (0..=self.cols - width).map(move |x| (x, y)))
                .filter(move |&(x, y)| self.occupied_cells(x, y, width, height) == 0)
        };
        let num_free = free_positions().count();
        if num_free == 0 {
            return None;
        }
        free_positions().nth(rng.gen_range(0..num_free))
    }
}
