//! Glyph measurement contract
//!
//! Word wrap and alignment only need advance widths and line heights, so
//! the layout engine consumes them through the [`TextMeasurer`] trait.
//! [`FontBank`] is the production implementation backed by `fontdue`
//! advance metrics; [`MonospaceMeasurer`] is a fixed-advance stand-in for
//! tests and tools.

use fontdue::{Font, FontSettings};

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur loading fonts into the bank.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to parse font data
    #[error("Failed to load font: {0}")]
    LoadError(String),
}

/// Pure width/height queries for one interface font.
///
/// Implementations are side-effect-free; the engine never mutates font
/// state during layout.
pub trait TextMeasurer {
    /// Advance width of `text` in pixels for the given font.
    fn text_width(&self, font_id: u16, text: &str) -> f32;

    /// Baseline-to-baseline line height for the given font.
    fn line_height(&self, font_id: u16) -> i32;
}

/// Fixed-advance measurer: every character is `advance` wide and every
/// line is `height` tall. Keeps layout arithmetic exact in tests.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    /// Per-character advance in pixels.
    pub advance: f32,
    /// Line height in pixels.
    pub height: i32,
}

impl MonospaceMeasurer {
    /// Create a measurer with the given cell metrics.
    pub fn new(advance: f32, height: i32) -> Self {
        Self { advance, height }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, _font_id: u16, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self, _font_id: u16) -> i32 {
        self.height
    }
}

const ASCII_START: u32 = 32; // Space character
const ASCII_END: u32 = 126; // Tilde character
const ASCII_COUNT: usize = (ASCII_END - ASCII_START + 1) as usize;

/// One loaded font with its pixel size and cached ASCII advances.
struct FontEntry {
    font: Font,
    size: f32,
    ascii_advances: [f32; ASCII_COUNT],
}

/// Font collection indexed by the `font_id` carried in layout parameters.
///
/// Loads TrueType/OpenType data with `fontdue` and caches advance widths
/// for the printable ASCII range; other characters are measured on demand.
#[derive(Default)]
pub struct FontBank {
    entries: Vec<FontEntry>,
}

impl FontBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load a font from TTF/OTF bytes at a pixel size, returning the id to
    /// reference it by.
    pub fn load_font(&mut self, font_data: &[u8], size: f32) -> FontResult<u16> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::LoadError(format!("fontdue error: {e}")))?;

        let mut ascii_advances = [0.0f32; ASCII_COUNT];
        for code_point in ASCII_START..=ASCII_END {
            let ch = char::from_u32(code_point).expect("printable ASCII");
            ascii_advances[(code_point - ASCII_START) as usize] =
                font.metrics(ch, size).advance_width;
        }

        let id = u16::try_from(self.entries.len()).expect("font bank exceeds u16 ids");
        self.entries.push(FontEntry {
            font,
            size,
            ascii_advances,
        });

        log::info!("Loaded font {id} at {size}px");
        Ok(id)
    }

    /// Number of loaded fonts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fonts are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, font_id: u16) -> &FontEntry {
        self.entries
            .get(usize::from(font_id))
            .unwrap_or_else(|| panic!("invalid font id {font_id}"))
    }
}

impl TextMeasurer for FontBank {
    fn text_width(&self, font_id: u16, text: &str) -> f32 {
        let entry = self.entry(font_id);
        text.chars()
            .map(|ch| {
                let code = ch as u32;
                if (ASCII_START..=ASCII_END).contains(&code) {
                    entry.ascii_advances[(code - ASCII_START) as usize]
                } else {
                    entry.font.metrics(ch, entry.size).advance_width
                }
            })
            .sum()
    }

    fn line_height(&self, font_id: u16) -> i32 {
        // 120% of the pixel size is a reasonable default
        #[allow(clippy::cast_possible_truncation)]
        let height = (self.entry(font_id).size * 1.2).round() as i32;
        height
    }
}
