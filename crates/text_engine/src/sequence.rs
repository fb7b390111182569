//! Template component stream and text sequences
//!
//! Every localized template is parsed once into an ordered run of
//! [`TextComponent`]s appended to a single shared list owned by the
//! context. A [`TextSequence`] is only a `(start, count)` slice into that
//! list; many sequences share the backing storage and nothing is ever
//! removed or relocated, so slices stay valid for the lifetime of the
//! loaded language.

use crate::arena::TextKey;
use crate::variables::VariableType;

slotmap::new_key_type! {
    /// Stable handle to a registered text sequence.
    pub struct TextSequenceId;
}

/// Closed set of interface text colors.
///
/// `Unspecified` is the reset directive: inside a template it restores the
/// layout's default color, and it never appears on an emitted chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    #[allow(missing_docs)]
    Black,
    #[allow(missing_docs)]
    White,
    #[allow(missing_docs)]
    Red,
    #[allow(missing_docs)]
    Green,
    #[allow(missing_docs)]
    Yellow,
    /// Reset to the layout default.
    #[default]
    Unspecified,
    #[allow(missing_docs)]
    LightBlue,
    #[allow(missing_docs)]
    DarkBlue,
}

impl TextColor {
    /// Map an inline `§` marker letter to its color. `!` is the reset
    /// directive; unknown letters are not colors.
    pub(crate) fn from_marker(code: char) -> Option<Self> {
        match code {
            'B' => Some(Self::Black),
            'W' => Some(Self::White),
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'Y' => Some(Self::Yellow),
            'b' => Some(Self::LightBlue),
            'D' => Some(Self::DarkBlue),
            '!' => Some(Self::Unspecified),
            _ => None,
        }
    }
}

/// One element of the shared component stream. Immutable once produced by
/// the template parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextComponent {
    /// Explicit line break.
    LineBreak,
    /// Color directive for subsequent text.
    Color(TextColor),
    /// Variable placeholder, resolved against the substitution map at
    /// render time.
    Variable(VariableType),
    /// Literal text run.
    Text(TextKey),
}

/// A slice of the shared component stream: one localized template.
///
/// Owns no components; it only delimits a range. The range is guaranteed
/// to lie within the shared list by construction (sequences are registered
/// immediately after their components are appended, and the list only
/// grows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSequence {
    /// Index of the first component.
    pub starting_component: u32,
    /// Number of components.
    pub component_count: u32,
}
