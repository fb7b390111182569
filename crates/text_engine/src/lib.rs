//! # Text Engine
//!
//! Localized text interning, templating, and layout for a simulation's
//! interface.
//!
//! ## Architecture
//!
//! - **arena**: append-only string storage with content-based interning
//! - **variables**: closed catalog of recognized template placeholders
//! - **sequence**: template component streams and sequence handles
//! - **loader**: template tokenizing and localization file intake
//! - **substitution**: typed per-render variable bindings
//! - **layout**: endless layout, word wrap, alignment, hit testing
//! - **columnar**: paginated multi-column layout sessions
//! - **measure**: glyph width/line height contract (`fontdue` backed)
//! - **sim**: display-name contract for simulation references
//! - **locale**: number and date formatting conventions
//! - **context**: explicit per-language state object
//!
//! ## Quick Start
//!
//! ```rust
//! use text_engine::prelude::*;
//!
//! let mut ctx = TextContext::new(LocaleConfig::default());
//! let id = ctx.register_text_sequence("garrison", "$amount$ regiments");
//!
//! let mut map = SubstitutionMap::new();
//! add_to_substitution_map(&mut map, VariableType::Amount, 12_i64);
//!
//! struct NoWorld;
//! impl NameSource for NoWorld {
//!     fn province_name(&self, _: ProvinceId) -> TextKey { TextKey::NONE }
//!     fn state_name(&self, _: StateId) -> TextKey { TextKey::NONE }
//!     fn nation_name(&self, _: NationId) -> TextKey { TextKey::NONE }
//! }
//!
//! let fonts = MonospaceMeasurer::new(8.0, 18);
//! let env = RenderContext { text: &ctx, names: &NoWorld, fonts: &fonts };
//! let params = LayoutParameters { right: 400, leading: 18, ..Default::default() };
//!
//! let mut layout = Layout::default();
//! create_endless_layout(&mut layout, &env, &params, id, &map);
//! assert_eq!(layout.number_of_lines, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod arena;
pub mod columnar;
pub mod context;
pub mod layout;
pub mod loader;
pub mod locale;
pub mod logging;
pub mod measure;
pub mod sequence;
pub mod sim;
pub mod substitution;
pub mod variables;

pub use arena::{TextArena, TextKey};
pub use columnar::{create_columnar_layout, ColumnarLayout, LayoutBox};
pub use context::TextContext;
pub use layout::{
    create_endless_layout, Alignment, Layout, LayoutParameters, RenderContext, TextChunk,
};
pub use loader::{win1250_to_char, LoadError, LoadResult};
pub use locale::{LocaleConfig, LocaleError, LocaleResult};
pub use measure::{FontBank, FontError, FontResult, MonospaceMeasurer, TextMeasurer};
pub use sequence::{TextColor, TextComponent, TextSequence, TextSequenceId};
pub use sim::{NameSource, NationId, ProvinceId, StateId};
pub use substitution::{add_to_substitution_map, Date, Substitution, SubstitutionMap};
pub use variables::{variable_type_from_name, VariableType};

/// Common imports for engine users
pub mod prelude {
    pub use crate::arena::{TextArena, TextKey};
    pub use crate::columnar::{create_columnar_layout, ColumnarLayout, LayoutBox};
    pub use crate::context::TextContext;
    pub use crate::layout::{
        create_endless_layout, Alignment, Layout, LayoutParameters, RenderContext, TextChunk,
    };
    pub use crate::locale::LocaleConfig;
    pub use crate::measure::{FontBank, MonospaceMeasurer, TextMeasurer};
    pub use crate::sequence::{TextColor, TextSequenceId};
    pub use crate::sim::{NameSource, NationId, ProvinceId, StateId};
    pub use crate::substitution::{add_to_substitution_map, Date, Substitution, SubstitutionMap};
    pub use crate::variables::{variable_type_from_name, VariableType};
}
