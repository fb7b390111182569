//! Layout engine: resolved sequences to positioned, styled runs
//!
//! A layout pass walks a sequence's components in order, substitutes
//! variables, word-wraps against the bounding rectangle, and emits one
//! [`TextChunk`] per word token. Alignment is deferred: a line's chunks
//! are shifted once the line is known to be complete. Chunks keep the
//! substitution value that produced them so pointer input can be mapped
//! back to the thing under the cursor.

use crate::context::TextContext;
use crate::measure::TextMeasurer;
use crate::sequence::{TextColor, TextComponent, TextSequenceId};
use crate::sim::NameSource;
use crate::substitution::{Substitution, SubstitutionMap};

/// Horizontal alignment of completed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[allow(missing_docs)]
    #[default]
    Left,
    #[allow(missing_docs)]
    Right,
    #[allow(missing_docs)]
    Center,
}

/// One rendered run of text.
#[derive(Debug, Clone)]
pub struct TextChunk {
    /// Decoded display string.
    pub text: String,

    /// Horizontal offset. Fractional: centering and proportional advance
    /// widths accumulate sub-pixel amounts, while the vertical offset
    /// stays on whole pixels.
    pub x: f32,

    /// Vertical offset. Chunks of one logical line share the same value.
    pub y: i32,

    /// Measured advance width.
    pub width: i32,

    /// Line height of the font that measured this run.
    pub height: i32,

    /// Active color when the run was emitted.
    pub color: TextColor,

    /// Value that produced this run; `Empty` for plain literal text.
    pub source: Substitution,
}

/// Immutable configuration for one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParameters {
    /// Left edge of the bounding rectangle.
    pub left: i32,
    /// Top edge of the bounding rectangle.
    pub top: i32,
    /// Right edge; at or below `left` means unconstrained width.
    pub right: i32,
    /// Bottom edge, honored by columnar pagination.
    pub bottom: i32,
    /// Interface font the measurer resolves widths against.
    pub font_id: u16,
    /// Vertical advance per line.
    pub leading: i32,
    /// Horizontal alignment of completed lines.
    pub align: Alignment,
    /// Default color, restored by the `§!` reset directive.
    pub color: TextColor,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
            font_id: 0,
            leading: 0,
            align: Alignment::Left,
            color: TextColor::White,
        }
    }
}

/// Output of one layout pass: ordered chunks plus the total line count.
#[derive(Debug, Default)]
pub struct Layout {
    /// Chunks in render order: top to bottom, left to right within a line.
    pub contents: Vec<TextChunk>,

    /// Number of lines the pass produced.
    pub number_of_lines: i32,
}

impl Layout {
    /// The chunk whose rectangle contains the point, if any. Maps pointer
    /// input back to the substitution value under the cursor.
    #[allow(clippy::cast_precision_loss)]
    pub fn get_chunk_from_position(&self, x: i32, y: i32) -> Option<&TextChunk> {
        self.contents.iter().find(|chunk| {
            y >= chunk.y
                && y < chunk.y + chunk.height
                && (x as f32) >= chunk.x
                && (x as f32) < chunk.x + chunk.width as f32
        })
    }
}

/// Borrowed view of everything a layout pass consults: the text context,
/// the simulation's name lookup, and glyph measurement.
pub struct RenderContext<'a> {
    /// Text state of the active language.
    pub text: &'a TextContext,
    /// Display names for simulation references.
    pub names: &'a dyn NameSource,
    /// Glyph advance widths and line heights.
    pub fonts: &'a dyn TextMeasurer,
}

/// Lay out a sequence with unconstrained height.
///
/// The target layout is reset first. Wrapping happens only when the
/// parameter rectangle has a positive width; otherwise lines grow without
/// bound until an explicit break.
pub fn create_endless_layout(
    dest: &mut Layout,
    env: &RenderContext<'_>,
    params: &LayoutParameters,
    source_text: TextSequenceId,
    map: &SubstitutionMap,
) {
    dest.contents.clear();
    dest.number_of_lines = 0;

    #[allow(clippy::cast_precision_loss)]
    let flow = FlowParams {
        left: params.left as f32,
        right: if params.right > params.left {
            params.right as f32
        } else {
            f32::INFINITY
        },
        font_id: params.font_id,
        leading: params.leading,
        align: params.align,
        default_color: params.color,
    };
    let mut cursor = LayoutCursor {
        x: flow.left,
        y: params.top,
        color: params.color,
        line_start: 0,
    };

    resolve_sequence(dest, &mut cursor, &flow, env, source_text, map);
    finalize_flow(dest, &mut cursor, &flow);
}

/// Bounds and styling for one horizontal flow (the full rectangle for an
/// endless layout, a single box for columnar layout).
pub(crate) struct FlowParams {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) font_id: u16,
    pub(crate) leading: i32,
    pub(crate) align: Alignment,
    pub(crate) default_color: TextColor,
}

/// Mutable position state threaded through a flow.
pub(crate) struct LayoutCursor {
    pub(crate) x: f32,
    pub(crate) y: i32,
    pub(crate) color: TextColor,
    /// Index of the first chunk belonging to the current line.
    pub(crate) line_start: usize,
}

/// Walk a sequence's components, emitting chunks into `layout`.
pub(crate) fn resolve_sequence(
    layout: &mut Layout,
    cursor: &mut LayoutCursor,
    flow: &FlowParams,
    env: &RenderContext<'_>,
    source_text: TextSequenceId,
    map: &SubstitutionMap,
) {
    for component in env.text.components_of(source_text) {
        match *component {
            TextComponent::LineBreak => advance_line(layout, cursor, flow),
            TextComponent::Color(color) => {
                cursor.color = if color == TextColor::Unspecified {
                    flow.default_color
                } else {
                    color
                };
            }
            TextComponent::Variable(variable) => match map.get(&variable) {
                Some(value) => {
                    let formatted = format_substitution(env, value);
                    if !formatted.is_empty() {
                        emit_text(layout, cursor, flow, env, &formatted, value);
                    }
                }
                // No binding renders as empty text; the layout still
                // completes with the remaining components.
                None => log::debug!("no substitution for variable {variable:?}"),
            },
            TextComponent::Text(key) => {
                emit_text(
                    layout,
                    cursor,
                    flow,
                    env,
                    env.text.resolve(key),
                    &Substitution::Empty,
                );
            }
        }
    }
}

/// Emit one text run token by token, wrapping against the flow bounds.
pub(crate) fn emit_text(
    layout: &mut Layout,
    cursor: &mut LayoutCursor,
    flow: &FlowParams,
    env: &RenderContext<'_>,
    text: &str,
    source: &Substitution,
) {
    for token in Tokens::new(text) {
        let width = env.fonts.text_width(flow.font_id, token);

        // A token that would cross the right edge breaks the line first.
        // At the left margin it is emitted regardless: an overlong token
        // overflows rather than looping.
        if cursor.x + width > flow.right && cursor.x > flow.left {
            advance_line(layout, cursor, flow);
        }

        #[allow(clippy::cast_possible_truncation)]
        layout.contents.push(TextChunk {
            text: token.to_string(),
            x: cursor.x,
            y: cursor.y,
            width: width.round() as i32,
            height: env.fonts.line_height(flow.font_id),
            color: cursor.color,
            source: source.clone(),
        });
        cursor.x += width;
    }
}

/// Close the current line and start the next one below it.
pub(crate) fn advance_line(layout: &mut Layout, cursor: &mut LayoutCursor, flow: &FlowParams) {
    finish_line(layout, cursor, flow);
    cursor.x = flow.left;
    cursor.y += flow.leading;
    layout.number_of_lines += 1;
}

/// Close a trailing partial line, if any. Returns whether one was closed
/// (columnar pagination needs the box height to include it).
pub(crate) fn finalize_flow(
    layout: &mut Layout,
    cursor: &mut LayoutCursor,
    flow: &FlowParams,
) -> bool {
    let partial = layout.contents.len() > cursor.line_start;
    if partial {
        finish_line(layout, cursor, flow);
        layout.number_of_lines += 1;
    }
    partial
}

/// Apply deferred alignment to the completed line's chunks.
fn finish_line(layout: &mut Layout, cursor: &mut LayoutCursor, flow: &FlowParams) {
    if flow.align != Alignment::Left && flow.right.is_finite() {
        let slack = flow.right - cursor.x;
        let offset = match flow.align {
            Alignment::Left => 0.0,
            Alignment::Right => slack,
            Alignment::Center => slack * 0.5,
        };
        if offset != 0.0 {
            for chunk in &mut layout.contents[cursor.line_start..] {
                chunk.x += offset;
            }
        }
    }
    cursor.line_start = layout.contents.len();
}

/// Format a substitution value for display.
fn format_substitution(env: &RenderContext<'_>, value: &Substitution) -> String {
    let resolve_name = |key: crate::arena::TextKey| {
        if key.is_none() {
            String::new()
        } else {
            env.text.resolve(key).to_string()
        }
    };

    match value {
        Substitution::Text(text) => text.clone(),
        Substitution::Key(key) => env.text.resolve(*key).to_string(),
        Substitution::Province(province) => resolve_name(env.names.province_name(*province)),
        Substitution::State(state) => resolve_name(env.names.state_name(*state)),
        Substitution::Nation(nation) => resolve_name(env.names.nation_name(*nation)),
        Substitution::Integer(value) => env.text.locale().prettify(*value),
        Substitution::Float(value) => env.text.locale().format_float(*value),
        Substitution::Date(date) => env.text.locale().format_date(*date),
        Substitution::Empty => String::new(),
    }
}

/// Word tokens of a text run. A token is a word plus its trailing
/// whitespace; whitespace at the start of the run sticks to the first
/// token. Wrapping between tokens therefore never drops the spacing.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let word_start = self
            .rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.rest.len());
        let Some(space_rel) = self.rest[word_start..].find(char::is_whitespace) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let space_start = word_start + space_rel;
        let Some(next_word_rel) = self.rest[space_start..].find(|c: char| !c.is_whitespace())
        else {
            return Some(std::mem::take(&mut self.rest));
        };

        let split = space_start + next_word_rel;
        let token = &self.rest[..split];
        self.rest = &self.rest[split..];
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::TextKey;
    use crate::locale::LocaleConfig;
    use crate::measure::MonospaceMeasurer;
    use crate::sim::{NationId, ProvinceId, StateId};
    use crate::substitution::add_to_substitution_map;
    use crate::variables::VariableType;
    use approx::assert_relative_eq;

    /// Toy world: nation 0 is Ruritania, province 0 is Strelsau.
    struct TestWorld {
        nation: TextKey,
        province: TextKey,
    }

    impl TestWorld {
        fn new(ctx: &mut TextContext) -> Self {
            Self {
                nation: ctx.intern("Ruritania"),
                province: ctx.intern("Strelsau"),
            }
        }
    }

    impl NameSource for TestWorld {
        fn province_name(&self, province: ProvinceId) -> TextKey {
            if province.0 == 0 {
                self.province
            } else {
                TextKey::NONE
            }
        }

        fn state_name(&self, _state: StateId) -> TextKey {
            TextKey::NONE
        }

        fn nation_name(&self, nation: NationId) -> TextKey {
            if nation.0 == 0 {
                self.nation
            } else {
                TextKey::NONE
            }
        }
    }

    const FONT: MonospaceMeasurer = MonospaceMeasurer {
        advance: 10.0,
        height: 20,
    };

    fn params(right: i32) -> LayoutParameters {
        LayoutParameters {
            right,
            leading: 20,
            ..LayoutParameters::default()
        }
    }

    fn texts(layout: &Layout) -> Vec<&str> {
        layout.contents.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_empty_sequence_lays_out_empty() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("");

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(1000), id, &SubstitutionMap::new());

        assert!(layout.contents.is_empty());
        assert_eq!(layout.number_of_lines, 0);
    }

    #[test]
    fn test_example_sentence_resolves_in_order() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("$country$ has $amount$ regiments.");

        let mut map = SubstitutionMap::new();
        add_to_substitution_map(&mut map, VariableType::Country, NationId(0));
        add_to_substitution_map(&mut map, VariableType::Amount, 12_i64);

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(1000), id, &map);

        assert_eq!(texts(&layout), ["Ruritania", " has ", "12", " regiments."]);
        assert_eq!(layout.number_of_lines, 1);
        assert!(layout.contents.iter().all(|c| c.y == 0));
        assert_eq!(layout.contents[0].source, Substitution::Nation(NationId(0)));
        assert_eq!(layout.contents[1].source, Substitution::Empty);

        // chunks advance left to right
        assert_relative_eq!(layout.contents[0].x, 0.0);
        assert_relative_eq!(layout.contents[1].x, 90.0);
        assert_relative_eq!(layout.contents[2].x, 140.0);
    }

    #[test]
    fn test_word_wrap_breaks_second_token() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("aaaaa bbbbb");

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };

        // "aaaaa " is 60 wide, "bbbbb" is 50: together they cross 100
        create_endless_layout(&mut layout, &env, &params(100), id, &SubstitutionMap::new());
        assert_eq!(layout.number_of_lines, 2);
        assert_eq!(layout.contents[1].y, 20);
        assert_relative_eq!(layout.contents[1].x, 0.0);

        // at 110 the pair fits exactly; a filled line does not wrap
        create_endless_layout(&mut layout, &env, &params(110), id, &SubstitutionMap::new());
        assert_eq!(layout.number_of_lines, 1);
        assert_eq!(layout.contents[0].y, layout.contents[1].y);
    }

    #[test]
    fn test_overlong_token_overflows_without_looping() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("antidisestablishmentarianism");

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(50), id, &SubstitutionMap::new());

        assert_eq!(layout.contents.len(), 1);
        assert_eq!(layout.number_of_lines, 1);
        assert_relative_eq!(layout.contents[0].x, 0.0);
    }

    #[test]
    fn test_explicit_break_ignores_remaining_width() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("ab\\ncd");

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(1000), id, &SubstitutionMap::new());

        assert_eq!(layout.number_of_lines, 2);
        assert_eq!(layout.contents[0].y, 0);
        assert_eq!(layout.contents[1].y, 20);
        assert_relative_eq!(layout.contents[1].x, 0.0);
    }

    #[test]
    fn test_right_and_center_alignment() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("abc");
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut right_params = params(100);
        right_params.align = Alignment::Right;
        create_endless_layout(&mut layout, &env, &right_params, id, &SubstitutionMap::new());
        assert_relative_eq!(layout.contents[0].x, 70.0);

        let mut center_params = params(100);
        center_params.align = Alignment::Center;
        create_endless_layout(&mut layout, &env, &center_params, id, &SubstitutionMap::new());
        assert_relative_eq!(layout.contents[0].x, 35.0);
    }

    #[test]
    fn test_missing_substitution_renders_empty() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("$country$ has $amount$ regiments.");

        let mut map = SubstitutionMap::new();
        add_to_substitution_map(&mut map, VariableType::Amount, 12_i64);

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(1000), id, &map);

        assert_eq!(texts(&layout), [" has ", "12", " regiments."]);
        assert_eq!(layout.number_of_lines, 1);
    }

    #[test]
    fn test_color_directives_style_chunks() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("plain §Rdanger§! plain");

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(1000), id, &SubstitutionMap::new());

        assert_eq!(layout.contents[0].color, TextColor::White);
        assert_eq!(layout.contents[1].color, TextColor::Red);
        assert_eq!(layout.contents.last().unwrap().color, TextColor::White);
    }

    #[test]
    fn test_formatted_values() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("$cash$ on $date$ in $location$");

        let mut map = SubstitutionMap::new();
        add_to_substitution_map(&mut map, VariableType::Cash, 1_234_567_i64);
        add_to_substitution_map(
            &mut map,
            VariableType::Date,
            crate::substitution::Date::new(1836, 1, 1),
        );
        add_to_substitution_map(&mut map, VariableType::Location, ProvinceId(0));

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(10_000), id, &map);

        let joined: String = layout.contents.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(joined, "1,234,567 on January 1, 1836 in Strelsau");
    }

    #[test]
    fn test_hit_testing() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let world = TestWorld::new(&mut ctx);
        let id = ctx.make_text_sequence("$country$\\n$province$");

        let mut map = SubstitutionMap::new();
        add_to_substitution_map(&mut map, VariableType::Country, NationId(0));
        add_to_substitution_map(&mut map, VariableType::Province, ProvinceId(0));

        let mut layout = Layout::default();
        let env = RenderContext {
            text: &ctx,
            names: &world,
            fonts: &FONT,
        };
        create_endless_layout(&mut layout, &env, &params(1000), id, &map);

        let hit = layout.get_chunk_from_position(45, 10).unwrap();
        assert_eq!(hit.source, Substitution::Nation(NationId(0)));

        let second_line = layout.get_chunk_from_position(5, 25).unwrap();
        assert_eq!(second_line.source, Substitution::Province(ProvinceId(0)));

        // misses: past the text, and between nothing
        assert!(layout.get_chunk_from_position(500, 10).is_none());
        assert!(layout.get_chunk_from_position(5, 200).is_none());
    }

    #[test]
    fn test_token_splitting() {
        let tokens: Vec<&str> = Tokens::new("a b  c").collect();
        assert_eq!(tokens, ["a ", "b  ", "c"]);

        let leading: Vec<&str> = Tokens::new(" has ").collect();
        assert_eq!(leading, [" has "]);

        let whitespace_only: Vec<&str> = Tokens::new("   ").collect();
        assert_eq!(whitespace_only, ["   "]);

        assert_eq!(Tokens::new("").count(), 0);
    }
}
