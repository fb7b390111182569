//! Paginated multi-column layout sessions
//!
//! A columnar layout flows box-shaped insertions down a column of fixed
//! width, stepping to the next column when a closed box has run past the
//! bottom edge. Overflow is detected and resolved at box boundaries only:
//! chunk positions are final when emitted, a box is never moved after the
//! fact. Running past the last column is a caller-visible condition, not
//! an error; callers size columns generously or tolerate truncation.

use crate::layout::{
    advance_line, emit_text, finalize_flow, resolve_sequence, FlowParams, Layout, LayoutCursor,
    LayoutParameters, RenderContext,
};
use crate::sequence::{TextColor, TextSequenceId};
use crate::substitution::{Substitution, SubstitutionMap};

/// One box-scoped insertion in a columnar layout.
///
/// Captures the chunk watermark and carries the cursor state for the
/// box's own flow; the color set by template directives persists across
/// `add` calls within the box.
pub struct LayoutBox {
    first_chunk: usize,
    left: f32,
    right: f32,
    top: i32,
    cursor: LayoutCursor,
}

/// A layout session flowing boxes across fixed-width columns.
pub struct ColumnarLayout<'a> {
    base_layout: &'a mut Layout,
    fixed_parameters: LayoutParameters,
    column_width: i32,
    used_height: i32,
    used_width: i32,
    y_cursor: i32,
    current_column: i32,
    out_of_columns: bool,
}

/// Start a columnar session over `dest`, which is reset first.
pub fn create_columnar_layout(
    dest: &mut Layout,
    fixed_parameters: LayoutParameters,
    column_width: i32,
) -> ColumnarLayout<'_> {
    dest.contents.clear();
    dest.number_of_lines = 0;

    ColumnarLayout {
        y_cursor: fixed_parameters.top,
        base_layout: dest,
        fixed_parameters,
        column_width,
        used_height: 0,
        used_width: 0,
        current_column: 0,
        out_of_columns: false,
    }
}

impl ColumnarLayout<'_> {
    /// Open a box at the current cursor with the given indentation. The
    /// indent applies to every line placed in the box, wrapped lines
    /// included.
    #[allow(clippy::cast_precision_loss)]
    pub fn open_layout_box(&self, indent: i32) -> LayoutBox {
        let column_left =
            self.fixed_parameters.left + self.current_column * self.column_width;
        let left = (column_left + indent) as f32;
        let right = (column_left + self.column_width) as f32;

        LayoutBox {
            first_chunk: self.base_layout.contents.len(),
            left,
            right,
            top: self.y_cursor,
            cursor: LayoutCursor {
                x: left,
                y: self.y_cursor,
                color: self.fixed_parameters.color,
                line_start: self.base_layout.contents.len(),
            },
        }
    }

    /// Resolve a sequence into the box, wrapping against the current
    /// column's right edge.
    pub fn add_to_layout_box(
        &mut self,
        env: &RenderContext<'_>,
        layout_box: &mut LayoutBox,
        source_text: TextSequenceId,
        map: &SubstitutionMap,
    ) {
        let flow = self.flow_for(layout_box);
        resolve_sequence(
            self.base_layout,
            &mut layout_box.cursor,
            &flow,
            env,
            source_text,
            map,
        );
    }

    /// Place a plain string in the box with an explicit color and source
    /// value, bypassing template resolution. For caller-assembled rows
    /// such as ledger cells.
    pub fn add_string_to_layout_box(
        &mut self,
        env: &RenderContext<'_>,
        layout_box: &mut LayoutBox,
        text: &str,
        color: TextColor,
        source: Substitution,
    ) {
        let flow = self.flow_for(layout_box);
        let previous = layout_box.cursor.color;
        layout_box.cursor.color = if color == TextColor::Unspecified {
            self.fixed_parameters.color
        } else {
            color
        };
        emit_text(
            self.base_layout,
            &mut layout_box.cursor,
            &flow,
            env,
            text,
            &source,
        );
        layout_box.cursor.color = previous;
    }

    /// Force a line break inside the box.
    pub fn add_line_break_to_layout_box(&mut self, layout_box: &mut LayoutBox) {
        let flow = self.flow_for(layout_box);
        advance_line(self.base_layout, &mut layout_box.cursor, &flow);
    }

    /// Finalize the box: align its trailing line, advance the column
    /// cursor by the box height, and step to the next column when the
    /// box ran past the bottom edge. Content is never moved; overflow
    /// takes effect where the *next* box begins.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn close_layout_box(&mut self, mut layout_box: LayoutBox) {
        let flow = self.flow_for(&layout_box);
        let closed_partial = finalize_flow(self.base_layout, &mut layout_box.cursor, &flow);

        let height = (layout_box.cursor.y - layout_box.top)
            + if closed_partial { flow.leading } else { 0 };

        for chunk in &self.base_layout.contents[layout_box.first_chunk..] {
            let right_edge =
                (chunk.x + chunk.width as f32).ceil() as i32 - self.fixed_parameters.left;
            self.used_width = self.used_width.max(right_edge);
        }

        self.y_cursor = layout_box.top + height;
        self.used_height = self
            .used_height
            .max(self.y_cursor - self.fixed_parameters.top);

        if self.y_cursor > self.fixed_parameters.bottom {
            self.current_column += 1;
            self.y_cursor = self.fixed_parameters.top;

            let available =
                (self.fixed_parameters.right - self.fixed_parameters.left) / self.column_width;
            if self.current_column >= available && !self.out_of_columns {
                self.out_of_columns = true;
                log::warn!("columnar layout exceeded {available} available columns, truncating");
            }
        }
    }

    /// Whether content has spilled past the last column that fits the
    /// parameter rectangle.
    pub fn out_of_columns(&self) -> bool {
        self.out_of_columns
    }

    /// Column the next box will open in.
    pub fn current_column(&self) -> i32 {
        self.current_column
    }

    /// Widest extent any chunk has reached, relative to the left edge.
    pub fn used_width(&self) -> i32 {
        self.used_width
    }

    /// Tallest column extent reached so far.
    pub fn used_height(&self) -> i32 {
        self.used_height
    }

    fn flow_for(&self, layout_box: &LayoutBox) -> FlowParams {
        FlowParams {
            left: layout_box.left,
            right: layout_box.right,
            font_id: self.fixed_parameters.font_id,
            leading: self.fixed_parameters.leading,
            align: self.fixed_parameters.align,
            default_color: self.fixed_parameters.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TextContext;
    use crate::layout::Alignment;
    use crate::locale::LocaleConfig;
    use crate::measure::MonospaceMeasurer;
    use crate::sim::{NameSource, NationId, ProvinceId, StateId};
    use crate::arena::TextKey;
    use approx::assert_relative_eq;

    struct NoWorld;

    impl NameSource for NoWorld {
        fn province_name(&self, _province: ProvinceId) -> TextKey {
            TextKey::NONE
        }
        fn state_name(&self, _state: StateId) -> TextKey {
            TextKey::NONE
        }
        fn nation_name(&self, _nation: NationId) -> TextKey {
            TextKey::NONE
        }
    }

    const FONT: MonospaceMeasurer = MonospaceMeasurer {
        advance: 10.0,
        height: 20,
    };

    fn params() -> LayoutParameters {
        LayoutParameters {
            left: 0,
            top: 0,
            right: 400,
            bottom: 100,
            leading: 20,
            ..LayoutParameters::default()
        }
    }

    #[test]
    fn test_boxes_stack_down_the_column() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let first = ctx.make_text_sequence("alpha");
        let second = ctx.make_text_sequence("beta");
        let env = RenderContext {
            text: &ctx,
            names: &NoWorld,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(&mut layout, params(), 200);

        let mut layout_box = columns.open_layout_box(0);
        columns.add_to_layout_box(&env, &mut layout_box, first, &SubstitutionMap::new());
        columns.close_layout_box(layout_box);

        let mut layout_box = columns.open_layout_box(0);
        columns.add_to_layout_box(&env, &mut layout_box, second, &SubstitutionMap::new());
        columns.close_layout_box(layout_box);

        assert_eq!(columns.current_column(), 0);
        assert_eq!(columns.used_height(), 40);
        drop(columns);

        assert_eq!(layout.contents[0].y, 0);
        assert_eq!(layout.contents[1].y, 20);
        assert_eq!(layout.number_of_lines, 2);
    }

    #[test]
    fn test_overflowing_box_advances_to_next_column() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let tall = ctx.make_text_sequence("a\\nb\\nc");
        let after = ctx.make_text_sequence("next");
        let env = RenderContext {
            text: &ctx,
            names: &NoWorld,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(
            &mut layout,
            LayoutParameters {
                bottom: 50,
                ..params()
            },
            200,
        );

        // three lines are 60 tall, past the 50 bottom edge
        let mut layout_box = columns.open_layout_box(0);
        columns.add_to_layout_box(&env, &mut layout_box, tall, &SubstitutionMap::new());
        columns.close_layout_box(layout_box);

        assert_eq!(columns.current_column(), 1);
        assert!(!columns.out_of_columns());

        let mut layout_box = columns.open_layout_box(0);
        columns.add_to_layout_box(&env, &mut layout_box, after, &SubstitutionMap::new());
        columns.close_layout_box(layout_box);
        drop(columns);

        // the overflowing box was not moved; the next box starts the new
        // column at the top
        assert_relative_eq!(layout.contents[0].x, 0.0);
        let next = layout.contents.last().unwrap();
        assert_relative_eq!(next.x, 200.0);
        assert_eq!(next.y, 0);
    }

    #[test]
    fn test_running_past_the_last_column_is_reported() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let tall = ctx.make_text_sequence("a\\nb\\nc\\nd");
        let env = RenderContext {
            text: &ctx,
            names: &NoWorld,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(
            &mut layout,
            LayoutParameters {
                bottom: 50,
                ..params()
            },
            200,
        );

        for _ in 0..2 {
            let mut layout_box = columns.open_layout_box(0);
            columns.add_to_layout_box(&env, &mut layout_box, tall, &SubstitutionMap::new());
            columns.close_layout_box(layout_box);
        }

        // 400 wide at 200 per column holds two columns; the second
        // overflow steps past the last one
        assert_eq!(columns.current_column(), 2);
        assert!(columns.out_of_columns());
    }

    #[test]
    fn test_indent_applies_to_wrapped_lines() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let id = ctx.make_text_sequence("aaaaaaaa bbbbbbbb");
        let env = RenderContext {
            text: &ctx,
            names: &NoWorld,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(&mut layout, params(), 120);

        // indent 15 leaves 105 of column: "aaaaaaaa " is 90 wide, the
        // second word wraps
        let mut layout_box = columns.open_layout_box(15);
        columns.add_to_layout_box(&env, &mut layout_box, id, &SubstitutionMap::new());
        columns.close_layout_box(layout_box);
        drop(columns);

        assert_eq!(layout.contents.len(), 2);
        assert_relative_eq!(layout.contents[0].x, 15.0);
        assert_relative_eq!(layout.contents[1].x, 15.0);
        assert_eq!(layout.contents[1].y, 20);
    }

    #[test]
    fn test_string_rows_keep_color_and_source() {
        let ctx = TextContext::new(LocaleConfig::default());
        let env = RenderContext {
            text: &ctx,
            names: &NoWorld,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(&mut layout, params(), 200);

        let mut layout_box = columns.open_layout_box(0);
        columns.add_string_to_layout_box(
            &env,
            &mut layout_box,
            "Elphberg",
            TextColor::Green,
            Substitution::Nation(NationId(3)),
        );
        columns.add_string_to_layout_box(
            &env,
            &mut layout_box,
            " dynasty",
            TextColor::Unspecified,
            Substitution::Empty,
        );
        columns.close_layout_box(layout_box);
        drop(columns);

        assert_eq!(layout.contents[0].color, TextColor::Green);
        assert_eq!(layout.contents[0].source, Substitution::Nation(NationId(3)));
        assert_eq!(layout.contents[1].color, TextColor::White);
    }

    #[test]
    fn test_right_alignment_inside_box() {
        let mut ctx = TextContext::new(LocaleConfig::default());
        let id = ctx.make_text_sequence("abc");
        let env = RenderContext {
            text: &ctx,
            names: &NoWorld,
            fonts: &FONT,
        };

        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(
            &mut layout,
            LayoutParameters {
                align: Alignment::Right,
                ..params()
            },
            200,
        );

        let mut layout_box = columns.open_layout_box(0);
        columns.add_to_layout_box(&env, &mut layout_box, id, &SubstitutionMap::new());
        columns.close_layout_box(layout_box);
        drop(columns);

        // 30 of text in a 200 wide column
        assert_relative_eq!(layout.contents[0].x, 170.0);
    }

    #[test]
    fn test_empty_box_consumes_no_height() {
        let ctx = TextContext::new(LocaleConfig::default());
        let mut layout = Layout::default();
        let mut columns = create_columnar_layout(&mut layout, params(), 200);

        let layout_box = columns.open_layout_box(0);
        columns.close_layout_box(layout_box);

        assert_eq!(columns.used_height(), 0);
        assert_eq!(columns.current_column(), 0);
    }
}
