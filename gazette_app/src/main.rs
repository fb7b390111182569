//! Gazette demo
//!
//! Exercises the full text pipeline: consumes an embedded localization
//! file, binds simulation-style values into substitution maps, lays the
//! result out both endlessly and across two columns, and probes a chunk
//! by position the way pointer input would.

use text_engine::prelude::*;

/// Localization rows the way they arrive from disk: template name, then
/// one text column per language.
const LOCALIZATION: &[u8] = b"# gazette interface strings
gazette_headline;\xa7Y$country$ Gazette\xa7!\\n$date$
gazette_army;$country$ fields $amount$ regiments under $leader$.
gazette_treasury;The treasury holds \xa7G$cash$\xa7! pounds.
gazette_unrest;Unrest in $province$ has fallen to $value$.
gazette_column_note;Reports continue in the next column when a column fills.
";

/// Toy world model backing the name lookups.
struct DemoWorld {
    nation: TextKey,
    province: TextKey,
}

impl DemoWorld {
    fn new(ctx: &mut TextContext) -> Self {
        Self {
            nation: ctx.intern("Ruritania"),
            province: ctx.intern("Strelsau"),
        }
    }
}

impl NameSource for DemoWorld {
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

fn print_chunks(title: &str, layout: &Layout) {
    println!("--- {title} ({} lines) ---", layout.number_of_lines);
    for chunk in &layout.contents {
        println!(
            "  x={:6.1} y={:4} w={:4} {:?} {:?}",
            chunk.x, chunk.y, chunk.width, chunk.color, chunk.text
        );
    }
}

fn main() {
    text_engine::logging::init();

    log::info!("Starting gazette demo");

    let mut ctx = TextContext::new(LocaleConfig::default());
    ctx.consume_csv_file(LOCALIZATION, 0)
        .expect("embedded localization is valid");
    let world = DemoWorld::new(&mut ctx);
    let fonts = MonospaceMeasurer::new(8.0, 16);

    let mut map = SubstitutionMap::new();
    add_to_substitution_map(&mut map, VariableType::Country, NationId(0));
    add_to_substitution_map(&mut map, VariableType::Date, Date::new(1836, 1, 1));
    add_to_substitution_map(&mut map, VariableType::Amount, 12_i64);
    add_to_substitution_map(&mut map, VariableType::Leader, "General Sapt");
    add_to_substitution_map(&mut map, VariableType::Cash, 1_234_567_i64);
    add_to_substitution_map(&mut map, VariableType::Province, ProvinceId(0));
    add_to_substitution_map(&mut map, VariableType::Value, 0.25_f32);

    let env = RenderContext {
        text: &ctx,
        names: &world,
        fonts: &fonts,
    };

    // Headline flows without a height constraint.
    let headline_params = LayoutParameters {
        right: 480,
        leading: 16,
        align: Alignment::Center,
        ..LayoutParameters::default()
    };
    let headline = ctx
        .sequence_by_name("gazette_headline")
        .expect("headline template is loaded");

    let mut headline_layout = Layout::default();
    create_endless_layout(&mut headline_layout, &env, &headline_params, headline, &map);
    print_chunks("headline", &headline_layout);

    // The report body paginates across two narrow columns.
    let body_params = LayoutParameters {
        right: 480,
        bottom: 48,
        leading: 16,
        ..LayoutParameters::default()
    };
    let mut body_layout = Layout::default();
    let mut columns = create_columnar_layout(&mut body_layout, body_params, 240);

    for name in [
        "gazette_army",
        "gazette_treasury",
        "gazette_unrest",
        "gazette_column_note",
    ] {
        let sequence = ctx.sequence_by_name(name).expect("template is loaded");
        let mut report_box = columns.open_layout_box(8);
        columns.add_string_to_layout_box(
            &env,
            &mut report_box,
            "* ",
            TextColor::Yellow,
            Substitution::Empty,
        );
        columns.add_to_layout_box(&env, &mut report_box, sequence, &map);
        columns.add_line_break_to_layout_box(&mut report_box);
        columns.close_layout_box(report_box);
    }

    log::info!(
        "report used {}x{} over {} columns (truncated: {})",
        columns.used_width(),
        columns.used_height(),
        columns.current_column() + 1,
        columns.out_of_columns()
    );
    drop(columns);
    print_chunks("report", &body_layout);

    // A pointer probe into the first chunk of the report.
    if let Some(first) = body_layout.contents.first() {
        let probe_x = first.x as i32 + 1;
        let probe_y = first.y + 1;
        if let Some(hit) = body_layout.get_chunk_from_position(probe_x, probe_y) {
            println!(
                "probe at ({probe_x},{probe_y}) hits {:?} from {:?}",
                hit.text, hit.source
            );
        }
    }

    println!(
        "window title: {:?}",
        ctx.simple_string_by_name("gazette_column_note")
    );

    log::info!("Gazette demo finished");
}
