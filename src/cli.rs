use comfy_table::{Cell, ContentArrangement, Table};
use env_logger::Env;

use a11y_triage::guidelines::Guideline;

/// Initializes logging for the CLI. Defaults to `info` unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Renders a drained ranking as a table, one row per guideline.
pub fn render_ranking(ranked: &[&Guideline]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rank", "Guideline", "Description"]);

    for (rank, guideline) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&guideline.id),
            Cell::new(&guideline.description),
        ]);
    }

    table
}
