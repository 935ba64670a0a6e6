use anyhow::Result;
use tabled::{
    Table, Tabled,
    settings::{Modify, Style, Width, object::Columns},
};

use ladle_core::models::LogRecord;
use ladle_core::service::LadleService;

pub(crate) fn cmd_history_changes(
    svc: &LadleService,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    print_history(svc.changes(), limit, json, "No changes recorded")
}

pub(crate) fn cmd_history_calcs(
    svc: &LadleService,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    print_history(svc.calculations(), limit, json, "No calculations recorded")
}

fn print_history(
    records: &[LogRecord],
    limit: Option<usize>,
    json: bool,
    empty_msg: &str,
) -> Result<()> {
    let count = limit.map_or(records.len(), |l| l.min(records.len()));
    let shown = &records[..count];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        eprintln!("{empty_msg}");
        return Ok(());
    }

    #[derive(Tabled)]
    struct RecordRow {
        #[tabled(rename = "When")]
        recorded_at: String,
        #[tabled(rename = "Entry")]
        description: String,
    }

    let rows: Vec<RecordRow> = shown
        .iter()
        .map(|r| RecordRow {
            recorded_at: r.recorded_at.clone(),
            description: r.description.clone(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Width::wrap(70)))
        .to_string();
    println!("{table}");

    Ok(())
}
