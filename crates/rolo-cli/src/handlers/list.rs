use anyhow::Result;

use crate::context::ExecutionContext;
use crate::output;
use crate::types::OutputFormat;
use rolo_core::{combined_view, filter_by_query, group_by_letter};

pub fn handle(
    ctx: &ExecutionContext,
    query: Option<String>,
    grouped: bool,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let remote = ctx.fetch_remote()?;
    let store = ctx.open_store();

    let view = combined_view(store.added(), &remote, store.deleted());
    let query = query.unwrap_or_default();
    let mut filtered = filter_by_query(&view, &query);
    if limit > 0 {
        filtered.truncate(limit);
    }

    if format == OutputFormat::Json {
        // JSON output is always the flat filtered sequence.
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("{}", output::empty_message(Some(&query)));
        return Ok(());
    }

    if grouped {
        output::print_grouped(&group_by_letter(&filtered));
    } else {
        output::print_contacts_table(&filtered);
    }

    Ok(())
}
