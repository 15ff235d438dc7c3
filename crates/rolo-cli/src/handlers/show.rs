use anyhow::{Result, bail};

use crate::context::ExecutionContext;
use crate::output;
use crate::types::OutputFormat;
use rolo_core::combined_view;

pub fn handle(ctx: &ExecutionContext, id: &str, format: OutputFormat) -> Result<()> {
    let remote = ctx.fetch_remote()?;
    let store = ctx.open_store();
    let view = combined_view(store.added(), &remote, store.deleted());

    let Some(contact) = view.iter().find(|c| c.id.as_str() == id) else {
        bail!("no contact with id '{}'", id);
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(contact)?);
    } else {
        output::print_contact_card(contact);
    }

    Ok(())
}
