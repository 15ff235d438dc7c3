use anyhow::Result;

use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use rolo_store::Removal;
use rolo_types::ContactId;

pub fn handle(ctx: &ExecutionContext, id: &str, format: OutputFormat) -> Result<()> {
    let mut store = ctx.open_store();
    let outcome = store.remove(&ContactId::new(id))?;

    match format {
        OutputFormat::Json => {
            let kind = match outcome {
                Removal::Added => "removed_local",
                Removal::Tombstoned => "tombstoned",
            };
            println!("{}", serde_json::json!({ "id": id, "outcome": kind }));
        }
        OutputFormat::Plain => match outcome {
            Removal::Added => println!("Removed local contact {}", id),
            Removal::Tombstoned => println!("Hidden remote contact {}", id),
        },
    }

    Ok(())
}
