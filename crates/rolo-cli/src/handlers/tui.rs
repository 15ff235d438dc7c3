use anyhow::Result;

use crate::context::ExecutionContext;
use crate::tui;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let store = ctx.open_store();
    let source = if ctx.offline {
        None
    } else {
        Some(ctx.remote_source()?)
    };
    tui::run(store, source)
}
