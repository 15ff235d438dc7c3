use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.offline);

    let Some(command) = cli.command else {
        // Bare `rolo` behaves like the default browse view.
        return handlers::list::handle(&ctx, None, false, 0, cli.format);
    };

    match command {
        Commands::List {
            query,
            grouped,
            limit,
        } => handlers::list::handle(&ctx, query, grouped, limit, cli.format),

        Commands::Add {
            first,
            last,
            email,
            phone,
            avatar,
        } => handlers::add::handle(&ctx, first, last, email, phone, avatar, cli.format),

        Commands::Remove { id } => handlers::remove::handle(&ctx, &id, cli.format),

        Commands::Show { id } => handlers::show::handle(&ctx, &id, cli.format),

        Commands::Tui => handlers::tui::handle(&ctx),
    }
}
