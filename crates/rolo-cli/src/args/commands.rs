use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the combined contact book")]
    List {
        /// Case-insensitive substring match on first or last name
        #[arg(long, short)]
        query: Option<String>,

        /// Group alphabetically with letter headings
        #[arg(long)]
        grouped: bool,

        #[arg(long, default_value = "0", help = "Cap the number of rows (0 = all)")]
        limit: usize,
    },

    #[command(about = "Add a local contact")]
    Add {
        #[arg(long)]
        first: String,

        #[arg(long)]
        last: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Optional avatar image (png/jpeg/gif/webp, max 2MB)
        #[arg(long)]
        avatar: Option<PathBuf>,
    },

    #[command(about = "Remove a contact (local entries are dropped, remote ids tombstoned)")]
    Remove {
        id: String,
    },

    #[command(about = "Show one contact card")]
    Show {
        id: String,
    },

    #[command(about = "Interactive contact browser")]
    Tui,
}
