// NOTE: rolo Architecture Rationale
//
// Why fetch-per-run (no remote cache)?
// - The generator returns synthetic data; staleness has no meaning
// - A cache would need invalidation policy for zero user benefit
// - Trade-off: every `list`/`tui` run pays one HTTP round trip
//
// Why tombstones for remote deletions (not filtering the batch in place)?
// - The remote batch is re-fetched fresh on every run, so the only durable
//   way to hide a remote contact is to remember its id
// - Local additions are owned outright and can simply be dropped
//
// Why two state files (not one)?
// - Mirrors the two independent concerns (additions vs. tombstones)
// - A corrupt added.json cannot take the tombstone set down with it

mod args;
mod commands;
pub mod avatar;
pub mod config;
pub mod context;
mod handlers;
pub mod output;
mod tui;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
