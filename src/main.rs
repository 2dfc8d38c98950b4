//! Workhide - hide and restore folders in multi-root editor workspaces
//!
//! Moves folder entries of a `.code-workspace` file between the active
//! `folders` list and a hidden list kept in the workspace settings, without
//! deleting anything from disk.

mod cli;
mod core;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(args.log_level())
        .init();

    cli::run(args)
}
