//! Command-line interface: argument parsing and command execution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use crate::core::document::WorkspaceDocument;
use crate::core::file_system;
use crate::core::folders::{self, HideOutcome};

#[derive(Parser)]
#[command(
    name = "workhide",
    about = "Hide and restore folders in multi-root editor workspaces",
    version
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Workspace file to operate on (discovered from the current directory
    /// when omitted)
    #[arg(long, short = 'w', env = "WORKHIDE_WORKSPACE", global = true)]
    workspace: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "WORKHIDE_LOG", global = true)]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Hide a folder: move its entry out of the active folder list.
    ///
    /// The folder stays on disk and in the workspace's hidden list;
    /// `show` brings it back.
    Hide {
        /// Folder to hide, absolute or relative to the workspace root
        path: PathBuf,
    },
    /// Show a previously hidden folder again.
    Show {
        /// Hidden folder to restore (see `list` for valid paths)
        path: PathBuf,
    },
    /// List hidden folders.
    List,
}

impl Args {
    /// Log level filter from `--log`, defaulting to `info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::INFO)
    }
}

/// Execute the parsed command line.
pub fn run(args: Args) -> Result<()> {
    let workspace = match args.workspace {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("could not determine current directory")?;
            file_system::locate_workspace_file(&cwd)?
        }
    };

    match args.command {
        Command::Hide { path } => hide(&workspace, &path),
        Command::Show { path } => show(&workspace, &path),
        Command::List => list(&workspace),
    }
}

fn hide(workspace: &Path, target: &Path) -> Result<()> {
    let mut doc = WorkspaceDocument::load(workspace)?;

    match folders::hide_folder(&mut doc, target)? {
        HideOutcome::Hidden(entry) => {
            doc.save()?;
            println!("{} is hidden.", entry.path.display());
        }
        HideOutcome::NoMatch => {
            doc.save()?;
            println!("Nothing to hide: {} is not a workspace folder.", target.display());
        }
        HideOutcome::NotADirectory => {
            println!("Nothing to hide: {} is not a directory.", target.display());
        }
    }
    Ok(())
}

fn show(workspace: &Path, target: &Path) -> Result<()> {
    let mut doc = WorkspaceDocument::load(workspace)?;

    match folders::show_folder(&mut doc, target)? {
        Some(entry) => {
            doc.save()?;
            println!("Showing {}", entry.path.display());
        }
        None => {
            doc.save()?;
            println!("Nothing to show: {} is not hidden.", target.display());
        }
    }
    Ok(())
}

fn list(workspace: &Path) -> Result<()> {
    let doc = WorkspaceDocument::load(workspace)?;

    let hidden = doc.hidden_folders()?;
    if hidden.is_empty() {
        println!("No hidden folders.");
        return Ok(());
    }

    for entry in hidden {
        match entry.name {
            Some(name) => println!("{} ({})", entry.path.display(), name),
            None => println!("{}", entry.path.display()),
        }
    }
    Ok(())
}
