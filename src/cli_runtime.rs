use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "autogit")]
#[command(about = "A terminal UI for everyday git work", long_about = None)]
#[command(disable_version_flag = true)]
pub(crate) struct Cli {
    /// Workspace directory, or a repository inside one (defaults to the current directory)
    #[arg(short = 't', long = "targetdir", value_name = "PATH")]
    target_dir: Option<PathBuf>,

    /// Ask for git credentials right after startup
    #[arg(short = 'c', long = "credentials")]
    credentials: bool,

    /// Do not write the metadata file on exit
    #[arg(short = 'n', long = "nosavemetadata")]
    no_save_metadata: bool,

    /// Start with debug logging enabled
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version")]
    version: bool,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        for line in autogit::about_lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    let target_dir = match cli.target_dir {
        Some(dir) => resolve_target(dir)?,
        None => std::env::current_dir().context("get current dir")?,
    };

    autogit::tui::run_with_options(autogit::tui::TuiRunOptions {
        target_dir,
        ask_credentials: cli.credentials,
        save_metadata: !cli.no_save_metadata,
        debug: cli.debug,
    })
}

fn resolve_target(dir: PathBuf) -> Result<PathBuf> {
    if !dir.exists() {
        anyhow::bail!("target directory {} does not exist", dir.display());
    }
    if !dir.is_dir() {
        anyhow::bail!("target {} is not a directory", dir.display());
    }
    dir.canonicalize()
        .with_context(|| format!("resolve {}", dir.display()))
}
