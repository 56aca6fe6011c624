use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Workspace directory, or a repository inside one.
    pub target_dir: PathBuf,
    /// Open the credential prompt right after startup.
    pub ask_credentials: bool,
    pub save_metadata: bool,
    pub debug: bool,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
