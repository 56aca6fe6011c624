use std::path::{Path, PathBuf};

/// Which directory commands run in: the workspace root, or one repository
/// below it. Replaces changing the process working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct WorkContext {
    workspace_root: PathBuf,
    repo: Option<String>,
}

impl WorkContext {
    pub(in crate::tui_shell) fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            repo: None,
        }
    }

    pub(in crate::tui_shell) fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub(in crate::tui_shell) fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    /// Directory commands should run in right now.
    pub(in crate::tui_shell) fn cwd(&self) -> PathBuf {
        match &self.repo {
            Some(name) => self.workspace_root.join(name),
            None => self.workspace_root.clone(),
        }
    }

    pub(in crate::tui_shell) fn enter_repo(&mut self, name: impl Into<String>) {
        self.repo = Some(name.into());
    }

    pub(in crate::tui_shell) fn leave_repo(&mut self) {
        self.repo = None;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/context_tests.rs"]
mod tests;
