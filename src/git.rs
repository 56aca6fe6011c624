use std::fs;
use std::path::{Path, PathBuf};

use crate::credentials::Credentials;
use crate::error::{AutogitError, AutogitResult};
use crate::executor::{CommandExecutor, CommandResult, GitCommand};

pub fn status_short(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["status", "-s"]).in_dir(repo))
}

pub fn status(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["status"]).in_dir(repo))
}

pub fn remotes(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["remote"]).in_dir(repo))
}

/// Contacts the remote, so callers run it as a long operation.
pub fn remote_info(
    exec: &dyn CommandExecutor,
    repo: &Path,
    remote: &str,
    creds: &Credentials,
) -> CommandResult {
    exec.execute_with_credentials(
        &GitCommand::git(["remote", "show", remote]).in_dir(repo),
        creds,
    )
}

pub fn branches(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["branch"]).in_dir(repo))
}

pub fn tags(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["tag"]).in_dir(repo))
}

pub fn recent_commits(exec: &dyn CommandExecutor, repo: &Path, refname: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["--no-pager", "log", refname, "--oneline"]).in_dir(repo))
}

pub fn log(exec: &dyn CommandExecutor, repo: &Path, refname: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["--no-pager", "log", refname]).in_dir(repo))
}

pub fn diff(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["--no-pager", "diff"]).in_dir(repo))
}

pub fn diff_file(exec: &dyn CommandExecutor, repo: &Path, file: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["--no-pager", "diff", "--", file]).in_dir(repo))
}

pub fn add_all(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["add", "-A"]).in_dir(repo))
}

pub fn add_file(exec: &dyn CommandExecutor, repo: &Path, file: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["add", "--", file]).in_dir(repo))
}

pub fn reset_file(exec: &dyn CommandExecutor, repo: &Path, file: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["reset", "HEAD", "--", file]).in_dir(repo))
}

pub fn create_branch(exec: &dyn CommandExecutor, repo: &Path, name: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["checkout", "-b", name]).in_dir(repo))
}

pub fn checkout(exec: &dyn CommandExecutor, repo: &Path, refname: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["checkout", refname]).in_dir(repo))
}

pub fn stash_all(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["stash"]).in_dir(repo))
}

pub fn stash_pop(exec: &dyn CommandExecutor, repo: &Path) -> CommandResult {
    exec.execute(&GitCommand::git(["stash", "pop"]).in_dir(repo))
}

pub fn commit(exec: &dyn CommandExecutor, repo: &Path, message: &str) -> CommandResult {
    if message.trim().is_empty() {
        return CommandResult::failed("No commit message entered", 1);
    }
    exec.execute(&GitCommand::git(["commit", "-m", message]).in_dir(repo))
}

pub fn add_remote(exec: &dyn CommandExecutor, repo: &Path, name: &str, url: &str) -> CommandResult {
    exec.execute(&GitCommand::git(["remote", "add", name, url]).in_dir(repo))
}

pub fn pull(
    exec: &dyn CommandExecutor,
    repo: &Path,
    remote: &str,
    branch: &str,
    creds: &Credentials,
) -> CommandResult {
    exec.execute_with_credentials(
        &GitCommand::git(["pull", remote, branch]).in_dir(repo),
        creds,
    )
}

pub fn push(
    exec: &dyn CommandExecutor,
    repo: &Path,
    remote: &str,
    branch: &str,
    creds: &Credentials,
) -> CommandResult {
    exec.execute_with_credentials(
        &GitCommand::git(["push", remote, branch]).in_dir(repo),
        creds,
    )
}

/// Clones `url` into a new directory under `workspace`.
pub fn clone(
    exec: &dyn CommandExecutor,
    workspace: &Path,
    url: &str,
    creds: &Credentials,
) -> CommandResult {
    let Some(name) = repo_name_from_url(url) else {
        return CommandResult::failed(format!("Cannot derive a directory name from {}", url), 1);
    };
    if workspace.join(&name).exists() {
        return CommandResult::failed(
            format!("The target repo couldn't be cloned - directory {} exists", name),
            1,
        );
    }
    let res = exec.execute_with_credentials(
        &GitCommand::git(["clone", url]).in_dir(workspace),
        creds,
    );
    if res.is_success() {
        CommandResult::ok(format!("Successfully cloned {}", url))
    } else {
        res
    }
}

/// Creates `workspace/name` with a README and runs `git init` in it.
pub fn init_new_repo(exec: &dyn CommandExecutor, workspace: &Path, name: &str) -> CommandResult {
    let target = workspace.join(name);
    if target.exists() {
        return CommandResult::failed(format!("Path {} already exists", target.display()), 1);
    }
    if let Err(err) = fs::create_dir(&target) {
        return CommandResult::from_error(&io_to_error(&target, err));
    }
    if let Err(err) = fs::write(target.join("README.md"), format!("# {}\n", name)) {
        return CommandResult::from_error(&io_to_error(&target, err));
    }
    exec.execute(&GitCommand::git(["init"]).in_dir(&target))
}

/// Deletes a repository directory, clearing read-only flags if needed.
pub fn remove_repo_tree(target: &Path) -> CommandResult {
    if !target.is_dir() {
        return CommandResult::failed(format!("{} is not a directory", target.display()), 1);
    }
    match fs::remove_dir_all(target) {
        Ok(()) => CommandResult::ok(format!("Deleted {}", target.display())),
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
            make_tree_writable(target);
            match fs::remove_dir_all(target) {
                Ok(()) => CommandResult::ok(format!("Deleted {}", target.display())),
                Err(err) => CommandResult::from_error(&io_to_error(target, err)),
            }
        }
        Err(err) => CommandResult::from_error(&io_to_error(target, err)),
    }
}

fn make_tree_writable(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            make_tree_writable(&path);
        }
        if let Ok(meta) = fs::metadata(&path) {
            let mut perms = meta.permissions();
            #[allow(clippy::permissions_set_readonly_false)]
            perms.set_readonly(false);
            let _ = fs::set_permissions(&path, perms);
        }
    }
}

fn io_to_error(path: &Path, err: std::io::Error) -> AutogitError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => AutogitError::Permission(path.to_path_buf()),
        std::io::ErrorKind::NotFound => {
            AutogitError::Validation(format!("{} does not exist", path.display()))
        }
        _ => AutogitError::Validation(format!("{}: {}", path.display(), err)),
    }
}

pub fn open_editor(exec: &dyn CommandExecutor, editor: &str, path: &Path) -> CommandResult {
    match GitCommand::parse(editor, true) {
        Ok(mut cmd) => {
            cmd.args.push(path.display().to_string());
            exec.spawn_detached(&cmd.in_dir(path))
        }
        Err(err) => CommandResult::from_error(&err),
    }
}

pub fn is_git_repo(exec: &dyn CommandExecutor, path: &Path) -> bool {
    path.is_dir()
        && exec
            .execute(&GitCommand::git(["rev-parse", "--is-inside-work-tree"]).in_dir(path))
            .is_success()
}

/// Names of the direct subdirectories of `path` that are git repositories.
pub fn find_repos_in_path(exec: &dyn CommandExecutor, path: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut repos: Vec<String> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir() && p.join(".git").exists() && is_git_repo(exec, p))
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    repos.sort();
    repos
}

/// `https://host/org/name.git` -> `name`.
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Branch name from a `git branch` line (`* main`, `  topic`).
pub fn branch_name(line: &str) -> &str {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("  "))
        .unwrap_or(line)
        .trim()
}

pub fn current_branch_index(lines: &[String]) -> Option<usize> {
    lines.iter().position(|l| l.starts_with('*'))
}

/// Path part of a `git status -s` line (`XY path`).
pub fn status_path(line: &str) -> &str {
    line.get(3..).unwrap_or("").trim()
}

/// True when the file has no staged changes, so Enter should stage it.
pub fn status_is_unstaged(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('?')
}

/// Rejects empty or whitespace-containing names for branches, remotes and repos.
pub fn validate_name(kind: &str, raw: &str) -> AutogitResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AutogitError::Validation(format!("{} cannot be empty", kind)));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(AutogitError::Validation(format!(
            "{} cannot contain spaces",
            kind
        )));
    }
    Ok(name.to_string())
}

/// Resolves the directory a session starts in: a repository's parent becomes
/// the workspace and the repository is entered.
pub fn split_start_dir(exec: &dyn CommandExecutor, target: &Path) -> (PathBuf, Option<String>) {
    if target.join(".git").exists()
        && is_git_repo(exec, target)
        && let (Some(parent), Some(name)) = (target.parent(), target.file_name())
    {
        return (parent.to_path_buf(), Some(name.to_string_lossy().to_string()));
    }
    (target.to_path_buf(), None)
}

#[cfg(test)]
#[path = "tests/git_tests.rs"]
mod tests;
