use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::askpass;
use crate::credentials::Credentials;
use crate::error::{AutogitError, AutogitResult};

pub const SUCCESS: i32 = 0;

/// Text plus status returned by every external command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub text: String,
    pub status: i32,
}

impl CommandResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: SUCCESS,
        }
    }

    pub fn failed(text: impl Into<String>, status: i32) -> Self {
        // A failure must never look like success.
        let status = if status == SUCCESS { 1 } else { status };
        Self {
            text: text.into(),
            status,
        }
    }

    pub fn from_error(err: &AutogitError) -> Self {
        Self::failed(err.to_string(), err.status())
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS
    }

    /// Non-empty output lines, for list widgets.
    pub fn lines(&self) -> Vec<String> {
        self.text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.to_string())
            .collect()
    }
}

/// A program invocation: program name, arguments and working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl GitCommand {
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::program("git", args)
    }

    pub fn program<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Parses a free-form command line typed by the user.
    pub fn parse(line: &str, remove_quotes: bool) -> AutogitResult<Self> {
        let mut parts = tokenize_command(line, remove_quotes)?;
        if parts.is_empty() {
            return Err(AutogitError::Validation("no command entered".to_string()));
        }
        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
            cwd: None,
        })
    }

    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The argument list joined with spaces (without the program name).
    pub fn args_line(&self) -> String {
        self.args.join(" ")
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args_line())
        }
    }
}

/// Splits a command line on whitespace, keeping double-quoted segments
/// together. With `remove_quotes` the surrounding quotes are dropped.
pub fn tokenize_command(input: &str, remove_quotes: bool) -> AutogitResult<Vec<String>> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
                if !remove_quotes {
                    cur.push(ch);
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    out.push(std::mem::take(&mut cur));
                    has_token = false;
                }
            }
            c => {
                cur.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(AutogitError::Validation("unterminated quote".to_string()));
    }
    if has_token {
        out.push(cur);
    }
    Ok(out)
}

/// The external collaborator that runs commands.
///
/// Implementations never return errors: every failure (missing program,
/// permission problem, non-zero exit) is folded into the [`CommandResult`].
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, cmd: &GitCommand) -> CommandResult;

    /// Runs `cmd` with credentials available to git through the askpass helper.
    fn execute_with_credentials(&self, cmd: &GitCommand, creds: &Credentials) -> CommandResult;

    /// Starts `cmd` without waiting for it (external editors).
    fn spawn_detached(&self, cmd: &GitCommand) -> CommandResult;
}

#[derive(Clone, Debug, Default)]
pub struct SystemExecutor {
    askpass: Option<PathBuf>,
}

impl SystemExecutor {
    pub fn new() -> Self {
        let askpass = match askpass::helper_path() {
            Ok(p) if p.is_file() => Some(p),
            Ok(p) => {
                tracing::warn!(path = %p.display(), "askpass helper not found");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot locate askpass helper");
                None
            }
        };
        Self { askpass }
    }

    pub fn with_askpass(path: impl Into<PathBuf>) -> Self {
        Self {
            askpass: Some(path.into()),
        }
    }

    fn base_command(cmd: &GitCommand) -> Command {
        let mut proc = Command::new(&cmd.program);
        proc.args(&cmd.args).stdin(Stdio::null());
        if let Some(dir) = &cmd.cwd {
            proc.current_dir(dir);
        }
        proc
    }

    fn run(cmd: &GitCommand, mut proc: Command) -> CommandResult {
        tracing::debug!(command = %cmd, cwd = ?cmd.cwd, "run command");
        match proc.output() {
            Ok(out) if out.status.success() => {
                // git reports push/pull/clone progress on stderr only.
                let stdout = String::from_utf8_lossy(&out.stdout).to_string();
                if stdout.trim().is_empty() {
                    CommandResult::ok(String::from_utf8_lossy(&out.stderr))
                } else {
                    CommandResult::ok(stdout)
                }
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr).to_string();
                let text = if stderr.trim().is_empty() {
                    String::from_utf8_lossy(&out.stdout).to_string()
                } else {
                    stderr
                };
                let status = out.status.code().unwrap_or(-1);
                tracing::debug!(command = %cmd, status, "command failed");
                CommandResult::failed(text, status)
            }
            Err(err) => {
                let err = classify_spawn_error(cmd, err);
                tracing::warn!(command = %cmd, error = %err, "command could not start");
                CommandResult::from_error(&err)
            }
        }
    }
}

fn classify_spawn_error(cmd: &GitCommand, err: std::io::Error) -> AutogitError {
    match err.kind() {
        ErrorKind::NotFound => match &cmd.cwd {
            Some(dir) if !dir.is_dir() => {
                AutogitError::Validation(format!("{} does not exist", dir.display()))
            }
            _ => AutogitError::NotFound(cmd.program.clone()),
        },
        ErrorKind::PermissionDenied => AutogitError::Permission(
            cmd.cwd.clone().unwrap_or_else(|| PathBuf::from(&cmd.program)),
        ),
        _ => AutogitError::Command {
            program: cmd.program.clone(),
            status: -1,
        },
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, cmd: &GitCommand) -> CommandResult {
        Self::run(cmd, Self::base_command(cmd))
    }

    fn execute_with_credentials(&self, cmd: &GitCommand, creds: &Credentials) -> CommandResult {
        let mut proc = Self::base_command(cmd);
        proc.env("GIT_TERMINAL_PROMPT", "0");
        if let Some(helper) = &self.askpass {
            proc.env("GIT_ASKPASS", helper);
        }
        if let Credentials::Pair { username, password } = creds {
            proc.env(askpass::USERNAME_ENV, username)
                .env(askpass::PASSWORD_ENV, password);
        }
        Self::run(cmd, proc)
    }

    fn spawn_detached(&self, cmd: &GitCommand) -> CommandResult {
        let mut proc = Self::base_command(cmd);
        proc.stdout(Stdio::null()).stderr(Stdio::null());
        match proc.spawn() {
            Ok(_) => CommandResult::ok("Opened external program"),
            Err(err) => CommandResult::from_error(&classify_spawn_error(cmd, err)),
        }
    }
}

#[cfg(test)]
#[path = "tests/executor_tests.rs"]
mod tests;
