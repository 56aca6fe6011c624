use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::credentials::Credentials;
use crate::executor::{CommandExecutor, CommandResult, GitCommand};

#[derive(Clone, Debug)]
pub(crate) struct RecordedCall {
    pub(crate) line: String,
    pub(crate) cwd: Option<PathBuf>,
    pub(crate) credentials: Option<Credentials>,
}

/// Executor that answers from a table keyed by `args_line()` and records calls.
/// Unknown commands succeed with empty output.
#[derive(Default)]
pub(crate) struct FakeExecutor {
    responses: Mutex<HashMap<String, CommandResult>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, args_line: &str, result: CommandResult) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(args_line.to_string(), result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_lines(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.line).collect()
    }

    fn answer(&self, cmd: &GitCommand, credentials: Option<Credentials>) -> CommandResult {
        let line = cmd.args_line();
        self.calls.lock().unwrap().push(RecordedCall {
            line: line.clone(),
            cwd: cmd.cwd.clone(),
            credentials,
        });
        self.responses
            .lock()
            .unwrap()
            .get(&line)
            .cloned()
            .unwrap_or_else(|| CommandResult::ok(""))
    }
}

impl CommandExecutor for FakeExecutor {
    fn execute(&self, cmd: &GitCommand) -> CommandResult {
        self.answer(cmd, None)
    }

    fn execute_with_credentials(&self, cmd: &GitCommand, creds: &Credentials) -> CommandResult {
        self.answer(cmd, Some(creds.clone()))
    }

    fn spawn_detached(&self, cmd: &GitCommand) -> CommandResult {
        self.answer(cmd, None);
        CommandResult::ok("Opened external program")
    }
}
