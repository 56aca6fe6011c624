use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::credentials::Credentials;
use crate::executor::{CommandExecutor, CommandResult};

use super::ScreenId;
use super::presenter::PresentOptions;

/// What a worker gets: everything is copied at spawn time so the interactive
/// thread can keep mutating its own state.
pub(in crate::tui_shell) struct JobEnv {
    pub(in crate::tui_shell) executor: Arc<dyn CommandExecutor>,
    pub(in crate::tui_shell) cwd: PathBuf,
    pub(in crate::tui_shell) credentials: Credentials,
}

pub(in crate::tui_shell) type Job = Box<dyn FnOnce(JobEnv) -> CommandResult + Send + 'static>;

/// A long-running action waiting to be started.
pub(in crate::tui_shell) struct PendingOperation {
    /// Label of the loading indicator, e.g. "Pushing".
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) present: PresentOptions,
    pub(in crate::tui_shell) requires_credentials: bool,
    job: Job,
}

impl PendingOperation {
    pub(in crate::tui_shell) fn new<F>(title: impl Into<String>, present: PresentOptions, job: F) -> Self
    where
        F: FnOnce(JobEnv) -> CommandResult + Send + 'static,
    {
        Self {
            title: title.into(),
            present,
            requires_credentials: false,
            job: Box::new(job),
        }
    }

    /// Marks the operation as needing a username/password pair first.
    pub(in crate::tui_shell) fn gated(mut self) -> Self {
        self.requires_credentials = true;
        self
    }
}

impl std::fmt::Debug for PendingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingOperation")
            .field("title", &self.title)
            .field("present", &self.present)
            .field("requires_credentials", &self.requires_credentials)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Completion {
    pub(in crate::tui_shell) origin: ScreenId,
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) present: PresentOptions,
    pub(in crate::tui_shell) result: CommandResult,
    pub(in crate::tui_shell) elapsed: Duration,
}

/// Returned when an operation is requested while another is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct RunnerBusy {
    pub(in crate::tui_shell) running: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) struct RunnerStats {
    pub(in crate::tui_shell) started: u64,
    pub(in crate::tui_shell) completed: u64,
    pub(in crate::tui_shell) rejected: u64,
}

struct InFlight {
    origin: ScreenId,
    title: String,
    present: PresentOptions,
    started_at: Instant,
    rx: mpsc::Receiver<CommandResult>,
}

/// Runs one operation at a time on a worker thread. The loading indicator is
/// shown exactly while the slot is taken.
#[derive(Default)]
pub(in crate::tui_shell) struct OperationRunner {
    slot: Option<InFlight>,
    stats: RunnerStats,
}

impl OperationRunner {
    pub(in crate::tui_shell) fn is_busy(&self) -> bool {
        self.slot.is_some()
    }

    /// Label and age of the running operation, for the loading indicator.
    pub(in crate::tui_shell) fn indicator(&self) -> Option<(&str, Duration)> {
        self.slot
            .as_ref()
            .map(|s| (s.title.as_str(), s.started_at.elapsed()))
    }

    pub(in crate::tui_shell) fn stats(&self) -> RunnerStats {
        self.stats
    }

    /// Fails (and counts the rejection) when the slot is taken.
    pub(in crate::tui_shell) fn ensure_idle(&mut self) -> Result<(), RunnerBusy> {
        match &self.slot {
            Some(s) => {
                self.stats.rejected += 1;
                tracing::warn!(running = %s.title, "operation rejected: runner busy");
                Err(RunnerBusy {
                    running: s.title.clone(),
                })
            }
            None => Ok(()),
        }
    }

    pub(in crate::tui_shell) fn run(
        &mut self,
        origin: ScreenId,
        op: PendingOperation,
        env: JobEnv,
    ) -> Result<(), RunnerBusy> {
        self.ensure_idle()?;

        let PendingOperation {
            title,
            present,
            job,
            ..
        } = op;
        let (tx, rx) = mpsc::channel();
        self.slot = Some(InFlight {
            origin,
            title: title.clone(),
            present,
            started_at: Instant::now(),
            rx,
        });
        self.stats.started += 1;
        tracing::info!(operation = %title, cwd = %env.cwd.display(), "operation started");

        // If the thread cannot be spawned the sender is dropped with the
        // closure, and `poll` reports the disconnect as a failure.
        let spawned = thread::Builder::new()
            .name("autogit-op".to_string())
            .spawn(move || {
                let result = job(env);
                let _ = tx.send(result);
            });
        if let Err(err) = spawned {
            tracing::error!(operation = %title, error = %err, "spawn worker thread");
        }
        Ok(())
    }

    /// Returns the finished operation once; afterwards the slot is free.
    pub(in crate::tui_shell) fn poll(&mut self) -> Option<Completion> {
        let result = match self.slot.as_ref()?.rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => {
                CommandResult::failed("Operation worker exited without a result", 1)
            }
        };

        let done = self.slot.take()?;
        self.stats.completed += 1;
        let elapsed = done.started_at.elapsed();
        tracing::info!(
            operation = %done.title,
            status = result.status,
            elapsed_ms = elapsed.as_millis() as u64,
            "operation finished"
        );
        Some(Completion {
            origin: done.origin,
            title: done.title,
            present: done.present,
            result,
            elapsed,
        })
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/runner_tests.rs"]
mod tests;
