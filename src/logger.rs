use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{AutogitError, AutogitResult};

#[derive(Debug, Default)]
struct LoggerState {
    path: Option<PathBuf>,
    file: Option<File>,
}

/// Debug log sink. Cloning shares the same file; while disabled every write
/// is discarded.
#[derive(Clone, Debug, Default)]
pub struct Logger {
    state: Arc<Mutex<LoggerState>>,
}

impl Logger {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            state: Arc::new(Mutex::new(LoggerState { path, file: None })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Routes `tracing` events through this logger. `RUST_LOG` overrides the
    /// default filter.
    pub fn install(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME"))));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(self.clone())
            .try_init()
            .map_err(|err| anyhow!("install log subscriber: {}", err))
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().file.is_some()
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    pub fn enable(&self) -> Result<()> {
        let mut state = self.lock();
        if state.file.is_some() {
            return Ok(());
        }
        let path = state.path.clone().context("no log file path set")?;
        state.file = Some(open_log_file(&path)?);
        Ok(())
    }

    pub fn disable(&self) {
        let mut state = self.lock();
        if let Some(mut file) = state.file.take() {
            let _ = file.flush();
        }
    }

    /// Flips logging and returns the new state.
    pub fn toggle(&self) -> Result<bool> {
        if self.is_enabled() {
            self.disable();
            Ok(false)
        } else {
            self.enable()?;
            Ok(true)
        }
    }

    /// Records where `enable` will write. Nothing is opened, so the directory
    /// may not exist yet.
    pub fn use_path(&self, path: PathBuf) {
        self.lock().path = Some(path);
    }

    /// Points the logger at a new file. The parent directory must exist and
    /// be writable.
    pub fn set_path(&self, path: &Path) -> AutogitResult<()> {
        let parent = match path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => return Err(AutogitError::Permission(path.to_path_buf())),
        };
        if !parent.is_dir() {
            return Err(AutogitError::Permission(path.to_path_buf()));
        }
        let file = open_log_file(path).map_err(|_| AutogitError::Permission(path.to_path_buf()))?;

        let mut state = self.lock();
        state.path = Some(path.to_path_buf());
        if state.file.is_some() {
            state.file = Some(file);
        }
        Ok(())
    }

    /// Flushes and closes the file at exit.
    pub fn close(&self) {
        self.disable();
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

pub struct LogWriter {
    state: Arc<Mutex<LoggerState>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match state.file.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match state.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for Logger {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            state: Arc::clone(&self.state),
        }
    }
}

#[cfg(test)]
#[path = "tests/logger_tests.rs"]
mod tests;
