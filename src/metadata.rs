use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const METADATA_DIR: &str = ".autogit";
const METADATA_FILE: &str = "autogit_settings.json";
const LOG_FILE: &str = "autogit_log.log";

/// Settings carried between sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "EDITOR", default)]
    pub editor: Option<String>,

    #[serde(rename = "VERSION", default)]
    pub version: Option<String>,
}

impl Metadata {
    pub fn current(editor: Option<String>) -> Self {
        Self {
            editor,
            version: Some(crate::VERSION.to_string()),
        }
    }

    /// True when the file was written by a different release.
    pub fn is_from_other_version(&self) -> bool {
        self.version.as_deref().is_some_and(|v| v != crate::VERSION)
    }
}

#[derive(Clone, Debug)]
pub struct MetadataStore {
    dir: PathBuf,
}

impl MetadataStore {
    pub fn new(workspace_root: &Path) -> Self {
        Self {
            dir: workspace_root.join(METADATA_DIR),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    /// Reads saved metadata. A missing file is a first run; an unreadable one
    /// is discarded together with its directory.
    pub fn read(&self) -> Result<Option<Metadata>> {
        let path = self.file();
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        match serde_json::from_slice::<Metadata>(&bytes) {
            Ok(meta) => Ok(Some(meta)),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "discarding malformed metadata");
                fs::remove_dir_all(&self.dir)
                    .with_context(|| format!("remove {}", self.dir.display()))?;
                Ok(None)
            }
        }
    }

    pub fn write(&self, meta: &Metadata) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(meta).context("serialize metadata")?;
        write_atomic(&self.file(), &bytes).context("write metadata")
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
