// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Atomic output writes with automatic backup

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::config::ConfigError;
use crate::core::ContainerDescriptor;

/// Renders a container as pretty-printed JSON (with trailing newline)
pub fn render_json(container: &ContainerDescriptor) -> Result<String, ConfigError> {
    let mut json = serde_json::to_string_pretty(container)?;
    json.push('\n');
    Ok(json)
}

/// Writes compiled output to one target file.
///
/// Backups go to a `backups/` directory next to the target, created on
/// first use, e.g. `ui/controls.json` → `ui/backups/controls.json.2025-10-10_221500`.
#[derive(Debug)]
pub struct OutputWriter {
    target: PathBuf,
    backup_dir: PathBuf,
}

impl OutputWriter {
    /// Creates a writer for `target`.
    ///
    /// The target does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if `target` has no file name.
    pub fn new(target: PathBuf) -> Result<Self, ConfigError> {
        if target.file_name().is_none() {
            return Err(ConfigError::InvalidPath(target));
        }

        // Bare file names resolve against the working directory
        let bare = target
            .parent()
            .is_some_and(|parent| parent.as_os_str().is_empty());
        let target = if bare { Path::new(".").join(&target) } else { target };

        let backup_dir = target
            .parent()
            .map(|parent| parent.join("backups"))
            .unwrap_or_else(|| PathBuf::from("backups"));

        Ok(Self { target, backup_dir })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Atomically replaces the target with `content`.
    ///
    /// If the target already exists it is backed up first; the backup path
    /// is returned. The write is atomic at the filesystem level (temp file
    /// + rename), so the target is never in a partially-written state.
    pub fn write(&self, content: &str) -> Result<Option<PathBuf>, ConfigError> {
        let backup = if self.target.exists() {
            Some(self.create_timestamped_backup()?)
        } else {
            None
        };

        // Open file for atomic writing
        let mut file = AtomicWriteFile::options().open(&self.target).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        // Commit atomically
        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        info!(path = %self.target.display(), bytes = content.len(), "wrote output");
        Ok(backup)
    }

    /// Copies the current target into the backup directory.
    ///
    /// Names follow `<file name>.<YYYY-MM-DD_HHMMSS>`; a `-N` suffix is
    /// added if a backup from the same second already exists.
    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        if !self.backup_dir.exists() {
            fs::create_dir_all(&self.backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(self.backup_dir.clone()))?;
        }

        let original_name = self
            .target
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ConfigError::InvalidPath(self.target.clone()))?;

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let base_name = format!("{}.{}", original_name, timestamp);

        let mut backup_path = self.backup_dir.join(&base_name);
        let mut attempt = 1;
        while backup_path.exists() {
            backup_path = self.backup_dir.join(format!("{}-{}", base_name, attempt));
            attempt += 1;
        }

        fs::copy(&self.target, &backup_path)
            .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        debug!(backup = %backup_path.display(), "created backup");
        Ok(backup_path)
    }
}
