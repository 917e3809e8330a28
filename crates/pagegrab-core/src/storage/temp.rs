//! Scoped temp file holding the in-flight download.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;
use tempfile::NamedTempFile;

use super::TEMP_SUFFIX;

/// Temp file in the destination directory. Removed on drop unless persisted, so
/// every exit path (success, fetch error, write error, panic unwind) cleans up.
pub struct TempDownload {
    file: NamedTempFile,
}

impl TempDownload {
    /// Create a new `.pagegrab-XXXX.part` file in `dir`.
    pub fn create_in(dir: &Path) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(".pagegrab-")
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        tracing::debug!(path = %file.path().display(), "temp download created");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn file_mut(&mut self) -> &mut File {
        self.file.as_file_mut()
    }

    /// Read the whole download back into memory.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        fs::read(self.path()).with_context(|| format!("failed to read {}", self.path().display()))
    }

    /// Atomically rename the temp file to `final_path`, replacing any existing file.
    /// Consumes the temp file; nothing is left to clean up afterwards.
    pub fn persist(self, final_path: &Path) -> Result<()> {
        // Temp files are created 0600; a saved download should look like any other file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(self.path(), fs::Permissions::from_mode(0o644))
                .context("failed to set permissions on temp file")?;
        }
        let temp_path = self.path().to_path_buf();
        self.file
            .persist(final_path)
            .map_err(|e| e.error)
            .with_context(|| {
                format!(
                    "failed to rename {} to {}",
                    temp_path.display(),
                    final_path.display()
                )
            })?;
        Ok(())
    }
}
