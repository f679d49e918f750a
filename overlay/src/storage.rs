//! Layout file storage.
//!
//! Layouts are numbered slots, each a settings blob in its own file
//! (`cog_layout_<index>.ini`) under the overlay's data directory. Loading a
//! slot that was never saved yields nothing.

use std::path::PathBuf;

use cog_core::StorageError;

/// Reads and writes layout slot files.
pub struct LayoutStore {
    dir: PathBuf,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore {
    /// Store rooted at the platform data directory (falls back to the
    /// current directory when none is available).
    pub fn new() -> Self {
        Self {
            dir: cog_core::config::data_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("cog_layout_{index}.ini"))
    }

    /// Write a layout blob into a slot.
    pub fn save(&self, index: usize, blob: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(index), blob)?;
        tracing::info!("saved layout {index}");
        Ok(())
    }

    /// Read a slot's layout blob. `None` if the slot was never saved.
    pub fn load(&self, index: usize) -> Option<String> {
        match std::fs::read_to_string(self.path(index)) {
            Ok(blob) => Some(blob),
            Err(err) => {
                tracing::trace!("layout {index} not loaded: {err}");
                None
            }
        }
    }
}
