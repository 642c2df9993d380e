//! The fixed directory installed skills live in.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SkillError;

use super::{scanner, validate_identifier};

/// Handle to the store directory.
///
/// The directory is created lazily by the first install; a store that was
/// never populated is a normal state, not an error.
#[derive(Debug, Clone)]
pub struct SkillStore {
    root: PathBuf,
}

impl SkillStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a skill identifier maps to inside the store.
    pub fn path_of(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    /// True iff a directory for `id` exists in the store.
    pub fn exists(&self, id: &str) -> bool {
        self.path_of(id).is_dir()
    }

    /// All installed skill identifiers, sorted. Empty when the store does
    /// not exist yet.
    pub fn list(&self) -> Vec<String> {
        scanner::scan(&self.root)
    }

    /// Recursively delete the installed skill `id`.
    pub fn remove(&self, id: &str) -> Result<(), SkillError> {
        validate_identifier(id)?;

        let path = self.path_of(id);
        if !path.is_dir() {
            return Err(SkillError::NotInstalled(id.to_string()));
        }
        fs::remove_dir_all(&path).map_err(|source| SkillError::RemoveFailed {
            id: id.to_string(),
            source,
        })?;

        tracing::info!(skill = id, "removed from store");
        Ok(())
    }
}
