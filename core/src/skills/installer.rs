//! Conflict-safe installation of skills into the store.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::SkillError;

use super::{SkillStore, is_skill_dir, validate_identifier};

/// What an install call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The skill's subtree was copied into the store.
    Installed,
    /// The identifier was already present; the existing copy is untouched.
    AlreadyInstalled,
}

/// Install the skill at `source_root/id` into the store under `id`.
///
/// The source directory must exist and directly contain the manifest
/// marker. An identifier already present in the store is skipped, never
/// overwritten: installed copies may have been hand-customized.
pub fn install(
    store: &SkillStore,
    source_root: &Path,
    id: &str,
) -> Result<InstallOutcome, SkillError> {
    validate_identifier(id)?;

    let source = source_root.join(id);
    if !source.is_dir() {
        return Err(SkillError::NotFound {
            root: source_root.to_path_buf(),
            id: id.to_string(),
        });
    }
    install_tree(store, &source, id)
}

/// Install the directory at `source` into the store under `id`.
///
/// This is the primitive [`install`] builds on; the remote fetcher calls it
/// directly because its source directory is resolved from a clone rather
/// than being `root/id`.
pub fn install_tree(
    store: &SkillStore,
    source: &Path,
    id: &str,
) -> Result<InstallOutcome, SkillError> {
    validate_identifier(id)?;

    if !is_skill_dir(source) {
        return Err(SkillError::InvalidSkill {
            path: source.to_path_buf(),
        });
    }
    if store.exists(id) {
        tracing::debug!(skill = id, "already installed, skipping");
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    let target = store.path_of(id);
    if let Err(e) = copy_tree(source, &target) {
        // A failed copy must not claim the identifier.
        let _ = fs::remove_dir_all(&target);
        return Err(SkillError::CopyFailed {
            id: id.to_string(),
            source: e,
        });
    }

    tracing::info!(skill = id, store = %store.root().display(), "installed");
    Ok(InstallOutcome::Installed)
}

/// Deep-copy the `src` directory to `dest`, creating parents as needed.
fn copy_tree(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).map_err(io::Error::other)?;
        let path = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&path)?;
        } else {
            fs::copy(entry.path(), &path)?;
        }
    }
    Ok(())
}
