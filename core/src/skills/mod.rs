//! Skill management: discovery, installation, and removal of skill bundles.
//!
//! A skill is a directory that directly contains a `SKILL.md` manifest
//! marker. Skills are identified by their path relative to a root, and that
//! identity is preserved when they are copied into the store.

pub mod fetcher;
pub mod installer;
pub mod scanner;
pub mod store;

pub use fetcher::{GitClient, SystemGit, fetch_and_install};
pub use installer::{InstallOutcome, install, install_tree};
pub use scanner::{scan, scan_with};
pub use store::SkillStore;

use std::path::{Component, Path};

use crate::error::SkillError;

/// Marker file whose presence makes a directory a skill.
pub const SKILL_MANIFEST: &str = "SKILL.md";

/// Directory names pruned from every scan: version-control metadata,
/// dependency caches, and the tool's own executable directory.
pub const EXCLUDED_DIRS: &[&str] = &[".git", ".hg", ".svn", "node_modules", "target", "bin"];

/// True when `dir` directly contains the manifest marker.
pub fn is_skill_dir(dir: &Path) -> bool {
    dir.join(SKILL_MANIFEST).is_file()
}

/// Reject identifiers that are empty or could resolve outside their root.
///
/// Identifiers are relative paths, so separators are fine; parent and root
/// components are not.
pub fn validate_identifier(id: &str) -> Result<(), SkillError> {
    let invalid = || SkillError::InvalidIdentifier(id.to_string());

    if id.trim().is_empty() || id.contains('\\') || id.contains('\0') {
        return Err(invalid());
    }

    let mut named = false;
    for component in Path::new(id).components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(invalid());
            }
        }
    }
    if !named {
        return Err(invalid());
    }

    Ok(())
}
