//! Error types for skill management.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, installing, or removing skills.
#[derive(Debug, Error)]
pub enum SkillError {
    /// No skill directory exists at the requested source path.
    #[error("skill '{id}' not found under {root}")]
    NotFound {
        /// Source root the lookup ran against.
        root: PathBuf,
        /// Identifier that was requested.
        id: String,
    },

    /// A directory that should be a skill lacks the manifest marker.
    #[error("'{path}' is not a skill: no SKILL.md inside")]
    InvalidSkill {
        /// The directory that failed validation.
        path: PathBuf,
    },

    /// An identifier that is empty or would escape its root.
    #[error("invalid skill identifier '{0}'")]
    InvalidIdentifier(String),

    /// The remote clone subprocess failed.
    #[error("failed to fetch {url}: {message}")]
    FetchFailed {
        /// Repository URL that was being cloned.
        url: String,
        /// Transport error reported by the clone.
        message: String,
    },

    /// Filesystem error while copying a skill into the store.
    #[error("failed to copy skill '{id}': {source}")]
    CopyFailed {
        /// Identifier being installed.
        id: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error while deleting an installed skill.
    #[error("failed to remove skill '{id}': {source}")]
    RemoveFailed {
        /// Identifier being removed.
        id: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Removal target is not present in the store.
    #[error("skill '{0}' is not installed")]
    NotInstalled(String),
}
