//! Remote skill installation via shallow git clones.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SkillError;

use super::installer::{self, InstallOutcome};
use super::{SkillStore, validate_identifier};

/// Capability to materialize a remote repository into a local directory.
///
/// The production implementation shells out to git; tests substitute a fake
/// that fills `dest` with a fixture tree.
pub trait GitClient {
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<(), SkillError>;
}

/// Clones with the system git client, shallow (`--depth 1`).
pub struct SystemGit;

impl GitClient for SystemGit {
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<(), SkillError> {
        let output = Command::new("git")
            .args(["clone", "--depth", "1", url])
            .arg(dest)
            .output()
            .map_err(|e| SkillError::FetchFailed {
                url: url.to_string(),
                message: format!("could not run git: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SkillError::FetchFailed {
                url: url.to_string(),
                message: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Clone `url` shallowly and install one skill from it.
///
/// With `subpath`, the skill is `clone/subpath` and its identifier defaults
/// to the subpath's basename; without, the clone root itself is the skill
/// and the identifier defaults to the URL basename with any `.git` suffix
/// stripped. `name` overrides the identifier in either case.
///
/// The temporary clone directory is removed before this returns, on success
/// and on every failure path.
///
/// Returns the resolved identifier alongside the install outcome.
pub fn fetch_and_install(
    store: &SkillStore,
    git: &dyn GitClient,
    url: &str,
    name: Option<&str>,
    subpath: Option<&str>,
) -> Result<(String, InstallOutcome), SkillError> {
    let clone = tempfile::Builder::new()
        .prefix("skilldock-clone-")
        .tempdir()
        .map_err(|e| SkillError::FetchFailed {
            url: url.to_string(),
            message: format!("could not create temporary directory: {e}"),
        })?;

    tracing::debug!(%url, dest = %clone.path().display(), "cloning");
    git.clone_shallow(url, clone.path())?;

    let (source, id) = resolve_source(clone.path(), url, name, subpath)?;
    let outcome = installer::install_tree(store, &source, &id)?;

    // Dropping the guard cleans up the error paths above; closing here
    // surfaces removal problems instead of ignoring them.
    if let Err(e) = clone.close() {
        tracing::warn!(%e, "could not remove temporary clone");
    }
    Ok((id, outcome))
}

/// Apply the name/subpath resolution rules against a finished clone.
fn resolve_source(
    clone_root: &Path,
    url: &str,
    name: Option<&str>,
    subpath: Option<&str>,
) -> Result<(PathBuf, String), SkillError> {
    match subpath {
        Some(sub) => {
            validate_identifier(sub)?;
            let id = name.unwrap_or_else(|| basename(sub));
            Ok((clone_root.join(sub), id.to_string()))
        }
        None => {
            let id = name.map(str::to_string).unwrap_or_else(|| url_basename(url));
            Ok((clone_root.to_path_buf(), id))
        }
    }
}

fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Last path segment of a repository URL, without any `.git` suffix.
/// Handles both `https://host/owner/repo.git` and `git@host:owner/repo.git`.
fn url_basename(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}
