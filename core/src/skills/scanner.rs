//! Recursive discovery of skill directories under a root.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::{EXCLUDED_DIRS, is_skill_dir};

/// Scan `root` for directories that directly contain the manifest marker.
///
/// Returns relative paths, sorted lexicographically for stable output. A
/// missing root yields an empty set rather than an error. Excluded
/// infrastructure directories are pruned from the walk entirely, so nothing
/// inside them can match. Matching directories are still descended into:
/// skills may nest, and an inner skill is reported as its own identifier.
/// Identifiers are UTF-8 strings; a directory whose name does not decode is
/// skipped with a warning rather than reported under a name it does not
/// actually have.
pub fn scan(root: &Path) -> Vec<String> {
    scan_with(root, EXCLUDED_DIRS)
}

/// [`scan`] with a caller-supplied exclusion list.
pub fn scan_with(root: &Path, excluded: &[&str]) -> Vec<String> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "skill root does not exist, nothing to scan");
        return Vec::new();
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, excluded));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(%e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() || !is_skill_dir(entry.path()) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            match rel.to_str() {
                Some(id) => found.push(id.to_string()),
                None => {
                    // A lossy identifier would not map back to its directory.
                    tracing::warn!(path = %rel.display(), "skipping skill with non-UTF-8 name");
                }
            }
        }
    }

    found.sort();
    found
}

fn is_excluded(entry: &DirEntry, excluded: &[&str]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| excluded.contains(&name))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_skill(root: &Path, rel: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("SKILL.md"), format!("# {rel}\n")).unwrap();
    }

    #[test]
    fn finds_nested_skills_sorted() {
        let tmp = TempDir::new().unwrap();
        make_skill(tmp.path(), "web/seo");
        make_skill(tmp.path(), "mobile/android-expert");
        fs::write(
            tmp.path().join("mobile/android-expert").join("notes.md"),
            "extra\n",
        )
        .unwrap();

        let found = scan(tmp.path());
        assert_eq!(found, vec!["mobile/android-expert", "web/seo"]);
    }

    #[test]
    fn missing_root_yields_empty() {
        let found = scan(&PathBuf::from("/nonexistent/skill/root"));
        assert!(found.is_empty());
    }

    #[test]
    fn descends_through_unmarked_directories() {
        let tmp = TempDir::new().unwrap();
        make_skill(tmp.path(), "group/sub/deep-skill");

        let found = scan(tmp.path());
        assert_eq!(found, vec!["group/sub/deep-skill"]);
    }

    #[test]
    fn reports_inner_skills_independently() {
        let tmp = TempDir::new().unwrap();
        make_skill(tmp.path(), "outer");
        make_skill(tmp.path(), "outer/inner");

        let found = scan(tmp.path());
        assert_eq!(found, vec!["outer", "outer/inner"]);
    }

    #[test]
    fn prunes_excluded_directories_entirely() {
        let tmp = TempDir::new().unwrap();
        make_skill(tmp.path(), "good");
        make_skill(tmp.path(), ".git/objects/sneaky");
        make_skill(tmp.path(), "node_modules/pkg");
        make_skill(tmp.path(), "target/debug/build");

        let found = scan(tmp.path());
        assert_eq!(found, vec!["good"]);
    }

    #[test]
    fn root_itself_is_never_a_candidate() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("SKILL.md"), "# root\n").unwrap();
        make_skill(tmp.path(), "child");

        let found = scan(tmp.path());
        assert_eq!(found, vec!["child"]);
    }

    #[test]
    fn plain_files_named_like_skills_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs/README.md"), "not a skill\n").unwrap();

        let found = scan(tmp.path());
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_directory_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        make_skill(tmp.path(), "good");
        let weird = tmp.path().join(OsStr::from_bytes(b"bad-\xff-name"));
        fs::create_dir_all(&weird).unwrap();
        fs::write(weird.join("SKILL.md"), "# weird\n").unwrap();

        let found = scan(tmp.path());
        assert_eq!(found, vec!["good"]);
    }

    #[test]
    fn custom_exclusions_are_honored() {
        let tmp = TempDir::new().unwrap();
        make_skill(tmp.path(), "keep/a");
        make_skill(tmp.path(), "drop/b");

        let found = scan_with(tmp.path(), &["drop"]);
        assert_eq!(found, vec!["keep/a"]);

        // The default set does not prune these names.
        let found = scan(tmp.path());
        assert_eq!(found, vec!["drop/b", "keep/a"]);
    }
}
