//! Installed documentation discovery and loading.
//!
//! Documentation lives under the library directory as one JSON file per
//! version: `<library_dir>/<library>/<version>.json`.

use crate::doc::DocTree;
use crate::error::LoadError;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Read-only access to the installed documentation files.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    root: PathBuf,
}

impl LibraryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the documentation file for a library version.
    pub fn doc_path(&self, library: &str, version: &str) -> PathBuf {
        self.root.join(library).join(format!("{}.json", version))
    }

    /// Every installed library with its versions, oldest first.
    ///
    /// A missing library directory means nothing is installed. Libraries whose
    /// directory holds no documentation files are listed with no versions.
    pub fn libraries(&self) -> Result<BTreeMap<String, Vec<String>>, LoadError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut libraries = BTreeMap::new();
        for entry in entries.flatten() {
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            match self.versions(&name) {
                Ok(versions) => {
                    libraries.insert(name, versions);
                }
                Err(e) => tracing::warn!("Skipping library '{}': {}", name, e),
            }
        }

        Ok(libraries)
    }

    /// Installed versions of `library`, oldest first.
    pub fn versions(&self, library: &str) -> Result<Vec<String>, LoadError> {
        let dir = self.root.join(library);
        let entries = std::fs::read_dir(&dir).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::LibraryNotFound {
                    library: library.to_string(),
                }
            } else {
                LoadError::Io { path: dir.clone(), source }
            }
        })?;

        let mut versions: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".json"))
                    .map(String::from)
            })
            .collect();

        versions.sort_by(|a, b| compare_versions(a, b));
        Ok(versions)
    }

    /// The most recent installed version of `library`.
    pub fn latest(&self, library: &str) -> Result<String, LoadError> {
        self.versions(library)?
            .pop()
            .ok_or_else(|| LoadError::NoVersions {
                library: library.to_string(),
            })
    }

    /// Load the documentation tree of `library`, at `version` or the latest.
    pub fn load(&self, library: &str, version: Option<&str>) -> Result<DocTree, LoadError> {
        let version = match version {
            Some(version) if !is_plain_version(version) => {
                return Err(LoadError::VersionNotFound {
                    library: library.to_string(),
                    version: version.to_string(),
                });
            }
            Some(version) => version.to_string(),
            None => self.latest(library)?,
        };

        let path = self.doc_path(library, &version);
        let file = File::open(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::VersionNotFound {
                    library: library.to_string(),
                    version: version.clone(),
                }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let tree = DocTree::from_reader(BufReader::new(file))
            .map_err(|source| LoadError::Parse { path: path.clone(), source })?;

        tracing::info!(
            "Loaded {} {} from {} ({} nodes)",
            library,
            version,
            path.display(),
            tree.node_count()
        );

        Ok(tree)
    }
}

/// Whether `version` names a file directly inside a library directory.
fn is_plain_version(version: &str) -> bool {
    !version.is_empty() && !version.contains(['/', '\\']) && !version.contains("..")
}

/// Order version strings by their dot-separated components.
///
/// Components that are both numeric compare as numbers, anything else
/// compares as text; a version that is a prefix of another sorts first.
/// `1.10.0` is therefore newer than `1.9.3`, and `master` sorts after all
/// numbered releases.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{"program": {"name": "Top Level Namespace", "full_name": "Top Level Namespace", "kind": "module"}}"#;

    fn store_with(files: &[(&str, &str, &str)]) -> (TempDir, LibraryStore) {
        let dir = TempDir::new().unwrap();
        for (library, version, contents) in files {
            let lib_dir = dir.path().join(library);
            std::fs::create_dir_all(&lib_dir).unwrap();
            std::fs::write(lib_dir.join(format!("{version}.json")), contents).unwrap();
        }
        let store = LibraryStore::new(dir.path());
        (dir, store)
    }

    #[rstest]
    #[case("1.9.3", "1.10.0", Ordering::Less)]
    #[case("1.10.0", "1.9.3", Ordering::Greater)]
    #[case("1.0", "1.0.0", Ordering::Less)]
    #[case("1.2.0", "1.2.0", Ordering::Equal)]
    #[case("1.2.0", "master", Ordering::Less)]
    #[case("nightly", "master", Ordering::Greater)]
    fn test_compare_versions(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        check!(compare_versions(a, b) == expected);
    }

    #[test]
    fn test_versions_sorted_numerically() {
        let (_dir, store) = store_with(&[
            ("crystal", "1.10.1", MINIMAL),
            ("crystal", "1.9.2", MINIMAL),
            ("crystal", "1.2.0", MINIMAL),
        ]);

        check!(store.versions("crystal").unwrap() == vec!["1.2.0", "1.9.2", "1.10.1"]);
        check!(store.latest("crystal").unwrap() == "1.10.1");
    }

    #[test]
    fn test_non_json_files_ignored() {
        let (dir, store) = store_with(&[("kemal", "1.4.0", MINIMAL)]);
        std::fs::write(dir.path().join("kemal").join("notes.txt"), "").unwrap();

        check!(store.versions("kemal").unwrap() == vec!["1.4.0"]);
    }

    #[test]
    fn test_unknown_library() {
        let (_dir, store) = store_with(&[]);
        let_assert!(Err(LoadError::LibraryNotFound { library }) = store.versions("lucky"));
        check!(library == "lucky");
        check!(store.load("lucky", None).unwrap_err().to_string() == "documentation for lucky is not available");
    }

    #[test]
    fn test_library_without_versions() {
        let (dir, store) = store_with(&[]);
        std::fs::create_dir_all(dir.path().join("empty")).unwrap();

        let_assert!(Err(LoadError::NoVersions { .. }) = store.latest("empty"));
        check!(store.libraries().unwrap().get("empty") == Some(&Vec::new()));
    }

    #[test]
    fn test_libraries_listing() {
        let (_dir, store) = store_with(&[
            ("kemal", "1.4.0", MINIMAL),
            ("crystal", "1.9.2", MINIMAL),
            ("crystal", "1.10.1", MINIMAL),
        ]);

        let libraries = store.libraries().unwrap();
        check!(libraries.keys().collect::<Vec<_>>() == vec!["crystal", "kemal"]);
        check!(libraries["crystal"] == vec!["1.9.2", "1.10.1"]);
    }

    #[test]
    fn test_missing_root_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let store = LibraryStore::new(dir.path().join("missing"));
        check!(store.libraries().unwrap().is_empty());
    }

    #[test]
    fn test_load_latest_and_specific_version() {
        let (_dir, store) = store_with(&[("crystal", "1.9.2", MINIMAL), ("crystal", "1.10.1", MINIMAL)]);

        let tree = store.load("crystal", None).unwrap();
        check!(tree.root().name == "Top Level Namespace");

        check!(store.load("crystal", Some("1.9.2")).is_ok());
        let_assert!(Err(LoadError::VersionNotFound { version, .. }) = store.load("crystal", Some("0.36.1")));
        check!(version == "0.36.1");
    }

    #[rstest]
    #[case("../kemal/1.4.0")]
    #[case("..")]
    #[case("1.9.2/../../kemal/1.4.0")]
    #[case("..\\kemal\\1.4.0")]
    #[case("")]
    fn test_load_rejects_version_outside_library(#[case] version: &str) {
        let (_dir, store) = store_with(&[("crystal", "1.9.2", MINIMAL), ("kemal", "1.4.0", MINIMAL)]);

        let_assert!(Err(LoadError::VersionNotFound { library, version: reported }) = store.load("crystal", Some(version)));
        check!(library == "crystal");
        check!(reported == version);
    }

    #[test]
    fn test_load_invalid_json() {
        let (_dir, store) = store_with(&[("broken", "1.0.0", "{\"program\": ")]);

        let_assert!(Err(LoadError::Parse { path, .. }) = store.load("broken", None));
        check!(path.ends_with("broken/1.0.0.json"));
    }
}
