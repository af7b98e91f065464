use crate::error::Result;
use crate::remote::{CodeHost, DirectoryListing, EntryKind};

enum Pending {
    File(String),
    Dir(String),
}

/// Lists every file under `start`, depth-first in host order: a directory's
/// contents appear where the directory itself was listed.
///
/// Any listing error aborts the whole walk.
pub fn walk_tree(
    host: &dyn CodeHost,
    account: &str,
    repo: &str,
    start: &str,
) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let mut stack = vec![Pending::Dir(start.to_string())];

    while let Some(next) = stack.pop() {
        let path = match next {
            Pending::File(path) => {
                files.push(path);
                continue;
            }
            Pending::Dir(path) => path,
        };

        tracing::debug!(repo, path = %path, "listing directory");
        match host.list_directory(account, repo, &path)? {
            DirectoryListing::File(entry) => files.push(entry.path),
            DirectoryListing::Entries(entries) => {
                for entry in entries.into_iter().rev() {
                    match entry.kind {
                        EntryKind::File => stack.push(Pending::File(entry.path)),
                        EntryKind::Dir => stack.push(Pending::Dir(entry.path)),
                        EntryKind::Other => {}
                    }
                }
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepthError;
    use crate::remote::fixture::FixtureHost;
    use crate::remote::DirectoryEntry;

    fn nested_host() -> FixtureHost {
        FixtureHost::default()
            .dir(
                "app",
                "",
                vec![
                    DirectoryEntry::file("README.md"),
                    DirectoryEntry::dir("src"),
                    DirectoryEntry::file("setup.py"),
                    DirectoryEntry::dir("tests"),
                ],
            )
            .dir(
                "app",
                "src",
                vec![
                    DirectoryEntry::dir("src/pkg"),
                    DirectoryEntry::file("src/main.py"),
                ],
            )
            .dir("app", "src/pkg", vec![DirectoryEntry::file("src/pkg/core.py")])
            .dir("app", "tests", vec![DirectoryEntry::file("tests/test_core.py")])
    }

    #[test]
    fn walk_preserves_depth_first_listing_order() {
        let files = walk_tree(&nested_host(), "octo", "app", "").expect("walk should succeed");
        assert_eq!(
            files,
            vec![
                "README.md",
                "src/pkg/core.py",
                "src/main.py",
                "setup.py",
                "tests/test_core.py",
            ]
        );
    }

    #[test]
    fn walk_from_subdirectory_only_covers_that_subtree() {
        let files = walk_tree(&nested_host(), "octo", "app", "src").expect("walk should succeed");
        assert_eq!(files, vec!["src/pkg/core.py", "src/main.py"]);
    }

    #[test]
    fn single_file_listing_short_circuits() {
        let host = FixtureHost::default().file("app", "setup.py", "print(1)");
        let files = walk_tree(&host, "octo", "app", "setup.py").expect("walk should succeed");
        assert_eq!(files, vec!["setup.py"]);
    }

    #[test]
    fn non_file_entries_are_ignored() {
        let host = FixtureHost::default().dir(
            "app",
            "",
            vec![
                DirectoryEntry::file("a.py"),
                DirectoryEntry {
                    kind: EntryKind::Other,
                    path: "vendor-submodule".to_string(),
                },
            ],
        );
        let files = walk_tree(&host, "octo", "app", "").expect("walk should succeed");
        assert_eq!(files, vec!["a.py"]);
    }

    #[test]
    fn failure_in_nested_directory_aborts_walk() {
        let host = nested_host().fail("app", "src/pkg");
        let err = walk_tree(&host, "octo", "app", "").expect_err("walk should abort");
        assert!(matches!(err, DepthError::RemoteUnavailable(_)));
    }
}
