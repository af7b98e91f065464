use crate::remote::CodeHost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

/// Fetches the first `limit` paths. A failed fetch drops that file; an
/// undecodable payload yields empty text.
pub fn fetch_sources(
    host: &dyn CodeHost,
    account: &str,
    repo: &str,
    paths: &[String],
    limit: usize,
) -> Vec<SourceFile> {
    paths
        .iter()
        .take(limit)
        .filter_map(|path| match host.file_content(account, repo, path) {
            Ok(content) => {
                let text = content.decode().unwrap_or_else(|e| {
                    tracing::warn!(repo, path = %path, error = %e, "treating file as empty");
                    String::new()
                });
                Some(SourceFile {
                    path: path.clone(),
                    text,
                })
            }
            Err(e) => {
                tracing::warn!(repo, path = %path, error = %e, "skipping file");
                None
            }
        })
        .collect()
}

/// README text, or empty when it is missing or unreadable.
pub fn fetch_readme(host: &dyn CodeHost, account: &str, repo: &str) -> String {
    match host.readme(account, repo) {
        Ok(Some(content)) => content.decode().unwrap_or_else(|e| {
            tracing::warn!(repo, error = %e, "README not decodable");
            String::new()
        }),
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!(repo, error = %e, "README fetch failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fixture::FixtureHost;
    use crate::remote::EncodedContent;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn fetch_respects_limit_in_list_order() {
        let host = FixtureHost::default()
            .file("app", "a.py", "a = 1")
            .file("app", "b.py", "b = 2")
            .file("app", "c.py", "c = 3");

        let sources = fetch_sources(&host, "octo", "app", &paths(&["a.py", "b.py", "c.py"]), 2);
        assert_eq!(
            sources.iter().map(|file| file.path.as_str()).collect::<Vec<_>>(),
            vec!["a.py", "b.py"]
        );
        assert_eq!(sources[1].text, "b = 2");
    }

    #[test]
    fn failed_fetch_is_swallowed() {
        let host = FixtureHost::default()
            .file("app", "a.py", "a = 1")
            .file("app", "b.py", "b = 2")
            .fail("app", "a.py");

        let wanted = paths(&["a.py", "b.py", "gone.py"]);
        let sources = fetch_sources(&host, "octo", "app", &wanted, 120);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path, "b.py");
    }

    #[test]
    fn undecodable_content_becomes_empty_text() {
        let mut host = FixtureHost::default();
        host.files.insert(
            "app/big.py".to_string(),
            EncodedContent {
                encoding: Some("none".to_string()),
                content: String::new(),
            },
        );

        let sources = fetch_sources(&host, "octo", "app", &paths(&["big.py"]), 120);
        assert_eq!(sources.len(), 1);
        assert!(sources[0].text.is_empty());
    }

    #[test]
    fn missing_readme_is_empty_text() {
        let host = FixtureHost::default().readme("other", "# Other");
        assert_eq!(fetch_readme(&host, "octo", "app"), "");
        assert_eq!(fetch_readme(&host, "octo", "other"), "# Other");
    }

    #[test]
    fn readme_fetch_error_is_empty_text() {
        let host = FixtureHost::default()
            .readme("app", "# App")
            .fail_readme("app");
        assert_eq!(fetch_readme(&host, "octo", "app"), "");
    }

    #[test]
    fn undecodable_readme_is_empty_text() {
        let host = FixtureHost::default().readme_encoded("app", "none", "# App");
        assert_eq!(fetch_readme(&host, "octo", "app"), "");
    }
}
