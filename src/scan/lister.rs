use crate::error::Result;
use crate::remote::{CodeHost, RemoteRepository};

/// Non-fork, non-empty repositories, most recently pushed first, at most `max`.
pub fn list_repositories(
    host: &dyn CodeHost,
    account: &str,
    max: usize,
) -> Result<Vec<RemoteRepository>> {
    let mut repositories: Vec<RemoteRepository> = host
        .list_repositories(account)?
        .into_iter()
        .filter(|repo| !repo.fork && repo.size > 0)
        .collect();
    // Stable: equal timestamps keep host order; missing timestamps sort last.
    repositories.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    repositories.truncate(max);
    tracing::info!(account, count = repositories.len(), "repositories selected");
    Ok(repositories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepthError;
    use crate::remote::fixture::FixtureHost;

    #[test]
    fn drops_forks_and_empty_repositories_and_orders_by_push() {
        let mut host = FixtureHost::default()
            .repo("old", 10, "2021-01-01T00:00:00Z")
            .repo("empty", 0, "2024-06-01T00:00:00Z")
            .repo("new", 5, "2024-01-01T00:00:00Z")
            .repo("forked", 7, "2024-03-01T00:00:00Z");
        host.repositories[3].fork = true;
        host.repositories.push(RemoteRepository {
            name: "never-pushed".to_string(),
            fork: false,
            size: 4,
            pushed_at: None,
            url: None,
        });

        let repos = list_repositories(&host, "octo", 8).expect("listing should succeed");
        assert_eq!(
            repos.iter().map(|repo| repo.name.as_str()).collect::<Vec<_>>(),
            vec!["new", "old", "never-pushed"]
        );
    }

    #[test]
    fn truncates_to_requested_count() {
        let host = FixtureHost::default()
            .repo("a", 1, "2024-01-03T00:00:00Z")
            .repo("b", 1, "2024-01-02T00:00:00Z")
            .repo("c", 1, "2024-01-01T00:00:00Z");

        let repos = list_repositories(&host, "octo", 2).expect("listing should succeed");
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[1].name, "b");
    }

    #[test]
    fn listing_failure_propagates() {
        let host = FixtureHost {
            listing_fails: true,
            ..FixtureHost::default()
        };
        let err = list_repositories(&host, "octo", 8).expect_err("listing should fail");
        assert!(matches!(err, DepthError::RemoteUnavailable(_)));
    }
}
