use crate::types::report::{AccountDepthResult, RepositoryRecord};

pub const TOP_REPOSITORIES: usize = 3;

/// Mean of the top three depth scores, truncated. Ties keep listing order.
pub fn overall_depth_score(repositories: &[RepositoryRecord]) -> u8 {
    let mut ranked: Vec<&RepositoryRecord> = repositories.iter().collect();
    ranked.sort_by(|a, b| b.depth_score.cmp(&a.depth_score));
    let top = &ranked[..ranked.len().min(TOP_REPOSITORIES)];
    if top.is_empty() {
        return 0;
    }
    let total: u32 = top.iter().map(|record| u32::from(record.depth_score)).sum();
    (total / top.len() as u32) as u8
}

pub fn aggregate(repositories: Vec<RepositoryRecord>, skipped: Vec<String>) -> AccountDepthResult {
    AccountDepthResult {
        overall_depth_score: overall_depth_score(&repositories),
        repositories,
        skipped_repositories: skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::language::{Language, LanguageHistogram};
    use crate::types::metrics::MetricVector;

    fn record(name: &str, depth_score: u8) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            dominant_language: Language::Python,
            language_breakdown: LanguageHistogram::default(),
            files: vec![format!("{name}.py")],
            code_files_count: 1,
            metrics: MetricVector::default(),
            readme_quality: 0,
            test_files_count: 0,
            depth_score,
            source_url: None,
        }
    }

    #[test]
    fn empty_account_scores_zero() {
        let result = aggregate(vec![], vec![]);
        assert!(result.repositories.is_empty());
        assert_eq!(result.overall_depth_score, 0);
    }

    #[test]
    fn averages_top_three_and_truncates() {
        let repos = vec![
            record("a", 20),
            record("b", 90),
            record("c", 55),
            record("d", 71),
            record("e", 30),
        ];
        // (90 + 71 + 55) / 3 = 72
        let result = aggregate(repos, vec![]);
        assert_eq!(result.overall_depth_score, 72);
        assert_eq!(result.repositories.len(), 5);
        assert_eq!(result.repositories[0].name, "a");
    }

    #[test]
    fn fewer_than_three_repositories_use_all() {
        assert_eq!(overall_depth_score(&[record("a", 41), record("b", 40)]), 40);
        assert_eq!(overall_depth_score(&[record("a", 63)]), 63);
    }

    #[test]
    fn skipped_repositories_are_carried_through() {
        let result = aggregate(vec![record("a", 50)], vec!["b".to_string()]);
        assert_eq!(result.skipped_repositories, vec!["b"]);
        assert_eq!(result.overall_depth_score, 50);
    }
}
