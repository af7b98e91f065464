pub mod aggregate;
pub mod extract;
pub mod readme;
pub mod scoring;

use crate::error::Result;
use crate::remote::{CodeHost, RemoteRepository};
use crate::scan::languages::LanguageTable;
use crate::scan::{self, RepoModel};
use crate::types::config::LimitsConfig;
use crate::types::report::{AccountDepthResult, RepositoryRecord};
use extract::{ExtractorSet, PatternSet};
use readme::{ReadmeAnalyzer, DEFAULT_SETUP_PATTERN};

/// Heuristic tables the engine is built from: the extension table, every
/// extractor's patterns and the README setup keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristics {
    pub languages: LanguageTable,
    pub patterns: PatternSet,
    pub readme_setup: String,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            languages: LanguageTable::default(),
            patterns: PatternSet::default(),
            readme_setup: DEFAULT_SETUP_PATTERN.to_string(),
        }
    }
}

/// Repository depth engine: heuristic tables and extractors are built once
/// and shared across every repository of a run.
pub struct Analyzer<'a> {
    host: &'a dyn CodeHost,
    table: LanguageTable,
    extractors: ExtractorSet,
    readme: ReadmeAnalyzer,
    limits: LimitsConfig,
}

impl<'a> Analyzer<'a> {
    pub fn new(
        host: &'a dyn CodeHost,
        limits: LimitsConfig,
        heuristics: Heuristics,
    ) -> Result<Self> {
        Ok(Self {
            host,
            extractors: ExtractorSet::new(&heuristics.patterns)?,
            readme: ReadmeAnalyzer::new(&heuristics.readme_setup)?,
            table: heuristics.languages,
            limits,
        })
    }

    /// Only the repository listing can fail; per-repository failures are
    /// logged and the repository is skipped.
    pub fn analyze_account(&self, account: &str) -> Result<AccountDepthResult> {
        let repositories =
            scan::lister::list_repositories(self.host, account, self.limits.max_repositories)?;

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for repo in &repositories {
            match self.analyze_repository(account, repo) {
                Ok(Some(record)) => {
                    tracing::info!(
                        repo = %record.name,
                        language = %record.dominant_language,
                        depth_score = record.depth_score,
                        "repository scored"
                    );
                    records.push(record);
                }
                Ok(None) => {
                    tracing::warn!(repo = %repo.name, "skipping repository with no files");
                    skipped.push(repo.name.clone());
                }
                Err(e) => {
                    tracing::warn!(repo = %repo.name, error = %e, "skipping repository");
                    skipped.push(repo.name.clone());
                }
            }
        }

        let result = aggregate::aggregate(records, skipped);
        tracing::info!(
            account,
            repositories = result.repositories.len(),
            skipped = result.skipped_repositories.len(),
            overall = result.overall_depth_score,
            "account analyzed"
        );
        Ok(result)
    }

    pub fn analyze_repository(
        &self,
        account: &str,
        repo: &RemoteRepository,
    ) -> Result<Option<RepositoryRecord>> {
        let model = scan::discover(self.host, account, repo, &self.table, &self.limits)?;
        Ok(model.map(|model| self.score(model)))
    }

    fn score(&self, model: RepoModel) -> RepositoryRecord {
        let extractor = self.extractors.for_language(model.dominant);
        let metrics = extract::extract_all(extractor, &model.sources);
        let readme_quality = self.readme.quality(&model.readme);
        let depth_score =
            scoring::depth_score(model.dominant, &metrics, readme_quality, model.test_files);

        RepositoryRecord {
            name: model.name,
            dominant_language: model.dominant,
            language_breakdown: model.languages,
            code_files_count: model.code_files.len(),
            files: model.files,
            metrics,
            readme_quality,
            test_files_count: model.test_files,
            depth_score,
            source_url: model.url,
        }
    }
}
