use super::language::{Language, LanguageHistogram};
use super::metrics::MetricVector;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub dominant_language: Language,
    pub language_breakdown: LanguageHistogram,
    pub files: Vec<String>,
    pub code_files_count: usize,
    pub metrics: MetricVector,
    pub readme_quality: u8,
    pub test_files_count: usize,
    pub depth_score: u8,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountDepthResult {
    pub repositories: Vec<RepositoryRecord>,
    pub overall_depth_score: u8,
    pub skipped_repositories: Vec<String>,
}

impl AccountDepthResult {
    /// Highest-scoring repository; the earliest listed wins a tie.
    pub fn flagship(&self) -> Option<&RepositoryRecord> {
        let mut best: Option<&RepositoryRecord> = None;
        for record in &self.repositories {
            if best
                .map(|top| record.depth_score > top.depth_score)
                .unwrap_or(true)
            {
                best = Some(record);
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DevMaturity {
    SeniorLeaning,
    MidLevel,
    EarlyStage,
    EntryLevel,
}

impl DevMaturity {
    pub fn from_depth(depth_score: u8) -> Self {
        match depth_score {
            85..=u8::MAX => DevMaturity::SeniorLeaning,
            65..=84 => DevMaturity::MidLevel,
            45..=64 => DevMaturity::EarlyStage,
            _ => DevMaturity::EntryLevel,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DevMaturity::SeniorLeaning => "Senior-leaning: strong project depth and consistency",
            DevMaturity::MidLevel => "Mid-level: solid projects with growing depth",
            DevMaturity::EarlyStage => "Early-stage but promising: real projects, still maturing",
            DevMaturity::EntryLevel => "Entry-level / learning phase",
        }
    }
}

/// Rendered view of one account analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AccountReport {
    pub account: String,
    pub overall_depth_score: u8,
    pub maturity: DevMaturity,
    pub flagship: Option<String>,
    pub repositories: Vec<RepositoryRecord>,
    pub skipped_repositories: Vec<String>,
}

impl AccountReport {
    pub fn new(account: &str, result: AccountDepthResult) -> Self {
        let flagship = result.flagship().map(|record| record.name.clone());
        Self {
            account: account.to_string(),
            overall_depth_score: result.overall_depth_score,
            maturity: DevMaturity::from_depth(result.overall_depth_score),
            flagship,
            repositories: result.repositories,
            skipped_repositories: result.skipped_repositories,
        }
    }
}
