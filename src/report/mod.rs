pub mod json;
pub mod md;

use crate::error::{DepthError, Result};
use crate::types::report::{AccountReport, RepositoryRecord};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &AccountReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(DepthError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_repository(record: &RepositoryRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(record).map_err(DepthError::Json),
        OutputFormat::Md => Ok(md::repository_markdown(record)),
    }
}
