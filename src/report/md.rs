use crate::types::metrics::LINES;
use crate::types::report::{AccountReport, RepositoryRecord};

pub fn to_markdown(report: &AccountReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Depth Report: {}\n\n", report.account));
    output.push_str(&format!(
        "Overall depth score: {}\n\n",
        report.overall_depth_score
    ));
    output.push_str(&format!("Maturity: {}\n\n", report.maturity.label()));
    if let Some(flagship) = &report.flagship {
        output.push_str(&format!("Flagship: {flagship}\n\n"));
    }

    output.push_str("## Repositories\n\n");
    if report.repositories.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str(
            "| Repository | Language | Code files | Lines | README | Tests | Depth |\n",
        );
        output.push_str("|---|---|---|---|---|---|---|\n");
        for record in &report.repositories {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                record.name,
                record.dominant_language,
                record.code_files_count,
                record.metrics.get(LINES),
                record.readme_quality,
                record.test_files_count,
                record.depth_score
            ));
        }
        output.push('\n');
    }

    if !report.skipped_repositories.is_empty() {
        output.push_str("## Skipped\n\n");
        for name in &report.skipped_repositories {
            output.push_str(&format!("- {name}\n"));
        }
    }

    output
}

pub fn repository_markdown(record: &RepositoryRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Repository: {}\n\n", record.name));
    if let Some(url) = &record.source_url {
        output.push_str(&format!("Source: {url}\n\n"));
    }
    output.push_str(&format!("Depth score: {}\n\n", record.depth_score));
    output.push_str(&format!("- dominant language: {}\n", record.dominant_language));
    output.push_str(&format!("- files: {}\n", record.files.len()));
    output.push_str(&format!("- code files: {}\n", record.code_files_count));
    output.push_str(&format!("- README quality: {}\n", record.readme_quality));
    output.push_str(&format!("- test files: {}\n\n", record.test_files_count));

    output.push_str("## Languages\n\n");
    if record.language_breakdown.is_empty() {
        output.push_str("- none\n");
    } else {
        for (language, count) in record.language_breakdown.iter() {
            output.push_str(&format!("- {language}: {count}\n"));
        }
    }

    output.push_str("\n## Metrics\n\n");
    for key in record.metrics.keys() {
        output.push_str(&format!("- {key}: {}\n", record.metrics.get(key)));
    }

    output
}
