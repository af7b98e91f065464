pub mod content;
pub mod languages;
pub mod lister;
pub mod tree;

use crate::error::Result;
use crate::remote::{CodeHost, RemoteRepository};
use crate::types::config::LimitsConfig;
use crate::types::language::{Language, LanguageHistogram};
use content::SourceFile;
use languages::{is_test_file, LanguageTable};

/// Everything fetched from the host for one repository.
#[derive(Debug, Clone)]
pub struct RepoModel {
    pub name: String,
    pub url: Option<String>,
    pub files: Vec<String>,
    pub languages: LanguageHistogram,
    pub dominant: Language,
    pub code_files: Vec<String>,
    pub test_files: usize,
    pub sources: Vec<SourceFile>,
    pub readme: String,
}

/// Walks, classifies and fetches one repository. `Ok(None)` when the tree is
/// empty; `Err` when the tree walk failed.
pub fn discover(
    host: &dyn CodeHost,
    account: &str,
    repo: &RemoteRepository,
    table: &LanguageTable,
    limits: &LimitsConfig,
) -> Result<Option<RepoModel>> {
    let files = tree::walk_tree(host, account, &repo.name, "")?;
    if files.is_empty() {
        return Ok(None);
    }

    let languages = table.histogram(files.iter().map(String::as_str));
    let dominant = languages.dominant();
    let test_files = files.iter().filter(|path| is_test_file(path)).count();
    let readme = content::fetch_readme(host, account, &repo.name);
    let code_files = table.code_files(&files, dominant);
    let sources = content::fetch_sources(
        host,
        account,
        &repo.name,
        &code_files,
        limits.max_files_per_repository,
    );

    tracing::debug!(
        repo = %repo.name,
        files = files.len(),
        classified = languages.total(),
        dominant = %dominant,
        code_files = code_files.len(),
        fetched = sources.len(),
        "repository discovered"
    );

    Ok(Some(RepoModel {
        name: repo.name.clone(),
        url: repo.url.clone(),
        files,
        languages,
        dominant,
        code_files,
        test_files,
        sources,
        readme,
    }))
}
