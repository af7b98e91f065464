use crate::types::language::{Language, LanguageHistogram};

const DEFAULT_EXTENSIONS: [(&str, Language); 15] = [
    (".py", Language::Python),
    (".js", Language::JavaScript),
    (".ts", Language::TypeScript),
    (".jsx", Language::JavaScript),
    (".tsx", Language::TypeScript),
    (".dart", Language::Dart),
    (".html", Language::Html),
    (".css", Language::Css),
    (".scss", Language::Css),
    (".json", Language::Json),
    (".yml", Language::Yaml),
    (".yaml", Language::Yaml),
    (".md", Language::Markdown),
    (".sh", Language::Shell),
    (".sql", Language::Sql),
];

const DEFAULT_NON_CODE: [&str; 4] = [".md", ".json", ".yml", ".yaml"];

/// Ordered extension table. The first suffix that matches a path decides its
/// language, so order matters for multi-dot names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    extensions: Vec<(String, Language)>,
    non_code: Vec<String>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXTENSIONS
                .iter()
                .map(|(ext, lang)| (ext.to_string(), *lang))
                .collect(),
            DEFAULT_NON_CODE.iter().map(|ext| ext.to_string()).collect(),
        )
    }
}

impl LanguageTable {
    pub fn new(extensions: Vec<(String, Language)>, non_code: Vec<String>) -> Self {
        let lower = |ext: String| ext.to_ascii_lowercase();
        Self {
            extensions: extensions
                .into_iter()
                .map(|(ext, lang)| (lower(ext), lang))
                .collect(),
            non_code: non_code.into_iter().map(lower).collect(),
        }
    }

    pub fn classify(&self, path: &str) -> Option<Language> {
        let lower = path.to_lowercase();
        self.extensions
            .iter()
            .find(|(ext, _)| lower.ends_with(ext.as_str()))
            .map(|(_, lang)| *lang)
    }

    /// Files with no matching extension are left out of the histogram.
    pub fn histogram<'a>(&self, files: impl IntoIterator<Item = &'a str>) -> LanguageHistogram {
        let mut histogram = LanguageHistogram::default();
        for language in files.into_iter().filter_map(|path| self.classify(path)) {
            histogram.record(language);
        }
        histogram
    }

    /// True for any table extension outside the non-code set.
    pub fn is_generic_code(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        self.extensions
            .iter()
            .filter(|(ext, _)| !self.non_code.contains(ext))
            .any(|(ext, _)| lower.ends_with(ext.as_str()))
    }

    /// Files analyzed for a repository whose dominant language is `dominant`.
    pub fn code_files(&self, files: &[String], dominant: Language) -> Vec<String> {
        files
            .iter()
            .filter(|path| match dominant.source_extensions() {
                Some(exts) => {
                    let lower = path.to_lowercase();
                    exts.iter().any(|ext| lower.ends_with(ext))
                }
                None => self.is_generic_code(path),
            })
            .cloned()
            .collect()
    }
}

pub fn is_test_file(path: &str) -> bool {
    path.to_lowercase().contains("test")
}
