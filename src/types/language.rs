use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Dart,
    Html,
    Css,
    Json,
    Yaml,
    Markdown,
    Shell,
    Sql,
    Unknown,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Dart => "Dart",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Markdown => "Markdown",
            Language::Shell => "Shell",
            Language::Sql => "SQL",
            Language::Unknown => "Unknown",
        }
    }

    /// Extensions that make up the source set of a dominant language.
    /// `None` means the generic code set applies.
    pub fn source_extensions(self) -> Option<&'static [&'static str]> {
        match self {
            Language::Python => Some(&[".py"]),
            Language::TypeScript => Some(&[".ts", ".tsx"]),
            Language::JavaScript => Some(&[".js", ".jsx"]),
            Language::Dart => Some(&[".dart"]),
            Language::Html => Some(&[".html"]),
            Language::Css => Some(&[".css", ".scss"]),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// File counts per language, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageHistogram {
    entries: Vec<(Language, usize)>,
}

impl LanguageHistogram {
    pub fn record(&mut self, language: Language) {
        match self.entries.iter_mut().find(|(lang, _)| *lang == language) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((language, 1)),
        }
    }

    #[cfg(test)]
    pub fn count(&self, language: Language) -> usize {
        self.entries
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Highest count wins; on a tie the language inserted first wins.
    pub fn dominant(&self) -> Language {
        let mut best: Option<(Language, usize)> = None;
        for (language, count) in self.iter() {
            if best.map(|(_, top)| count > top).unwrap_or(true) {
                best = Some((language, count));
            }
        }
        best.map(|(language, _)| language)
            .unwrap_or(Language::Unknown)
    }
}

impl Serialize for LanguageHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, count) in &self.entries {
            map.serialize_entry(language.name(), count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_has_unknown_dominant_language() {
        assert_eq!(LanguageHistogram::default().dominant(), Language::Unknown);
    }

    #[test]
    fn dominant_tie_resolves_to_first_inserted_language() {
        let mut histogram = LanguageHistogram::default();
        histogram.record(Language::Css);
        histogram.record(Language::Python);
        histogram.record(Language::Python);
        histogram.record(Language::Css);
        assert_eq!(histogram.dominant(), Language::Css);

        histogram.record(Language::Python);
        assert_eq!(histogram.dominant(), Language::Python);
        assert_eq!(histogram.total(), 5);
    }

    #[test]
    fn histogram_serializes_in_insertion_order() {
        let mut histogram = LanguageHistogram::default();
        histogram.record(Language::TypeScript);
        histogram.record(Language::Html);
        histogram.record(Language::TypeScript);

        let rendered = serde_json::to_string(&histogram).expect("histogram should serialize");
        assert_eq!(rendered, r#"{"TypeScript":2,"HTML":1}"#);
    }
}
