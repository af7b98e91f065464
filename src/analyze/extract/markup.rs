use super::{count, line_count, MetricExtractor};
use crate::error::Result;
use crate::types::metrics::{MetricVector, LINES, SELECTORS, TAGS};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupPatterns {
    pub tags: String,
}

impl Default for MarkupPatterns {
    fn default() -> Self {
        Self {
            tags: r"<[a-zA-Z][^>]*>".to_string(),
        }
    }
}

pub struct MarkupExtractor {
    tags: Regex,
}

impl MarkupExtractor {
    pub fn new(patterns: &MarkupPatterns) -> Result<Self> {
        Ok(Self {
            tags: Regex::new(&patterns.tags)?,
        })
    }
}

impl MetricExtractor for MarkupExtractor {
    fn extract(&self, source: &str) -> MetricVector {
        MetricVector::default()
            .with(LINES, line_count(source))
            .with(TAGS, count(&self.tags, source))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetPatterns {
    pub selectors: String,
}

impl Default for StylesheetPatterns {
    fn default() -> Self {
        Self {
            selectors: r"[.#]?[a-zA-Z][\w\-]*\s*\{".to_string(),
        }
    }
}

pub struct StylesheetExtractor {
    selectors: Regex,
}

impl StylesheetExtractor {
    pub fn new(patterns: &StylesheetPatterns) -> Result<Self> {
        Ok(Self {
            selectors: Regex::new(&patterns.selectors)?,
        })
    }
}

impl MetricExtractor for StylesheetExtractor {
    fn extract(&self, source: &str) -> MetricVector {
        MetricVector::default()
            .with(LINES, line_count(source))
            .with(SELECTORS, count(&self.selectors, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_counts_opening_tags_only() {
        let metrics = MarkupExtractor::new(&MarkupPatterns::default())
            .expect("pattern should compile")
            .extract(concat!(
                "<!doctype html>\n",
                "<html lang=\"en\">\n",
                "<body><h1>Hi</h1><br/></body>\n",
                "</html>\n"
            ));
        assert_eq!(metrics.lines(), 4);
        assert_eq!(metrics.get(TAGS), 4);
        assert!(!metrics.contains(SELECTORS));
    }

    #[test]
    fn stylesheet_counts_selectors() {
        let metrics = StylesheetExtractor::new(&StylesheetPatterns::default())
            .expect("pattern should compile")
            .extract(".nav-bar {\n  color: red;\n}\n#main{\n}\nbody {\n}\n");
        assert_eq!(metrics.lines(), 7);
        assert_eq!(metrics.get(SELECTORS), 3);
        assert!(!metrics.contains(TAGS));
    }
}
