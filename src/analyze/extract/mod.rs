pub mod dart;
pub mod markup;
pub mod python;
pub mod script;

use crate::error::Result;
use crate::scan::content::SourceFile;
use crate::types::language::Language;
use crate::types::metrics::{self, MetricVector};
use regex::Regex;

/// Turns one file's text into a fixed-key metric vector.
pub trait MetricExtractor {
    fn extract(&self, source: &str) -> MetricVector;
}

/// Counts lines only; used when the dominant language has no dedicated extractor.
pub struct LineCounter;

impl MetricExtractor for LineCounter {
    fn extract(&self, source: &str) -> MetricVector {
        MetricVector::default().with(metrics::LINES, line_count(source))
    }
}

/// Regex sources for every extractor. Plain data, compiled by [`ExtractorSet::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    pub python: python::PythonPatterns,
    pub script: script::ScriptPatterns,
    pub dart: dart::DartPatterns,
    pub markup: markup::MarkupPatterns,
    pub stylesheet: markup::StylesheetPatterns,
}

/// One extractor per supported dominant language, compiled once per run.
pub struct ExtractorSet {
    python: python::PythonExtractor,
    script: script::ScriptExtractor,
    dart: dart::DartExtractor,
    markup: markup::MarkupExtractor,
    stylesheet: markup::StylesheetExtractor,
    fallback: LineCounter,
}

impl ExtractorSet {
    pub fn new(patterns: &PatternSet) -> Result<Self> {
        Ok(Self {
            python: python::PythonExtractor::new(&patterns.python)?,
            script: script::ScriptExtractor::new(&patterns.script)?,
            dart: dart::DartExtractor::new(&patterns.dart)?,
            markup: markup::MarkupExtractor::new(&patterns.markup)?,
            stylesheet: markup::StylesheetExtractor::new(&patterns.stylesheet)?,
            fallback: LineCounter,
        })
    }

    pub fn for_language(&self, language: Language) -> &dyn MetricExtractor {
        match language {
            Language::Python => &self.python,
            Language::JavaScript | Language::TypeScript => &self.script,
            Language::Dart => &self.dart,
            Language::Html => &self.markup,
            Language::Css => &self.stylesheet,
            _ => &self.fallback,
        }
    }
}

/// Element-wise sum over all files; `{lines: 0}` when there are none.
pub fn extract_all(extractor: &dyn MetricExtractor, sources: &[SourceFile]) -> MetricVector {
    sources
        .iter()
        .fold(MetricVector::default(), |mut combined, source| {
            tracing::trace!(path = %source.path, "extracting metrics");
            combined.merge(&extractor.extract(&source.text));
            combined
        })
}

/// Line breaks recognised by [`split_lines`]; `\r\n` counts as one.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits on every Unicode line boundary, not just `\n`. A trailing break
/// does not start an extra empty line.
pub(crate) fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&source[start..index]);
        start = index + ch.len_utf8();
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < source.len() {
        lines.push(&source[start..]);
    }
    lines
}

pub(crate) fn line_count(source: &str) -> u64 {
    split_lines(source).len() as u64
}

pub(crate) fn count(pattern: &Regex, source: &str) -> u64 {
    pattern.find_iter(source).count() as u64
}

pub(crate) fn lines_starting_with(source: &str, prefix: &str) -> u64 {
    split_lines(source)
        .iter()
        .filter(|line| line.trim().starts_with(prefix))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metrics::{FUNCTIONS, LINES, SELECTORS, TAGS};

    fn source(text: &str) -> SourceFile {
        SourceFile {
            path: "f".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn dispatch_selects_variant_by_language() {
        let set = ExtractorSet::new(&PatternSet::default()).expect("patterns should compile");
        let html = set.for_language(Language::Html).extract("<div>\n<p>x</p>\n</div>");
        assert_eq!(html.get(TAGS), 2);

        let css = set.for_language(Language::Css).extract(".a { }\n#b { }");
        assert_eq!(css.get(SELECTORS), 2);

        let shell = set.for_language(Language::Shell).extract("echo hi\necho there\n");
        assert_eq!(shell.keys().collect::<Vec<_>>(), vec![LINES]);
        assert_eq!(shell.lines(), 2);
    }

    #[test]
    fn extract_all_sums_file_vectors() {
        let set = ExtractorSet::new(&PatternSet::default()).expect("patterns should compile");
        let combined = extract_all(
            set.for_language(Language::Python),
            &[source("def a():\n    pass\n"), source("def b():\n    pass\n\ndef c():\n    pass\n")],
        );
        assert_eq!(combined.lines(), 7);
        assert_eq!(combined.get(FUNCTIONS), 3);
    }

    #[test]
    fn custom_framework_pattern_replaces_default() {
        let mut patterns = PatternSet::default();
        patterns.python.frameworks = r"\bpyramid\b".to_string();
        let set = ExtractorSet::new(&patterns).expect("patterns should compile");

        let metrics = set
            .for_language(Language::Python)
            .extract("import pyramid\nfrom flask import Flask\n");
        assert_eq!(metrics.get(crate::types::metrics::FRAMEWORKS), 1);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let mut patterns = PatternSet::default();
        patterns.dart.frameworks = "(unclosed".to_string();
        assert!(matches!(
            ExtractorSet::new(&patterns),
            Err(crate::error::DepthError::Pattern(_))
        ));
    }

    #[test]
    fn extract_all_without_sources_is_zero_lines() {
        let combined = extract_all(&LineCounter, &[]);
        assert_eq!(combined, MetricVector::default());
    }

    #[test]
    fn line_count_ignores_trailing_newline() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("a\n"), 1);
        assert_eq!(line_count("a\r\nb"), 2);
    }

    #[test]
    fn carriage_return_and_form_feed_break_lines() {
        assert_eq!(line_count("a\rb\rc\r"), 3);
        assert_eq!(line_count("a\x0cb\u{2028}c"), 3);
        assert_eq!(line_count("a\r\n\r\nb"), 3);
        assert_eq!(split_lines("a\r\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn cr_only_python_source_counts_every_line() {
        let set = ExtractorSet::new(&PatternSet::default()).expect("patterns should compile");
        let metrics = set
            .for_language(Language::Python)
            .extract("# a\r# b\rdef f():\r    pass\r");
        assert_eq!(metrics.lines(), 4);
        assert_eq!(metrics.get(crate::types::metrics::COMMENT_LINES), 2);
    }
}
