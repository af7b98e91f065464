use super::{count, line_count, lines_starting_with, MetricExtractor};
use crate::error::Result;
use crate::types::metrics::{
    MetricVector, API_CALLS, CLASSES, COMMENT_LINES, FRAMEWORKS, FUNCTIONS, IMPORTS, LINES,
    TRY_BLOCKS,
};
use regex::Regex;

/// JavaScript and TypeScript share one extractor.
pub struct ScriptExtractor {
    functions: Regex,
    classes: Regex,
    imports: Regex,
    try_blocks: Regex,
    frameworks: Regex,
    api_calls: Regex,
}

/// Regex sources for [`ScriptExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPatterns {
    pub functions: String,
    pub classes: String,
    pub imports: String,
    pub try_blocks: String,
    pub frameworks: String,
    pub api_calls: String,
}

impl Default for ScriptPatterns {
    fn default() -> Self {
        Self {
            functions: r"\bfunction\b|=\s*\(.*?\)\s*=>|\b=>\b".to_string(),
            classes: r"\bclass\s+\w+".to_string(),
            imports: r"(?m)^\s*(import\s+|const\s+\w+\s*=\s*require\()".to_string(),
            try_blocks: r"\btry\s*\{".to_string(),
            frameworks: r"(?i)\breact\b|\bnext\b|\bexpress\b|\bnest\b|\bvue\b|\bangular\b"
                .to_string(),
            api_calls: r"fetch\(|axios\.|superagent\(".to_string(),
        }
    }
}

impl ScriptExtractor {
    pub fn new(patterns: &ScriptPatterns) -> Result<Self> {
        Ok(Self {
            functions: Regex::new(&patterns.functions)?,
            classes: Regex::new(&patterns.classes)?,
            imports: Regex::new(&patterns.imports)?,
            try_blocks: Regex::new(&patterns.try_blocks)?,
            frameworks: Regex::new(&patterns.frameworks)?,
            api_calls: Regex::new(&patterns.api_calls)?,
        })
    }
}

impl MetricExtractor for ScriptExtractor {
    fn extract(&self, source: &str) -> MetricVector {
        MetricVector::default()
            .with(LINES, line_count(source))
            .with(FUNCTIONS, count(&self.functions, source))
            .with(CLASSES, count(&self.classes, source))
            .with(IMPORTS, count(&self.imports, source))
            .with(TRY_BLOCKS, count(&self.try_blocks, source))
            .with(COMMENT_LINES, lines_starting_with(source, "//"))
            .with(FRAMEWORKS, count(&self.frameworks, source))
            .with(API_CALLS, count(&self.api_calls, source))
    }
}
