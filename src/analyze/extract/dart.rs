use super::{count, line_count, MetricExtractor};
use crate::error::Result;
use crate::types::metrics::{
    MetricVector, ASYNC_CODE, CLASSES, FRAMEWORKS, FUNCTIONS, IMPORTS, LINES, TRY_BLOCKS,
};
use regex::Regex;

pub struct DartExtractor {
    classes: Regex,
    functions: Regex,
    imports: Regex,
    frameworks: Regex,
    async_code: Regex,
    try_blocks: Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartPatterns {
    pub classes: String,
    pub functions: String,
    pub imports: String,
    pub frameworks: String,
    pub async_code: String,
    pub try_blocks: String,
}

impl Default for DartPatterns {
    fn default() -> Self {
        Self {
            classes: r"\bclass\s+\w+".to_string(),
            // Rough: any identifier followed by a parameter list and an opening brace.
            functions: r"\b[A-Za-z_]\w*\s*\(.*\)\s*\{".to_string(),
            imports: r"(?m)^\s*import\s+'".to_string(),
            frameworks: concat!(
                r"(?i)\bflutter\b|\bmaterial\b|\bcupertino\b",
                r"|\bprovider\b|\bbloc\b|\briverpod\b"
            )
            .to_string(),
            async_code: r"\basync\b|\bawait\b".to_string(),
            try_blocks: r"\btry\s*\{".to_string(),
        }
    }
}

impl DartExtractor {
    pub fn new(patterns: &DartPatterns) -> Result<Self> {
        Ok(Self {
            classes: Regex::new(&patterns.classes)?,
            functions: Regex::new(&patterns.functions)?,
            imports: Regex::new(&patterns.imports)?,
            frameworks: Regex::new(&patterns.frameworks)?,
            async_code: Regex::new(&patterns.async_code)?,
            try_blocks: Regex::new(&patterns.try_blocks)?,
        })
    }
}

impl MetricExtractor for DartExtractor {
    fn extract(&self, source: &str) -> MetricVector {
        MetricVector::default()
            .with(LINES, line_count(source))
            .with(CLASSES, count(&self.classes, source))
            .with(FUNCTIONS, count(&self.functions, source))
            .with(IMPORTS, count(&self.imports, source))
            .with(FRAMEWORKS, count(&self.frameworks, source))
            .with(ASYNC_CODE, count(&self.async_code, source))
            .with(TRY_BLOCKS, count(&self.try_blocks, source))
    }
}
