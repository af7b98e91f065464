use super::{count, line_count, lines_starting_with, MetricExtractor};
use crate::error::Result;
use crate::types::metrics::{
    MetricVector, API_CALLS, ASYNC_CODE, CLASSES, COMMENT_LINES, DATABASES, DOCSTRINGS,
    EXCEPT_BLOCKS, FRAMEWORKS, FUNCTIONS, IMPORTS, LINES, TRY_BLOCKS,
};
use regex::Regex;

pub struct PythonExtractor {
    functions: Regex,
    classes: Regex,
    imports: Regex,
    try_blocks: Regex,
    except_blocks: Regex,
    double_docstrings: Regex,
    single_docstrings: Regex,
    api_calls: Regex,
    databases: Regex,
    frameworks: Regex,
    async_code: Regex,
}

/// Regex sources for [`PythonExtractor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonPatterns {
    pub functions: String,
    pub classes: String,
    pub imports: String,
    pub try_blocks: String,
    pub except_blocks: String,
    pub double_docstrings: String,
    pub single_docstrings: String,
    pub api_calls: String,
    pub databases: String,
    pub frameworks: String,
    pub async_code: String,
}

impl Default for PythonPatterns {
    fn default() -> Self {
        Self {
            functions: r"(?m)^\s*def\s+".to_string(),
            classes: r"(?m)^\s*class\s+".to_string(),
            imports: r"(?m)^\s*(from|import)\s+".to_string(),
            try_blocks: r"\btry\s*:".to_string(),
            except_blocks: r"\bexcept\b".to_string(),
            double_docstrings: r#""""[\s\S]*?""""#.to_string(),
            single_docstrings: r"'''[\s\S]*?'''".to_string(),
            api_calls: r"requests\.|httpx\.|urllib\.".to_string(),
            databases: r"(?i)sqlalchemy|psycopg2|sqlite3|pymongo".to_string(),
            frameworks: r"(?i)\bflask\b|\bdjango\b|\bfastapi\b|\bstarlette\b".to_string(),
            async_code: r"\basync\b|\bawait\b".to_string(),
        }
    }
}

impl PythonExtractor {
    pub fn new(patterns: &PythonPatterns) -> Result<Self> {
        Ok(Self {
            functions: Regex::new(&patterns.functions)?,
            classes: Regex::new(&patterns.classes)?,
            imports: Regex::new(&patterns.imports)?,
            try_blocks: Regex::new(&patterns.try_blocks)?,
            except_blocks: Regex::new(&patterns.except_blocks)?,
            double_docstrings: Regex::new(&patterns.double_docstrings)?,
            single_docstrings: Regex::new(&patterns.single_docstrings)?,
            api_calls: Regex::new(&patterns.api_calls)?,
            databases: Regex::new(&patterns.databases)?,
            frameworks: Regex::new(&patterns.frameworks)?,
            async_code: Regex::new(&patterns.async_code)?,
        })
    }
}

impl MetricExtractor for PythonExtractor {
    fn extract(&self, source: &str) -> MetricVector {
        MetricVector::default()
            .with(LINES, line_count(source))
            .with(FUNCTIONS, count(&self.functions, source))
            .with(CLASSES, count(&self.classes, source))
            .with(IMPORTS, count(&self.imports, source))
            .with(TRY_BLOCKS, count(&self.try_blocks, source))
            .with(EXCEPT_BLOCKS, count(&self.except_blocks, source))
            .with(COMMENT_LINES, lines_starting_with(source, "#"))
            .with(
                DOCSTRINGS,
                count(&self.double_docstrings, source) + count(&self.single_docstrings, source),
            )
            .with(API_CALLS, count(&self.api_calls, source))
            .with(DATABASES, count(&self.databases, source))
            .with(FRAMEWORKS, count(&self.frameworks, source))
            .with(ASYNC_CODE, count(&self.async_code, source))
    }
}
