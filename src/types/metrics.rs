use serde::Serialize;
use std::collections::BTreeMap;

pub const LINES: &str = "lines";
pub const FUNCTIONS: &str = "functions";
pub const CLASSES: &str = "classes";
pub const IMPORTS: &str = "imports";
pub const TRY_BLOCKS: &str = "try_blocks";
pub const EXCEPT_BLOCKS: &str = "except_blocks";
pub const COMMENT_LINES: &str = "comment_lines";
pub const DOCSTRINGS: &str = "docstrings";
pub const API_CALLS: &str = "api_calls";
pub const DATABASES: &str = "databases";
pub const FRAMEWORKS: &str = "frameworks";
pub const ASYNC_CODE: &str = "async_code";
pub const TAGS: &str = "tags";
pub const SELECTORS: &str = "selectors";

/// Named integer counts produced by a metric extractor. `lines` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetricVector {
    counts: BTreeMap<&'static str, u64>,
}

impl Default for MetricVector {
    fn default() -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(LINES, 0);
        Self { counts }
    }
}

impl MetricVector {
    pub fn with(mut self, key: &'static str, value: u64) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: u64) {
        self.counts.insert(key, value);
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn lines(&self) -> u64 {
        self.get(LINES)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.counts.keys().copied()
    }

    /// Element-wise sum; keys missing on either side count as zero.
    pub fn merge(&mut self, other: &MetricVector) {
        for (key, value) in &other.counts {
            *self.counts.entry(*key).or_insert(0) += *value;
        }
    }
}
