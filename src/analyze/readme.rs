use super::extract::split_lines;
use crate::error::Result;
use regex::Regex;

pub const MAX_README_QUALITY: u8 = 20;

/// Keywords that suggest the README explains how to install or run the project.
pub const DEFAULT_SETUP_PATTERN: &str =
    r"(?i)install|pip|setup|run|docker|flutter|npm|pnpm|yarn|python manage\.py";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadmeSignals {
    pub words: usize,
    pub headings: usize,
    pub has_code_fence: bool,
    pub has_setup_instructions: bool,
}

impl ReadmeSignals {
    pub fn quality(&self) -> u8 {
        let mut score: u8 = 0;
        if self.words >= 80 {
            score += 5;
        }
        if self.headings >= 3 {
            score += 5;
        }
        if self.has_code_fence {
            score += 5;
        }
        if self.has_setup_instructions {
            score += 5;
        }
        score.min(MAX_README_QUALITY)
    }
}

pub struct ReadmeAnalyzer {
    setup: Regex,
}

impl ReadmeAnalyzer {
    pub fn new(setup_pattern: &str) -> Result<Self> {
        Ok(Self {
            setup: Regex::new(setup_pattern)?,
        })
    }

    pub fn signals(&self, text: &str) -> ReadmeSignals {
        if text.is_empty() {
            return ReadmeSignals::default();
        }
        ReadmeSignals {
            words: text.split_whitespace().count(),
            headings: split_lines(text)
                .iter()
                .filter(|line| line.trim().starts_with('#'))
                .count(),
            has_code_fence: text.contains("```"),
            has_setup_instructions: self.setup.is_match(text),
        }
    }

    pub fn quality(&self, text: &str) -> u8 {
        self.signals(text).quality()
    }
}
