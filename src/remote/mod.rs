pub mod github;

use crate::error::{DepthError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRepository {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "html_url")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub kind: EntryKind,
    pub path: String,
}

#[cfg(test)]
impl DirectoryEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            path: path.into(),
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Dir,
            path: path.into(),
        }
    }
}

/// A directory's children, or the single-file shorthand a host returns when
/// the requested path is itself a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryListing {
    Entries(Vec<DirectoryEntry>),
    File(DirectoryEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedContent {
    pub encoding: Option<String>,
    pub content: String,
}

impl EncodedContent {
    /// Decodes to text. Invalid UTF-8 sequences are replaced, not rejected.
    pub fn decode(&self) -> Result<String> {
        match self.encoding.as_deref() {
            Some("base64") => {
                let compact: String = self
                    .content
                    .chars()
                    .filter(|ch| !ch.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD
                    .decode(compact.as_bytes())
                    .map_err(|e| DepthError::DecodeFailure(e.to_string()))?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            None | Some("utf-8") | Some("utf8") => Ok(self.content.clone()),
            Some(other) => Err(DepthError::DecodeFailure(other.to_string())),
        }
    }
}

#[cfg(test)]
impl EncodedContent {
    pub fn base64(content: impl Into<String>) -> Self {
        Self {
            encoding: Some("base64".to_string()),
            content: content.into(),
        }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            encoding: None,
            content: content.into(),
        }
    }
}

/// Read-only view of a code-hosting account.
pub trait CodeHost {
    fn list_repositories(&self, account: &str) -> Result<Vec<RemoteRepository>>;

    fn list_directory(&self, account: &str, repo: &str, path: &str) -> Result<DirectoryListing>;

    fn file_content(&self, account: &str, repo: &str, path: &str) -> Result<EncodedContent>;

    /// `Ok(None)` when the repository has no README.
    fn readme(&self, account: &str, repo: &str) -> Result<Option<EncodedContent>>;
}
