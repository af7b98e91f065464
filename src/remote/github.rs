use super::{
    CodeHost, DirectoryEntry, DirectoryListing, EncodedContent, EntryKind, RemoteRepository,
};
use crate::error::{DepthError, Result};
use crate::types::config::RemoteConfig;
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// GitHub REST API backed [`CodeHost`].
pub struct GitHubHost {
    http: Client,
    api_base: Url,
    token: Option<String>,
    per_page: u32,
    max_pages: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsPayload {
    Listing(Vec<ContentItem>),
    Single(ContentItem),
}

#[derive(Deserialize)]
struct ContentItem {
    #[serde(rename = "type")]
    kind: String,
    path: String,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl ContentItem {
    fn entry(&self) -> DirectoryEntry {
        let kind = match self.kind.as_str() {
            "file" => EntryKind::File,
            "dir" => EntryKind::Dir,
            _ => EntryKind::Other,
        };
        DirectoryEntry {
            kind,
            path: self.path.clone(),
        }
    }

    fn into_content(self) -> EncodedContent {
        EncodedContent {
            encoding: self.encoding,
            content: self.content.unwrap_or_default(),
        }
    }
}

impl GitHubHost {
    pub fn from_config(remote: &RemoteConfig, token: Option<String>) -> Result<Self> {
        let api_base = Url::parse(remote.api_base.trim())
            .map_err(|e| DepthError::InvalidEndpoint(format!("{}: {}", remote.api_base, e)))?;
        let http = Client::builder()
            .user_agent(remote.user_agent.clone())
            .timeout(Duration::from_secs(remote.timeout_secs))
            .build()
            .map_err(|e| DepthError::RemoteUnavailable(format!("http client: {e}")))?;
        Ok(Self {
            http,
            api_base,
            token,
            per_page: remote.per_page,
            max_pages: remote.max_pages,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| DepthError::InvalidEndpoint(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments.iter().filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    fn contents_endpoint(&self, account: &str, repo: &str, path: &str) -> Result<Url> {
        let mut segments = vec!["repos", account, repo, "contents"];
        segments.extend(path.split('/'));
        self.endpoint(&segments)
    }

    fn send(&self, url: Url) -> Result<Response> {
        tracing::debug!(%url, "GET");
        let mut request = self.http.get(url.clone());
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }
        request
            .send()
            .map_err(|e| DepthError::RemoteUnavailable(format!("{url}: {e}")))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send(url.clone())?;
        let status = response.status();
        if !status.is_success() {
            return Err(DepthError::RemoteUnavailable(format!("{url} returned {status}")));
        }
        response
            .json()
            .map_err(|e| DepthError::RemoteUnavailable(format!("{url}: invalid payload: {e}")))
    }
}

impl CodeHost for GitHubHost {
    fn list_repositories(&self, account: &str) -> Result<Vec<RemoteRepository>> {
        let mut repositories = Vec::new();
        for page in 1..=self.max_pages {
            let mut url = self.endpoint(&["users", account, "repos"])?;
            url.query_pairs_mut()
                .append_pair("per_page", &self.per_page.to_string())
                .append_pair("sort", "updated")
                .append_pair("page", &page.to_string());
            let batch: Vec<RemoteRepository> = self.get_json(url)?;
            let full = batch.len() >= self.per_page as usize;
            repositories.extend(batch);
            if !full {
                break;
            }
        }
        Ok(repositories)
    }

    fn list_directory(&self, account: &str, repo: &str, path: &str) -> Result<DirectoryListing> {
        let url = self.contents_endpoint(account, repo, path)?;
        let payload: ContentsPayload = self.get_json(url)?;
        Ok(match payload {
            ContentsPayload::Listing(items) => {
                DirectoryListing::Entries(items.iter().map(ContentItem::entry).collect())
            }
            ContentsPayload::Single(item) => DirectoryListing::File(item.entry()),
        })
    }

    fn file_content(&self, account: &str, repo: &str, path: &str) -> Result<EncodedContent> {
        let url = self.contents_endpoint(account, repo, path)?;
        match self.get_json::<ContentsPayload>(url)? {
            ContentsPayload::Single(item) if item.kind == "file" => Ok(item.into_content()),
            _ => Err(DepthError::ContentFetch(format!("{repo}/{path} is not a file"))),
        }
    }

    fn readme(&self, account: &str, repo: &str) -> Result<Option<EncodedContent>> {
        let url = self.endpoint(&["repos", account, repo, "readme"])?;
        let response = self.send(url.clone())?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DepthError::RemoteUnavailable(format!("{url} returned {status}")));
        }
        let item: ContentItem = response
            .json()
            .map_err(|e| DepthError::RemoteUnavailable(format!("{url}: invalid payload: {e}")))?;
        Ok(Some(item.into_content()))
    }
}
