use crate::error::DepthError;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepthConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_user_agent() -> String {
    format!("repodepth/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    25
}

fn default_per_page() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    1
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token_env: default_token_env(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_repositories")]
    pub max_repositories: usize,
    #[serde(default = "default_max_files_per_repository")]
    pub max_files_per_repository: usize,
}

fn default_max_repositories() -> usize {
    8
}

fn default_max_files_per_repository() -> usize {
    120
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_repositories: default_max_repositories(),
            max_files_per_repository: default_max_files_per_repository(),
        }
    }
}

impl DepthConfig {
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.remote.token_env)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn validate(&self) -> Result<(), DepthError> {
        let api_base = self.remote.api_base.trim();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(DepthError::ConfigParse(format!(
                "remote.api_base must be an absolute http(s) URL (found {api_base:?})"
            )));
        }
        if self.remote.token_env.trim().is_empty() {
            return Err(DepthError::ConfigParse(
                "remote.token_env must name an environment variable".to_string(),
            ));
        }
        if self.remote.timeout_secs == 0 {
            return Err(DepthError::ConfigParse(
                "remote.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(1..=100).contains(&self.remote.per_page) {
            return Err(DepthError::ConfigParse(
                "remote.per_page must be between 1 and 100".to_string(),
            ));
        }
        if self.remote.max_pages == 0 {
            return Err(DepthError::ConfigParse(
                "remote.max_pages must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_repositories == 0 {
            return Err(DepthError::ConfigParse(
                "limits.max_repositories must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_files_per_repository == 0 {
            return Err(DepthError::ConfigParse(
                "limits.max_files_per_repository must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
