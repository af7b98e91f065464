use crate::error::{DepthError, Result};
use crate::types::config::DepthConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repodepth.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repodepth/config.toml";

/// Loads the global config, then either `explicit` (which must exist) or
/// `repodepth.toml` in `root`, later layers overriding earlier ones.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<DepthConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<DepthConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DepthError::ConfigNotFound(path.display().to_string()));
            }
            merge_file_if_exists(&mut merged, path)?;
        }
        None => merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?,
    }

    let cfg: DepthConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| DepthError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DepthError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_API_BASE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_falls_back_to_defaults_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(cfg.remote.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.limits.max_repositories, 8);
    }

    #[test]
    fn load_config_merges_global_then_local_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[remote]
token_env = "GLOBAL_TOKEN"
timeout_secs = 5

[limits]
max_repositories = 3
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[remote]
timeout_secs = 40

[limits]
max_files_per_repository = 60
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.remote.token_env, "GLOBAL_TOKEN");
        assert_eq!(cfg.remote.timeout_secs, 40);
        assert_eq!(cfg.limits.max_repositories, 3);
        assert_eq!(cfg.limits.max_files_per_repository, 60);
    }

    #[test]
    fn explicit_config_replaces_local_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[limits]\nmax_repositories = 2\n",
        )
        .expect("local config should write");
        let explicit = root.path().join("custom.toml");
        fs::write(&explicit, "[limits]\nmax_repositories = 5\n").expect("custom should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed");
        assert_eq!(cfg.limits.max_repositories, 5);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        let missing = root.path().join("absent.toml");
        let err = load_config_with_global(root.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, DepthError::ConfigNotFound(_)));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[remote]\nmax_pages = 0\n",
        )
        .expect("local config should write");
        let err = load_config_with_global(root.path(), None, None)
            .expect_err("zero max_pages should fail");
        assert!(matches!(err, DepthError::ConfigParse(_)));
    }
}
