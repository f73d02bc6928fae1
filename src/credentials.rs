//! API密钥解析
//!
//! 优先级：本地密钥文件（`tokens.toml`）> 环境变量 `OPENROUTER_API_KEY`。

use crate::error::{Result, TranslationError};
use crate::types::API_KEY_ENV_VAR;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 本地密钥覆盖文件的结构
///
/// ```toml
/// openrouter_key = "sk-or-..."
/// ```
#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    openrouter_key: Option<String>,
}

/// Resolve the API key from the secrets file, falling back to the process
/// environment.
pub fn resolve_api_key(secrets_path: &Path) -> Result<String> {
    resolve_api_key_from(secrets_path, std::env::var(API_KEY_ENV_VAR).ok())
}

/// Same as [`resolve_api_key`] with the environment value supplied by the
/// caller.
///
/// A missing file or an empty key falls through to `env_value`. A file that
/// exists but cannot be read or parsed is an error rather than being skipped.
pub fn resolve_api_key_from(secrets_path: &Path, env_value: Option<String>) -> Result<String> {
    if let Some(key) = read_secrets_file(secrets_path)? {
        tracing::debug!(path = %secrets_path.display(), "using API key from local secrets file");
        return Ok(key);
    }

    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(key) => {
            tracing::debug!(env_var = API_KEY_ENV_VAR, "using API key from environment");
            Ok(key)
        }
        None => Err(TranslationError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
            secrets_path: secrets_path.display().to_string(),
        }),
    }
}

fn read_secrets_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TranslationError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let secrets: SecretsFile = toml::from_str(&content).map_err(|e| {
        TranslationError::Config(format!("failed to parse {}: {}", path.display(), e))
    })?;

    Ok(secrets.openrouter_key.filter(|k| !k.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secrets_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn local_file_wins_over_environment() {
        let file = secrets_file("openrouter_key = \"sk-local\"\n");
        let key = resolve_api_key_from(file.path(), Some("sk-env".to_string())).unwrap();
        assert_eq!(key, "sk-local");
    }

    #[test]
    fn falls_back_to_environment_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("tokens.toml");
        let key = resolve_api_key_from(&missing, Some("sk-env".to_string())).unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn empty_file_key_falls_back_to_environment() {
        let file = secrets_file("openrouter_key = \"\"\n");
        let key = resolve_api_key_from(file.path(), Some("sk-env".to_string())).unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn missing_everywhere_is_missing_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("tokens.toml");
        let err = resolve_api_key_from(&missing, Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, TranslationError::MissingApiKey { .. }));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let file = secrets_file("openrouter_key = [not toml");
        let err = resolve_api_key_from(file.path(), Some("sk-env".to_string())).unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
