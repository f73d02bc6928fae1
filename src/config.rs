//! 配置管理模块
//!
//! 提供TOML配置文件的读取、写入和自动发现功能。

use crate::error::{Result, TranslationError};
use crate::types::TranslatorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 默认搜索的配置文件位置，按顺序尝试
pub const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "translator-config.toml",
    "config.toml",
    ".translator-config.toml",
];

/// 翻译库配置结构
///
/// ```toml
/// [translator]
/// retries = 3
/// delay_secs = 1.0
/// base_url = "https://openrouter.ai/api/v1"
/// model = "deepseek/deepseek-chat"
/// timeout_secs = 30
/// secrets_path = "tokens.toml"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatorLibConfig {
    /// 翻译配置
    #[serde(default)]
    pub translator: TranslatorConfig,
}

impl TranslatorLibConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TranslationError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            TranslationError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            toml::to_string_pretty(self).map_err(|e| TranslationError::Config(e.to_string()))?;
        fs::write(path, content).map_err(|e| {
            TranslationError::Config(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// Load configuration from the first readable default location
    pub fn load_from_default_locations() -> Self {
        Self::load_from_locations(&DEFAULT_CONFIG_PATHS)
    }

    pub fn load_from_locations<P: AsRef<Path>>(possible_paths: &[P]) -> Self {
        for path in possible_paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    return config;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load config");
                }
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Self::default()
    }

    /// Generate example configuration file
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}
