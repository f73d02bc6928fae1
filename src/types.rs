//! 类型定义模块
//!
//! 定义翻译库中使用的所有数据结构和配置类型。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenRouter 的默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// 默认模型
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";
/// 默认本地密钥文件
pub const DEFAULT_SECRETS_PATH: &str = "tokens.toml";
/// 存放API密钥的环境变量
pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

/// 翻译配置
///
/// # 字段说明
///
/// * `retries` - 每次翻译的最大尝试次数
/// * `delay_secs` - 两次尝试之间的固定等待秒数
/// * `base_url` - 聊天补全接口的基础地址
/// * `model` - 目标模型标识
/// * `timeout_secs` - 单次HTTP请求的超时秒数
/// * `secrets_path` - 本地密钥覆盖文件，优先于环境变量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// 最大尝试次数
    pub retries: usize,
    /// 尝试间隔（秒）
    pub delay_secs: f64,
    /// API地址
    pub base_url: String,
    /// 模型标识
    pub model: String,
    /// HTTP超时（秒）
    pub timeout_secs: u64,
    /// 本地密钥文件路径
    pub secrets_path: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            delay_secs: 1.0,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
            secrets_path: DEFAULT_SECRETS_PATH.to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Retry policy derived from `retries` and `delay_secs`.
    ///
    /// A zero attempt budget is raised to one, and a negative or non-finite
    /// delay becomes zero.
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.retries.max(1),
            delay: Duration::try_from_secs_f64(self.delay_secs).unwrap_or(Duration::ZERO),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 重试配置：固定次数、固定间隔
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_attempts: usize,
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        TranslatorConfig::default().retry_config()
    }
}

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// 单条聊天消息，仅在一次请求内存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// 一次翻译请求的原始用户文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}
