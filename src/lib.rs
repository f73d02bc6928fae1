//! # Coloquial Translator
//!
//! 把西班牙语短语翻译成口语化的巴西葡萄牙语，翻译由远端大模型
//! （OpenRouter 聊天补全接口）生成。
//!
//! ## 主要特性
//!
//! - **固定提示词**: 系统指令 + `Mensaje para traducir: ` 前缀
//! - **固定间隔重试**: 默认3次尝试，每次间隔1秒
//! - **优雅降级**: 任何失败都返回固定的道歉文本，调用方永远拿到字符串
//! - **配置灵活**: 支持TOML配置文件和程序化配置
//! - **可注入客户端**: 通过 `ChatClient` trait 替换传输层
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() {
//!     let translation = coloquial_translator::translate("¿Cómo estás?").await;
//!     println!("Traducción: {}", translation);
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [translator]
//! retries = 3
//! delay_secs = 1.0
//! secrets_path = "tokens.toml"
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod prompt;
pub mod translator;
pub mod types;

pub use client::{ChatClient, OpenRouterClient};
pub use config::TranslatorLibConfig;
pub use error::{Result, TranslationError};
pub use prompt::{build_messages, SYSTEM_PROMPT, USER_PREFIX};
pub use translator::{
    retry_with_fixed_delay, translate, translate_with_config, TranslationService,
    FALLBACK_MESSAGE,
};
pub use types::{ChatMessage, RetryConfig, Role, TranslationRequest, TranslatorConfig};
