//! 错误处理模块
//!
//! 定义翻译流程中使用的错误类型。所有错误在对外边界处统一折叠为回退文本，
//! 在库内部则保持可区分，便于日志记录和测试。

use thiserror::Error;

/// 翻译错误类型
///
/// # 变体说明
///
/// * `MissingApiKey` - 本地密钥文件和环境变量中都没有API密钥
/// * `Http` - HTTP请求错误（包括超时）
/// * `Api` - 服务端返回非2xx状态码
/// * `Parse` - 响应格式不符合预期或内容为空
/// * `Config` - 配置文件或密钥文件无法读取/解析
#[derive(Debug, Error)]
pub enum TranslationError {
    /// 未找到API密钥
    #[error("API key not configured: set {env_var} or provide {secrets_path}")]
    MissingApiKey {
        /// 检查过的环境变量名
        env_var: String,
        /// 检查过的本地密钥文件
        secrets_path: String,
    },
    /// HTTP请求错误
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// API响应错误
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP状态码
        status: u16,
        /// 响应体
        message: String,
    },
    /// 解析错误
    #[error("Parse error: {0}")]
    Parse(String),
    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

impl TranslationError {
    /// Short, stable name of the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::MissingApiKey { .. } => "missing_api_key",
            TranslationError::Http(_) => "http",
            TranslationError::Api { .. } => "api",
            TranslationError::Parse(_) => "parse",
            TranslationError::Config(_) => "config",
        }
    }
}

/// 翻译结果类型别名
///
/// ```rust
/// use coloquial_translator::{Result, TranslationError};
///
/// fn example_function() -> Result<String> {
///     Err(TranslationError::Parse("no choices".to_string()))
/// }
///
/// assert!(example_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TranslationError::MissingApiKey {
            env_var: "OPENROUTER_API_KEY".to_string(),
            secrets_path: "tokens.toml".to_string(),
        };
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
        assert!(err.to_string().contains("tokens.toml"));

        let err = TranslationError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: upstream unavailable");
        assert_eq!(err.kind(), "api");
    }

    #[test]
    fn kinds_are_distinct_for_config_and_transient_failures() {
        let missing = TranslationError::MissingApiKey {
            env_var: "X".to_string(),
            secrets_path: "y".to_string(),
        };
        let parse = TranslationError::Parse("empty".to_string());
        assert_ne!(missing.kind(), parse.kind());
        assert_eq!(TranslationError::Config("bad".into()).kind(), "config");
    }
}
