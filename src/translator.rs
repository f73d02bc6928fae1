//! 翻译服务核心模块
//!
//! 提供固定间隔的重试机制、翻译服务本体，以及面向展示层的回退边界：
//! 任何失败都不会以错误形式离开 `translate`，而是变成固定的道歉文本。

use crate::client::{ChatClient, OpenRouterClient};
use crate::config::TranslatorLibConfig;
use crate::error::Result;
use crate::prompt::build_messages;
use crate::types::{RetryConfig, TranslationRequest, TranslatorConfig};
use std::future::Future;
use std::sync::Arc;
use tokio::time::sleep;

/// 所有尝试失败（或无法创建客户端）时返回给用户的文本
pub const FALLBACK_MESSAGE: &str =
    "Lo siento, tuve un problema técnico. Por favor, intentá nuevamente en unos momentos.";

/// 固定间隔重试
///
/// 最多执行 `config.max_attempts` 次 `operation`，失败后等待固定的
/// `config.delay` 再重试。不区分错误类型，也没有指数退避。
///
/// # 返回
///
/// * `Ok(T)` - 某次尝试成功的结果
/// * `Err(TranslationError)` - 最后一次尝试的错误
pub async fn retry_with_fixed_delay<F, Fut, T>(mut operation: F, config: &RetryConfig) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    kind = e.kind(),
                    error = %e,
                    "Attempt {} failed",
                    attempt
                );
                if attempt >= max_attempts {
                    return Err(e);
                }
                sleep(config.delay).await;
                attempt += 1;
            }
        }
    }
}

/// 翻译服务
///
/// 无状态：每次调用独立构造消息并拥有自己的重试预算。客户端通过
/// [`ChatClient`] 注入。
///
/// # 示例
///
/// ```rust,no_run
/// use coloquial_translator::{TranslationService, TranslatorConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = TranslatorConfig::default();
///     match TranslationService::from_config(&config) {
///         Ok(service) => println!("{}", service.translate("¿Cómo estás?").await),
///         Err(e) => eprintln!("{e}"),
///     }
/// }
/// ```
#[derive(Clone)]
pub struct TranslationService {
    client: Arc<dyn ChatClient>,
    model: String,
    retry: RetryConfig,
}

impl TranslationService {
    pub fn new(client: Arc<dyn ChatClient>, config: &TranslatorConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            retry: config.retry_config(),
        }
    }

    /// 使用 OpenRouter 客户端创建服务
    ///
    /// 密钥缺失或HTTP客户端无法构建时返回错误。
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let client = OpenRouterClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// 翻译文本，保留内部错误类型
    pub async fn try_translate(&self, text: &str) -> Result<String> {
        let request = TranslationRequest::new(text);
        let messages = build_messages(&request);
        tracing::info!(chars = request.text().chars().count(), model = %self.model, "translating");

        let client = self.client.as_ref();
        let model = self.model.as_str();
        let messages = messages.as_slice();

        retry_with_fixed_delay(move || client.complete(model, messages), &self.retry).await
    }

    /// 翻译文本；失败时返回 [`FALLBACK_MESSAGE`]
    pub async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Ok(translation) => translation,
            Err(e) => fallback(&e),
        }
    }
}

/// 主要的翻译接口
///
/// 从默认位置加载配置，为本次调用创建新的客户端并翻译。永远返回字符串。
pub async fn translate(text: &str) -> String {
    let config = TranslatorLibConfig::load_from_default_locations();
    translate_with_config(text, &config.translator).await
}

/// 使用给定配置翻译；每次调用都会重新解析密钥并创建客户端
pub async fn translate_with_config(text: &str, config: &TranslatorConfig) -> String {
    translate_or_fallback(text, || TranslationService::from_config(config)).await
}

async fn translate_or_fallback<B>(text: &str, build: B) -> String
where
    B: FnOnce() -> Result<TranslationService>,
{
    match build() {
        Ok(service) => service.translate(text).await,
        Err(e) => fallback(&e),
    }
}

fn fallback(error: &crate::error::TranslationError) -> String {
    tracing::error!(kind = error.kind(), error = %error, "translation failed, returning fallback");
    FALLBACK_MESSAGE.to_string()
}
