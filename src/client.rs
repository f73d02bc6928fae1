//! 聊天补全客户端
//!
//! `ChatClient` 是翻译服务与远端模型之间的接缝，测试时可注入模拟实现。
//! `OpenRouterClient` 是基于 reqwest 的 OpenAI 兼容实现。

use crate::credentials::resolve_api_key;
use crate::error::{Result, TranslationError};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, TranslatorConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;

/// Sends a list of role-tagged messages to a model and returns the reply text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}

/// OpenRouter（OpenAI兼容）聊天补全客户端
///
/// 使用Bearer令牌认证，请求 `{base_url}/chat/completions`。
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenRouterClient {
    /// 使用已解析的API密钥创建客户端
    pub fn new(config: &TranslatorConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: api_key.into(),
        })
    }

    /// 从配置创建客户端，按优先级解析API密钥
    ///
    /// 找不到密钥时返回 `TranslationError::MissingApiKey`。
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        let api_key = resolve_api_key(Path::new(&config.secrets_path))?;
        Self::new(config, api_key)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = self.endpoint();
        tracing::debug!(%url, model, "sending chat completion request");

        let request = ChatCompletionRequest { model, messages };
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}

/// Extracts the first choice's content. Anything else is a parse error.
pub(crate) fn parse_completion(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::Parse(format!("unexpected response body: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| TranslationError::Parse("empty completion".to_string()))
}
