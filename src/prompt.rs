//! 提示词构建
//!
//! 每次请求固定构造两条消息：系统指令 + 带前缀的用户文本。

use crate::types::{ChatMessage, TranslationRequest};

/// 系统指令：口语化巴西葡萄牙语，不加引号/括号，不加解释
pub const SYSTEM_PROMPT: &str = "Traduce el mensaje del usuario al portugués brasileño coloquial. No pongas comillas ni corchetes. Tampoco agregues explicaciones ni comentarios.";

/// 用户消息前缀
pub const USER_PREFIX: &str = "Mensaje para traducir: ";

/// Builds the `[system, user]` pair sent on every attempt.
///
/// The user text is appended verbatim after [`USER_PREFIX`]; nothing is
/// trimmed or normalized here.
pub fn build_messages(request: &TranslationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{USER_PREFIX}{}", request.text())),
    ]
}
