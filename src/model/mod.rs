//! Completion provider seam and the pieces of the chat relay that do not
//! depend on HTTP.

pub mod anthropic;
pub mod persona;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web::models::ChatMessage;

pub use anthropic::AnthropicClient;

/// Model every chat is answered with.
pub const MODEL: &str = "claude-sonnet-4-20250514";

/// Output ceiling for a single reply.
pub const MAX_TOKENS: u32 = 1024;

/// Number of most recent messages forwarded upstream.
pub const HISTORY_WINDOW: usize = 20;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// One outbound completion call. Serializes as the Messages API body.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: &'a [ChatMessage],
}

impl<'a> CompletionRequest<'a> {
    /// Builds the request the relay sends for `history`: fixed model, token
    /// ceiling and persona.
    pub fn for_history(history: &'a [ChatMessage]) -> Self {
        Self {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: persona::SYSTEM_PERSONA,
            messages: history,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl Completion {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            stop_reason: None,
            usage: None,
        }
    }

    /// Text of every text segment, in order, with no separator.
    pub fn reply_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect()
    }
}

/// Anything that can turn a persona and a conversation into a reply.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, ProviderError>;
}

/// The last [`HISTORY_WINDOW`] messages, oldest first.
pub fn recent_history(messages: &[ChatMessage]) -> &[ChatMessage] {
    let start = messages.len().saturating_sub(HISTORY_WINDOW);
    &messages[start..]
}
