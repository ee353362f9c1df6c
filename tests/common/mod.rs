#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rafiki::model::{Completion, CompletionProvider, CompletionRequest, ProviderError};
use rafiki::web::models::ChatMessage;

/// What the stub saw on one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

pub enum StubOutcome {
    Reply(Completion),
    Fail { status: u16, message: String },
}

/// In-memory provider that records every call and answers with a canned outcome.
pub struct StubProvider {
    outcome: StubOutcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn replying(completion: Completion) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Reply(completion),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Fail {
                status,
                message: message.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: request.model.to_string(),
            max_tokens: request.max_tokens,
            system: request.system.to_string(),
            messages: request.messages.to_vec(),
        });

        match &self.outcome {
            StubOutcome::Reply(completion) => Ok(completion.clone()),
            StubOutcome::Fail { status, message } => Err(ProviderError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}
