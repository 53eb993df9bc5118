//! Scripted generation service for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use uigen_core::service::{ChatResponse, GeneratedFile, ServiceError};

use crate::client::GenerationService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateChat { message: String, system: String },
    SendMessage { chat_id: String, message: String },
}

/// Replies with queued results in order, then with `fallback` once the queue is empty.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<ChatResponse, ServiceError>>>,
    fallback: Option<Result<ChatResponse, ServiceError>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedService {
    pub fn new(replies: Vec<Result<ChatResponse, ServiceError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Result<ChatResponse, ServiceError>) -> Self {
        Self {
            fallback: Some(reply),
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Result<ChatResponse, ServiceError> {
        self.calls.lock().unwrap().push(call);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| Err(ServiceError::Transport("no scripted reply".to_string())))
    }
}

impl GenerationService for ScriptedService {
    async fn create_chat(
        &self,
        message: &str,
        system: &str,
    ) -> Result<ChatResponse, ServiceError> {
        self.next(Call::CreateChat {
            message: message.to_string(),
            system: system.to_string(),
        })
    }

    async fn send_message(
        &self,
        chat_id: &str,
        message: &str,
    ) -> Result<ChatResponse, ServiceError> {
        self.next(Call::SendMessage {
            chat_id: chat_id.to_string(),
            message: message.to_string(),
        })
    }
}

/// A chat response with one file per name, each containing `// <name>`.
pub fn chat(id: &str, files: &[&str]) -> ChatResponse {
    ChatResponse {
        id: id.to_string(),
        web_url: Some(format!("https://v0.dev/chat/{id}")),
        demo_url: Some(format!("https://demo.example/{id}")),
        files: files
            .iter()
            .map(|name| GeneratedFile {
                name: name.to_string(),
                content: format!("// {name}"),
            })
            .collect(),
    }
}

pub fn rate_limited() -> ServiceError {
    ServiceError::RateLimited("Too many requests".to_string())
}
