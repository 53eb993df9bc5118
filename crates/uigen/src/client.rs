use serde::Serialize;
use uigen_core::prompt::GenerationRequest;
use uigen_core::service::{
    classify_failure, ChatResponse, CreateChatBody, SendMessageBody, ServiceError,
};

use crate::config::ServiceConfig;
use crate::prelude::*;

/// Conversational access to a generative UI service.
#[allow(async_fn_in_trait)]
pub trait GenerationService {
    /// Open a new chat with an instruction and a system prompt.
    async fn create_chat(&self, message: &str, system: &str)
        -> Result<ChatResponse, ServiceError>;

    /// Send another message in an existing chat.
    async fn send_message(&self, chat_id: &str, message: &str)
        -> Result<ChatResponse, ServiceError>;
}

/// HTTP client for the v0 Platform API.
#[derive(Debug, Clone)]
pub struct V0Client {
    http: reqwest::Client,
    api_url: String,
}

impl V0Client {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            http: create_authenticated_client(config)?,
            api_url: config.api_url.clone(),
        })
    }

    async fn post<B: Serialize>(&self, url: &str, body: &B) -> Result<ChatResponse, ServiceError> {
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

impl GenerationService for V0Client {
    async fn create_chat(
        &self,
        message: &str,
        system: &str,
    ) -> Result<ChatResponse, ServiceError> {
        let url = format!("{}/chats", self.api_url);
        self.post(&url, &CreateChatBody { message, system }).await
    }

    async fn send_message(
        &self,
        chat_id: &str,
        message: &str,
    ) -> Result<ChatResponse, ServiceError> {
        let url = format!(
            "{}/chats/{}/messages",
            self.api_url,
            urlencoding::encode(chat_id)
        );
        self.post(&url, &SendMessageBody { message }).await
    }
}

/// Create an HTTP client with Bearer auth headers
pub fn create_authenticated_client(config: &ServiceConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("uigen/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Run one generation exchange.
///
/// Opens a chat with the request's prompt and system instruction. When the request
/// carries a follow-up it is sent in the same chat and its response is returned
/// instead, inheriting the chat's URLs if the follow-up response omits them.
pub async fn exchange<S: GenerationService>(
    service: &S,
    request: &GenerationRequest,
) -> Result<ChatResponse, ServiceError> {
    let chat = service
        .create_chat(&request.prompt, &request.system)
        .await?;

    let Some(follow_up) = &request.follow_up else {
        return Ok(chat);
    };

    debug!("Sending follow-up to chat {}", chat.id);
    let mut iterated = service.send_message(&chat.id, follow_up).await?;

    if iterated.web_url.is_none() {
        iterated.web_url = chat.web_url;
    }
    if iterated.demo_url.is_none() {
        iterated.demo_url = chat.demo_url;
    }

    Ok(iterated)
}
