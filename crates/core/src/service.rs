use serde::{Deserialize, Serialize};

/// Extensions that mark a returned file as the component source.
pub const SOURCE_EXTENSIONS: &[&str] = &[".tsx", ".jsx"];

/// Conventional entry-point names used when no source extension matches.
pub const ENTRY_POINT_NAMES: &[&str] = &["page.js", "index.js"];

/// Keyword searched for (case-insensitive) as the last resort.
pub const COMPONENT_KEYWORD: &str = "component";

/// A file returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// Response to creating a chat or sending a message in one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: String,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default, alias = "demo")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
}

/// Body for opening a new chat.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChatBody<'a> {
    pub message: &'a str,
    pub system: &'a str,
}

/// Body for a follow-up message in an existing chat.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageBody<'a> {
    pub message: &'a str,
}

/// Failure reported by, or while talking to, the generation service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Insufficient resources: {0}")]
    InsufficientResources(String),

    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ServiceError::RateLimited(_))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorDetail>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Classify a non-success HTTP response into a [`ServiceError`].
///
/// The error kind comes from the status code first, then from a `type` field in the
/// body. The message is taken from `error.message` or `message`, falling back to the
/// raw body.
pub fn classify_failure(status: u16, body: &str) -> ServiceError {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();

    let (detail_message, detail_kind) = match envelope.error {
        Some(detail) => (detail.message, detail.kind),
        None => (None, None),
    };

    let kind = detail_kind
        .or(envelope.kind)
        .unwrap_or_default()
        .to_lowercase();

    let message = detail_message
        .or(envelope.message)
        .unwrap_or_else(|| body.trim().to_string());
    let message = if message.is_empty() {
        format!("HTTP {status}")
    } else {
        message
    };

    if status == 429 || kind.contains("rate_limit") {
        ServiceError::RateLimited(message)
    } else if status == 402 || kind.contains("insufficient") {
        ServiceError::InsufficientResources(message)
    } else {
        ServiceError::Api { status, message }
    }
}

/// Pick the main component file from a response.
///
/// Precedence: a recognized source extension, then a conventional entry-point
/// name, then a name containing [`COMPONENT_KEYWORD`]. Within each rule the first
/// file in response order wins.
pub fn select_main_file(files: &[GeneratedFile]) -> Option<&GeneratedFile> {
    files
        .iter()
        .find(|file| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|extension| file.name.ends_with(extension))
        })
        .or_else(|| {
            files
                .iter()
                .find(|file| ENTRY_POINT_NAMES.contains(&file.name.as_str()))
        })
        .or_else(|| {
            files
                .iter()
                .find(|file| file.name.to_lowercase().contains(COMPONENT_KEYWORD))
        })
}
