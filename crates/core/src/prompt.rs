/// Marker separating a prompt document's front matter from the instruction payload.
pub const DEFAULT_SEPARATOR: &str = "---";

/// A prompt document read from the design package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    /// File name including extension (e.g. `hero.md`).
    pub filename: String,
    /// Raw text content of the file.
    pub content: String,
}

/// A single request for the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The instruction payload extracted from the prompt document.
    pub prompt: String,
    /// System-level instruction sent alongside the payload.
    pub system: String,
    /// Optional second message sent in the same conversation.
    pub follow_up: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("No prompt found in {0}")]
    EmptyPrompt(String),
}

/// Extract the instruction payload from raw document text.
///
/// Everything after the first `separator` is the payload; later occurrences of the
/// separator are kept as part of it. Without a separator the whole text is used.
/// Returns `None` when the payload is empty after trimming.
pub fn extract_prompt<'a>(raw: &'a str, separator: &str) -> Option<&'a str> {
    let payload = match raw.split_once(separator) {
        Some((_, rest)) if !separator.is_empty() => rest,
        _ => raw,
    };

    let payload = payload.trim();

    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

/// Build a generation request from a prompt document.
pub fn build_request(
    document: &PromptDocument,
    separator: &str,
    system: &str,
    follow_up: Option<&str>,
) -> Result<GenerationRequest, ExtractError> {
    let prompt = extract_prompt(&document.content, separator)
        .ok_or_else(|| ExtractError::EmptyPrompt(document.filename.clone()))?;

    Ok(GenerationRequest {
        prompt: prompt.to_string(),
        system: system.to_string(),
        follow_up: follow_up
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
    })
}
