use crate::naming::output_filename;
use crate::service::{select_main_file, ChatResponse};

/// Message recorded when a response carries no recognizable component file.
pub const NO_COMPONENT_FILE: &str = "No component file found in response";

/// What happened to a single prompt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated {
        filename: String,
        content: String,
        chat_url: Option<String>,
        demo_url: Option<String>,
    },
    Failed {
        error: String,
        chat_url: Option<String>,
        demo_url: Option<String>,
    },
}

/// The outcome of generating one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub component: String,
    pub outcome: Outcome,
}

impl GenerationResult {
    pub fn failed(component: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            outcome: Outcome::Failed {
                error: error.into(),
                chat_url: None,
                demo_url: None,
            },
        }
    }

    pub fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Generated { .. })
    }

    pub fn filename(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Generated { filename, .. } => Some(filename),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Generated { content, .. } => Some(content),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn chat_url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Generated { chat_url, .. } | Outcome::Failed { chat_url, .. } => {
                chat_url.as_deref()
            }
        }
    }

    pub fn demo_url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Generated { demo_url, .. } | Outcome::Failed { demo_url, .. } => {
                demo_url.as_deref()
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Generated { .. } => None,
            Outcome::Failed { error, .. } => Some(error),
        }
    }

    /// Turn a success into a failure, keeping the reference URLs.
    ///
    /// Used when the generated content could not be persisted.
    pub fn into_failure(self, error: impl Into<String>) -> Self {
        let (chat_url, demo_url) = match self.outcome {
            Outcome::Generated {
                chat_url, demo_url, ..
            }
            | Outcome::Failed {
                chat_url, demo_url, ..
            } => (chat_url, demo_url),
        };

        Self {
            component: self.component,
            outcome: Outcome::Failed {
                error: error.into(),
                chat_url,
                demo_url,
            },
        }
    }
}

/// Interpret a service response for `component`.
///
/// The output filename only depends on the component name and `extension`, never on
/// the name of the file the service returned.
pub fn interpret_response(
    component: &str,
    response: ChatResponse,
    extension: &str,
) -> GenerationResult {
    let ChatResponse {
        web_url,
        demo_url,
        files,
        ..
    } = response;

    let outcome = match select_main_file(&files) {
        Some(file) => Outcome::Generated {
            filename: output_filename(component, extension),
            content: file.content.clone(),
            chat_url: web_url,
            demo_url,
        },
        None => Outcome::Failed {
            error: NO_COMPONENT_FILE.to_string(),
            chat_url: web_url,
            demo_url,
        },
    };

    GenerationResult {
        component: component.to_string(),
        outcome,
    }
}
