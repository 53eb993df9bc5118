use serde::Serialize;

use crate::naming::{output_filename, resolve_component_name, unresolved_name_message};
use crate::prompt::{extract_prompt, PromptDocument};

/// What a run would do with one prompt document, without contacting the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub prompt_file: String,
    pub component: String,
    pub output_file: String,
    /// Length of the extracted instruction in characters.
    pub prompt_chars: Option<usize>,
    pub error: Option<String>,
}

pub fn plan_document(document: &PromptDocument, separator: &str, extension: &str) -> PlanEntry {
    let component = resolve_component_name(&document.filename);
    let prompt = extract_prompt(&document.content, separator);

    PlanEntry {
        prompt_file: document.filename.clone(),
        output_file: output_filename(&component, extension),
        prompt_chars: prompt.map(|p| p.chars().count()),
        error: if component.is_empty() {
            Some(unresolved_name_message(&document.filename))
        } else if prompt.is_none() {
            Some(format!("No prompt found in {}", document.filename))
        } else {
            None
        },
        component,
    }
}
