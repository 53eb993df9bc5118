use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::result::GenerationResult;

/// File name of the run manifest inside the output directory.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Per-component entry in the run manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    pub success: bool,
    pub filename: Option<String>,
    pub chat_url: Option<String>,
    pub demo_url: Option<String>,
    pub error: Option<String>,
}

impl From<&GenerationResult> for ComponentSummary {
    fn from(result: &GenerationResult) -> Self {
        Self {
            name: result.component.clone(),
            success: result.success(),
            filename: result.filename().map(str::to_string),
            chat_url: result.chat_url().map(str::to_string),
            demo_url: result.demo_url().map(str::to_string),
            error: result.error().map(str::to_string),
        }
    }
}

/// Summary of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunManifest {
    pub generated: String,
    pub package_path: String,
    pub total_components: usize,
    pub successful: usize,
    pub failed: usize,
    pub components: Vec<ComponentSummary>,
}

/// Aggregate ordered results into a manifest.
pub fn build_manifest(
    generated: DateTime<Utc>,
    package_path: &str,
    results: &[GenerationResult],
) -> RunManifest {
    let components: Vec<ComponentSummary> = results.iter().map(ComponentSummary::from).collect();
    let successful = components.iter().filter(|c| c.success).count();

    RunManifest {
        generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
        package_path: package_path.to_string(),
        total_components: components.len(),
        successful,
        failed: components.len() - successful,
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Outcome;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    fn generated(component: &str) -> GenerationResult {
        GenerationResult {
            component: component.to_string(),
            outcome: Outcome::Generated {
                filename: format!("{component}.tsx"),
                content: "export default function X() {}".to_string(),
                chat_url: Some(format!("https://v0.dev/chat/{component}")),
                demo_url: None,
            },
        }
    }

    #[test]
    fn test_build_manifest_counts() {
        let results = vec![
            generated("Hero"),
            GenerationResult::failed("Footer", "API error [500]: boom"),
            generated("Navbar"),
        ];

        let manifest = build_manifest(timestamp(), "./design", &results);

        assert_eq!(manifest.generated, "2025-03-14T09:26:53.000Z");
        assert_eq!(manifest.package_path, "./design");
        assert_eq!(manifest.total_components, 3);
        assert_eq!(manifest.successful, 2);
        assert_eq!(manifest.failed, 1);
        let names: Vec<&str> = manifest.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Hero", "Footer", "Navbar"]);
    }

    #[test]
    fn test_build_manifest_all_failed() {
        let results = vec![
            GenerationResult::failed("Hero", "Rate limit exceeded: x"),
            GenerationResult::failed("Footer", "Rate limit exceeded: x"),
        ];

        let manifest = build_manifest(timestamp(), "pkg", &results);
        assert_eq!(manifest.successful, 0);
        assert_eq!(manifest.failed, 2);
    }

    #[test]
    fn test_manifest_json_schema() {
        let results = vec![generated("Hero"), GenerationResult::failed("Faq", "nope")];
        let manifest = build_manifest(timestamp(), "pkg", &results);
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["packagePath"], "pkg");
        assert_eq!(json["totalComponents"], 2);
        assert_eq!(json["successful"], 1);
        assert_eq!(json["failed"], 1);

        let hero = &json["components"][0];
        assert_eq!(hero["name"], "Hero");
        assert_eq!(hero["success"], true);
        assert_eq!(hero["filename"], "Hero.tsx");
        assert_eq!(hero["chatUrl"], "https://v0.dev/chat/Hero");
        assert!(hero["demoUrl"].is_null());
        assert!(hero["error"].is_null());

        let faq = &json["components"][1];
        assert_eq!(faq["success"], false);
        assert!(faq["filename"].is_null());
        assert_eq!(faq["error"], "nope");
    }
}
