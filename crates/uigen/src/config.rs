use std::path::PathBuf;
use std::time::Duration;

use uigen_core::prompt::DEFAULT_SEPARATOR;

use crate::prelude::*;

/// Default generation service endpoint
pub const DEFAULT_API_URL: &str = "https://api.v0.dev/v1";

/// Environment variable holding the generation service API key
pub const API_KEY_ENV: &str = "V0_API_KEY";

pub const DEFAULT_PROMPTS_DIR: &str = "prompts";
pub const DEFAULT_OUTPUT_DIR: &str = "components";
pub const DEFAULT_EXTENSION: &str = "tsx";

/// Pause between consecutive requests in a batch
pub const DEFAULT_DELAY_SECS: u64 = 3;

/// Pause before retrying a rate-limited request
pub const DEFAULT_COOLDOWN_SECS: u64 = 60;

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "\
You are generating a single production-ready React component.

Rules:
- Use TypeScript and Tailwind CSS.
- Export the component as the default export.
- Keep everything in one file. Do not split into sub-components in other files.
- Use semantic HTML and accessible markup (labels, alt text, focus states).
- Make the layout responsive from mobile to desktop.
- Use placeholder content that matches the instruction. Do not fetch remote data.";

/// Options describing a design package layout, shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub struct PackageOptions {
    /// Path to the design package
    pub package: PathBuf,

    /// Folder inside the package holding the prompt documents
    #[arg(long, default_value = DEFAULT_PROMPTS_DIR)]
    pub prompts_dir: String,

    /// Folder inside the package receiving the generated components
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Extension of the generated component files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Marker separating a prompt's front matter from the instruction
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    pub marker: String,
}

/// Everything the batch runner needs to know about a run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub package_path: PathBuf,
    pub prompts_dir: String,
    pub output_dir: String,
    pub extension: String,
    pub separator: String,
    pub system: String,
    pub request_delay: Duration,
    pub rate_limit_cooldown: Duration,
}

impl GeneratorConfig {
    /// Configuration with default layout and timings for `package_path`
    pub fn new(package_path: impl Into<PathBuf>) -> Self {
        Self {
            package_path: package_path.into(),
            prompts_dir: DEFAULT_PROMPTS_DIR.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            system: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            request_delay: Duration::from_secs(DEFAULT_DELAY_SECS),
            rate_limit_cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECS),
        }
    }

    pub fn from_options(options: &PackageOptions) -> Self {
        Self {
            prompts_dir: options.prompts_dir.clone(),
            output_dir: options.output_dir.clone(),
            extension: options.extension.clone(),
            separator: options.marker.clone(),
            ..Self::new(options.package.clone())
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        system: Option<String>,
        delay_secs: Option<u64>,
        cooldown_secs: Option<u64>,
    ) -> Self {
        if let Some(system) = system {
            self.system = system;
        }
        if let Some(secs) = delay_secs {
            self.request_delay = Duration::from_secs(secs);
        }
        if let Some(secs) = cooldown_secs {
            self.rate_limit_cooldown = Duration::from_secs(secs);
        }
        self
    }

    pub fn prompts_path(&self) -> PathBuf {
        self.package_path.join(&self.prompts_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.package_path.join(&self.output_dir)
    }
}

/// Generation service connection settings
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_url: String,
    pub api_key: String,
}

impl ServiceConfig {
    /// Build the service configuration, failing when no API key was provided.
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Result<Self, Error> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingCredential(API_KEY_ENV))?;

        Ok(Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_layout() {
        let config = GeneratorConfig::new("design");
        assert_eq!(config.prompts_path(), Path::new("design/prompts"));
        assert_eq!(config.output_path(), Path::new("design/components"));
        assert_eq!(config.request_delay, Duration::from_secs(DEFAULT_DELAY_SECS));
        assert_eq!(
            config.rate_limit_cooldown,
            Duration::from_secs(DEFAULT_COOLDOWN_SECS)
        );
    }

    #[test]
    fn test_with_overrides() {
        let config = GeneratorConfig::new("design").with_overrides(
            Some("Use Vue.".to_string()),
            Some(0),
            None,
        );

        assert_eq!(config.system, "Use Vue.");
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(
            config.rate_limit_cooldown,
            Duration::from_secs(DEFAULT_COOLDOWN_SECS)
        );
    }

    #[test]
    fn test_from_options() {
        let options = PackageOptions {
            package: PathBuf::from("pkg"),
            prompts_dir: "briefs".to_string(),
            output_dir: "out".to_string(),
            extension: "jsx".to_string(),
            marker: "## Prompt".to_string(),
        };

        let config = GeneratorConfig::from_options(&options);
        assert_eq!(config.prompts_path(), Path::new("pkg/briefs"));
        assert_eq!(config.output_path(), Path::new("pkg/out"));
        assert_eq!(config.extension, "jsx");
        assert_eq!(config.separator, "## Prompt");
        assert_eq!(config.system, DEFAULT_SYSTEM_INSTRUCTION);
    }

    #[test]
    fn test_service_config_requires_key() {
        assert!(matches!(
            ServiceConfig::new(DEFAULT_API_URL, None),
            Err(Error::MissingCredential(API_KEY_ENV))
        ));
        assert!(ServiceConfig::new(DEFAULT_API_URL, Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_service_config_trims_url() {
        let config =
            ServiceConfig::new("https://api.v0.dev/v1/", Some("key".to_string())).unwrap();
        assert_eq!(config.api_url, "https://api.v0.dev/v1");
        assert_eq!(config.api_key, "key");
    }
}
