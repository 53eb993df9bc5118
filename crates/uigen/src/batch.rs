use std::path::PathBuf;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use uigen_core::manifest::{build_manifest, RunManifest};
use uigen_core::naming::{resolve_component_name, unresolved_name_message};
use uigen_core::package::{
    list_prompt_files, load_prompt_document, write_component, write_manifest,
};
use uigen_core::prompt::build_request;
use uigen_core::result::{interpret_response, GenerationResult};

use crate::client::{exchange, GenerationService};
use crate::config::GeneratorConfig;
use crate::prelude::*;
use crate::retry::RetryPolicy;

/// Outcome of a complete batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub manifest: RunManifest,
    pub manifest_path: PathBuf,
    pub results: Vec<GenerationResult>,
}

/// Runs prompt documents through a [`GenerationService`] one at a time.
pub struct BatchRunner<'a, S> {
    service: &'a S,
    config: &'a GeneratorConfig,
    retry: RetryPolicy,
    progress: bool,
}

impl<'a, S: GenerationService> BatchRunner<'a, S> {
    pub fn new(service: &'a S, config: &'a GeneratorConfig) -> Self {
        Self {
            service,
            config,
            retry: RetryPolicy::once_after(config.rate_limit_cooldown),
            progress: false,
        }
    }

    /// Show a spinner while each request is in flight.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Generate every prompt document in the package and write the manifest.
    ///
    /// Fails without writing a manifest when the prompts folder cannot be read or
    /// holds no prompt documents. Individual document failures are recorded in the
    /// manifest instead.
    pub async fn run_batch(&self) -> Result<BatchReport> {
        let prompts_dir = self.config.prompts_path();
        let filenames = list_prompt_files(&prompts_dir)
            .map_err(|e| Error::Configuration(e.to_string()))?;

        info!(
            "Found {} prompt files in {}",
            filenames.len(),
            prompts_dir.display()
        );

        let total = filenames.len();
        let mut results = Vec::with_capacity(total);

        for (index, filename) in filenames.iter().enumerate() {
            if index > 0 && !self.config.request_delay.is_zero() {
                debug!("Waiting {:?} before the next request", self.config.request_delay);
                tokio::time::sleep(self.config.request_delay).await;
            }

            let label = f!("[{}/{}] {}", index + 1, total, filename);
            results.push(self.process(filename, None, &label).await);
        }

        let manifest = build_manifest(
            Utc::now(),
            &self.config.package_path.display().to_string(),
            &results,
        );
        let manifest_path = write_manifest(&self.config.output_path(), &manifest)
            .map_err(|e| Error::Manifest(e.to_string()))?;

        info!(
            "Wrote manifest to {} ({} succeeded, {} failed)",
            manifest_path.display(),
            manifest.successful,
            manifest.failed
        );

        Ok(BatchReport {
            manifest,
            manifest_path,
            results,
        })
    }

    /// Generate one prompt document, optionally iterating on it with `follow_up`.
    ///
    /// A missing prompt document is fatal. No manifest is written.
    pub async fn run_single(
        &self,
        filename: &str,
        follow_up: Option<&str>,
    ) -> Result<GenerationResult> {
        let prompt_path = self.config.prompts_path().join(filename);
        if !prompt_path.is_file() {
            return Err(Error::Configuration(f!(
                "Prompt file not found: {}",
                prompt_path.display()
            ))
            .into());
        }

        Ok(self.process(filename, follow_up, filename).await)
    }

    /// Run a single document through the pipeline. Never fails: every problem is
    /// captured in the returned result.
    async fn process(
        &self,
        filename: &str,
        follow_up: Option<&str>,
        label: &str,
    ) -> GenerationResult {
        let component = resolve_component_name(filename);
        if component.is_empty() {
            let message = unresolved_name_message(filename);
            warn!("{}", message);
            return GenerationResult::failed(filename, message);
        }
        debug!("{} resolves to component {}", filename, component);

        let prompts_dir = self.config.prompts_path();
        let document = match load_prompt_document(&prompts_dir, filename) {
            Ok(document) => document,
            Err(e) => {
                warn!("{}: {}", filename, e);
                return GenerationResult::failed(component, e.to_string());
            }
        };

        let request = match build_request(
            &document,
            &self.config.separator,
            &self.config.system,
            follow_up,
        ) {
            Ok(request) => request,
            Err(e) => {
                warn!("{}: {}", filename, e);
                return GenerationResult::failed(component, e.to_string());
            }
        };

        let spinner = self.spinner(f!("{} Generating {}...", label, component));
        info!("Generating {} from {}", component, filename);

        let response = self
            .retry
            .run(&component, || exchange(self.service, &request))
            .await;

        spinner.finish_and_clear();

        let result = match response {
            Ok(response) => interpret_response(&component, response, &self.config.extension),
            Err(e) => GenerationResult::failed(component, e.to_string()),
        };

        self.persist(result)
    }

    /// Write a successful result's content to the output folder.
    fn persist(&self, result: GenerationResult) -> GenerationResult {
        let output_dir = self.config.output_path();

        let written = match (result.filename(), result.content()) {
            (Some(filename), Some(content)) => Some(
                write_component(&output_dir, filename, content)
                    .map_err(|e| f!("Failed to write {}: {}", filename, e)),
            ),
            _ => None,
        };

        match written {
            Some(Ok(path)) => {
                info!("Wrote {}", path.display());
                result
            }
            Some(Err(message)) => {
                warn!("{}", message);
                result.into_failure(message)
            }
            None => {
                if let Some(error) = result.error() {
                    warn!("{}: {}", result.component, error);
                }
                result
            }
        }
    }

    fn spinner(&self, message: String) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner
    }
}
