use uigen_core::package::{list_prompt_files, load_prompt_document};
use uigen_core::plan::{plan_document, PlanEntry};

use crate::config::{GeneratorConfig, PackageOptions};
use crate::prelude::{eprintln, println, *};
use crate::report;

#[derive(Debug, clap::Args)]
pub struct PlanOptions {
    #[clap(flatten)]
    pub package: PackageOptions,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: PlanOptions, global: crate::Global) -> Result<()> {
    let config = GeneratorConfig::from_options(&options.package);

    if global.verbose {
        eprintln!("Prompts: {}", config.prompts_path().display());
    }

    let entries = plan_data(&config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        report::display_plan(&entries, &config.output_path());
    }

    Ok(())
}

/// Preview every prompt document in the package without contacting the service.
pub fn plan_data(config: &GeneratorConfig) -> Result<Vec<PlanEntry>> {
    let prompts_dir = config.prompts_path();
    let filenames =
        list_prompt_files(&prompts_dir).map_err(|e| Error::Configuration(e.to_string()))?;

    info!("Planning {} prompt files", filenames.len());

    filenames
        .iter()
        .map(|filename| {
            let document = load_prompt_document(&prompts_dir, filename)
                .map_err(|e| eyre!("Failed to read {}: {}", filename, e))?;
            Ok(plan_document(
                &document,
                &config.separator,
                &config.extension,
            ))
        })
        .collect()
}
