use crate::batch::BatchRunner;
use crate::client::V0Client;
use crate::config::{
    GeneratorConfig, PackageOptions, ServiceConfig, DEFAULT_API_URL, DEFAULT_COOLDOWN_SECS,
    DEFAULT_DELAY_SECS,
};
use crate::prelude::{eprintln, println, *};
use crate::report;

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    #[clap(flatten)]
    pub package: PackageOptions,

    /// Generate a single prompt file (e.g. "hero.md") instead of the whole package
    #[arg(long, value_name = "FILE")]
    pub single: Option<String>,

    /// Follow-up instruction sent in the same conversation before saving the result
    #[arg(long, value_name = "TEXT", requires = "single")]
    pub iterate: Option<String>,

    /// Override the system instruction sent with every prompt
    #[arg(long)]
    pub system: Option<String>,

    /// Seconds to wait between requests
    #[arg(long, env = "UIGEN_DELAY_SECS", default_value_t = DEFAULT_DELAY_SECS)]
    pub delay_secs: u64,

    /// Seconds to wait before retrying a rate-limited request
    #[arg(long, env = "UIGEN_COOLDOWN_SECS", default_value_t = DEFAULT_COOLDOWN_SECS)]
    pub cooldown_secs: u64,

    /// Generation service base URL
    #[arg(long, env = "V0_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Generation service API key
    #[arg(long, env = "V0_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    // Credentials are checked before touching the package.
    let service_config = ServiceConfig::new(&options.api_url, options.api_key.clone())?;

    let config = GeneratorConfig::from_options(&options.package).with_overrides(
        options.system.clone(),
        Some(options.delay_secs),
        Some(options.cooldown_secs),
    );

    if global.verbose {
        eprintln!("API URL: {}", service_config.api_url);
        eprintln!("Prompts: {}", config.prompts_path().display());
        eprintln!("Output: {}", config.output_path().display());
        eprintln!(
            "Delay: {:?}, rate limit cooldown: {:?}",
            config.request_delay, config.rate_limit_cooldown
        );
    }

    let client = V0Client::new(&service_config)?;
    let runner = BatchRunner::new(&client, &config).with_progress(!options.json);

    match &options.single {
        Some(filename) => {
            let result = runner
                .run_single(filename, options.iterate.as_deref())
                .await?;

            if options.json {
                let summary = uigen_core::manifest::ComponentSummary::from(&result);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                report::display_result(&result, &config.output_path());
            }
        }
        None => {
            let batch = runner.run_batch().await?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&batch.manifest)?);
            } else {
                report::display_manifest(&batch.manifest, &batch.manifest_path);
            }
        }
    }

    Ok(())
}
