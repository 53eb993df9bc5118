use std::path::Path;

use colored::Colorize;
use uigen_core::manifest::{ComponentSummary, RunManifest};
use uigen_core::plan::PlanEntry;
use uigen_core::result::GenerationResult;

use crate::prelude::{println, *};

fn status_cell(success: bool) -> String {
    if success {
        "ok".green().bold().to_string()
    } else {
        "failed".red().bold().to_string()
    }
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Render the outcome of a batch run as a table followed by a summary line.
pub fn display_manifest(manifest: &RunManifest, manifest_path: &Path) {
    println!(
        "\n{} {}\n",
        "Generated components for".bold().cyan(),
        manifest.package_path.bright_white()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Component".bold().cyan(),
        "Status".bold().cyan(),
        "File".bold().cyan(),
        "Chat".bold().cyan(),
        "Error".bold().cyan()
    ]);

    for ComponentSummary {
        name,
        success,
        filename,
        chat_url,
        error,
        ..
    } in &manifest.components
    {
        table.add_row(prettytable::row![
            name.bright_white(),
            status_cell(*success),
            optional(filename.as_deref()),
            optional(chat_url.as_deref()),
            optional(error.as_deref()).yellow()
        ]);
    }

    table.printstd();

    let summary = f!(
        "{} of {} components generated, {} failed",
        manifest.successful,
        manifest.total_components,
        manifest.failed
    );
    if manifest.failed == 0 {
        println!("\n{}", summary.green().bold());
    } else {
        println!("\n{}", summary.yellow().bold());
    }
    println!("Manifest: {}", manifest_path.display());
}

/// Render the outcome of a single-document run.
pub fn display_result(result: &GenerationResult, output_dir: &Path) {
    println!(
        "\n{} {}",
        result.component.bold().cyan(),
        status_cell(result.success())
    );

    let mut table = new_table();

    if let Some(filename) = result.filename() {
        table.add_row(prettytable::row![
            "File".bold().cyan(),
            output_dir.join(filename).display().to_string()
        ]);
    }
    if let Some(url) = result.chat_url() {
        table.add_row(prettytable::row!["Chat".bold().cyan(), url]);
    }
    if let Some(url) = result.demo_url() {
        table.add_row(prettytable::row!["Demo".bold().cyan(), url]);
    }
    if let Some(error) = result.error() {
        table.add_row(prettytable::row!["Error".bold().cyan(), error.yellow()]);
    }

    table.printstd();
}

/// Render a dry-run plan.
pub fn display_plan(entries: &[PlanEntry], output_dir: &Path) {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "Prompt".bold().cyan(),
        "Component".bold().cyan(),
        "Output".bold().cyan(),
        "Prompt size".bold().cyan()
    ]);

    for entry in entries {
        let size = match (&entry.prompt_chars, &entry.error) {
            (Some(chars), _) => f!("{chars} chars"),
            (None, Some(error)) => error.red().to_string(),
            (None, None) => "-".to_string(),
        };

        table.add_row(prettytable::row![
            entry.prompt_file,
            entry.component.bright_white(),
            output_dir.join(&entry.output_file).display().to_string(),
            size
        ]);
    }

    table.printstd();
    println!("\n{} prompt files", entries.len());
}
