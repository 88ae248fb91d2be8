//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, GenerateOutput, RenderOptions, VerifyOutput};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "cloudbuild-gen")]
#[command(version)]
#[command(
    about = "Generate and verify per-solution Cloud Build configurations",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the manifest for a single solution
    #[clap(visible_alias = "r")]
    Render {
        /// Solution name substituted into the template
        solution: String,
        /// Template file (default: built-in template)
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// YAML file with a list of extra configs ({name, env_vars})
        #[arg(short, long = "extra-configs")]
        extra_configs: Option<PathBuf>,
    },
    /// Write manifests for every solution and remove stale ones
    #[clap(visible_alias = "g")]
    Generate(RepositoryArgs),
    /// Check that manifests on disk match the template
    #[clap(visible_alias = "v")]
    Verify(RepositoryArgs),
}

#[derive(Args)]
struct RepositoryArgs {
    /// Repository root (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,
    /// Print a JSON report instead of status lines
    #[arg(long)]
    json: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Render { solution, template, extra_configs } => {
            run_render(RenderOptions { solution, template, extra_configs }).map(|_| 0)
        }
        Commands::Generate(args) => run_generate(&args),
        Commands::Verify(args) => run_verify(&args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_render(options: RenderOptions) -> Result<(), AppError> {
    let rendered = api::render(&options)?;
    println!("{}", rendered);
    Ok(())
}

fn run_generate(args: &RepositoryArgs) -> Result<i32, AppError> {
    let output = match &args.root {
        Some(root) => api::generate_at(root)?,
        None => api::generate()?,
    };

    if args.json {
        print_json(&output)?;
    } else {
        print_generate_summary(&output);
    }

    Ok(if output.is_success() { 0 } else { 1 })
}

fn run_verify(args: &RepositoryArgs) -> Result<i32, AppError> {
    let output = match &args.root {
        Some(root) => api::verify_at(root)?,
        None => api::verify()?,
    };

    if args.json {
        print_json(&output)?;
    } else {
        print_verify_summary(&output);
    }

    Ok(if output.is_clean() { 0 } else { 1 })
}

fn print_json(value: &impl serde::Serialize) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::ParseError {
        what: "report JSON".into(),
        details: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}

fn print_generate_summary(output: &GenerateOutput) {
    for path in &output.written {
        println!("✅ Wrote {}", path);
    }
    for path in &output.removed {
        println!("🗑️  Removed {}", path);
    }
    for failure in &output.failed {
        println!("❌ Failed {}: {}", failure.path, failure.reason);
    }
    if output.written.is_empty() && output.failed.is_empty() {
        println!("⚠️  No solutions found");
    }
}

fn print_verify_summary(output: &VerifyOutput) {
    for report in &output.manifests {
        let marker = if report.status == api::ManifestStatus::UpToDate { "✅" } else { "❌" };
        println!("{} {} ({}): {}", marker, report.solution, report.status.label(), report.path);
        if let Some(error) = &report.error {
            println!("   {}", error);
        }
    }

    if output.is_clean() {
        println!("✅ All manifests are up to date");
    } else {
        println!("❌ Manifests are out of date. Run 'cloudbuild-gen generate' to regenerate.");
    }
}
