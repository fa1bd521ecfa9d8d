mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::ParseError, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "drhub-cli")]
#[command(about = "DevRel hub maintenance commands")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the configured scraper command once
    Refresh,
    /// Check every link in the README and report broken ones
    VerifyLinks {
        /// README to scan instead of the configured candidates
        #[arg(long)]
        readme: Option<PathBuf>,
    },
    /// Print the data quality report for the current scraper output
    Analyze,
    /// Write every generated visualization dataset as JSON
    SeedVisualizations {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output directory (defaults to `<generated dir>/visualizations`)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the whitepaper Markdown to HTML
    RenderWhitepaper {
        /// Markdown source (defaults to `DRHUB_WHITEPAPER_PATH`)
        #[arg(long)]
        source: Option<PathBuf>,
        /// Output directory (defaults to `DRHUB_GENERATED_DIR`)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("drhub-cli: no command given; see --help");
        return Ok(());
    };

    let config = drhub_core::load_app_config()?;
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = log_filter(rust_log.as_deref(), &config.log_level)?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match command {
        Commands::Refresh => commands::run_refresh(&config).await,
        Commands::VerifyLinks { readme } => commands::run_verify_links(&config, readme).await,
        Commands::Analyze => commands::run_analyze(&config).await,
        Commands::SeedVisualizations { seed, out } => {
            let out = out.unwrap_or_else(|| config.generated_dir.join("visualizations"));
            let written = commands::seed_visualizations(&out, seed).await?;
            println!("wrote {} datasets to {}", written.len(), out.display());
            Ok(())
        }
        Commands::RenderWhitepaper { source, out_dir } => {
            let source = source.unwrap_or_else(|| config.whitepaper_path.clone());
            let out_dir = out_dir.unwrap_or_else(|| config.generated_dir.clone());
            let path = drhub_resources::write_whitepaper(&source, &out_dir).await?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// `RUST_LOG` directives when they parse, otherwise the configured level.
fn log_filter(rust_log: Option<&str>, log_level: &str) -> Result<EnvFilter, ParseError> {
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => EnvFilter::try_new(log_level),
    }
}

#[cfg(test)]
mod tests;
