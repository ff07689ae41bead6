use anyhow::Result;
use clap::Parser;
use gitbed::app::{format_summary, App};
use gitbed::models::Config;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gitbed")]
#[command(about = "Upload files or URLs to a GitHub repository and print their download URLs")]
struct CliArgs {
    /// Path to the JSON config file (defaults to config.json next to the
    /// executable).
    #[arg(short = 'f', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Local files or http(s) URLs to upload, processed in order.
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitbed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(&config);
    match app.run(&args.files).await {
        Ok(urls) => {
            println!("{}", format_summary(&urls));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
