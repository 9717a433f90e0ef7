//! sdpipe - Stable Diffusion image generation CLI.

mod cli;

use std::process;

use clap::Parser;
use futures::StreamExt;
use tracing_subscriber::EnvFilter;

use sdpipe::settings::discover_config_path;
use sdpipe::{ImageGenPipeline, Pipeline, PipelineError, Settings, TurnRequest};

use crate::cli::{validate_count, validate_size_token, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Route logs to stderr, keeping stdout clean for the generated markdown.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sdpipe={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<(), PipelineError> {
    // Load settings: config file, then env overrides, then CLI flags
    let config_path = discover_config_path(cli.config.as_deref());
    let mut settings = Settings::load(&config_path)?;
    settings.apply_env_overrides();

    // Resolve prompt
    let prompt = cli.resolve_prompt().map_err(PipelineError::Io)?;

    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(size) = cli.size {
        settings.image_size = size;
    }
    if let Some(count) = cli.count {
        settings.num_images = count;
    }
    if let Some(secs) = cli.timeout_secs {
        settings.timeout_secs = Some(secs);
    }

    // Validate parameters
    validate_count(settings.num_images).map_err(PipelineError::Config)?;
    validate_size_token(&settings.image_size).map_err(PipelineError::Config)?;

    let pipeline = ImageGenPipeline::new(settings);
    pipeline.on_startup();

    let mut chunks = pipeline.pipe(TurnRequest::new(prompt)).await?;
    while let Some(chunk) = chunks.next().await {
        print!("{}", chunk?);
    }

    pipeline.on_shutdown();
    Ok(())
}
