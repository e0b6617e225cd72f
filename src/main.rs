use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mars_photos::config::{Config, ConfigError};
use mars_photos::container::{AppContainer, DefaultAppContainer};
use mars_photos::logging::init_tracing;
use mars_photos::ui::home::{MarsUiState, MarsViewModel, LOADING_FAILED_TEXT};

#[derive(Parser, Debug)]
#[command(
    name = "mars-photos",
    version,
    about = "Fetch Mars photos and show how many were retrieved"
)]
struct Args {
    /// Config file path (default: ~/.config/mars-photos/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the photo server base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Fetch once, print the result and exit instead of starting the UI
    #[arg(long)]
    once: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = load_config(&args).context("Failed to load configuration")?;
    if let Some(path) = init_tracing(&config.logging) {
        tracing::info!("Logging to {}", path.display());
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let container = DefaultAppContainer::new(&config).context("Failed to set up photo client")?;
    let view_model = MarsViewModel::new(
        container.mars_photos_repository(),
        runtime.handle().clone(),
    );

    if args.once {
        return Ok(runtime.block_on(print_once(view_model)));
    }

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    mars_photos::ui::runtime::run(view_model, tick_rate, runtime.handle().clone())
        .context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    match &args.base_url {
        Some(base_url) => config.with_base_url(base_url.clone()),
        None => Ok(config),
    }
}

/// Wait for the first fetch to settle and report it on stdout/stderr.
async fn print_once(view_model: MarsViewModel) -> ExitCode {
    let mut states = view_model.subscribe();
    let settled = states
        .wait_for(MarsUiState::is_settled)
        .await
        .map(|state| (*state).clone());

    match settled {
        Ok(MarsUiState::Success(summary)) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", LOADING_FAILED_TEXT);
            ExitCode::FAILURE
        }
    }
}
