use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use archiver_core::{Config, run};

/// Top-level CLI struct. The job is single-action, so there are no
/// subcommands: one invocation is one run.
#[derive(Debug, Parser)]
#[command(
    name = "weather-archiver",
    version,
    about = "Collects current weather for configured cities and archives it to S3"
)]
pub struct Cli {
    /// Logging verbosity. Allowed values are 'trace', 'debug', 'info', 'warn', and 'error'
    /// (case insensitive). RUST_LOG takes precedence when set.
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.to_string()));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        let config = Config::from_env().context("Failed to load configuration")?;
        let report = run::execute(config).await?;

        if let Some(key) = &report.object_key {
            info!("Archived {} of {} cities under {key}", report.records, report.cities);
        }

        Ok(())
    }
}
