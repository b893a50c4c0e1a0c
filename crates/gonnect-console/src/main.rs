use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use gonnect_console::feature::{self, ConsoleFeature};
use gonnect_console::Host;
use gonnect_shared::config::AppConfig;
use gonnect_shared::telemetry::init_telemetry;

#[derive(Parser)]
#[command(name = "gonnect-console")]
#[command(version, about = "Operator console for Atlassian Connect tenant installations")]
struct Cli {
    /// Extra configuration file, layered over config/default.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suffix shown in the window title
    #[arg(long, env = "GONNECT_PREFIX")]
    prefix: Option<String>,

    /// Tag of the pre-registered database holding the tenants table
    #[arg(long)]
    db_tag: Option<String>,

    /// Tenants table name
    #[arg(long)]
    table: Option<String>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    color_eyre::install().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let level = match cli.verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };
    // Flushes buffered log lines on drop
    let _guard = init_telemetry(&config.logging, level).context("initialising telemetry")?;

    let result = launch(cli, config).await;
    if let Err(e) = &result {
        error!("fatal: {:#}", e);
    }
    result
}

async fn launch(cli: Cli, config: AppConfig) -> anyhow::Result<ExitCode> {
    let host = Arc::new(Host::from_config(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config,
    ));
    info!(
        bin = host.bin_name(),
        version = host.version(),
        "starting {} v{}",
        feature::NAME,
        feature::VERSION
    );

    let mut console = ConsoleFeature::new();
    if let Some(tag) = cli.db_tag.or(config.console.db_tag) {
        console.set_db_tag(tag);
    }
    if let Some(table) = cli.table.or(config.console.table) {
        console.set_table(table);
    }

    host.check_depends(console.tag(), console.depends())?;
    console.build();

    let prefix = cli.prefix.unwrap_or(config.console.prefix);
    console.setup(&prefix, &host);

    let console = console.make(host)?;
    Ok(console.run().await?)
}
