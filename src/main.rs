use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use quotegen::backend::GraphQlBackend;
use quotegen::config::Config;
use quotegen::logging::init_tracing;
use quotegen::ui;
use quotegen::ui::events::EventHandler;
use quotegen::worker::{Worker, WorkerCommand};

#[derive(Debug, Parser)]
#[command(name = "quotegen", about = "Terminal inspirational quote generator")]
struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path).context("loading config")?,
        None => Config::load().context("loading config")?,
    };

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;

    let backend = GraphQlBackend::from_config(&config).context("building backend client")?;
    let worker = Worker::new(Arc::new(backend), config.backend.query_name.clone());

    let events = EventHandler::new(Duration::from_millis(250));
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(16);
    runtime.spawn(worker.run(command_rx, events.sender()));

    // One-shot counter sync on startup; no polling afterwards.
    command_tx
        .blocking_send(WorkerCommand::FetchCounter)
        .context("starting counter sync")?;

    ui::run(&config, command_tx, events)?;

    // Dropping the runtime aborts in-flight backend calls; their results
    // have nowhere to go once the UI loop has exited.
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
