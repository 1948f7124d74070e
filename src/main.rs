use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mvvm_reactor::config::Config;
use mvvm_reactor::demo::DemoViewModel;
use mvvm_reactor::logging::init_tracing;
use mvvm_reactor::view::DemoView;

#[derive(Parser, Debug)]
#[command(name = "mvvm-reactor", version, about = "Run the reactor flow demo screen")]
struct Args {
    /// Config file (default: ~/.config/mvvm-reactor/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of data requests to submit
    #[arg(long)]
    requests: Option<u32>,
    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    fetch_delay_ms: Option<u64>,
    /// Report every request as failed
    #[arg(long)]
    simulate_failure: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(requests) = self.requests {
            config.demo.requests = requests;
        }
        if let Some(delay) = self.fetch_delay_ms {
            config.demo.fetch_delay_ms = delay;
        }
        if self.simulate_failure {
            config.demo.simulate_failure = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    config.validate()?;
    init_tracing(&config.logging);

    let view = DemoView::new(DemoViewModel::new(&config.demo))?;
    tokio::select! {
        result = run(&view, config.demo.requests) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted"),
    }
    view.dispose();
    Ok(())
}

async fn run(view: &DemoView, requests: u32) -> Result<()> {
    for request in 1..=requests {
        let state = view.load().await.context("View disposed before loading finished")?;
        tracing::info!(request, is_loading = state.is_loading, "Request finished");
    }
    Ok(())
}
