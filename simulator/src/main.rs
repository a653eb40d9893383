use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::GuiBridge;
use loadcore::{RangeSelector, DEFAULT_HORIZON_MINUTES};
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{WorkflowConfig, DEFAULT_BRIDGE_PORT};
use workflow::runner::Runner;

mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Synthetic power-load analytics driver")]
struct Args {
    /// Aggregate every range once and append a report line
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Series length in minutes
    #[arg(long, default_value_t = DEFAULT_HORIZON_MINUTES)]
    horizon: usize,
    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,
    /// Range shown on startup: month, year or all
    #[arg(long, default_value = "month")]
    range: RangeSelector,
    #[arg(long, default_value_t = DEFAULT_BRIDGE_PORT)]
    port: u16,
    /// Keep the HTTP bridge alive for range selections
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.horizon, args.seed, args.range, args.port)
    };

    let runner = Arc::new(Runner::new(workflow_config.clone()));
    let gui_bridge = GuiBridge::new(runner.clone());

    gui_bridge.publish_status("Starting big data generation...");
    let samples = runner.regenerate()?;
    gui_bridge.publish_status(&format!("Generated {} data points.", samples));

    let initial = runner.analytics(workflow_config.default_range);
    gui_bridge.publish(&initial);

    if args.offline {
        let views: Vec<_> = RangeSelector::ALL
            .iter()
            .map(|&selector| runner.analytics(selector))
            .collect();

        for view in &views {
            println!(
                "Offline run -> {}: total {} kWh, peak {} kW, points {}",
                view.range, view.total_display, view.peak_display, view.points_display
            );
        }

        let status = runner.status();
        let report = json!({
            "series_start": status.series_start,
            "series_length": status.series_length,
            "ranges": views
                .iter()
                .map(|view| json!({
                    "range": view.range,
                    "total_energy_kwh": view.total_energy_kwh,
                    "peak_power_kw": view.peak_power_kw,
                    "sample_count": view.sample_count,
                }))
                .collect::<Vec<_>>(),
        });
        let report_path = PathBuf::from("tools/data/offline_analytics.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&report_path)
            .with_context(|| format!("opening report {}", report_path.display()))?;
        writeln!(file, "{}", report)?;
    }
    if args.serve {
        gui_bridge.serve(workflow_config.bridge_port)?;
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
