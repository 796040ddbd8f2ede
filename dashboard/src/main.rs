use anyhow::Context;
use assets::loader::load_assets;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use view::bridge::DataBridge;
use workflow::config::SiteConfig;
use workflow::runner::Runner;

mod assets;
mod view;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Park-or-drive site data driver")]
struct Args {
    /// Build the site model once and emit an offline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a site config from YAML
    #[arg(long)]
    site: Option<PathBuf>,
    /// Directory holding the static data assets
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Seed for the mock hourly-rate enrichment
    #[arg(long, default_value_t = 0)]
    rate_seed: u64,
    /// Keep the HTTP data bridge alive for page fetches
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let site_config = if let Some(path) = args.site {
        SiteConfig::load(path)?
    } else {
        SiteConfig::from_args(args.data_dir, args.rate_seed)
    };

    let runner = Runner::new(site_config.clone());
    let bridge = DataBridge::new(Arc::new(runner.clone()));
    let assets = load_assets(&site_config.data_dir);
    let model = runner.execute(&assets);

    bridge.publish(&model)?;

    if args.offline {
        println!(
            "Offline build -> weekly points {}, locations {}, grid charts {}, markers {}, lots {}",
            model.weekly.len(),
            model.locations.len(),
            model.grid.len(),
            model.markers.len(),
            model.lots.len()
        );
        bridge.publish_status("Offline site model ready.");

        let report = format!(
            "weekly={} locations={} grid={} markers={} lots={}\n",
            model.weekly.len(),
            model.locations.len(),
            model.grid.len(),
            model.markers.len(),
            model.lots.len()
        );
        let report_path = PathBuf::from("tools/data/offline_site.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }

    if args.serve {
        bridge.publish_status("HTTP data bridge running (Ctrl+C to stop)...");
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
