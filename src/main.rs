//! Earnings Charts CLI
//!
//! Command-line interface for the dashboard charts:
//! - Fetch chart data for a period and render both charts
//! - Render charts from a local payload file
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use earnings_charts::{
    generate_default_config, ChartDataClient, ChartDataPayload, ChartManager, ChartSlot, Config,
    FileRenderer, LoggingConfig, MemoryRenderer, Period, Renderer,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "earnings-charts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Revenue and hours charts for the earnings dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch chart data and redraw both charts
    Update {
        /// Aggregation period (daily, weekly, monthly)
        #[arg(short, long, default_value = "daily")]
        period: Period,
        /// Endpoint path or absolute URL (default: from config)
        #[arg(long)]
        base_url: Option<String>,
        /// Directory chart definitions are written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Keep charts in memory and print them instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Render charts from a local payload file
    Render {
        /// Path to a JSON payload ({labels, revenue, hours})
        input: PathBuf,
        /// Only render this slot (revenue, hours)
        #[arg(short, long)]
        slot: Option<ChartSlot>,
        /// Directory chart definitions are written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::find_default);
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };
    init_logging(&config.logging);

    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    match cli.command {
        Commands::Update {
            period,
            base_url,
            output_dir,
            dry_run,
        } => {
            let client = ChartDataClient::new(config.endpoint.client_config())?;
            let targets = config.charts.targets()?;

            if dry_run {
                let renderer =
                    MemoryRenderer::with_surfaces([targets.revenue.clone(), targets.hours.clone()]);
                let mut manager = ChartManager::new(renderer, client).targets(targets);
                manager.update_charts(period, base_url.as_deref()).await;
                print_memory_charts(&manager)?;
                ensure_rendered(&manager, ChartSlot::all())?;
            } else {
                let dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.charts.output_dir));
                let renderer =
                    FileRenderer::new(dir.clone(), [targets.revenue.clone(), targets.hours.clone()]);
                let mut manager = ChartManager::new(renderer, client).targets(targets);
                manager.update_charts(period, base_url.as_deref()).await;
                ensure_rendered(&manager, ChartSlot::all())?;
                print_written(&manager);
            }
        }

        Commands::Render {
            input,
            slot,
            output_dir,
        } => {
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {:?}", input))?;
            let payload: ChartDataPayload = serde_json::from_str(&content)
                .with_context(|| format!("Invalid chart data in {:?}", input))?;

            let client = ChartDataClient::new(config.endpoint.client_config())?;
            let targets = config.charts.targets()?;
            let dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.charts.output_dir));
            let renderer =
                FileRenderer::new(dir.clone(), [targets.revenue.clone(), targets.hours.clone()]);
            let mut manager = ChartManager::new(renderer, client).targets(targets);

            let slots: Vec<ChartSlot> = match slot {
                Some(slot) => vec![slot],
                None => ChartSlot::all().to_vec(),
            };
            for slot in &slots {
                manager.initialize(*slot, &payload, None);
            }

            ensure_rendered(&manager, &slots)?;
            print_written(&manager);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("earnings_charts={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Fail when any requested slot ended up without a chart
fn ensure_rendered<R: Renderer>(
    manager: &ChartManager<R>,
    slots: &[ChartSlot],
) -> anyhow::Result<()> {
    let missing: Vec<String> = slots
        .iter()
        .filter(|slot| manager.handle(**slot).is_none())
        .map(|slot| slot.to_string())
        .collect();

    if !missing.is_empty() {
        bail!("No chart rendered for: {}", missing.join(", "));
    }
    Ok(())
}

fn print_written(manager: &ChartManager<FileRenderer>) {
    for slot in ChartSlot::all() {
        if let Some(handle) = manager.handle(*slot) {
            println!(
                "{:<8} {:>4} points -> {}",
                slot.to_string(),
                handle.dataset_len,
                manager.renderer().path_for(&handle.target_id).display()
            );
        }
    }
}

fn print_memory_charts(manager: &ChartManager<MemoryRenderer>) -> anyhow::Result<()> {
    let mut charts = serde_json::Map::new();
    for slot in ChartSlot::all() {
        let Some(handle) = manager.handle(*slot) else {
            continue;
        };
        if let Some(live) = manager.renderer().instance(handle.id) {
            charts.insert(slot.to_string(), serde_json::to_value(&live.config)?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&charts)?);
    Ok(())
}
