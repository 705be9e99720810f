use clap::Parser;
use globe::core::config::{self, CliOverrides, GlobeConfig, ThemeName};
use globe::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "globe", about = "Browse the countries of a region in the terminal")]
struct Args {
    /// REST Countries base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Region to list (e.g. europe, asia)
    #[arg(short, long)]
    region: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeName>,

    /// Seconds before the cached list is refetched
    #[arg(long)]
    stale_secs: Option<u64>,

    /// Request timeout in seconds (0 = none)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            base_url: args.base_url,
            region: args.region,
            theme: args.theme,
            stale_secs: args.stale_secs,
            timeout_secs: args.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to globe.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("globe.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        GlobeConfig::default()
    });
    let resolved = config::resolve(&file_config, &args.into());

    log::info!(
        "Globe starting up: region={} base_url={} theme={:?}",
        resolved.region,
        resolved.base_url,
        resolved.theme
    );

    tui::run(resolved)
}
