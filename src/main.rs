use anyhow::Result;
use clap::Parser;
use snipeit_exporter::{config::Config, server};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// Snipe-IT instance url, e.g. https://develop.snipeitapp.com (overrides config)
    #[arg(long, env = "SNIPEIT_URL")]
    target: Option<String>,

    /// Snipe-IT API key (overrides config)
    #[arg(long, env = "SNIPEIT_API_KEY", hide_env_values = true)]
    apikey: Option<String>,

    /// Port to listen on for metrics (default 9877)
    #[arg(short, long, env = "EXPORTER_PORT")]
    port: Option<u16>,

    /// Address to bind to
    #[arg(short, long, env = "EXPORTER_ADDR")]
    addr: Option<String>,

    /// Status label names to report (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    asset_statuses: Vec<String>,

    /// Category names to report (comma separated)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    asset_categories: Vec<String>,

    /// Report all consumables; `--report-consumables=false` turns it off (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    report_consumables: Option<bool>,

    /// Report all components; `--report-components=false` turns it off (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    report_components: Option<bool>,

    /// Report per-user asset counts; `--report-user-assets=false` turns it off (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    report_user_assets: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Snipe-IT Prometheus Exporter v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Override with CLI arguments if provided
    apply_overrides(args, &mut config);

    config.validate()?;

    info!("Configuration loaded successfully");
    info!("Snipe-IT url: {}", config.snipeit.url);
    info!(
        "Statuses: {:?}, categories: {:?}",
        config.metrics.asset_statuses, config.metrics.asset_categories
    );
    info!(
        "Metrics endpoint: http://{}:{}/metrics",
        config.server.addr, config.server.port
    );

    // Start the metrics server
    if let Err(e) = server::start(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn apply_overrides(args: Args, config: &mut Config) {
    if let Some(target) = args.target {
        config.snipeit.url = target;
    }
    if let Some(api_key) = args.apikey {
        config.snipeit.api_key = secrecy::SecretString::new(api_key.into());
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }
    if !args.asset_statuses.is_empty() {
        config.metrics.asset_statuses = args.asset_statuses;
    }
    if !args.asset_categories.is_empty() {
        config.metrics.asset_categories = args.asset_categories;
    }
    if let Some(report) = args.report_consumables {
        config.metrics.report_consumables = report;
    }
    if let Some(report) = args.report_components {
        config.metrics.report_components = report;
    }
    if let Some(report) = args.report_user_assets {
        config.metrics.report_user_assets = report;
    }
}
