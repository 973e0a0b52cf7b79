use anyhow::Context;
use clap::{ArgAction, Parser};
use ferrous_mockdns_domain::{CliOverrides, Config, ResponderProfile};
use ferrous_mockdns_infrastructure::records::RecordFileWatcher;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "ferrous-mockdns")]
#[command(version)]
#[command(about = "Ferrous MockDNS - configurable DNS responder for tests")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// JSON record file
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<String>,

    /// Listen on TCP
    #[arg(short = 't', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", action = ArgAction::Set)]
    tcp: Option<bool>,

    /// Listen on UDP
    #[arg(short = 'u', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", action = ArgAction::Set)]
    udp: Option<bool>,

    /// Listen address (host:port, [v6]:port or :port)
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Reload the record file when it changes
    #[arg(short = 'a', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true", action = ArgAction::Set)]
    auto_reload: Option<bool>,

    /// Responder profile (full, basic)
    #[arg(long, value_name = "PROFILE")]
    profile: Option<ResponderProfile>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            records_path: self.file.clone(),
            tcp: self.tcp,
            udp: self.udp,
            listen_address: self.listen.clone(),
            auto_reload: self.auto_reload,
            profile: self.profile,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    info!("Starting Ferrous MockDNS v{}", env!("CARGO_PKG_VERSION"));

    let result = run(&config).await;
    if let Err(e) = &result {
        error!("Fatal error, exiting: {:#}", e);
    }
    result
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let services = di::DnsServices::new(config);

    services
        .reload
        .execute()
        .await
        .context("Failed to load record file at startup")?;

    info!(records = services.store.len(), "Initial records published");

    let _watcher = if config.records.watch_enabled() {
        Some(RecordFileWatcher::spawn(
            &config.records.path,
            services.reload.clone(),
        ))
    } else {
        if config.records.auto_reload {
            info!(profile = %config.records.profile, "Auto-reload not supported by profile");
        }
        info!("Auto-reload disabled, serving startup records");
        None
    };

    if !config.has_listeners() {
        warn!("Neither UDP nor TCP is enabled, nothing to serve");
        return Ok(());
    }

    server::start_dns_server(&config.server, services.handler.clone()).await?;

    info!("Server shutdown complete");
    Ok(())
}
