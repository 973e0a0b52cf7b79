use anyhow::Context;
use ferrous_mockdns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)
        .with_context(|| format!("Failed to load configuration ({})", config_path.unwrap_or("default")))?;
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Logged once the subscriber is installed.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        listen = %config.server.listen_address,
        udp = config.server.udp,
        tcp = config.server.tcp,
        records = %config.records.path,
        auto_reload = config.records.watch_enabled(),
        profile = %config.records.profile,
        "Configuration loaded"
    );
}
