use dns_dispatch_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        local = %config.local.address,
        local_port = config.local.port,
        endpoint = %config.remote.endpoint,
        timeout_secs = config.query.timeout_secs,
        family_strategy = ?config.query.family_strategy,
        "Configuration loaded"
    );

    Ok(config)
}
