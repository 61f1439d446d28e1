use gympass_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up, since the level itself comes from the config.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        database = %config.database.path,
        max_distance_km = config.check_in.max_distance_km,
        daily_limit_scope = %config.check_in.daily_limit_scope,
        timezone = %config.check_in.timezone,
        nearby_radius_km = config.gyms.nearby_radius_km,
        "Configuration loaded"
    );
}
