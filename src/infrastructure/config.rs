use serde::Deserialize;

pub const DEFAULT_ONMS_URL: &str = "http://localhost:8980/opennms";
pub const DEFAULT_GRAFANA_URL: &str = "http://localhost:3000";
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Optional settings file, without extension (toml, yaml or json)
const SETTINGS_FILE: &str = "config/ksc2grafana";
const ENV_PREFIX: &str = "KSC2GRAFANA";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub onms: ServiceSettings,
    pub grafana: ServiceSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServiceSettings {
    pub url: String,
    pub user: String,
    pub password: String,
}

/// Load settings from defaults, the optional settings file, `KSC2GRAFANA__*`
/// environment variables and finally the explicit overrides (CLI flags).
pub fn load_settings(overrides: &[(&str, String)]) -> anyhow::Result<Settings> {
    let builder = config::Config::builder()
        .set_default("onms.url", DEFAULT_ONMS_URL)?
        .set_default("onms.user", DEFAULT_USER)?
        .set_default("onms.password", DEFAULT_PASSWORD)?
        .set_default("grafana.url", DEFAULT_GRAFANA_URL)?
        .set_default("grafana.user", DEFAULT_USER)?
        .set_default("grafana.password", DEFAULT_PASSWORD)?
        .add_source(config::File::with_name(SETTINGS_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

    let builder = overrides
        .iter()
        .try_fold(builder, |builder, (key, value)| builder.set_override(*key, value.as_str()))?;

    Ok(builder.build()?.try_deserialize()?)
}
