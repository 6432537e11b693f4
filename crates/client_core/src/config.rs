use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/lead";
pub const DEFAULT_SETTINGS_FILE: &str = "lead_client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_url: String,
    pub notification_ttl_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            notification_ttl_ms: 3000,
        }
    }
}

impl ClientSettings {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |key| {
        std::env::var(key).ok()
    })
}

/// Defaults, then the settings file if present, then environment overrides.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.get("api_url").and_then(toml_string) {
            settings.api_url = v;
        }
        if let Some(v) = file_cfg.get("notification_ttl_ms").and_then(toml_string) {
            settings.notification_ttl_ms = parse_ttl(&v)?;
        }
    }

    if let Some(v) = env("LEAD_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }

    if let Some(v) = env("APP__NOTIFICATION_TTL_MS") {
        settings.notification_ttl_ms = parse_ttl(&v)?;
    }

    settings.api_url = normalize_api_url(&settings.api_url)?;
    Ok(settings)
}

fn toml_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

fn parse_ttl(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid notification ttl '{raw}'"))
}

/// Checks the base URL is absolute http(s) and strips trailing slashes.
pub fn normalize_api_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_API_URL.to_string());
    }

    let parsed = Url::parse(raw).with_context(|| format!("invalid lead api url '{raw}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("lead api url '{raw}' must use http or https");
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
