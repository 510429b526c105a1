use std::{fs, path::Path, time::Duration};

use toml::{Table, Value};
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const SETTINGS_FILE: &str = "pokedex.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub page_size: u32,
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl Settings {
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = normalize_base_url(&api_base_url.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// Defaults, then `pokedex.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, env_lookup);

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<Table>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable settings file");
            return;
        }
    };

    match file_cfg.get("api_base_url") {
        Some(Value::String(v)) => settings.api_base_url = normalize_base_url(v),
        Some(other) => warn!(key = "api_base_url", value = %other, "ignoring non-string base url"),
        None => {}
    }
    if let Some(v) = file_number("page_size", file_cfg.get("page_size")) {
        apply_page_size(settings, "page_size", &v);
    }
    if let Some(v) = file_number("request_timeout_secs", file_cfg.get("request_timeout_secs")) {
        apply_request_timeout(settings, "request_timeout_secs", &v);
    }
}

// Numeric keys may be written as integers or quoted strings.
fn file_number(key: &str, value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Integer(v) => Some(v.to_string()),
        Value::String(v) => Some(v.clone()),
        other => {
            warn!(key, value = %other, "ignoring non-numeric setting");
            None
        }
    }
}

fn apply_env_overrides(settings: &mut Settings, env_lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env_lookup("POKEDEX_API_BASE_URL") {
        settings.api_base_url = normalize_base_url(&v);
    }
    if let Some(v) = env_lookup("APP__API_BASE_URL") {
        settings.api_base_url = normalize_base_url(&v);
    }

    if let Some(v) = env_lookup("POKEDEX_PAGE_SIZE") {
        apply_page_size(settings, "POKEDEX_PAGE_SIZE", &v);
    }
    if let Some(v) = env_lookup("APP__PAGE_SIZE") {
        apply_page_size(settings, "APP__PAGE_SIZE", &v);
    }

    if let Some(v) = env_lookup("APP__REQUEST_TIMEOUT_SECS") {
        apply_request_timeout(settings, "APP__REQUEST_TIMEOUT_SECS", &v);
    }
}

fn apply_page_size(settings: &mut Settings, key: &str, raw: &str) {
    match raw.trim().parse::<u32>() {
        Ok(parsed) => settings.page_size = parsed.max(1),
        Err(_) => warn!(key, value = raw, "ignoring invalid page size"),
    }
}

// 0 disables the timeout.
fn apply_request_timeout(settings: &mut Settings, key: &str, raw: &str) {
    match raw.trim().parse::<u64>() {
        Ok(0) => settings.request_timeout = None,
        Ok(secs) => settings.request_timeout = Some(Duration::from_secs(secs)),
        Err(_) => warn!(key, value = raw, "ignoring invalid request timeout"),
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
