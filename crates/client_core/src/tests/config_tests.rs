use super::*;

use std::{
    env,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let seq = NEXT_FILE.fetch_add(1, Ordering::SeqCst);
    let path = env::temp_dir().join(format!("pokedex_settings_test_{suffix}_{seq}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(Path::new("/nonexistent/pokedex.toml"), no_env);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, "https://pokeapi.co/api/v2");
    assert_eq!(settings.page_size, 50);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "api_base_url = \"http://localhost:9000/api/\"\npage_size = \"12\"\nrequest_timeout_secs = \"5\"\n",
    );

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.api_base_url, "http://localhost:9000/api");
    assert_eq!(settings.page_size, 12);
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(5)));

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let path = temp_settings_file("page_size = \"12\"\n");

    let settings = load_settings_from(&path, |key| match key {
        "POKEDEX_PAGE_SIZE" => Some("20".to_string()),
        "APP__PAGE_SIZE" => Some("30".to_string()),
        "POKEDEX_API_BASE_URL" => Some("http://mirror.example/v2/".to_string()),
        _ => None,
    });
    assert_eq!(settings.page_size, 30);
    assert_eq!(settings.api_base_url, "http://mirror.example/v2");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn invalid_numbers_are_ignored_and_zero_page_size_is_clamped() {
    let settings = load_settings_from(Path::new("/nonexistent/pokedex.toml"), |key| match key {
        "POKEDEX_PAGE_SIZE" => Some("lots".to_string()),
        "APP__REQUEST_TIMEOUT_SECS" => Some("soon".to_string()),
        _ => None,
    });
    assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(settings.request_timeout, Some(DEFAULT_REQUEST_TIMEOUT));

    let settings = load_settings_from(Path::new("/nonexistent/pokedex.toml"), |key| match key {
        "APP__PAGE_SIZE" => Some("0".to_string()),
        "APP__REQUEST_TIMEOUT_SECS" => Some("0".to_string()),
        _ => None,
    });
    assert_eq!(settings.page_size, 1);
    assert_eq!(settings.request_timeout, None);
}

#[test]
fn builder_overrides_normalize_values() {
    let settings = Settings::default()
        .with_api_base_url("  http://127.0.0.1:8080/ ")
        .with_page_size(0);
    assert_eq!(settings.api_base_url, "http://127.0.0.1:8080");
    assert_eq!(settings.page_size, 1);
}

#[test]
fn file_accepts_unquoted_integers() {
    let path = temp_settings_file(
        "api_base_url = \"http://localhost:9000/api\"\npage_size = 12\nrequest_timeout_secs = 7\n",
    );

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.api_base_url, "http://localhost:9000/api");
    assert_eq!(settings.page_size, 12);
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(7)));

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn bad_file_value_only_drops_its_own_key() {
    let path = temp_settings_file(
        "api_base_url = \"http://localhost:9000/api\"\npage_size = true\nrequest_timeout_secs = -3\n",
    );

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.api_base_url, "http://localhost:9000/api");
    assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(settings.request_timeout, Some(DEFAULT_REQUEST_TIMEOUT));

    fs::remove_file(path).expect("cleanup");
}
