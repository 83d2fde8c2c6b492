//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file into the process environment when one exists
//! 2. Attempts to load from environment variables
//! 3. If `DAYLOG_DB_PATH` is missing, falls back to loading from file
//! 4. Searches several paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DAYLOG_DB_PATH`: Database file path (required; `:memory:` for an
//!   in-memory database)
//! - `DAYLOG_DB_POOL_SIZE`: Connection pool size
//! - `DAYLOG_LOG_LEVEL`: Tracing filter directives
//! - `DAYLOG_LOG_JSON`: Emit JSON logs (true/false)
//! - `DAYLOG_DEFAULT_TIME_ZONE`: IANA zone used when a request names none
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./daylog.json` or `./daylog.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use daylog_domain::constants::{DEFAULT_DB_POOL_SIZE, DEFAULT_LOG_LEVEL};
use daylog_domain::{Config, DatabaseConfig, DaylogError, LoggingConfig, RangeConfig, Result};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DaylogError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A variable holds an invalid value
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `DAYLOG_DB_PATH` is required; the rest fall back to defaults.
///
/// # Errors
/// Returns `DaylogError::Config` if `DAYLOG_DB_PATH` is missing or a
/// numeric variable doesn't parse.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("DAYLOG_DB_PATH")?;
    let pool_size = match std::env::var("DAYLOG_DB_POOL_SIZE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|e| DaylogError::Config(format!("Invalid pool size: {}", e)))?,
        Err(_) => DEFAULT_DB_POOL_SIZE,
    };

    let level = std::env::var("DAYLOG_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());
    let json = env_bool("DAYLOG_LOG_JSON", false);

    let default_time_zone =
        std::env::var("DAYLOG_DEFAULT_TIME_ZONE").ok().filter(|zone| !zone.trim().is_empty());

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size },
        logging: LoggingConfig { level, json },
        ranges: RangeConfig { default_time_zone },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches several locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DaylogError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DaylogError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_path().ok_or_else(|| {
            DaylogError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DaylogError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DaylogError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DaylogError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DaylogError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Find the first configuration file that exists
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_path() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "daylog.json",
        "daylog.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter().flat_map(|dir| NAMES.iter().map(move |name| dir.join(name))).find(|p| p.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| DaylogError::Config(format!("Missing required environment variable: {}", key)))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::Builder;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 5] = [
        "DAYLOG_DB_PATH",
        "DAYLOG_DB_POOL_SIZE",
        "DAYLOG_LOG_LEVEL",
        "DAYLOG_LOG_JSON",
        "DAYLOG_DEFAULT_TIME_ZONE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("DAYLOG_TEST_BOOL_YES", "YES");
        std::env::set_var("DAYLOG_TEST_BOOL_OFF", "off");

        assert!(env_bool("DAYLOG_TEST_BOOL_YES", false));
        assert!(!env_bool("DAYLOG_TEST_BOOL_OFF", true));
        assert!(env_bool("DAYLOG_TEST_BOOL_MISSING", true));

        std::env::remove_var("DAYLOG_TEST_BOOL_YES");
        std::env::remove_var("DAYLOG_TEST_BOOL_OFF");
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DAYLOG_DB_PATH", "/tmp/daylog.db");
        std::env::set_var("DAYLOG_DB_POOL_SIZE", "8");
        std::env::set_var("DAYLOG_LOG_LEVEL", "debug");
        std::env::set_var("DAYLOG_LOG_JSON", "true");
        std::env::set_var("DAYLOG_DEFAULT_TIME_ZONE", "Asia/Tokyo");

        let config = load_from_env().expect("config from env");
        clear_env();

        assert_eq!(config.database.path, "/tmp/daylog.db");
        assert_eq!(config.database.pool_size, 8);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.ranges.default_time_zone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn test_load_from_env_applies_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DAYLOG_DB_PATH", ":memory:");
        let config = load_from_env().expect("config from env");
        clear_env();

        assert_eq!(config.database.pool_size, DEFAULT_DB_POOL_SIZE);
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.ranges.default_time_zone.is_none());
    }

    #[test]
    fn test_load_from_env_missing_path() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DaylogError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("DAYLOG_DB_PATH", "/tmp/daylog.db");
        std::env::set_var("DAYLOG_DB_POOL_SIZE", "many");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(DaylogError::Config(_))));
    }

    #[test]
    fn test_load_from_file_toml() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(
            br#"
[database]
path = "recipes.db"
pool_size = 2

[logging]
level = "daylog_core=debug"

[ranges]
default_time_zone = "America/Chicago"
"#,
        )
        .unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).expect("load toml");

        assert_eq!(config.database.path, "recipes.db");
        assert_eq!(config.database.pool_size, 2);
        assert_eq!(config.logging.level, "daylog_core=debug");
        assert_eq!(config.ranges.default_time_zone.as_deref(), Some("America/Chicago"));
    }

    #[test]
    fn test_load_from_file_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{ "database": { "path": "recipes.db" }, "logging": { "json": true } }"#)
            .unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).expect("load json");

        assert_eq!(config.database.pool_size, DEFAULT_DB_POOL_SIZE);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/daylog.toml")));
        assert!(matches!(result, Err(DaylogError::Config(_))));
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let result = parse_config(r#"{ "database": "#, Path::new("broken.json"));
        assert!(matches!(result, Err(DaylogError::Config(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("path: x", Path::new("config.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
