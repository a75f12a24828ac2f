//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.contacts/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub backend: Option<StoreKind>,
    pub path: Option<String>,
    pub remote_url: Option<String>,
    pub seed: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClientConfig {
    pub search_debounce_ms: Option<u64>,
}

/// Which `ContactStore` backs the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    File,
    Remote,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_REMOTE_URL: &str = "http://127.0.0.1:4000";
pub const DEFAULT_STORE_FILE: &str = "contacts.json";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub bind: String,
    pub store: StoreKind,
    pub store_path: PathBuf,
    pub remote_url: String,
    pub seed: bool,
    pub search_debounce: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.contacts/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".contacts"))
}

/// Returns the path to `~/.contacts/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.contacts/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ContactsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ContactsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ContactsConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ContactsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ContactsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ContactsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Contacts Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# bind = "127.0.0.1:3000"            # Or set CONTACTS_BIND

# [store]
# backend = "memory"                 # "memory", "file" or "remote"; or CONTACTS_STORE
# path = "contacts.json"             # File store, relative to ~/.contacts/; or CONTACTS_STORE_PATH
# remote_url = "http://127.0.0.1:4000"  # Or set CONTACTS_REMOTE_URL
# seed = true                        # Fill an empty memory or file store with sample contacts

# [client]
# search_debounce_ms = 0             # 0 submits a search on every keystroke
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_bind` and `cli_store` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ContactsConfig,
    cli_bind: Option<&str>,
    cli_store: Option<StoreKind>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_bind, cli_store, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ContactsConfig,
    cli_bind: Option<&str>,
    cli_store: Option<StoreKind>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Bind address: CLI → env → config → default
    let bind = cli_bind
        .map(|s| s.to_string())
        .or_else(|| env("CONTACTS_BIND"))
        .or_else(|| config.server.bind.clone())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    // Store kind: CLI → env → config → default
    let store = cli_store
        .or_else(|| {
            env("CONTACTS_STORE").and_then(|s| {
                let kind = StoreKind::from_str(s.trim(), true).ok();
                if kind.is_none() {
                    warn!("Ignoring unknown CONTACTS_STORE value: {}", s);
                }
                kind
            })
        })
        .or(config.store.backend)
        .unwrap_or_default();

    // File store path: env → config → default; relative paths live under ~/.contacts/
    let raw_path = env("CONTACTS_STORE_PATH")
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());
    let store_path = {
        let p = PathBuf::from(&raw_path);
        match config_dir() {
            Some(dir) if p.is_relative() => dir.join(p),
            _ => p,
        }
    };

    let remote_url = env("CONTACTS_REMOTE_URL")
        .or_else(|| config.store.remote_url.clone())
        .unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string());

    let debounce_ms = env("CONTACTS_SEARCH_DEBOUNCE_MS")
        .and_then(|s| s.trim().parse().ok())
        .or(config.client.search_debounce_ms)
        .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);

    ResolvedConfig {
        bind,
        store,
        store_path,
        remote_url,
        seed: config.store.seed.unwrap_or(true),
        search_debounce: Duration::from_millis(debounce_ms),
    }
}
