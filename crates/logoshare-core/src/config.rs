use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BACKEND_URL_ENV: &str = "LOGOSHARE_BACKEND_URL";
pub const BACKEND_ANON_KEY_ENV: &str = "LOGOSHARE_BACKEND_ANON_KEY";

const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub backend_anon_key: Option<String>,
    #[serde(default)]
    pub share_origin: Option<String>,
    #[serde(default)]
    pub simulated_latency_ms: Option<u64>,
    #[serde(default = "default_transactional_writes")]
    pub transactional_writes: bool,
}

fn default_transactional_writes() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            backend_anon_key: None,
            share_origin: None,
            simulated_latency_ms: None,
            transactional_writes: default_transactional_writes(),
        }
    }
}

/// Connection settings for the hosted backend. Both values are opaque to
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub url: String,
    pub anon_key: String,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/logoshare/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("logoshare/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("logoshare\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, then apply environment overrides. A missing or
    /// unparsable file yields defaults.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e)
                    }
                }
            }
        }
        Self::default()
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|v| !v.is_empty()) {
            self.backend_url = Some(url);
        }
        if let Some(key) = lookup(BACKEND_ANON_KEY_ENV).filter(|v| !v.is_empty()) {
            self.backend_anon_key = Some(key);
        }
    }

    /// Backend settings, present only when both the URL and the key are set.
    pub fn backend(&self) -> Option<BackendSettings> {
        match (&self.backend_url, &self.backend_anon_key) {
            (Some(url), Some(key)) => Some(BackendSettings {
                url: url.trim_end_matches('/').to_string(),
                anon_key: key.clone(),
            }),
            _ => None,
        }
    }

    pub fn effective_share_origin(&self) -> &str {
        self.share_origin.as_deref().unwrap_or(DEFAULT_SHARE_ORIGIN)
    }

    pub fn effective_simulated_latency_ms(&self) -> u64 {
        self.simulated_latency_ms.unwrap_or(DEFAULT_SIMULATED_LATENCY_MS)
    }
}
