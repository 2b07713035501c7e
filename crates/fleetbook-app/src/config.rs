//! Configuration management for fleetbook
//!
//! Config stored at: ~/.config/fleetbook/config.json (or `$FLEETBOOK_CONFIG`).
//! Environment variables override the file, so secrets can stay out of it.

use fleetbook_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the web server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Directory holding fleets.json and data/ (default: current directory)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the page templates (default: ./templates)
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// Password for the admin view
    #[serde(default)]
    pub admin_password: Option<String>,

    /// Key the list editor validates against
    #[serde(default)]
    pub list_key: Option<String>,

    /// Webhook receiving change requests
    #[serde(default)]
    pub discord_webhook: Option<String>,

    /// Emit JSON log lines instead of plain text
    #[serde(default)]
    pub log_json: bool,

    /// Admin session lifetime in hours
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,

    /// Default CLI output format
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_session_ttl_hours() -> i64 {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_dir: None,
            templates_dir: None,
            admin_password: None,
            list_key: None,
            discord_webhook: None,
            log_json: false,
            session_ttl_hours: default_session_ttl_hours(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleetbook");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("FLEETBOOK_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the tables
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory holding the page templates
    pub fn templates_dir(&self) -> PathBuf {
        self.templates_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("templates"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or default if it does not exist
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup; empty values count as unset
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = var("ADMIN_PASSWORD") {
            self.admin_password = Some(v);
        }
        if let Some(v) = var("LIST_KEY") {
            self.list_key = Some(v);
        }
        if let Some(v) = var("DISCORD_WEBHOOK") {
            self.discord_webhook = Some(v);
        }
        if let Some(v) = var("FLEETBOOK_BIND") {
            self.bind_addr = v;
        }
        if let Some(v) = var("FLEETBOOK_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = var("FLEETBOOK_TEMPLATES_DIR") {
            self.templates_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = var("FLEETBOOK_LOG_JSON").and_then(|v| parse_bool(&v)) {
            self.log_json = v;
        }
        if let Some(v) = var("FLEETBOOK_SESSION_TTL_HOURS").and_then(|v| v.parse().ok()) {
            self.session_ttl_hours = v;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn mask(secret: &Option<String>) -> &'static str {
    match secret {
        Some(_) => "(set)",
        None => "(not set)",
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleetbook Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Bind address:    {}", self.bind_addr)?;
        writeln!(f, "Data dir:        {}", self.data_dir().display())?;
        writeln!(f, "Templates dir:   {}", self.templates_dir().display())?;
        writeln!(f, "Admin password:  {}", mask(&self.admin_password))?;
        writeln!(f, "List key:        {}", mask(&self.list_key))?;
        writeln!(f, "Discord webhook: {}", mask(&self.discord_webhook))?;
        writeln!(f, "JSON logs:       {}", self.log_json)?;
        writeln!(f, "Session TTL:     {}h", self.session_ttl_hours)?;
        writeln!(f, "Output format:   {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.data_dir(), PathBuf::from("."));
        assert_eq!(config.templates_dir(), PathBuf::from("templates"));
        assert!(config.admin_password.is_none());
        assert_eq!(config.session_ttl_hours, 12);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("ADMIN_PASSWORD", "hunter2"),
            ("DISCORD_WEBHOOK", "https://discord.test/api/webhooks/1"),
            ("FLEETBOOK_DATA_DIR", "/srv/fleetbook"),
            ("FLEETBOOK_LOG_JSON", "yes"),
            ("FLEETBOOK_SESSION_TTL_HOURS", "2"),
        ]));

        assert_eq!(config.admin_password.as_deref(), Some("hunter2"));
        assert_eq!(
            config.discord_webhook.as_deref(),
            Some("https://discord.test/api/webhooks/1")
        );
        assert_eq!(config.data_dir(), PathBuf::from("/srv/fleetbook"));
        assert!(config.log_json);
        assert_eq!(config.session_ttl_hours, 2);
        assert!(config.list_key.is_none());
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = Config {
            discord_webhook: Some("https://from-file".to_string()),
            ..Default::default()
        };
        config.apply_overrides(lookup(&[("DISCORD_WEBHOOK", ""), ("FLEETBOOK_LOG_JSON", "maybe")]));
        assert_eq!(config.discord_webhook.as_deref(), Some("https://from-file"));
        assert!(!config.log_json);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            bind_addr: "127.0.0.1:8080".to_string(),
            list_key: Some("abc".to_string()),
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.bind_addr, "127.0.0.1:8080");
        assert_eq!(loaded.list_key.as_deref(), Some("abc"));
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_file_gives_default_and_bad_file_fails() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.bind_addr, default_bind_addr());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ nope").unwrap();
        assert!(Config::load_from(&bad).is_err());
    }

    #[test]
    fn test_display_masks_secrets() {
        let config = Config {
            admin_password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let shown = config.to_string();
        assert!(shown.contains("Admin password:  (set)"));
        assert!(!shown.contains("hunter2"));
    }
}
