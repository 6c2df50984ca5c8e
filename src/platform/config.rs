// HookLog - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolved platform paths for HookLog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/hooklog/ or %APPDATA%\HookLog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[api]` section.
    pub api: ApiSection,
    /// `[filter]` section.
    pub filter: FilterSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[api]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Backend base URL, e.g. "https://shop.example.com/api".
    pub base_url: Option<String>,
    /// Webhook list endpoint path, appended to the base URL.
    pub endpoint: Option<String>,
    /// Records per page.
    pub per_page: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[filter]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FilterSection {
    /// Gateway names offered in the filter bar.
    pub gateways: Option<Vec<String>>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- API --
    pub base_url: String,
    pub endpoint: String,
    pub per_page: u32,
    pub timeout_secs: u64,

    // -- Filter --
    pub gateways: Vec<String>,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            endpoint: constants::DEFAULT_WEBHOOK_ENDPOINT.to_string(),
            per_page: constants::DEFAULT_PER_PAGE,
            timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            gateways: constants::DEFAULT_GATEWAYS
                .iter()
                .map(|g| g.to_string())
                .collect(),
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Read and parse a config file without validating values.
pub fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();
    let mut out_of_range = |field: &str, value: String, expected: String| {
        warnings.push(
            ConfigError::ValueOutOfRange {
                field: field.to_string(),
                value,
                expected,
            }
            .to_string(),
        );
    };

    // -- API: base_url --
    if let Some(url) = raw.api.base_url {
        let trimmed = url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            config.base_url = trimmed.trim_end_matches('/').to_string();
        } else {
            out_of_range(
                "api.base_url",
                url.clone(),
                "an http:// or https:// URL".to_string(),
            );
        }
    }

    // -- API: endpoint --
    if let Some(endpoint) = raw.api.endpoint {
        if endpoint.trim().is_empty() {
            out_of_range(
                "api.endpoint",
                endpoint,
                "a non-empty path".to_string(),
            );
        } else {
            config.endpoint = endpoint.trim().to_string();
        }
    }

    // -- API: per_page --
    if let Some(per_page) = raw.api.per_page {
        if (constants::MIN_PER_PAGE..=constants::MAX_PER_PAGE).contains(&per_page) {
            config.per_page = per_page;
        } else {
            out_of_range(
                "api.per_page",
                per_page.to_string(),
                format!(
                    "{}-{} (default {})",
                    constants::MIN_PER_PAGE,
                    constants::MAX_PER_PAGE,
                    constants::DEFAULT_PER_PAGE
                ),
            );
        }
    }

    // -- API: timeout_secs --
    if let Some(secs) = raw.api.timeout_secs {
        if (constants::MIN_REQUEST_TIMEOUT_SECS..=constants::MAX_REQUEST_TIMEOUT_SECS)
            .contains(&secs)
        {
            config.timeout_secs = secs;
        } else {
            out_of_range(
                "api.timeout_secs",
                secs.to_string(),
                format!(
                    "{}-{} (default {})",
                    constants::MIN_REQUEST_TIMEOUT_SECS,
                    constants::MAX_REQUEST_TIMEOUT_SECS,
                    constants::DEFAULT_REQUEST_TIMEOUT_SECS
                ),
            );
        }
    }

    // -- Filter: gateways --
    if let Some(gateways) = raw.filter.gateways {
        // First occurrence wins; later repeats are dropped wherever they sit.
        let mut seen = HashSet::new();
        let cleaned: Vec<String> = gateways
            .iter()
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty() && seen.insert(g.clone()))
            .collect();
        if cleaned.is_empty() || cleaned.len() > constants::MAX_GATEWAYS {
            out_of_range(
                "filter.gateways",
                format!("{} entries", cleaned.len()),
                format!("1-{} gateway names", constants::MAX_GATEWAYS),
            );
        } else {
            config.gateways = cleaned;
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => out_of_range(
                "ui.theme",
                other.to_string(),
                "\"dark\" or \"light\"".to_string(),
            ),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            out_of_range(
                "logging.level",
                level.clone(),
                "error, warn, info, debug, trace".to_string(),
            );
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config() {
        let file = write_config(
            r#"
            [api]
            base_url = "https://shop.example.com/api/"
            per_page = 50
            timeout_secs = 10

            [filter]
            gateways = ["Razorpay", " stripe ", ""]

            [ui]
            theme = "light"

            [logging]
            level = "DEBUG"
            "#,
        );
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.endpoint, constants::DEFAULT_WEBHOOK_ENDPOINT);
        assert_eq!(config.per_page, 50);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.gateways, vec!["razorpay", "stripe"]);
        assert!(!config.dark_mode);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let file = write_config(
            r#"
            [api]
            base_url = "ftp://nope"
            per_page = 0
            timeout_secs = 9999

            [ui]
            theme = "purple"
            "#,
        );
        let (config, warnings) = load_config(file.path());
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(config.per_page, constants::DEFAULT_PER_PAGE);
        assert_eq!(config.timeout_secs, constants::DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(config.dark_mode);
    }

    #[test]
    fn test_unparseable_file_gives_defaults_with_warning() {
        let file = write_config("[api\nbase_url = ");
        let (config, warnings) = load_config(file.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let file = write_config("[future]\nsetting = true\n[api]\nper_page = 10\n");
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty());
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn test_repeated_gateways_keep_first_occurrence() {
        let file = write_config(
            "[filter]\ngateways = [\"razorpay\", \"payu\", \"Razorpay\", \" PAYU \", \"phonepe\"]\n",
        );
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.gateways, vec!["razorpay", "payu", "phonepe"]);
    }
}
