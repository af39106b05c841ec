// PlantSafe - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::{PlantSources, ToxicityFilter};
use crate::core::sort::SortColumn;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PlantSafe configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/plantsafe/ or %APPDATA%\PlantSafe\config\)
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
    /// `[data]` section.
    pub data: DataSection,
    /// `[search]` section.
    pub search: SearchSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Directory holding the two plant files.
    pub dir: Option<String>,
    /// Toxic plant file name or path (relative paths resolve under `dir`).
    pub toxic_file: Option<String>,
    /// Non-toxic plant file name or path.
    pub nontoxic_file: Option<String>,
    /// Image directory (relative paths resolve under `dir`).
    pub images_dir: Option<String>,
}

/// `[search]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Initial toxicity selector: "all", "toxic" or "safe".
    pub default_toxicity: Option<String>,
    /// Initial sort column: "name", "scientific", "family" or "toxicity".
    pub default_sort: Option<String>,
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
    // -- Data --
    /// Directory holding the plant files.
    pub data_dir: PathBuf,
    /// Toxic plant file name, resolved against `data_dir`.
    pub toxic_file: PathBuf,
    /// Non-toxic plant file name, resolved against `data_dir`.
    pub nontoxic_file: PathBuf,
    /// Image directory, resolved against `data_dir`.
    pub images_dir: PathBuf,

    // -- Search --
    pub default_toxicity: ToxicityFilter,
    pub default_sort: Option<SortColumn>,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            toxic_file: PathBuf::from(constants::TOXIC_FILE_NAME),
            nontoxic_file: PathBuf::from(constants::NONTOXIC_FILE_NAME),
            images_dir: PathBuf::from(constants::DEFAULT_IMAGES_DIR_NAME),
            default_toxicity: ToxicityFilter::All,
            default_sort: None,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Source files, with relative names resolved under `data_dir`.
    pub fn sources(&self) -> PlantSources {
        PlantSources::new(
            self.data_dir.join(&self.toxic_file),
            self.data_dir.join(&self.nontoxic_file),
        )
    }

    /// Image directory resolved under `data_dir`.
    pub fn images_path(&self) -> PathBuf {
        self.data_dir.join(&self.images_dir)
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            warnings.push(format!(
                "{err}. Using defaults. See config.example.toml for the expected format."
            ));
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

/// Validate each field, accumulating all problems rather than stopping at
/// the first.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Data: paths --
    if let Some(dir) = non_empty(raw.data.dir) {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(file) = non_empty(raw.data.toxic_file) {
        config.toxic_file = PathBuf::from(file);
    }
    if let Some(file) = non_empty(raw.data.nontoxic_file) {
        config.nontoxic_file = PathBuf::from(file);
    }
    if let Some(dir) = non_empty(raw.data.images_dir) {
        config.images_dir = PathBuf::from(dir);
    }

    // -- Search: default_toxicity --
    if let Some(ref value) = raw.search.default_toxicity {
        match value.parse::<ToxicityFilter>() {
            Ok(t) => config.default_toxicity = t,
            Err(_) => warnings.push(invalid(
                "[search] default_toxicity",
                value,
                "\"all\", \"toxic\" or \"safe\"",
                "all",
            )),
        }
    }

    // -- Search: default_sort --
    if let Some(ref value) = raw.search.default_sort {
        match value.parse::<SortColumn>() {
            Ok(c) => config.default_sort = Some(c),
            Err(_) => warnings.push(invalid(
                "[search] default_sort",
                value,
                "\"name\", \"scientific\", \"family\" or \"toxicity\"",
                "file order",
            )),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(invalid(
                "[logging] level",
                level,
                "error, warn, info, debug, trace",
                "info",
            ));
        }
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid(field: &str, value: &str, expected: &str, fallback: &str) -> String {
    let err = ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    };
    format!("{err}. Using default ({fallback}).")
}
