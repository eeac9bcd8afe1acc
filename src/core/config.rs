//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hellodash/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolution run before the logger exists (the log lives in the
//! configured data dir), so neither logs directly. What they would have said
//! comes back as `ConfigSource` and `ResolvedConfig::warnings`, and `main`
//! logs it once logging is up.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::screen::ScreenId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HellodashConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub host: HostConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_screen: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Where `report.txt` is written (user visible).
    pub report_dir: Option<PathBuf>,
    /// App-private directory for the diagnostic file and the log.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HostConfig {
    pub open_command: Option<CommandSpec>,
    pub share_command: Option<CommandSpec>,
}

/// A host command, written either as one whitespace-separated string or as
/// an argument array (needed when an argument contains spaces).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CommandSpec {
    Line(String),
    Args(Vec<String>),
}

impl CommandSpec {
    /// Program followed by its arguments. A `Line` is split on whitespace,
    /// so quotes in it are not interpreted.
    pub fn argv(&self) -> Vec<String> {
        match self {
            CommandSpec::Line(line) => line.split_whitespace().map(str::to_string).collect(),
            CommandSpec::Args(args) => args.clone(),
        }
    }
}

impl From<&str> for CommandSpec {
    fn from(line: &str) -> Self {
        CommandSpec::Line(line.to_string())
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const APP_DIR_NAME: &str = "hellodash";

#[cfg(target_os = "macos")]
pub const DEFAULT_OPEN_COMMAND: &str = "open";
#[cfg(target_os = "macos")]
pub const DEFAULT_SHARE_COMMAND: &str = "open -R";

#[cfg(target_os = "windows")]
pub const DEFAULT_OPEN_COMMAND: &str = "explorer";
#[cfg(target_os = "windows")]
pub const DEFAULT_SHARE_COMMAND: &str = "explorer";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_SHARE_COMMAND: &str = "xdg-open";

/// `<documents>/hellodash`, falling back to the home directory, then the working directory.
pub fn default_report_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME))
}

/// `<local data>/hellodash`, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME))
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: ScreenId,
    pub report_dir: PathBuf,
    pub data_dir: PathBuf,
    pub open_command: CommandSpec,
    pub share_command: CommandSpec,
    /// Problems found while resolving; each fell back to a default.
    pub warnings: Vec<String>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_screen: Option<String>,
    pub report_dir: Option<PathBuf>,
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

/// Where the file config came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// Read from an existing file.
    File(PathBuf),
    /// No file existed; a commented default was written.
    Generated(PathBuf),
    /// No file existed and the default could not be written.
    GenerateFailed { path: PathBuf, error: io::Error },
    /// No home directory, so there is no config path.
    NoHome,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, error } => {
                warn!("Failed to write default config to {}: {}", path.display(), error)
            }
            ConfigSource::NoHome => warn!("Could not determine home directory, using default config"),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.hellodash/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hellodash").join("config.toml"))
}

/// Load config from `path`, or from `~/.hellodash/config.toml` when `path` is None.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HellodashConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<(HellodashConfig, ConfigSource), ConfigError> {
    let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
        return Ok((HellodashConfig::default(), ConfigSource::NoHome));
    };

    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(error) => ConfigSource::GenerateFailed { path, error },
        };
        return Ok((HellodashConfig::default(), source));
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok((config, ConfigSource::File(path)))
}

pub fn parse_config(contents: &str) -> Result<HellodashConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> io::Result<()> {
    let default_content = r#"# hellodash Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "greeting"          # "greeting", "dashboard" or "report"

# [storage]
# report_dir = "/home/me/Documents/hellodash"   # Or set HELLODASH_REPORT_DIR
# data_dir = "/home/me/.local/share/hellodash"  # Or set HELLODASH_DATA_DIR

# [host]
# The file path is appended as the last argument. A plain string is split on
# whitespace (quotes are not interpreted); use an array when an argument
# contains spaces, e.g. open_command = ["open", "-a", "Text Edit"].
# open_command = "xdg-open"          # Or set HELLODASH_OPEN_COMMAND
# share_command = "xdg-open"         # Or set HELLODASH_SHARE_COMMAND
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HellodashConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with(
    config: &HellodashConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start screen: CLI → env → config → default
    let start_token = cli
        .start_screen
        .clone()
        .or_else(|| env("HELLODASH_START_SCREEN"))
        .or_else(|| config.general.start_screen.clone());
    let mut warnings = Vec::new();
    let start_screen = match start_token {
        Some(token) => token.parse::<ScreenId>().unwrap_or_else(|e| {
            warnings.push(format!("{}; starting on greeting", e));
            ScreenId::Greeting
        }),
        None => ScreenId::default(),
    };

    // Report directory: CLI → env → config → default
    let report_dir = cli
        .report_dir
        .clone()
        .or_else(|| env("HELLODASH_REPORT_DIR").map(PathBuf::from))
        .or_else(|| config.storage.report_dir.clone())
        .unwrap_or_else(default_report_dir);

    // Data directory: env → config → default
    let data_dir = env("HELLODASH_DATA_DIR")
        .map(PathBuf::from)
        .or_else(|| config.storage.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    let open_command = env("HELLODASH_OPEN_COMMAND")
        .map(CommandSpec::Line)
        .or_else(|| config.host.open_command.clone())
        .unwrap_or_else(|| DEFAULT_OPEN_COMMAND.into());

    let share_command = env("HELLODASH_SHARE_COMMAND")
        .map(CommandSpec::Line)
        .or_else(|| config.host.share_command.clone())
        .unwrap_or_else(|| DEFAULT_SHARE_COMMAND.into());

    ResolvedConfig {
        start_screen,
        report_dir,
        data_dir,
        open_command,
        share_command,
        warnings,
    }
}
