//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.finwell/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::catalog::StationId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FinwellConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Skip the menu and open this station on launch.
    pub start_station: Option<StationId>,
    pub currency_symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub trials: Option<u32>,
    pub mean_return_pct: Option<f64>,
    pub volatility_pct: Option<f64>,
    pub inflation_pct: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_TRIALS: u32 = 1000;
pub const DEFAULT_MEAN_RETURN_PCT: f64 = 6.5;
pub const DEFAULT_VOLATILITY_PCT: f64 = 15.0;
pub const DEFAULT_INFLATION_PCT: f64 = 2.5;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_station: Option<StationId>,
    pub currency_symbol: String,
    pub trials: u32,
    pub mean_return_pct: f64,
    pub volatility_pct: f64,
    pub inflation_pct: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_station: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            trials: DEFAULT_TRIALS,
            mean_return_pct: DEFAULT_MEAN_RETURN_PCT,
            volatility_pct: DEFAULT_VOLATILITY_PCT,
            inflation_pct: DEFAULT_INFLATION_PCT,
        }
    }
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

/// Returns the path to `~/.finwell/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".finwell").join("config.toml"))
}

/// Load config from `~/.finwell/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FinwellConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FinwellConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FinwellConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FinwellConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FinwellConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Finwell Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_station = "foundation"   # "education", "foundation", "protection", "investment"
# currency_symbol = "$"

# [simulation]
# trials = 1000                  # Monte Carlo trial count
# mean_return_pct = 6.5          # expected annual return, percent
# volatility_pct = 15.0          # annual return standard deviation, percent
# inflation_pct = 2.5            # assumed annual inflation, percent
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
/// `cli_station` is from the `--station` flag (None = not specified).
pub fn resolve(config: &FinwellConfig, cli_station: Option<StationId>) -> ResolvedConfig {
    // Start station: CLI → env → config → none (menu)
    let start_station = cli_station
        .or_else(|| {
            std::env::var("FINWELL_STATION")
                .ok()
                .and_then(|s| StationId::from_name(&s.to_lowercase()))
        })
        .or(config.general.start_station);

    // Currency symbol: env → config → default
    let currency_symbol = std::env::var("FINWELL_CURRENCY")
        .ok()
        .or_else(|| config.general.currency_symbol.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    ResolvedConfig {
        start_station,
        currency_symbol,
        trials: config.simulation.trials.unwrap_or(DEFAULT_TRIALS).max(1),
        mean_return_pct: config
            .simulation
            .mean_return_pct
            .unwrap_or(DEFAULT_MEAN_RETURN_PCT),
        volatility_pct: config
            .simulation
            .volatility_pct
            .unwrap_or(DEFAULT_VOLATILITY_PCT)
            .max(0.0),
        inflation_pct: config
            .simulation
            .inflation_pct
            .unwrap_or(DEFAULT_INFLATION_PCT),
    }
}
