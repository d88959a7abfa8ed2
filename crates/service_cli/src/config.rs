//! CLI configuration management
//!
//! Handles loading pricing inputs from a TOML file, environment variables and
//! command-line overrides.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::traits::DEFAULT_PCT_SHIFT;
use pricer_core::types::{ContractSpec, MarketInputs, OptionType, PricingError};
use pricer_pricing::mc::MonteCarloConfig;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "VANILLA_LOG_LEVEL";

/// Environment variable overriding the Monte Carlo execution mode
pub const ENV_MC_PARALLEL: &str = "VANILLA_MC_PARALLEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[market]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketSection {
    pub spot: f64,
    pub rate: f64,
    pub volatility: f64,
    pub dividend_rate: f64,
}

impl Default for MarketSection {
    fn default() -> Self {
        let market = MarketInputs::default();
        Self {
            spot: market.spot,
            rate: market.rate,
            volatility: market.volatility,
            dividend_rate: market.dividend_rate,
        }
    }
}

/// `[contract]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContractSection {
    pub strike: f64,
    pub expiry: f64,
    pub option_type: OptionType,
}

impl Default for ContractSection {
    fn default() -> Self {
        Self {
            strike: 100.0,
            expiry: 1.0,
            option_type: OptionType::Call,
        }
    }
}

/// `[lattice]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatticeSection {
    pub n_time_points: usize,
}

impl Default for LatticeSection {
    fn default() -> Self {
        Self {
            n_time_points: 1000,
        }
    }
}

/// `[monte_carlo]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonteCarloSection {
    pub n_scenarios: usize,
    pub n_steps: usize,
    pub seed: u64,
    pub parallel: bool,
    pub quantity: f64,
    pub n_workers: Option<usize>,
}

impl Default for MonteCarloSection {
    fn default() -> Self {
        Self {
            n_scenarios: 10_000,
            n_steps: 50,
            seed: 42,
            parallel: false,
            quantity: 1.0,
            n_workers: None,
        }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Relative spot shift for finite-difference delta
    pub delta_shift: f64,
    pub market: MarketSection,
    pub contract: ContractSection,
    pub lattice: LatticeSection,
    pub monte_carlo: MonteCarloSection,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            delta_shift: DEFAULT_PCT_SHIFT,
            market: MarketSection::default(),
            contract: ContractSection::default(),
            lattice: LatticeSection::default(),
            monte_carlo: MonteCarloSection::default(),
        }
    }
}

impl PricingConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(parallel) = lookup(ENV_MC_PARALLEL) {
            self.monte_carlo.parallel = match parallel.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::EnvError(format!(
                        "{}={} is not a boolean",
                        ENV_MC_PARALLEL, other
                    )))
                }
            };
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(option_type) = cli.option_type {
            self.contract.option_type = option_type;
        }
        if let Some(spot) = cli.spot {
            self.market.spot = spot;
        }
        if let Some(strike) = cli.strike {
            self.contract.strike = strike;
        }
        if let Some(n_scenarios) = cli.n_scenarios {
            self.monte_carlo.n_scenarios = n_scenarios;
        }
        if cli.parallel {
            self.monte_carlo.parallel = true;
        }
    }

    /// Market inputs
    pub fn market(&self) -> MarketInputs {
        MarketInputs::new(
            self.market.spot,
            self.market.rate,
            self.market.volatility,
            self.market.dividend_rate,
        )
    }

    /// Contract terms
    pub fn contract(&self) -> ContractSpec {
        ContractSpec::new(
            self.contract.strike,
            self.contract.expiry,
            self.contract.option_type,
        )
    }

    /// Monte Carlo configuration
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, PricingError> {
        let mc = &self.monte_carlo;
        let mut builder = MonteCarloConfig::builder()
            .n_scenarios(mc.n_scenarios)
            .n_steps(mc.n_steps)
            .seed(mc.seed)
            .parallel(mc.parallel)
            .quantity(mc.quantity);
        if let Some(n_workers) = mc.n_workers {
            builder = builder.n_workers(n_workers);
        }
        Ok(builder.build()?)
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Verbose logging
    pub verbose: bool,
    /// Option type override
    pub option_type: Option<OptionType>,
    /// Spot override
    pub spot: Option<f64>,
    /// Strike override
    pub strike: Option<f64>,
    /// Monte Carlo scenario count override
    pub n_scenarios: Option<usize>,
    /// Force parallel Monte Carlo
    pub parallel: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PricingConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => PricingConfig::from_file(path)?,
        None => PricingConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = PricingConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.market(), MarketInputs::default());
        assert_eq!(config.contract(), ContractSpec::call(100.0, 1.0));
        assert_eq!(config.lattice.n_time_points, 1000);
        assert_eq!(config.monte_carlo.n_scenarios, 10_000);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            delta_shift = 0.001

            [market]
            spot = 95.0
            rate = 0.03
            volatility = 0.25
            dividend_rate = 0.01

            [contract]
            strike = 90.0
            expiry = 0.5
            option_type = "put"

            [lattice]
            n_time_points = 250

            [monte_carlo]
            n_scenarios = 50000
            n_steps = 12
            seed = 7
            parallel = true
            quantity = 2.0
            n_workers = 4
        "#;

        let config: PricingConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.delta_shift, 0.001);
        assert_eq!(config.market(), MarketInputs::new(95.0, 0.03, 0.25, 0.01));
        assert_eq!(config.contract(), ContractSpec::put(90.0, 0.5));
        assert_eq!(config.lattice.n_time_points, 250);

        let mc = config.monte_carlo_config().unwrap();
        assert_eq!(mc.n_scenarios(), 50_000);
        assert_eq!(mc.n_steps(), 12);
        assert_eq!(mc.seed(), 7);
        assert!(mc.parallel());
        assert_eq!(mc.quantity(), 2.0);
        assert_eq!(mc.n_workers(), Some(4));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            [market]
            volatility = 0.3
        "#;

        let config: PricingConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.market.volatility, 0.3);
        assert_eq!(config.market.spot, 100.0);
        assert_eq!(config.delta_shift, DEFAULT_PCT_SHIFT);
        assert_eq!(config.contract.option_type, OptionType::Call);
    }

    #[test]
    fn test_invalid_log_level_in_toml() {
        let result: Result<PricingConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PricingConfig::default();
        config
            .apply_env(|key| match key {
                ENV_LOG_LEVEL => Some("info".to_string()),
                ENV_MC_PARALLEL => Some("true".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.monte_carlo.parallel);

        let mut config = PricingConfig::default();
        config.apply_env(no_env).unwrap();
        assert!(!config.monte_carlo.parallel);
    }

    #[test]
    fn test_env_rejects_bad_boolean() {
        let mut config = PricingConfig::default();
        let result = config.apply_env(|key| (key == ENV_MC_PARALLEL).then(|| "maybe".to_string()));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = PricingConfig::default();
        let cli = CliArgs {
            verbose: true,
            option_type: Some(OptionType::Put),
            strike: Some(110.0),
            n_scenarios: Some(2_000),
            parallel: true,
            ..CliArgs::default()
        };
        config.merge_with_cli(&cli);

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.contract(), ContractSpec::put(110.0, 1.0));
        assert_eq!(config.monte_carlo.n_scenarios, 2_000);
        assert!(config.monte_carlo.parallel);
    }

    #[test]
    fn test_invalid_monte_carlo_section() {
        let mut config = PricingConfig::default();
        config.monte_carlo.n_scenarios = 0;
        assert!(matches!(
            config.monte_carlo_config(),
            Err(PricingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = PricingConfig::from_file(Path::new("/nonexistent/vanilla.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
