use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "HANDSIM_CONFIG";
pub const TRIALS_ENV: &str = "HANDSIM_TRIALS";
pub const HAND_SIZE_ENV: &str = "HANDSIM_HAND_SIZE";
pub const SEED_ENV: &str = "HANDSIM_SEED";
pub const WORKERS_ENV: &str = "HANDSIM_WORKERS";
pub const MAX_TRIALS_ENV: &str = "HANDSIM_MAX_TRIALS";

const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub trials: u64,
    pub hand_size: usize,
    pub seed: Option<u64>,
    pub workers: usize,
    pub max_trials: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub trials: ValueSource,
    pub hand_size: ValueSource,
    pub seed: ValueSource,
    pub workers: ValueSource,
    pub max_trials: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            trials: ValueSource::Default,
            hand_size: ValueSource::Default,
            seed: ValueSource::Default,
            workers: ValueSource::Default,
            max_trials: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 2_000,
            hand_size: 5,
            seed: None,
            workers: 1,
            max_trials: 1_000_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `HANDSIM_CONFIG`, then `HANDSIM_*`
/// variables. Command-line flags are applied on top by each command.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.trials {
            cfg.trials = v;
            sources.trials = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.workers {
            cfg.workers = v;
            sources.workers = ValueSource::File;
        }
        if let Some(v) = f.max_trials {
            cfg.max_trials = v;
            sources.max_trials = ValueSource::File;
        }
    }

    if let Some(v) = env_value(TRIALS_ENV, "Invalid trials")? {
        cfg.trials = v;
        sources.trials = ValueSource::Env;
    }
    if let Some(v) = env_value(HAND_SIZE_ENV, "Invalid hand_size")? {
        cfg.hand_size = v;
        sources.hand_size = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_ENV, "Invalid seed")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(WORKERS_ENV, "Invalid workers")? {
        cfg.workers = v;
        sources.workers = ValueSource::Env;
    }
    if let Some(v) = env_value(MAX_TRIALS_ENV, "Invalid max_trials")? {
        cfg.max_trials = v;
        sources.max_trials = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(key: &str, what: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{}: {}", what, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    trials: Option<u64>,
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    workers: Option<usize>,
    #[serde(default)]
    max_trials: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.trials == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: trials must be >=1".into(),
        ));
    }
    if cfg.hand_size == 0 || cfg.hand_size > DECK_SIZE {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: hand_size must be between 1 and {}",
            DECK_SIZE
        )));
    }
    if cfg.workers == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: workers must be >=1".into(),
        ));
    }
    if cfg.trials > cfg.max_trials {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: trials {} exceeds max_trials {}",
            cfg.trials, cfg.max_trials
        )));
    }
    Ok(())
}
