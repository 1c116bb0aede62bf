use casino_engine::table::{MAX_SEATS, MIN_SEATS, table_chips};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "CASINO_CONFIG";
pub const SEED_ENV: &str = "CASINO_SEED";
pub const SEATS_ENV: &str = "CASINO_SEATS";
pub const STARTING_BALANCE_ENV: &str = "CASINO_STARTING_BALANCE";
pub const AI_ENV: &str = "CASINO_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub opponent_stack: u32,
    pub seats: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub blind_increase_interval: u32,
    pub blind_increase_amount: u32,
    pub max_raise_multiple: u32,
    pub seed: Option<u64>,
    pub ai: String,
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
    pub starting_balance: ValueSource,
    pub opponent_stack: ValueSource,
    pub seats: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub blind_increase_interval: ValueSource,
    pub blind_increase_amount: ValueSource,
    pub max_raise_multiple: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            opponent_stack: ValueSource::Default,
            seats: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            blind_increase_interval: ValueSource::Default,
            blind_increase_amount: ValueSource::Default,
            max_raise_multiple: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
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
            starting_balance: 500,
            opponent_stack: 500,
            seats: 4,
            small_blind: 5,
            big_blind: 10,
            blind_increase_interval: 10,
            blind_increase_amount: 5,
            max_raise_multiple: 10,
            seed: None,
            ai: "baseline".into(),
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Defaults, then the TOML file named by `CASINO_CONFIG`, then `CASINO_*`
/// environment overrides. The result is validated before it is returned.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = load_layers()?;
    validate(&resolved.config)?;
    Ok(resolved)
}

/// Same layering as [`load_with_sources`] without validation, for callers that apply
/// further overrides (command-line flags) and call [`validate`] themselves.
pub fn load_unvalidated() -> Result<Config, ConfigError> {
    load_layers().map(|resolved| resolved.config)
}

fn load_layers() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        f.apply(&mut cfg, &mut sources);
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(seats) = std::env::var(SEATS_ENV)
        && !seats.is_empty()
    {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid seats".into()))?;
        sources.seats = ValueSource::Env;
    }
    if let Ok(balance) = std::env::var(STARTING_BALANCE_ENV)
        && !balance.is_empty()
    {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(AI_ENV)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    opponent_stack: Option<u32>,
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    blind_increase_interval: Option<u32>,
    #[serde(default)]
    blind_increase_amount: Option<u32>,
    #[serde(default)]
    max_raise_multiple: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

impl FileConfig {
    fn apply(self, cfg: &mut Config, sources: &mut ConfigSources) {
        macro_rules! take {
            ($field:ident) => {
                if let Some(v) = self.$field {
                    cfg.$field = v;
                    sources.$field = ValueSource::File;
                }
            };
        }
        take!(starting_balance);
        take!(opponent_stack);
        take!(seats);
        take!(small_blind);
        take!(big_blind);
        take!(blind_increase_interval);
        take!(blind_increase_amount);
        take!(max_raise_multiple);
        take!(ai);
        if let Some(v) = self.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&cfg.seats) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: seats must be between {} and {}",
            MIN_SEATS, MAX_SEATS
        )));
    }
    if cfg.starting_balance == 0 || cfg.opponent_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: balances must be >0".into(),
        ));
    }
    if table_chips(cfg.seats, cfg.starting_balance, cfg.opponent_stack) > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_balance plus every opponent_stack must not exceed {}",
            u32::MAX
        )));
    }
    if cfg.small_blind == 0 || cfg.big_blind <= cfg.small_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: big_blind must exceed small_blind >0".into(),
        ));
    }
    if cfg.blind_increase_interval == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blind_increase_interval must be >=1".into(),
        ));
    }
    if cfg.max_raise_multiple == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_raise_multiple must be >=1".into(),
        ));
    }
    if casino_ai::create_ai(&cfg.ai).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            casino_ai::AI_TYPES.join(", ")
        )));
    }
    Ok(())
}
