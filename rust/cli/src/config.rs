//! Layered configuration: built-in defaults, then an optional TOML file named
//! by `SHOWDOWN_CONFIG`, then individual `SHOWDOWN_*` environment variables.

use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const SEED_ENV: &str = "SHOWDOWN_SEED";
pub const STRICT_ENV: &str = "SHOWDOWN_STRICT";
pub const FORMAT_ENV: &str = "SHOWDOWN_FORMAT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default seed for `deal`
    pub seed: Option<u64>,
    /// Reject duplicate cards across the two hands
    pub strict: bool,
    /// Default output format for `compare`
    pub format: OutputFormat,
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
    pub seed: ValueSource,
    pub strict: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            strict: ValueSource::Default,
            format: ValueSource::Default,
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
            seed: None,
            strict: false,
            format: OutputFormat::Text,
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

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves configuration using `lookup` in place of the environment.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strict {
            cfg.strict = v;
            sources.strict = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
    }

    if let Some(seed) = lookup(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(strict) = lookup(STRICT_ENV)
        && !strict.is_empty()
    {
        cfg.strict = parse_bool(&strict)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid strict flag: {}", strict)))?;
        sources.strict = ValueSource::Env;
    }
    if let Some(format) = lookup(FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.format = OutputFormat::parse(&format).ok_or_else(|| {
            ConfigError::Invalid(format!("Invalid format: {} (expected text or json)", format))
        })?;
        sources.format = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    strict: Option<bool>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let resolved = load_from(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
        assert_eq!(resolved.sources.format, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 456\nstrict = true\nformat = \"json\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let resolved = load_from(env(&[(CONFIG_ENV, &path), (SEED_ENV, "7")])).unwrap();
        assert_eq!(resolved.config.seed, Some(7));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert!(resolved.config.strict);
        assert_eq!(resolved.sources.strict, ValueSource::File);
        assert_eq!(resolved.config.format, OutputFormat::Json);
        assert_eq!(resolved.sources.format, ValueSource::File);
    }

    #[test]
    fn bad_env_values_are_rejected() {
        assert!(matches!(
            load_from(env(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_from(env(&[(STRICT_ENV, "maybe")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_from(env(&[(FORMAT_ENV, "xml")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"red\"").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(
            load_from(env(&[(CONFIG_ENV, &path)])),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from(env(&[(CONFIG_ENV, "/nonexistent/showdown.toml")]));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn strict_accepts_common_spellings() {
        for (raw, expected) in [("on", true), ("YES", true), ("0", false), ("false", false)] {
            let resolved = load_from(env(&[(STRICT_ENV, raw)])).unwrap();
            assert_eq!(resolved.config.strict, expected, "{}", raw);
        }
    }
}
