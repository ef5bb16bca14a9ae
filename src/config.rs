use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Config file looked up in the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "lintpipe.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub analyzer: Option<String>,
    pub analyzer_config: Option<String>,
    pub format: Option<String>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub analyzer: Option<String>,
    pub analyzer_config: Option<String>,
    pub format: String,
    pub timeout: Option<u64>,
}

impl Config {
    /// Load the config file (explicit `--config` path must exist, the
    /// default location may be absent) and merge CLI flags over it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match cli.config {
            Some(ref path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                parse_config(&std::fs::read_to_string(path)?)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    parse_config(&std::fs::read_to_string(path)?)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        let config = merge(file_config, cli);
        validate(&config)?;
        Ok(config)
    }
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

fn validate(config: &Config) -> Result<()> {
    match config.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(Error::ConfigValidation(format!(
                "unknown format: {other} (expected: text, json)"
            )));
        }
    }
    if let Some(timeout) = config.timeout
        && timeout == 0
    {
        return Err(Error::ConfigValidation("timeout must be > 0".to_string()));
    }
    Ok(())
}

pub fn merge(file: ConfigFile, cli: &Cli) -> Config {
    Config {
        analyzer: cli.analyzer.clone().or(file.analyzer),
        analyzer_config: cli.analyzer_config.clone().or(file.analyzer_config),
        format: cli
            .format
            .clone()
            .or(file.format)
            .unwrap_or_else(|| "text".to_string()),
        timeout: cli.timeout.or(file.timeout),
    }
}
