use crate::error::LoxError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token
    #[default]
    Text,
    /// One JSON object per token
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub format: OutputFormat,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: String::from("> "),
            format: OutputFormat::Text,
            debug: false,
        }
    }
}

impl Config {
    /// Loads the per-user config. A missing file is not an error.
    pub fn load() -> Result<Self, LoxError> {
        let config_path = Self::get_config_path();
        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => Self::from_json(&contents).map_err(|source| LoxError::Config {
                path: config_path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
            Err(source) => {
                return Err(LoxError::Io {
                    path: config_path,
                    source,
                })
            }
        };

        if let Ok(value) = env::var("LOX_DEBUG") {
            config.debug = parse_flag(&value);
        }

        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn get_config_path() -> PathBuf {
        if let Ok(custom_path) = env::var("LOX_CONFIG") {
            return PathBuf::from(custom_path);
        }

        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };

        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".lox")
            .join("config.json")
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
