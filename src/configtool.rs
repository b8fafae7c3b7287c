//  ____  ____           ____
// |  _ \|  _ \__      __/ ___| ___ _ __
// | |_) | |_) \ \ /\ / / |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /| |_| |  __/ | | |
// |_| \_\_|     \_/\_/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::charset::{CharacterClass, GenerationOptions};
use crate::error::ConfigError;

pub const MAX_LENGTH: usize = 1024;

/// 生成默认值，对应配置文件 config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_similar: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(ConfigError::InvalidValue(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH, self.length
            )));
        }
        Ok(())
    }
}

impl From<&GeneratorConfig> for GenerationOptions {
    fn from(config: &GeneratorConfig) -> Self {
        let flags = [
            (CharacterClass::Uppercase, config.uppercase),
            (CharacterClass::Lowercase, config.lowercase),
            (CharacterClass::Digit, config.numbers),
            (CharacterClass::Symbol, config.symbols),
        ];
        flags
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .fold(GenerationOptions::new(config.length), |options, (class, _)| {
                options.with_class(class)
            })
            .exclude_similar(config.exclude_similar)
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpwgen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join("config.json"))
}

/// Loads generator defaults from `path`, or from the default location when
/// `path` is `None`. Only a missing default file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = match default_config_path() {
                Ok(p) => p,
                Err(e) => {
                    log::debug!("{}, using defaults", e);
                    return Ok(GeneratorConfig::default());
                }
            };
            if !p.exists() {
                log::debug!("No config at {}, using defaults", p.display());
                return Ok(GeneratorConfig::default());
            }
            p
        }
    };

    let config_data = fs::read_to_string(&config_path)?;
    let config: GeneratorConfig = serde_json::from_str(&config_data)?;
    config.validate()?;
    log::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}
