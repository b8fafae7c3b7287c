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
// Error types

use std::io;
use thiserror::Error;

/// 密码生成核心的错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassgenError {
    #[error("At least one character type must be selected")]
    NoClassSelected,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDirError(String),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}
