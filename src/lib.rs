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
// Random password generator with strength estimation.

pub mod charset;
pub mod commands;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod randsource;
pub mod strength;

pub use error::{ConfigError, PassgenError};
