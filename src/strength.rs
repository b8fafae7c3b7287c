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
// Password strength scoring

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::charset::{CharacterClass, SIMILAR_CHARS};

const LENGTH_POINTS_PER_CHAR: f64 = 4.0;
const LENGTH_POINTS_MAX: f64 = 40.0;
const LETTER_DIGIT_POINTS: f64 = 10.0;
const SYMBOL_POINTS: f64 = 15.0;
const UNIQUENESS_POINTS: f64 = 15.0;

// 安全评级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthBand {
    Empty,
    VeryWeak,
    Weak,
    Good,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthBand::Empty,
            1..=29 => StrengthBand::VeryWeak,
            30..=59 => StrengthBand::Weak,
            60..=79 => StrengthBand::Good,
            _ => StrengthBand::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::Empty => "No password generated",
            StrengthBand::VeryWeak => "Very weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Good => "Good",
            StrengthBand::Strong => "Strong",
        }
    }

    /// Display color for a strength meter.
    pub fn color(self) -> &'static str {
        match self {
            StrengthBand::Empty => "transparent",
            StrengthBand::VeryWeak => "#dc3545",
            StrengthBand::Weak => "#fd7e14",
            StrengthBand::Good => "#ffc107",
            StrengthBand::Strong => "#28a745",
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthScore {
    pub value: u8,
    pub band: StrengthBand,
}

impl StrengthScore {
    pub fn new(value: u8) -> Self {
        let value = value.min(100);
        Self {
            value,
            band: StrengthBand::from_score(value),
        }
    }

    pub fn label(&self) -> &'static str {
        self.band.label()
    }

    pub fn color(&self) -> &'static str {
        self.band.color()
    }
}

/// Scores a password on a 0-100 scale from its length, the character
/// classes it contains and the share of distinct characters.
pub fn score(password: &str) -> StrengthScore {
    let length = password.chars().count();
    if length == 0 {
        return StrengthScore::new(0);
    }

    let mut seen = [false; 4];
    let mut distinct = HashSet::new();
    for c in password.chars() {
        seen[CharacterClass::of(c) as usize] = true;
        distinct.insert(c);
    }

    let mut raw = (length as f64 * LENGTH_POINTS_PER_CHAR).min(LENGTH_POINTS_MAX);
    for class in [CharacterClass::Uppercase, CharacterClass::Lowercase, CharacterClass::Digit] {
        if seen[class as usize] {
            raw += LETTER_DIGIT_POINTS;
        }
    }
    if seen[CharacterClass::Symbol as usize] {
        raw += SYMBOL_POINTS;
    }
    raw += distinct.len() as f64 / length as f64 * UNIQUENESS_POINTS;

    let value = raw.round().clamp(0.0, 100.0) as u8;
    StrengthScore::new(value)
}

/// Renders the strength line shown next to a generated password.
pub fn describe(score: &StrengthScore) -> String {
    format!("Password strength: {} ({}%)", score.label(), score.value)
}

pub fn confusing_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| SIMILAR_CHARS.contains(c)).collect()
}
