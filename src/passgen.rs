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
// Password generator

use std::fmt;

use serde::Serialize;

use crate::charset::{Alphabet, GenerationOptions, build_alphabet};
use crate::error::PassgenError;
use crate::randsource::{RandomSource, SourceKind};
use crate::strength::{self, StrengthScore};

/// Shown in place of a password when no character class is selected.
pub const PLACEHOLDER: &str = "Select at least one character type";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Draws `length` symbols from the alphabet with replacement.
///
/// Each draw is reduced with `value % alphabet.len()`. The 32-bit range is not
/// a multiple of every alphabet size, so this carries a small modulo bias
/// (at most `alphabet.len() / 2^32` per symbol), which is accepted.
pub fn sample<R: RandomSource + ?Sized>(alphabet: &Alphabet, length: usize, source: &mut R) -> Password {
    let symbols = alphabet.symbols();
    let password = (0..length)
        .map(|_| symbols[source.next_u32() as usize % symbols.len()])
        .collect();
    Password(password)
}

// 生成结果
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: Password,
    pub strength: StrengthScore,
    pub alphabet_size: usize,
    pub source: SourceKind,
    pub entropy_bits: f64,
}

/// Builds the alphabet, samples a password and scores it.
pub fn generate<R: RandomSource + ?Sized>(
    options: &GenerationOptions,
    source: &mut R,
) -> Result<GeneratedPassword, PassgenError> {
    let alphabet = build_alphabet(options)?;
    let password = sample(&alphabet, options.length, source);
    let strength = strength::score(password.as_str());

    Ok(GeneratedPassword {
        entropy_bits: entropy_bits(alphabet.len(), options.length),
        alphabet_size: alphabet.len(),
        source: source.kind(),
        password,
        strength,
    })
}

/// Upper bound on the guessing entropy of a password drawn uniformly.
pub fn entropy_bits(alphabet_size: usize, length: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}
