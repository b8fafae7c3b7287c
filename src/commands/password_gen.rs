use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::charset::GenerationOptions;
use crate::error::PassgenError;
use crate::passgen::{self, GeneratedPassword, PLACEHOLDER};
use crate::randsource::{PseudoSource, SourceKind, select_source};
use crate::strength::{self, StrengthScore};

#[derive(Debug, Serialize)]
struct GenReport {
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<&'static str>,
    score: u8,
    label: &'static str,
    color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alphabet_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entropy_bits: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<SourceKind>,
}

impl From<&GeneratedPassword> for GenReport {
    fn from(generated: &GeneratedPassword) -> Self {
        Self {
            password: Some(generated.password.to_string()),
            placeholder: None,
            score: generated.strength.value,
            label: generated.strength.label(),
            color: generated.strength.color(),
            alphabet_size: Some(generated.alphabet_size),
            entropy_bits: Some(generated.entropy_bits),
            source: Some(generated.source),
        }
    }
}

impl GenReport {
    fn placeholder() -> Self {
        let empty = StrengthScore::new(0);
        Self {
            password: None,
            placeholder: Some(PLACEHOLDER),
            score: empty.value,
            label: empty.label(),
            color: empty.color(),
            alphabet_size: None,
            entropy_bits: None,
            source: None,
        }
    }
}

/// Generates `count` passwords and writes them with their strength.
///
/// Each password gets its own source: a fresh probe per password, or one
/// seeded stream shared across the batch when `seed` is given.
pub fn generate_random<W: Write>(
    options: &GenerationOptions,
    count: usize,
    json: bool,
    seed: Option<u64>,
    out: &mut W,
) -> Result<()> {
    let mut seeded = seed.map(PseudoSource::from_seed);
    let mut generated = Vec::with_capacity(count);

    for _ in 0..count {
        let result = match seeded.as_mut() {
            Some(source) => passgen::generate(options, source),
            None => passgen::generate(options, select_source().as_mut()),
        };
        match result {
            Ok(password) => generated.push(password),
            Err(PassgenError::NoClassSelected) => {
                log::warn!("No character class selected, showing placeholder");
                return write_placeholder(json, out);
            }
        }
    }

    log::info!("Generated {} password(s) of length {}", generated.len(), options.length);

    if json {
        let reports: Vec<GenReport> = generated.iter().map(GenReport::from).collect();
        serde_json::to_writer_pretty(&mut *out, &reports).context("Failed to serialize passwords")?;
        writeln!(out)?;
    } else {
        for password in &generated {
            writeln!(out, "Generated random password: {}", password.password)?;
            writeln!(out, "{}", strength::describe(&password.strength))?;
        }
    }
    Ok(())
}

fn write_placeholder<W: Write>(json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &[GenReport::placeholder()])
            .context("Failed to serialize placeholder")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", PLACEHOLDER)?;
        writeln!(out, "{}", strength::describe(&StrengthScore::new(0)))?;
    }
    Ok(())
}
