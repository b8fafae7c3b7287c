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
// Random sources

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Secure,
    Pseudo,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Secure => write!(f, "secure"),
            SourceKind::Pseudo => write!(f, "pseudo"),
        }
    }
}

/// A uniform source of 32-bit values used to pick alphabet indices.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    fn kind(&self) -> SourceKind;
}

/// Operating system CSPRNG.
#[derive(Debug, Default)]
pub struct SecureSource {
    rng: OsRng,
}

impl SecureSource {
    /// Returns a source only if the OS generator answers a test draw.
    pub fn probe() -> Option<Self> {
        let mut rng = OsRng;
        let mut buf = [0u8; 4];
        match rng.try_fill_bytes(&mut buf) {
            Ok(()) => Some(Self { rng }),
            Err(e) => {
                log::debug!("OS random source unavailable: {}", e);
                None
            }
        }
    }
}

impl RandomSource for SecureSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Secure
    }
}

/// Non-cryptographic fallback.
#[derive(Debug)]
pub struct PseudoSource {
    rng: ChaCha8Rng,
}

impl PseudoSource {
    /// Seeded from the clock and process id.
    pub fn from_environment() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seed = nanos ^ ((std::process::id() as u64) << 32);
        Self::from_seed(seed)
    }

    /// Reproducible stream for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PseudoSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Pseudo
    }
}

/// Picks the secure source when the environment provides one, else the
/// pseudo-random fallback. Evaluated on every call.
pub fn select_source() -> Box<dyn RandomSource> {
    select_source_with(SecureSource::probe)
}

/// Same as [`select_source`] with the capability check supplied by the caller.
pub fn select_source_with(probe: impl FnOnce() -> Option<SecureSource>) -> Box<dyn RandomSource> {
    match probe() {
        Some(source) => {
            log::debug!("Using secure random source");
            Box::new(source)
        }
        None => {
            log::warn!("Secure random source unavailable, falling back to pseudo-random generator");
            Box::new(PseudoSource::from_environment())
        }
    }
}
