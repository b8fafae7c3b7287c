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
// Character pool building

use std::collections::BTreeSet;
use std::fmt;

use crate::error::PassgenError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// 视觉上容易混淆的字符
pub const SIMILAR_CHARS: &[char] = &['i', 'l', '1', 'L', 'o', '0', 'O'];

// 字符类别枚举，声明顺序即字符池拼接顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed literal alphabet of this class.
    pub fn literal(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Characters dropped from this class when similar characters are excluded.
    pub fn similar_subset(self) -> &'static [char] {
        match self {
            // 'I' is dropped too, it reads like 'l'
            CharacterClass::Uppercase => &['I', 'L', 'O'],
            CharacterClass::Lowercase => &['i', 'l', 'o'],
            CharacterClass::Digit => &['0', '1'],
            CharacterClass::Symbol => &[],
        }
    }

    /// Classifies a character by content. Anything outside ASCII letters and
    /// digits counts as a symbol.
    pub fn of(c: char) -> CharacterClass {
        if c.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if c.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if c.is_ascii_digit() {
            CharacterClass::Digit
        } else {
            CharacterClass::Symbol
        }
    }

    fn filtered(self, exclude_similar: bool) -> impl Iterator<Item = char> {
        let subset: &'static [char] = if exclude_similar { self.similar_subset() } else { &[] };
        self.literal().chars().filter(move |c| !subset.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        };
        write!(f, "{}", name)
    }
}

// 随机密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
    pub exclude_similar: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            classes: CharacterClass::ALL.into_iter().collect(),
            exclude_similar: false,
        }
    }
}

impl GenerationOptions {
    /// Options with the given length and no class selected.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
            exclude_similar: false,
        }
    }

    pub fn with_class(mut self, class: CharacterClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn without_class(mut self, class: CharacterClass) -> Self {
        self.classes.remove(&class);
        self
    }

    pub fn exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }
}

/// The ordered set of symbols eligible for sampling. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

/// Assembles the alphabet from the selected classes, in
/// Uppercase, Lowercase, Digit, Symbol order.
pub fn build_alphabet(options: &GenerationOptions) -> Result<Alphabet, PassgenError> {
    if options.classes.is_empty() {
        return Err(PassgenError::NoClassSelected);
    }

    let symbols: Vec<char> = CharacterClass::ALL
        .into_iter()
        .filter(|class| options.classes.contains(class))
        .flat_map(|class| class.filtered(options.exclude_similar))
        .collect();

    log::debug!(
        "Built alphabet of {} symbols from {} classes (exclude_similar={})",
        symbols.len(),
        options.classes.len(),
        options.exclude_similar
    );

    Ok(Alphabet { symbols })
}
