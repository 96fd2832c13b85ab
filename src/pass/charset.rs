//! Character set building for password generation.

use super::GenerationConfig;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+=-`~[]\\{}|;':\",./<>?";

/// One of the fixed, pairwise disjoint character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn enabled_in(self, config: &GenerationConfig) -> bool {
        match self {
            CharacterClass::Lowercase => true,
            CharacterClass::Uppercase => config.include_uppercase,
            CharacterClass::Digits => config.include_digits,
            CharacterClass::Symbols => config.include_symbols,
        }
    }
}

/// Build the alphabet for `config`: lowercase, uppercase, digits, symbols,
/// skipping disabled classes. Never empty.
pub fn build(config: &GenerationConfig) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(config));

    for class in CharacterClass::ALL {
        if class.enabled_in(config) {
            chars.extend_from_slice(class.chars());
        }
    }

    chars
}

/// Number of characters in the alphabet for `config`.
pub fn size(config: &GenerationConfig) -> usize {
    CharacterClass::ALL
        .iter()
        .filter(|class| class.enabled_in(config))
        .map(|class| class.chars().len())
        .sum()
}

/// Whether `byte` can appear in a password generated with `config`.
pub fn contains(config: &GenerationConfig, byte: u8) -> bool {
    CharacterClass::ALL
        .iter()
        .any(|class| class.enabled_in(config) && class.chars().contains(&byte))
}
