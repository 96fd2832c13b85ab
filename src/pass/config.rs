//! Password generation settings.

use crate::error::GenerateError;

pub const DEFAULT_LENGTH: i64 = 12;

/// Which optional character classes to sample from, and how many characters.
///
/// Lowercase letters are always part of the alphabet and have no flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: i64,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.include_uppercase = enabled;
        self
    }

    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.include_digits = enabled;
        self
    }

    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.include_symbols = enabled;
        self
    }

    /// The requested length as a character count.
    pub fn validated_length(&self) -> Result<usize, GenerateError> {
        usize::try_from(self.length).map_err(|_| GenerateError::InvalidLength(self.length))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}
