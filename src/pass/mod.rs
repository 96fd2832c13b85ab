//! Password generation.

pub mod charset;
mod config;
mod generate;
mod password;

pub use charset::CharacterClass;
pub use config::{DEFAULT_LENGTH, GenerationConfig};
pub use generate::{generate, generate_default, generate_from_charset};
pub use password::Password;
