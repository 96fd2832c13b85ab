//! Random password generation from configurable character classes.
//!
//! Lowercase letters are always in the alphabet; uppercase, digits and
//! symbols are toggled through [`GenerationConfig`]. Randomness is supplied
//! by the caller:
//!
//! ```
//! use rand::SeedableRng;
//! use passgen::{GenerationConfig, generate};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let pass = generate(&GenerationConfig::default(), &mut rng).unwrap();
//! assert_eq!(pass.len(), 12);
//! ```

pub mod error;
pub mod pass;

pub use error::GenerateError;
pub use pass::{CharacterClass, GenerationConfig, Password, generate, generate_default};
