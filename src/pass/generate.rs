//! Password generation.

use rand::Rng;
use tracing::debug;
use zeroize::Zeroize;

use super::config::DEFAULT_LENGTH;
use super::{GenerationConfig, Password, charset};
use crate::error::GenerateError;

/// Generate a single password from `config`, drawing from `rng`.
pub fn generate<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    let length = config.validated_length()?;
    let chars = charset::build(config);
    debug!(alphabet = chars.len(), length, "composed alphabet");

    let mut buf = Vec::with_capacity(length);
    generate_from_charset(&chars, length, rng, &mut buf);
    let pass = Password::from_ascii(&buf);
    buf.zeroize();

    Ok(pass)
}

/// Generate a password with the default settings and the thread-local RNG.
pub fn generate_default() -> Password {
    let chars = charset::build(&GenerationConfig::default());
    // DEFAULT_LENGTH is a small positive constant.
    let length = DEFAULT_LENGTH as usize;
    let mut buf = Vec::with_capacity(length);
    generate_from_charset(&chars, length, &mut rand::rng(), &mut buf);
    let pass = Password::from_ascii(&buf);
    buf.zeroize();
    pass
}

/// Fill `buf` with `length` bytes drawn uniformly, with replacement, from
/// a pre-built charset. Caller owns the buffer; clear/zeroize between calls.
#[inline]
pub fn generate_from_charset<R: Rng>(
    chars: &[u8],
    length: usize,
    rng: &mut R,
    buf: &mut Vec<u8>,
) {
    buf.clear();
    buf.extend((0..length).map(|_| random_byte(chars, rng)));
}

#[inline]
fn random_byte<R: Rng>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.random_range(0..chars.len())]
}
