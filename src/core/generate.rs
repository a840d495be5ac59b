//! Credential generation.
//!
//! Secrets are drawn from the operating system CSPRNG over an alphanumeric
//! alphabet with easily confused characters removed, so a password read off a
//! terminal can be typed back without guessing.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::core::constants::AMBIGUOUS_CHARS;

/// The 57 characters a secret may contain.
pub fn alphabet() -> Vec<char> {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .filter(|c| !AMBIGUOUS_CHARS.contains(c))
        .collect()
}

/// Generate a secret of `length` characters.
///
/// Each character is chosen independently and uniformly from [`alphabet`].
pub fn generate_secret(length: usize) -> String {
    let alphabet = alphabet();
    let mut rng = OsRng;

    (0..length)
        .filter_map(|_| alphabet.choose(&mut rng).copied())
        .collect()
}
