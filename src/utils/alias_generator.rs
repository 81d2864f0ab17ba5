//! Random alias generation.
//!
//! Aliases are drawn uniformly, with replacement, from a 64-symbol
//! URL-safe alphabet. The generator is not cryptographically secure;
//! uniqueness comes from the store's constraint and the retry loop in
//! [`crate::application::services::LinkService`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::utils::validation::RESERVED_ALIASES;

/// The 64 symbols an alias may be generated from.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random alias of exactly `len` characters.
///
/// Each call seeds its own generator from the OS, so concurrent callers
/// never share a sequence.
pub fn generate_alias(len: usize) -> String {
    let mut rng = StdRng::from_os_rng();
    generate_alias_with(&mut rng, len)
}

/// Generates an alias using the caller's RNG.
pub fn generate_alias_with<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draws from `generate` until the candidate is not a reserved alias.
///
/// Reserved candidates never reach the store, so they do not count as
/// insert attempts.
pub fn skip_reserved(mut generate: impl FnMut() -> String) -> String {
    loop {
        let alias = generate();
        if !RESERVED_ALIASES.contains(&alias.as_str()) {
            return alias;
        }
    }
}
