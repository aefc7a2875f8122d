//! Random alias generation.
//!
//! Aliases are drawn uniformly, with replacement, from a fixed 62-character
//! alphanumeric alphabet. Uniqueness against stored aliases is not checked
//! here; see [`crate::application::services::LinkService::save`].

use rand::Rng;

/// Alias length used when none is configured.
///
/// 62^6 is roughly 5.6e10 possible values.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Characters an alias is drawn from.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates an alias of exactly `length` characters using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use url_shortener_api::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    generate_alias_with(&mut rand::rng(), length)
}

/// Generates an alias of exactly `length` characters from the given RNG.
pub fn generate_alias_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
