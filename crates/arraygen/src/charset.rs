//! Immutable character sets for random string construction.

use rand::Rng;

/// 62-character alphanumeric alphabet.
pub(crate) const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Alphanumeric plus space and ASCII punctuation.
pub(crate) const ALPHANUMERIC_SPECIAL: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub(crate) fn alphabet(special_chars: bool) -> &'static [u8] {
    if special_chars {
        ALPHANUMERIC_SPECIAL
    } else {
        ALPHANUMERIC
    }
}

/// Random string of exactly `len` characters drawn from `alphabet`.
pub(crate) fn random_chars(rng: &mut impl Rng, len: usize, alphabet: &'static [u8]) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(alphabet[rng.random_range(0..alphabet.len())] as char);
    }
    out
}
