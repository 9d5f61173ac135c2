//! Short identifier generation.
//!
//! Identifiers are 8 characters from the URL-safe base64 alphabet
//! (`A-Z a-z 0-9 - _`), built from OS entropy.

use base64::Engine as _;

/// Length of random bytes before base64 encoding. 6 bytes encode to exactly
/// 8 characters with no padding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of every generated identifier.
pub const CODE_LENGTH: usize = 8;

/// Generates a random short identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding. Uniqueness is not checked here; the store's unique
/// constraint is the authority.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `code` could have been produced by [`generate_code`].
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
