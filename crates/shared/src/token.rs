//! Invitation token generation.
//!
//! Tokens gate registration, so they carry 256 bits of entropy and are
//! hex-encoded for safe embedding in URLs. Uniqueness is probabilistic;
//! storage still enforces a unique index as a backstop.

use rand::RngCore;

/// Number of random bytes per token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Generate a new invitation token: 32 random bytes, hex-encoded (64 chars).
pub fn generate_invite_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        let token = generate_invite_token();
        assert_eq!(token.len(), 64);
    }

    #[test]
    fn test_token_is_lowercase_hex() {
        let token = generate_invite_token();
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_invite_token();
        let b = generate_invite_token();
        assert_ne!(a, b);
    }
}
