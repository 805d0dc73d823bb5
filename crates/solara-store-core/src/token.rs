//! Session token generation

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of every session token
pub const TOKEN_LEN: usize = 16;

/// Source of opaque session tokens
///
/// Isolates ambient randomness so tests can substitute a deterministic
/// generator. Implementations must produce strings of exactly [`TOKEN_LEN`]
/// characters; uniqueness against the active-session set is enforced by the
/// session manager, not the generator.
pub trait TokenGenerator: Send + Sync {
    /// Produce one candidate token
    fn generate(&self) -> String;
}

/// Production token generator sampling random alphanumerics
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        let token = RandomTokenGenerator.generate();
        assert_eq!(token.len(), TOKEN_LEN);
    }

    #[test]
    fn test_token_is_alphanumeric() {
        let token = RandomTokenGenerator.generate();
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_vary() {
        // 62^16 candidates; two consecutive draws colliding would indicate a
        // broken RNG rather than bad luck.
        let a = RandomTokenGenerator.generate();
        let b = RandomTokenGenerator.generate();
        assert_ne!(a, b);
    }
}
