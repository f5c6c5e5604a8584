//! Random string generation.
use crate::text::StrError;
use rand::{Rng, distr::Alphanumeric};
use tracing::trace;

/// `[A-Za-z0-9]`, the default alphabet.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// `length` characters drawn uniformly from `[A-Za-z0-9]`.
pub fn random(length: usize) -> String {
    trace!(length, "generating random string");
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Stateless random string source over a fixed alphabet.
///
/// Each position is drawn independently and uniformly from the alphabet.
/// Duplicate characters in a custom alphabet weight it accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomGenerator {
    alphabet: Box<[char]>,
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            alphabet: ALPHANUMERIC.chars().collect(),
        }
    }

    pub fn with_alphabet(alphabet: &str) -> Result<Self, StrError> {
        if alphabet.is_empty() {
            return Err(StrError::InvalidArgument(
                "alphabet",
                "must contain at least one character".to_owned(),
            ));
        }
        Ok(Self {
            alphabet: alphabet.chars().collect(),
        })
    }

    #[inline]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Generate using the thread-local RNG.
    pub fn generate(&self, length: usize) -> String {
        self.generate_with(&mut rand::rng(), length)
    }

    /// Generate with a caller-supplied RNG, e.g. a seeded one for
    /// reproducible output.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> String {
        trace!(length, alphabet = self.alphabet.len(), "generating random string");
        (0..length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}
