//! Coupon code generation.
//!
//! Codes are drawn uniformly from the ASCII alphanumeric alphabet. The
//! generator has no knowledge of codes already issued; collisions are rare
//! but possible and are handled by the caller.

use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Default length of a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Number of codes drawn for one coupon before issuance gives up.
///
/// A code that is already taken consumes an attempt; an empty code does not
/// retry at all.
pub const MAX_CODE_GENERATION_ATTEMPTS: u32 = 5;

/// Produces candidate coupon codes.
pub trait CodeGenerator: Send + Sync {
    /// Generate a new candidate code.
    fn generate_code(&self) -> String;
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for Arc<G> {
    fn generate_code(&self) -> String {
        (**self).generate_code()
    }
}

/// Generates fixed-length alphanumeric codes from the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Create a generator producing codes of `length` characters.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    /// Length of generated codes.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}
