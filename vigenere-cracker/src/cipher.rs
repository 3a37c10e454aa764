//! Generic substitution cipher trait

use crate::error::Result;

/// Trait for a classical substitution cipher over a language alphabet
pub trait SubstitutionCipher {
    /// Key material the cipher is parameterized by
    type Key: ?Sized;

    /// Encrypts `text`, normalizing it to the cipher's alphabet first
    fn encrypt(&self, text: &str, key: &Self::Key) -> Result<String>;

    /// Decrypts `text`, normalizing it to the cipher's alphabet first
    fn decrypt(&self, text: &str, key: &Self::Key) -> Result<String>;
}
