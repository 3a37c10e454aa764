//! Error types for cipher and cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    #[error("Key has no letters of the {language} alphabet")]
    EmptyKey { language: String },

    #[error("Length mismatch: plaintext has {plaintext} letters, ciphertext has {ciphertext}")]
    LengthMismatch { plaintext: usize, ciphertext: usize },

    #[error("Invalid language profile: {0}")]
    InvalidProfile(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
