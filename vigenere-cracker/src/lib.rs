//! # Vigenère Cracker Library
//!
//! This library implements the Vigenère cipher and a ciphertext-only attack on
//! it based on letter-frequency analysis.
//!
//! ## Components
//!
//! - **Language profiles** - alphabet layout and expected letter frequencies (English, Russian)
//! - **Normalization** - uppercase and strip text down to a profile's alphabet
//! - **Frequency analysis** - frequency tables and index of coincidence scoring
//! - **Caesar** - single-shift substitution and best-shift search
//! - **Vigenère** - repeating-key encryption and key length search
//! - **Key recovery** - derive the repeating key from a plaintext/ciphertext pair
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_cracker::{Language, Vigenere};
//!
//! let vigenere = Vigenere::new(Language::English.profile());
//!
//! let ciphertext = vigenere.encrypt("Attack at dawn!", "key")?;
//! assert_eq!(ciphertext, "KXRKGIKXBKAL");
//!
//! // Ranked guesses, best first
//! let candidates = vigenere.crack(&ciphertext, 10);
//! assert_eq!(candidates.len(), 9);
//!
//! let key = vigenere.recover_key("attack at dawn", &ciphertext)?;
//! assert_eq!(key, "KEY");
//! # Ok::<(), vigenere_cracker::CipherError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default) - search key lengths on the `rayon` thread pool

// Public modules
pub mod caesar;
pub mod cipher;
pub mod config;
pub mod error;
pub mod frequency;
pub mod key_recovery;
pub mod language;
pub mod text;
pub mod vigenere;

// Re-exports for easy access
pub use caesar::{Caesar, ShiftFit};
pub use cipher::SubstitutionCipher;
pub use config::{CrackerConfig, DEFAULT_MAX_KEY_LENGTH};
pub use error::{CipherError, Result};
pub use frequency::{frequency_table, index_of_coincidence, FrequencyTable};
pub use key_recovery::{PeriodCheck, Rot};
pub use language::{Language, LanguageProfile, ENGLISH, RUSSIAN};
pub use text::normalize;
pub use vigenere::{Candidate, Vigenere};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
