//! Cracker configuration shared by the command-line front ends

use crate::key_recovery::{PeriodCheck, Rot};
use crate::language::Language;
use crate::vigenere::Vigenere;

/// Key lengths below this bound are searched when none is given
pub const DEFAULT_MAX_KEY_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CrackerConfig {
    pub language: Language,
    /// Exclusive upper bound of the key length search
    pub max_key_length: usize,
    pub rot: Rot,
    pub period_check: PeriodCheck,
}

impl Default for CrackerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            rot: Rot::default(),
            period_check: PeriodCheck::default(),
        }
    }
}

impl CrackerConfig {
    /// Builds a Vigenère engine for the configured language and key recovery options
    pub fn build(&self) -> Vigenere {
        Vigenere::new(self.language.profile())
            .with_rot(self.rot)
            .with_period_check(self.period_check)
    }
}
