//! Single-shift (Caesar) substitution over a language alphabet

use crate::cipher::SubstitutionCipher;
use crate::error::Result;
use crate::frequency::{frequency_table, index_of_coincidence};
use crate::language::LanguageProfile;
use crate::text::normalize;

/// Best decryption shift found for one ciphertext group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftFit {
    /// Shift that decrypts the group
    pub shift: usize,
    /// Distance between the decrypted group's IC and the language target
    pub deviation: f64,
}

/// Stateless Caesar engine bound to one language profile
#[derive(Debug, Clone)]
pub struct Caesar {
    profile: LanguageProfile,
}

impl Caesar {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Normalizes `text` to this engine's alphabet
    pub fn strip(&self, text: &str) -> String {
        normalize(text, &self.profile)
    }

    /// Shifts every letter of `text` forward by `shift` positions
    pub fn encrypt_shift(&self, text: &str, shift: usize) -> String {
        self.encrypt_stripped(&self.strip(text), shift)
    }

    /// Shifts every letter of `text` back by `shift` positions
    pub fn decrypt_shift(&self, text: &str, shift: usize) -> String {
        self.decrypt_stripped(&self.strip(text), shift)
    }

    /// Finds the shift whose decryption of `group` has an index of
    /// coincidence closest to the language target.
    ///
    /// Every shift in `0..alphabet_size` is tried; on equal deviations the
    /// lower shift wins. An empty group carries no evidence and fits shift 0
    /// with zero deviation.
    pub fn best_shift(&self, group: &str) -> ShiftFit {
        if group.is_empty() {
            return ShiftFit { shift: 0, deviation: 0.0 };
        }

        let target = self.profile.target_ic();
        let mut best = ShiftFit { shift: 0, deviation: f64::MAX };

        for shift in 0..self.profile.alphabet_size() {
            let plaintext = self.decrypt_stripped(group, shift);
            let ic = index_of_coincidence(&frequency_table(&plaintext), &self.profile);
            let deviation = (ic - target).abs();

            if deviation < best.deviation {
                best = ShiftFit { shift, deviation };
            }
        }

        best
    }

    pub(crate) fn encrypt_stripped(&self, text: &str, shift: usize) -> String {
        self.substitute(text, &self.substitution_table(shift))
    }

    pub(crate) fn decrypt_stripped(&self, text: &str, shift: usize) -> String {
        let size = self.profile.alphabet_size();
        self.encrypt_stripped(text, (size - shift % size) % size)
    }

    /// Letter each alphabet offset maps to under `shift`
    fn substitution_table(&self, shift: usize) -> Vec<char> {
        (0..self.profile.alphabet_size())
            .map(|offset| self.profile.letter(offset + shift % self.profile.alphabet_size()))
            .collect()
    }

    fn substitute(&self, text: &str, table: &[char]) -> String {
        text.chars()
            .filter_map(|c| self.profile.offset(c).map(|offset| table[offset]))
            .collect()
    }
}

impl SubstitutionCipher for Caesar {
    type Key = usize;

    fn encrypt(&self, text: &str, key: &usize) -> Result<String> {
        Ok(self.encrypt_shift(text, *key))
    }

    fn decrypt(&self, text: &str, key: &usize) -> Result<String> {
        Ok(self.decrypt_shift(text, *key))
    }
}
