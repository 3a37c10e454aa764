//! Vigenère encryption and index-of-coincidence cryptanalysis

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::caesar::Caesar;
use crate::cipher::SubstitutionCipher;
use crate::error::{CipherError, Result};
use crate::key_recovery::{PeriodCheck, Rot};
use crate::language::LanguageProfile;
use crate::text::{interleave, offsets, split_residues};

/// One decoding attempt produced by [`Vigenere::crack`]
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Key length this attempt assumed
    pub key_length: usize,
    /// Sum of the per-group IC deviations; lower is better
    pub score: f64,
    /// Key made of the best shift of every group
    pub key: String,
    /// Full-length decryption under `key`
    pub plaintext: String,
}

/// Vigenère engine bound to one language profile
#[derive(Debug, Clone)]
pub struct Vigenere {
    caesar: Caesar,
    pub(crate) rot: Rot,
    pub(crate) period_check: PeriodCheck,
}

impl Vigenere {
    pub fn new(profile: LanguageProfile) -> Self {
        Self {
            caesar: Caesar::new(profile),
            rot: Rot::default(),
            period_check: PeriodCheck::default(),
        }
    }

    /// Sets the rotation subtracted from every key letter during key recovery
    pub fn with_rot(mut self, rot: Rot) -> Self {
        self.rot = rot;
        self
    }

    /// Sets how strictly key recovery checks the repeating key
    pub fn with_period_check(mut self, period_check: PeriodCheck) -> Self {
        self.period_check = period_check;
        self
    }

    pub fn profile(&self) -> &LanguageProfile {
        self.caesar.profile()
    }

    /// Encrypts `text` under the repeating `key`.
    ///
    /// Both are normalized to the alphabet first; every plaintext offset is
    /// added to the matching key offset modulo the alphabet size.
    ///
    /// # Errors
    ///
    /// `CipherError::EmptyKey` if `key` has no letter of the alphabet.
    pub fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        self.apply_key(text, key, |p, k, size| (p + k) % size)
    }

    /// Decrypts `text` under the repeating `key`, inverting [`Vigenere::encrypt`]
    pub fn decrypt(&self, text: &str, key: &str) -> Result<String> {
        self.apply_key(text, key, |c, k, size| (c + size - k) % size)
    }

    fn apply_key(
        &self,
        text: &str,
        key: &str,
        combine: impl Fn(usize, usize, usize) -> usize,
    ) -> Result<String> {
        let profile = self.profile();
        let key = offsets(&self.caesar.strip(key), profile);
        if key.is_empty() {
            return Err(CipherError::EmptyKey {
                language: profile.name().to_string(),
            });
        }

        let size = profile.alphabet_size();
        let text = self.caesar.strip(text);

        Ok(offsets(&text, profile)
            .into_iter()
            .zip(key.iter().cycle())
            .map(|(offset, &shift)| profile.letter(combine(offset, shift, size)))
            .collect())
    }

    /// Breaks `ciphertext` without knowing the key.
    ///
    /// Every key length in `1..max_key_length` is tried: the text is split
    /// into that many residue groups, each group is solved as a Caesar
    /// cipher, and the per-group deviations are summed into the score.
    ///
    /// # Returns
    ///
    /// One candidate per key length, sorted by ascending score. Equal scores
    /// keep ascending key length order. Short texts and multiples of the
    /// true key length may outrank the correct answer.
    pub fn crack(&self, ciphertext: &str, max_key_length: usize) -> Vec<Candidate> {
        let text = self.caesar.strip(ciphertext);
        debug!(
            language = self.profile().name(),
            letters = text.chars().count(),
            max_key_length,
            "cracking ciphertext"
        );

        #[cfg(feature = "parallel")]
        let mut candidates: Vec<Candidate> = (1..max_key_length)
            .into_par_iter()
            .map(|key_length| self.solve_key_length(&text, key_length))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let mut candidates: Vec<Candidate> = (1..max_key_length)
            .map(|key_length| self.solve_key_length(&text, key_length))
            .collect();

        // Stable sort: ties stay in key length order.
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

        if let Some(best) = candidates.first() {
            debug!(key_length = best.key_length, score = best.score, key = %best.key, "best candidate");
        }

        candidates
    }

    /// Scores one key length against normalized `text`
    fn solve_key_length(&self, text: &str, key_length: usize) -> Candidate {
        let groups = split_residues(text, key_length);
        let mut score = 0.0;
        let mut key = String::with_capacity(key_length);
        let mut plaintexts = Vec::with_capacity(key_length);

        for group in &groups {
            let fit = self.caesar.best_shift(group);
            score += fit.deviation;
            key.push(self.profile().letter(fit.shift));
            plaintexts.push(self.caesar.decrypt_stripped(group, fit.shift));
        }

        trace!(key_length, score, key = %key, "scored key length");

        Candidate {
            key_length,
            score,
            key,
            plaintext: interleave(&plaintexts),
        }
    }
}

impl SubstitutionCipher for Vigenere {
    type Key = str;

    fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        Vigenere::encrypt(self, text, key)
    }

    fn decrypt(&self, text: &str, key: &str) -> Result<String> {
        Vigenere::decrypt(self, text, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{ENGLISH, RUSSIAN};

    #[test]
    fn test_encrypt() {
        let vigenere = Vigenere::new(ENGLISH);
        assert_eq!(vigenere.encrypt("ATTACKATDAWN", "KEY").unwrap(), "KXRKGIKXBKAL");
        assert_eq!(vigenere.encrypt("Attack at dawn!", "k e y").unwrap(), "KXRKGIKXBKAL");
    }

    #[test]
    fn test_decrypt() {
        let vigenere = Vigenere::new(ENGLISH);
        assert_eq!(vigenere.decrypt("RIJVS", "KEY").unwrap(), "HELLO");
    }

    #[test]
    fn test_russian_roundtrip() {
        let vigenere = Vigenere::new(RUSSIAN);
        let encrypted = vigenere.encrypt("Съешь же ещё этих мягких булок", "ключ").unwrap();
        assert_eq!(vigenere.decrypt(&encrypted, "КЛЮЧ").unwrap(), "СЪЕШЬЖЕЕЩЭТИХМЯГКИХБУЛОК");
    }

    #[test]
    fn test_empty_key() {
        let vigenere = Vigenere::new(ENGLISH);
        assert!(matches!(
            vigenere.encrypt("text", "123"),
            Err(CipherError::EmptyKey { .. })
        ));
        assert!(matches!(
            vigenere.decrypt("text", ""),
            Err(CipherError::EmptyKey { .. })
        ));
    }

    #[test]
    fn test_crack_empty_ciphertext() {
        let vigenere = Vigenere::new(ENGLISH);
        let candidates = vigenere.crack("", 5);
        assert_eq!(candidates.len(), 4);
        for (i, candidate) in candidates.iter().enumerate() {
            assert_eq!(candidate.key_length, i + 1);
            assert_eq!(candidate.score, 0.0);
            assert_eq!(candidate.plaintext, "");
        }
    }

    #[test]
    fn test_crack_without_key_lengths() {
        let vigenere = Vigenere::new(ENGLISH);
        assert!(vigenere.crack("SOMETEXT", 1).is_empty());
        assert!(vigenere.crack("SOMETEXT", 0).is_empty());
    }

    #[test]
    fn test_crack_ties_keep_key_length_order() {
        let vigenere = Vigenere::new(ENGLISH);
        let candidates = vigenere.crack("abc", 6);
        let lengths: Vec<usize> = candidates.iter().map(|c| c.key_length).collect();
        assert_eq!(lengths, vec![1, 3, 4, 5, 2]);
        assert_eq!(candidates[1].score, candidates[2].score);
        assert_eq!(candidates[2].score, candidates[3].score);
        assert_eq!(candidates[1].plaintext, "SSS");
    }

    #[test]
    fn test_candidate_plaintext_matches_key() {
        let vigenere = Vigenere::new(ENGLISH);
        let ciphertext = vigenere.encrypt("the quick brown fox jumps over the lazy dog", "fox").unwrap();
        for candidate in vigenere.crack(&ciphertext, 8) {
            assert_eq!(candidate.key.chars().count(), candidate.key_length);
            assert_eq!(
                vigenere.decrypt(&ciphertext, &candidate.key).unwrap(),
                candidate.plaintext
            );
        }
    }
}
