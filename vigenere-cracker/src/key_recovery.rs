//! Key recovery from a known plaintext/ciphertext pair

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CipherError, Result};
use crate::text::{normalize, offsets};
use crate::vigenere::Vigenere;

/// Rotation subtracted from every recovered key offset.
///
/// `Rot1` reports keys in the convention where `A` shifts by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rot {
    #[default]
    Rot0 = 0,
    Rot1 = 1,
}

impl Rot {
    pub fn amount(self) -> usize {
        self as usize
    }
}

impl FromStr for Rot {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "rot0" => Ok(Rot::Rot0),
            "1" | "rot1" => Ok(Rot::Rot1),
            other => Err(CipherError::InvalidOption(format!("rotation '{other}' (expected 0 or 1)"))),
        }
    }
}

impl fmt::Display for Rot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

/// How the repeating-key search treats a trailing partial block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodCheck {
    /// Only full-length blocks must repeat the first block
    #[default]
    Lenient,
    /// The trailing partial block must also match the key's prefix
    Strict,
}

impl FromStr for PeriodCheck {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(PeriodCheck::Lenient),
            "strict" => Ok(PeriodCheck::Strict),
            other => Err(CipherError::InvalidOption(format!(
                "period check '{other}' (expected lenient or strict)"
            ))),
        }
    }
}

impl Vigenere {
    /// Reconstructs the repeating key that turned `plaintext` into `ciphertext`.
    ///
    /// The per-letter difference `ciphertext - plaintext - rot` is the key
    /// stream; its shortest repeating block is returned as the key.
    ///
    /// # Errors
    ///
    /// `CipherError::LengthMismatch` if the normalized texts differ in length.
    /// Two empty texts recover an empty key.
    pub fn recover_key(&self, plaintext: &str, ciphertext: &str) -> Result<String> {
        let profile = self.profile();
        let plain = offsets(&normalize(plaintext, profile), profile);
        let cipher = offsets(&normalize(ciphertext, profile), profile);

        if plain.len() != cipher.len() {
            return Err(CipherError::LengthMismatch {
                plaintext: plain.len(),
                ciphertext: cipher.len(),
            });
        }

        let size = profile.alphabet_size();
        let rot = self.rot.amount() % size;
        let delta: Vec<char> = plain
            .iter()
            .zip(&cipher)
            .map(|(&p, &c)| profile.letter(c + 2 * size - p - rot))
            .collect();

        let key: String = shortest_period(&delta, self.period_check)
            .map(|block| block.iter().collect())
            .unwrap_or_default();

        debug!(key = %key, stream_length = delta.len(), "recovered key");
        Ok(key)
    }
}

/// Shortest prefix of `stream` that repeats through the whole stream
fn shortest_period<T: PartialEq>(stream: &[T], check: PeriodCheck) -> Option<&[T]> {
    (1..=stream.len()).find_map(|period| {
        let mut blocks = stream.chunks(period);
        let first = blocks.next()?;
        let repeats = blocks.all(|block| match check {
            PeriodCheck::Lenient => block.len() != period || block == first,
            PeriodCheck::Strict => block == &first[..block.len()],
        });
        repeats.then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ENGLISH;

    #[test]
    fn test_recover_key() {
        let vigenere = Vigenere::new(ENGLISH);
        assert_eq!(vigenere.recover_key("ATTACKATDAWN", "KXRKGIKXBKAL").unwrap(), "KEY");
    }

    #[test]
    fn test_recover_key_normalizes() {
        let vigenere = Vigenere::new(ENGLISH);
        assert_eq!(vigenere.recover_key("attack at dawn", "kxr-kgi-kxb-kal").unwrap(), "KEY");
    }

    #[test]
    fn test_length_mismatch() {
        let vigenere = Vigenere::new(ENGLISH);
        assert_eq!(
            vigenere.recover_key("ABC", "AB"),
            Err(CipherError::LengthMismatch { plaintext: 3, ciphertext: 2 })
        );
    }

    #[test]
    fn test_empty_texts() {
        let vigenere = Vigenere::new(ENGLISH);
        assert_eq!(vigenere.recover_key("", "!!").unwrap(), "");
    }

    #[test]
    fn test_rot1() {
        let vigenere = Vigenere::new(ENGLISH).with_rot(Rot::Rot1);
        assert_eq!(vigenere.recover_key("ATTACKATDAWN", "KXRKGIKXBKAL").unwrap(), "JDX");
    }

    #[test]
    fn test_partial_key_repetition() {
        let vigenere = Vigenere::new(ENGLISH);
        let ciphertext = vigenere.encrypt("HELLOWORLD", "KEY").unwrap();
        assert_eq!(vigenere.recover_key("HELLOWORLD", &ciphertext).unwrap(), "KEY");
    }

    #[test]
    fn test_non_repeating_stream() {
        let lenient = Vigenere::new(ENGLISH);
        let strict = Vigenere::new(ENGLISH).with_period_check(PeriodCheck::Strict);
        // The lenient check never compares the trailing "D".
        assert_eq!(lenient.recover_key("AAAA", "ABCD").unwrap(), "ABC");
        assert_eq!(strict.recover_key("AAAA", "ABCD").unwrap(), "ABCD");
        assert_eq!(strict.recover_key("A", "Q").unwrap(), "Q");
        assert_eq!(lenient.recover_key("A", "Q").unwrap(), "Q");
    }

    #[test]
    fn test_shortest_period_lenient_ignores_tail() {
        let stream: Vec<char> = "ABABX".chars().collect();
        let lenient: String = shortest_period(&stream, PeriodCheck::Lenient).unwrap().iter().collect();
        let strict: String = shortest_period(&stream, PeriodCheck::Strict).unwrap().iter().collect();
        assert_eq!(lenient, "AB");
        assert_eq!(strict, "ABABX");
    }

    #[test]
    fn test_strict_accepts_matching_tail() {
        let stream: Vec<char> = "ABCABCAB".chars().collect();
        let strict: String = shortest_period(&stream, PeriodCheck::Strict).unwrap().iter().collect();
        assert_eq!(strict, "ABC");
    }

    #[test]
    fn test_shortest_period_empty() {
        let stream: Vec<char> = Vec::new();
        assert!(shortest_period(&stream, PeriodCheck::Lenient).is_none());
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("1".parse::<Rot>().unwrap(), Rot::Rot1);
        assert_eq!("ROT0".parse::<Rot>().unwrap(), Rot::Rot0);
        assert!("2".parse::<Rot>().is_err());
        assert_eq!("strict".parse::<PeriodCheck>().unwrap(), PeriodCheck::Strict);
        assert!(matches!(
            "loose".parse::<PeriodCheck>(),
            Err(CipherError::InvalidOption(_))
        ));
    }
}
