//! Per-alphabet constants used by every cipher and analysis routine

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, Result};

/// Allowed distance of a frequency table's sum from 1.0
const FREQUENCY_SUM_TOLERANCE: f64 = 0.01;

const ENGLISH_FREQUENCIES: [(char, f64); 26] = [
    ('A', 0.082), ('B', 0.015), ('C', 0.028), ('D', 0.043), ('E', 0.127),
    ('F', 0.022), ('G', 0.020), ('H', 0.061), ('I', 0.070), ('J', 0.002),
    ('K', 0.008), ('L', 0.040), ('M', 0.024), ('N', 0.067), ('O', 0.075),
    ('P', 0.019), ('Q', 0.001), ('R', 0.060), ('S', 0.063), ('T', 0.091),
    ('U', 0.028), ('V', 0.010), ('W', 0.023), ('X', 0.001), ('Y', 0.020),
    ('Z', 0.001),
];

// 'Ё' sits outside the contiguous А..Я block and is not part of the alphabet.
const RUSSIAN_FREQUENCIES: [(char, f64); 32] = [
    ('А', 0.07998), ('Б', 0.01592), ('В', 0.04533), ('Г', 0.01687),
    ('Д', 0.02977), ('Е', 0.08483), ('Ж', 0.00940), ('З', 0.01641),
    ('И', 0.07367), ('Й', 0.01208), ('К', 0.03486), ('Л', 0.04343),
    ('М', 0.03203), ('Н', 0.06700), ('О', 0.10983), ('П', 0.02804),
    ('Р', 0.04746), ('С', 0.05473), ('Т', 0.06318), ('У', 0.02615),
    ('Ф', 0.00267), ('Х', 0.00966), ('Ц', 0.00486), ('Ч', 0.01450),
    ('Ш', 0.00718), ('Щ', 0.00361), ('Ъ', 0.00037), ('Ы', 0.01898),
    ('Ь', 0.01735), ('Э', 0.00331), ('Ю', 0.00639), ('Я', 0.02001),
];

/// Latin alphabet, A-Z
pub const ENGLISH: LanguageProfile = LanguageProfile {
    name: Cow::Borrowed("english"),
    start: 'A',
    target_ic: 0.065,
    letter_freq: Cow::Borrowed(&ENGLISH_FREQUENCIES),
};

/// Cyrillic alphabet, А-Я
pub const RUSSIAN: LanguageProfile = LanguageProfile {
    name: Cow::Borrowed("russian"),
    start: 'А',
    target_ic: 0.0553,
    letter_freq: Cow::Borrowed(&RUSSIAN_FREQUENCIES),
};

/// Alphabet description plus the statistics needed to score decryptions.
///
/// The letters of a profile are always the `alphabet_size()` contiguous code
/// points starting at `start()`, in order. Built-in profiles are constants;
/// custom ones go through [`LanguageProfile::new`], which enforces that
/// layout so offsets and modular arithmetic are well defined everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    name: Cow<'static, str>,
    start: char,
    target_ic: f64,
    letter_freq: Cow<'static, [(char, f64)]>,
}

impl LanguageProfile {
    /// Builds a custom profile from an ordered `(letter, frequency)` table.
    ///
    /// # Arguments
    ///
    /// * `name` - Human readable name used in logs and errors.
    /// * `target_ic` - Expected index of coincidence of correct plaintext, in (0, 1).
    /// * `letter_freq` - Contiguous letters starting at the first entry, frequencies summing to 1.
    ///
    /// # Returns
    ///
    /// The profile, or `CipherError::InvalidProfile` describing the first violated constraint.
    pub fn new(
        name: impl Into<String>,
        target_ic: f64,
        letter_freq: Vec<(char, f64)>,
    ) -> Result<Self> {
        let start = match letter_freq.first() {
            Some(&(c, _)) => c,
            None => {
                return Err(CipherError::InvalidProfile(
                    "letter frequency table is empty".to_string(),
                ))
            }
        };

        let profile = Self {
            name: Cow::Owned(name.into()),
            start,
            target_ic,
            letter_freq: Cow::Owned(letter_freq),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks the layout and statistics invariants of this profile
    pub fn validate(&self) -> Result<()> {
        if self.letter_freq.is_empty() {
            return Err(CipherError::InvalidProfile(
                "letter frequency table is empty".to_string(),
            ));
        }

        if !(self.target_ic > 0.0 && self.target_ic < 1.0) {
            return Err(CipherError::InvalidProfile(format!(
                "target index of coincidence {} is outside (0, 1)",
                self.target_ic
            )));
        }

        for (i, &(letter, freq)) in self.letter_freq.iter().enumerate() {
            if letter as u32 != self.start as u32 + i as u32 {
                return Err(CipherError::InvalidProfile(format!(
                    "letter '{}' at position {} breaks the contiguous range starting at '{}'",
                    letter, i, self.start
                )));
            }
            if !(0.0..=1.0).contains(&freq) {
                return Err(CipherError::InvalidProfile(format!(
                    "frequency {} of '{}' is outside [0, 1]",
                    freq, letter
                )));
            }
        }

        let sum: f64 = self.letter_freq.iter().map(|&(_, f)| f).sum();
        if (sum - 1.0).abs() > FREQUENCY_SUM_TOLERANCE {
            return Err(CipherError::InvalidProfile(format!(
                "letter frequencies sum to {sum}, expected 1.0"
            )));
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First letter of the alphabet
    pub fn start(&self) -> char {
        self.start
    }

    pub fn alphabet_size(&self) -> usize {
        self.letter_freq.len()
    }

    pub fn target_ic(&self) -> f64 {
        self.target_ic
    }

    pub fn letter_freq(&self) -> &[(char, f64)] {
        &self.letter_freq
    }

    /// Position of `c` within the alphabet, if it belongs to it
    pub fn offset(&self, c: char) -> Option<usize> {
        let offset = (c as u32).checked_sub(self.start as u32)? as usize;
        (offset < self.alphabet_size()).then_some(offset)
    }

    /// Letter at `offset`, wrapping around the alphabet
    pub fn letter(&self, offset: usize) -> char {
        self.letter_freq[offset % self.alphabet_size()].0
    }

    /// Expected frequency of `c` in natural text
    pub fn frequency(&self, c: char) -> Option<f64> {
        self.offset(c).map(|offset| self.letter_freq[offset].1)
    }

    pub fn contains(&self, c: char) -> bool {
        self.offset(c).is_some()
    }
}

/// Built-in languages selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub fn profile(self) -> LanguageProfile {
        match self {
            Language::English => ENGLISH,
            Language::Russian => RUSSIAN,
        }
    }
}

impl FromStr for Language {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "russian" | "ru" => Ok(Language::Russian),
            other => Err(CipherError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Russian => write!(f, "russian"),
        }
    }
}
