//! Letter frequency analysis

use std::collections::BTreeMap;

use crate::language::LanguageProfile;

/// Relative frequency of every distinct character of a text
pub type FrequencyTable = BTreeMap<char, f64>;

/// Counts each character of `text` and divides by the text length.
///
/// An empty text yields an empty table.
pub fn frequency_table(text: &str) -> FrequencyTable {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total: usize = 0;

    for c in text.chars() {
        *counts.entry(c).or_default() += 1;
        total += 1;
    }

    counts
        .into_iter()
        .map(|(c, count)| (c, count as f64 / total as f64))
        .collect()
}

/// Scores a frequency table against the language's expected frequencies.
///
/// Computes the sum of `observed(c) * expected(c)` over the table. Characters
/// outside the profile's alphabet contribute nothing, and an empty table
/// scores 0. Correctly decrypted natural text lands near
/// [`LanguageProfile::target_ic`]; wrong shifts flatten towards `1 / alphabet_size`.
pub fn index_of_coincidence(table: &FrequencyTable, profile: &LanguageProfile) -> f64 {
    table
        .iter()
        .filter_map(|(&c, &observed)| profile.frequency(c).map(|expected| observed * expected))
        .sum()
}
