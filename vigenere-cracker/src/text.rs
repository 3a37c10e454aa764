//! Text helpers: alphabet normalization and residue-class partitioning

use crate::language::LanguageProfile;

/// Uppercases `text` and keeps only letters of the profile's alphabet.
///
/// Everything else (whitespace, punctuation, digits, letters of other
/// alphabets) is dropped silently. The result is idempotent under a second
/// call with the same profile.
pub fn normalize(text: &str, profile: &LanguageProfile) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| profile.contains(c))
        .collect()
}

/// Alphabet offsets of every letter in already normalized `text`
pub fn offsets(text: &str, profile: &LanguageProfile) -> Vec<usize> {
    text.chars().filter_map(|c| profile.offset(c)).collect()
}

/// Splits `text` into `groups` subsequences by index modulo `groups`.
///
/// Group `j` holds the characters at positions `j, j + groups, j + 2 * groups, ...`
/// in their original order. Groups past the end of a short text are empty.
pub fn split_residues(text: &str, groups: usize) -> Vec<String> {
    let mut subtexts = vec![String::new(); groups];
    if groups == 0 {
        return subtexts;
    }

    for (i, c) in text.chars().enumerate() {
        subtexts[i % groups].push(c);
    }

    subtexts
}

/// Reassembles residue groups in round-robin order, inverting [`split_residues`]
pub fn interleave(groups: &[String]) -> String {
    let columns: Vec<Vec<char>> = groups.iter().map(|g| g.chars().collect()).collect();
    let total: usize = columns.iter().map(Vec::len).sum();
    let width = columns.len();

    (0..total)
        .filter_map(|i| columns[i % width].get(i / width).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{ENGLISH, RUSSIAN};

    #[test]
    fn test_normalize_english() {
        assert_eq!(normalize("Attack at dawn!", &ENGLISH), "ATTACKATDAWN");
        assert_eq!(normalize("123 ,.;", &ENGLISH), "");
        assert_eq!(normalize("", &ENGLISH), "");
        assert_eq!(normalize("Привет, world", &ENGLISH), "WORLD");
    }

    #[test]
    fn test_normalize_russian() {
        assert_eq!(normalize("Привет, world", &RUSSIAN), "ПРИВЕТ");
        assert_eq!(normalize("ёлка", &RUSSIAN), "ЛКА");
    }

    #[test]
    fn test_split_text() {
        let subtexts = split_residues("ABCDEFGH", 3);
        assert_eq!(subtexts, vec!["ADG", "BEH", "CF"]);
    }

    #[test]
    fn test_split_more_groups_than_letters() {
        let subtexts = split_residues("AB", 4);
        assert_eq!(subtexts, vec!["A", "B", "", ""]);
        assert_eq!(interleave(&subtexts), "AB");
    }

    #[test]
    fn test_interleave() {
        let groups = vec!["ADG".to_string(), "BEH".to_string(), "CF".to_string()];
        assert_eq!(interleave(&groups), "ABCDEFGH");
        assert_eq!(interleave(&[]), "");
    }

    #[test]
    fn test_zero_groups() {
        assert!(split_residues("ABC", 0).is_empty());
    }
}
