// src/domain/article/analysis.rs
//! Read-only analysis of article content.
//!
//! Positions are counted in `char`s, not bytes, and every returned slice
//! lies on a UTF-8 boundary.
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{HashMap, hash_map::Entry};

/// Returns a prefix of `text` at most `n_characters` long that does not
/// cut a word in half.
///
/// When `text` is no longer than `n_characters` it is returned whole.
/// Otherwise the cut point walks back from `n_characters` to the nearest
/// space or newline and the prefix before it is returned. If there is no
/// such break at or before `n_characters` the result is empty.
pub fn short_introduction(text: &str, n_characters: usize) -> &str {
    let Some((cut, ch)) = text.char_indices().nth(n_characters) else {
        return text;
    };

    text[..cut + ch.len_utf8()]
        .char_indices()
        .rev()
        .find(|&(_, c)| is_word_break(c))
        .map_or("", |(idx, _)| &text[..idx])
}

fn is_word_break(c: char) -> bool {
    matches!(c, ' ' | '\n')
}

/// Counts lowercase words in `text` and keeps the `n_words` most frequent.
///
/// Anything that is not alphabetic separates words, so `"they're"` counts
/// as `they` and `re`. Words with equal counts keep the order in which
/// they first appear.
pub fn most_common_words(text: &str, n_words: usize) -> WordFrequencies {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();
    for word in normalized.split_whitespace() {
        match positions.entry(word) {
            Entry::Occupied(slot) => entries[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push((word.to_owned(), 1));
            }
        }
    }

    // stable: ties stay in first-appearance order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n_words);

    WordFrequencies { entries }
}

/// Word counts in ranking order.
///
/// The order is part of the result: iteration and serialisation both
/// yield the most frequent word first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    entries: Vec<(String, usize)>,
}

impl WordFrequencies {
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == word)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl IntoIterator for WordFrequencies {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for WordFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}
