//! The word set: a deduplicated, ordered accumulator of normalized words.

use std::collections::BTreeSet;

use gowords_core::{NormalizePolicy, normalize_one};

/// Deduplicated set of dictionary words.
///
/// Every word passes through the set's [`NormalizePolicy`] on the way in. Iteration is in byte-wise ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    policy: NormalizePolicy,
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn new(policy: NormalizePolicy) -> Self {
        Self {
            policy,
            words: BTreeSet::new(),
        }
    }

    pub fn policy(&self) -> NormalizePolicy {
        self.policy
    }

    /// Normalize each raw token and insert the resulting words.
    ///
    /// ## Returns
    /// - The number of words that were not already present.
    pub fn add_words<I, S>(&mut self, raw: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for token in raw {
            let token = token.as_ref();
            match normalize_one(token, self.policy) {
                Some(word) => {
                    if self.insert_normalized(word) {
                        added += 1;
                    }
                }
                None => tracing::trace!(token, "token normalizes to nothing"),
            }
        }
        added
    }

    /// Insert a word that is already normalized. Returns `false` if it was present.
    pub fn insert_normalized(&mut self, word: impl AsRef<str>) -> bool {
        let word = word.as_ref();
        if self.words.contains(word) {
            return false;
        }
        self.words.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in byte-wise ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::collections::btree_set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
