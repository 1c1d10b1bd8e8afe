use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};

/// The canonical key set every lexicon must cover: units, teens, multiples
/// of ten, and the power-of-ten anchors (including the placeholder keys
/// that carry no name).
pub const CANONICAL_KEYS: [u32; 36] = [
    0,
    1,
    2,
    3,
    4,
    5,
    6,
    7,
    8,
    9,
    10,
    11,
    12,
    13,
    14,
    15,
    16,
    17,
    18,
    19,
    20,
    30,
    40,
    50,
    60,
    70,
    80,
    90,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Immutable key-to-name table consulted by translation rules.
///
/// Built once through [`LexiconBuilder`] and read-only afterwards, so it is
/// safe to share across concurrent translations without synchronization.
/// Placeholder entries hold `None`: the key is part of the canonical set but
/// intentionally resolves to no name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    entries: BTreeMap<u32, Option<String>>,
}

impl Lexicon {
    /// Starts building a lexicon.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Looks up the display name for a key.
    ///
    /// Returns `None` both for placeholder entries and for keys outside the
    /// canonical set; callers absorb the miss locally either way.
    pub fn lookup(&self, key: u32) -> Option<&str> {
        self.entries.get(&key).and_then(|name| name.as_deref())
    }

    /// True when the key has an entry at all, named or placeholder.
    pub fn contains_key(&self, key: u32) -> bool {
        self.entries.contains_key(&key)
    }
}

/// Validating builder for [`Lexicon`].
///
/// [`build`](Self::build) checks that the entries cover exactly the
/// canonical key set, so a malformed language pack fails at construction
/// rather than as silent lookup misses during translation.
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    entries: BTreeMap<u32, Option<String>>,
}

impl LexiconBuilder {
    /// Adds a named entry.
    pub fn name(mut self, key: u32, name: impl Into<String>) -> Self {
        self.entries.insert(key, Some(name.into()));
        self
    }

    /// Adds a present-but-absent entry: the key exists but never resolves
    /// to a name.
    pub fn placeholder(mut self, key: u32) -> Self {
        self.entries.insert(key, None);
        self
    }

    /// Validates canonical coverage and builds the lexicon.
    pub fn build(self) -> Result<Lexicon> {
        for key in CANONICAL_KEYS {
            if !self.entries.contains_key(&key) {
                return Err(LexiconError::MissingEntry(key));
            }
        }
        if let Some(&key) = self
            .entries
            .keys()
            .find(|&&key| !CANONICAL_KEYS.contains(&key))
        {
            return Err(LexiconError::NonCanonicalKey(key));
        }
        Ok(Lexicon {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> LexiconBuilder {
        let mut builder = Lexicon::builder();
        for key in CANONICAL_KEYS {
            builder = builder.name(key, format!("name-{key}"));
        }
        builder
    }

    #[test]
    fn build_accepts_full_canonical_coverage() {
        let lexicon = minimal_builder().build().unwrap();
        assert_eq!(lexicon.lookup(40), Some("name-40"));
        assert_eq!(lexicon.lookup(99), None);
    }

    #[test]
    fn build_rejects_missing_canonical_key() {
        let mut builder = Lexicon::builder();
        for key in CANONICAL_KEYS {
            if key == 50 {
                continue;
            }
            builder = builder.name(key, "word");
        }
        assert_eq!(builder.build().unwrap_err(), LexiconError::MissingEntry(50));
    }

    #[test]
    fn build_rejects_non_canonical_key() {
        let builder = minimal_builder().name(21, "twenty-one");
        assert_eq!(
            builder.build().unwrap_err(),
            LexiconError::NonCanonicalKey(21)
        );
    }

    #[test]
    fn placeholder_is_present_but_absent() {
        let lexicon = minimal_builder().placeholder(10_000).build().unwrap();
        assert!(lexicon.contains_key(10_000));
        assert_eq!(lexicon.lookup(10_000), None);
    }
}
