// SPDX-License-Identifier: Apache-2.0

//! Per-PR aggregate counts.
//!
//! [`Summary::compute`] is a pure function over the fetched reviews and the
//! merged comment lists. The review-state histogram keeps first-seen order,
//! which [`CountMap`] preserves through serialization.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{Comment, CommentKind, Review};

/// A string-to-count map that keeps keys in first-seen order.
///
/// `serde_json`'s map type reorders keys, so histograms that must report
/// states or authors in encounter order are backed by a vector instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap(Vec<(String, u64)>);

impl CountMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `key`, inserting it at the end on first
    /// sight.
    pub fn bump(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Adds `amount` to the count for `key`, inserting it at the end on
    /// first sight.
    pub fn add(&mut self, key: &str, amount: u64) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
            entry.1 += amount;
        } else {
            self.0.push((key.to_owned(), amount));
        }
    }

    /// Returns the count for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The `n` highest counts, descending; ties keep first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> CountMap {
        let mut entries = self.0.clone();
        // Stable sort, so equal counts stay in first-seen order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        CountMap(entries)
    }
}

impl Serialize for CountMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CountMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountMapVisitor;

        impl<'de> Visitor<'de> for CountMapVisitor {
            type Value = CountMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of string keys to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, count)) = access.next_entry::<String, u64>()? {
                    entries.push((key, count));
                }
                Ok(CountMap(entries))
            }
        }

        deserializer.deserialize_map(CountMapVisitor)
    }
}

/// Aggregate counts for one PR's review activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of submitted reviews.
    pub total_reviews: usize,
    /// Number of line-level review comments.
    pub total_review_comments: usize,
    /// Number of discussion comments.
    pub total_issue_comments: usize,
    /// Length of the merged comment list.
    pub total_all_comments: usize,
    /// Number of target (non-root) comments.
    pub total_target_comments: usize,
    /// Review-state histogram in first-seen order.
    pub review_states: CountMap,
}

impl Summary {
    /// Computes the counts for one PR.
    #[must_use]
    pub fn compute(reviews: &[Review], all_comments: &[Comment], target_comments: &[Comment]) -> Self {
        let mut review_states = CountMap::new();
        for review in reviews {
            review_states.bump(&review.state.to_string());
        }

        let total_review_comments = all_comments
            .iter()
            .filter(|c| c.kind == CommentKind::ReviewComment)
            .count();

        Self {
            total_reviews: reviews.len(),
            total_review_comments,
            total_issue_comments: all_comments.len() - total_review_comments,
            total_all_comments: all_comments.len(),
            total_target_comments: target_comments.len(),
            review_states,
        }
    }
}
