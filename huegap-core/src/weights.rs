//! Edge weight tables keyed by normalised [`EdgeKey`]s.

use std::collections::{BTreeMap, btree_map};

use crate::{
    edge::{CandidateEdge, CandidateId, EdgeKey},
    error::Result,
};

/// Mapping from candidate pair to co-occurrence weight.
///
/// Zero weights are treated as absent: inserting one removes the pair.
///
/// # Examples
/// ```
/// use huegap_core::{EdgeKey, EdgeWeights};
///
/// let mut weights = EdgeWeights::new();
/// weights.insert(EdgeKey::new("a".into(), "b".into())?, 4);
/// weights.accumulate(EdgeKey::new("b".into(), "a".into())?, 3);
/// assert_eq!(weights.get(&"a".into(), &"b".into()), Some(7));
/// # Ok::<(), huegap_core::ColoringError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeWeights {
    entries: BTreeMap<EdgeKey, u64>,
}

impl EdgeWeights {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a table keyed by legacy string edge keys.
    ///
    /// Duplicate pairs (including the same pair written in both directions)
    /// resolve last-write-wins, in iteration order.
    ///
    /// # Errors
    /// Returns the first key decoding failure reported by
    /// [`crate::parse_edge_key`] or [`EdgeKey::new`].
    ///
    /// # Examples
    /// ```
    /// use huegap_core::{EdgeWeights, make_edge_key};
    ///
    /// let raw = [(make_edge_key("a", "b"), 5), (make_edge_key("b", "c"), 3)];
    /// let weights = EdgeWeights::from_keyed(raw.iter().map(|(k, w)| (k.as_str(), *w)))?;
    /// assert_eq!(weights.len(), 2);
    /// # Ok::<(), huegap_core::ColoringError>(())
    /// ```
    pub fn from_keyed<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut weights = Self::new();
        for (raw, weight) in entries {
            weights.insert(raw.parse()?, weight);
        }
        Ok(weights)
    }

    /// Sets the weight of `key`, replacing any previous value.
    ///
    /// Returns the previous weight, if any.
    pub fn insert(&mut self, key: EdgeKey, weight: u64) -> Option<u64> {
        if weight == 0 {
            return self.entries.remove(&key);
        }
        self.entries.insert(key, weight)
    }

    /// Adds `weight` to whatever the pair already carries.
    ///
    /// Used when several timelines contribute counts for the same pair.
    pub fn accumulate(&mut self, key: EdgeKey, weight: u64) {
        if weight == 0 {
            return;
        }
        let entry = self.entries.entry(key).or_insert(0);
        *entry = entry.saturating_add(weight);
    }

    /// Folds every entry of `other` into `self` with [`Self::accumulate`].
    pub fn accumulate_all(&mut self, other: &Self) {
        for (key, weight) in &other.entries {
            self.accumulate(key.clone(), *weight);
        }
    }

    /// Returns the weight recorded for the unordered pair `(a, b)`.
    #[must_use]
    pub fn get(&self, a: &CandidateId, b: &CandidateId) -> Option<u64> {
        let key = EdgeKey::new(a.clone(), b.clone()).ok()?;
        self.get_key(&key)
    }

    /// Returns the weight recorded for `key`.
    #[must_use]
    pub fn get_key(&self, key: &EdgeKey) -> Option<u64> {
        self.entries.get(key).copied()
    }

    /// Number of weighted pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, EdgeKey, u64> {
        self.entries.iter()
    }

    /// Returns every entry as a [`CandidateEdge`] in processing priority
    /// order: heaviest first, ties broken by ascending key.
    #[must_use]
    pub fn by_priority(&self) -> Vec<CandidateEdge> {
        let mut edges: Vec<CandidateEdge> = self
            .entries
            .iter()
            .map(|(key, weight)| CandidateEdge::new(key.clone(), *weight))
            .collect();
        edges.sort_unstable();
        edges
    }
}

impl<'a> IntoIterator for &'a EdgeWeights {
    type Item = (&'a EdgeKey, &'a u64);
    type IntoIter = btree_map::Iter<'a, EdgeKey, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(EdgeKey, u64)> for EdgeWeights {
    fn from_iter<T: IntoIterator<Item = (EdgeKey, u64)>>(iter: T) -> Self {
        let mut weights = Self::new();
        for (key, weight) in iter {
            weights.insert(key, weight);
        }
        weights
    }
}
