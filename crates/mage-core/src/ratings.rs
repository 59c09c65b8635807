//! Dot-rating maps keyed by trait enumerant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::traits::{Categorized, Category, Rated};

/// An ordered map from trait enumerant to dot rating.
///
/// Serialized as a plain JSON object keyed by wire name, e.g.
/// `{"intelligence": 3, "wits": 2, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Ord",
    deserialize = "K: Deserialize<'de> + Ord"
))]
pub struct Ratings<K>(BTreeMap<K, u8>);

impl<K: Rated> Ratings<K> {
    /// Every enumerant of `K` at the same rating.
    pub fn baseline(value: u8) -> Self {
        Self(K::ALL.iter().map(|k| (*k, value)).collect())
    }

    /// Rating of a trait; absent traits read as 0.
    pub fn get(&self, key: K) -> u8 {
        self.0.get(&key).copied().unwrap_or(0)
    }

    /// Set the rating of a trait.
    pub fn set(&mut self, key: K, value: u8) {
        self.0.insert(key, value);
    }

    /// Builder-style [`Ratings::set`].
    pub fn with(mut self, key: K, value: u8) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate over `(trait, rating)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u8)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Sum of all ratings.
    pub fn total(&self) -> u32 {
        self.0.values().map(|v| u32::from(*v)).sum()
    }

    /// Enumerants missing from the map.
    pub fn missing(&self) -> Vec<K> {
        K::ALL
            .iter()
            .copied()
            .filter(|k| !self.0.contains_key(k))
            .collect()
    }

    /// True when every enumerant of `K` has a rating.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

impl<K: Categorized> Ratings<K> {
    /// Dots spent in a category above `baseline`, i.e. the sum of
    /// `rating - baseline` over the category's traits.
    ///
    /// Ratings below the baseline contribute nothing; range checks are
    /// the validator's concern.
    pub fn category_sum(&self, category: Category, baseline: u8) -> u32 {
        K::in_category(category)
            .into_iter()
            .map(|k| u32::from(self.get(k).saturating_sub(baseline)))
            .sum()
    }
}

impl<K: Rated> FromIterator<(K, u8)> for Ratings<K> {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
