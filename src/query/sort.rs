//! Sort resolution: one table per entity mapping sort keys to extractors

use crate::core::{Entity, FieldValue};
use crate::query::criteria::{SortDirection, SortKey};
use std::collections::HashMap;

/// Extracts the comparable value of one sort key from a record
pub type KeyFn<T> = fn(&T) -> FieldValue;

/// Registry of sort keys for one entity type
///
/// Built once per entity (usually behind a `OnceLock`) and shared by every
/// query. The default key is registered at construction, so resolution
/// always yields an extractor.
///
/// # Example
/// ```rust,ignore
/// let table = SortTable::<PlaceSortKey, Place>::new(PlaceSortKey::City, |p| (&p.city).into())
///     .key(PlaceSortKey::District, |p| (&p.district).into())
///     .key(PlaceSortKey::Created, |p| p.created.into());
/// ```
pub struct SortTable<K, T> {
    default_key: K,
    default_extract: KeyFn<T>,
    keys: HashMap<K, KeyFn<T>>,
}

impl<K: SortKey, T> SortTable<K, T> {
    /// Create a table whose default key is `default_key`
    pub fn new(default_key: K, extract: KeyFn<T>) -> Self {
        let mut keys = HashMap::new();
        keys.insert(default_key, extract);
        Self {
            default_key,
            default_extract: extract,
            keys,
        }
    }

    /// Register another sort key
    pub fn key(mut self, key: K, extract: KeyFn<T>) -> Self {
        if key == self.default_key {
            self.default_extract = extract;
        }
        self.keys.insert(key, extract);
        self
    }

    /// The key used when none (or an unregistered one) is requested
    pub fn default_key(&self) -> K {
        self.default_key
    }

    /// Whether `key` has an extractor
    pub fn supports(&self, key: K) -> bool {
        self.keys.contains_key(&key)
    }

    /// Resolve the requested key, falling back to the default
    pub fn resolve(&self, requested: Option<K>) -> (K, KeyFn<T>) {
        if let Some(key) = requested {
            if let Some(extract) = self.keys.get(&key) {
                return (key, *extract);
            }
            tracing::debug!(
                requested = %key,
                fallback = %self.default_key,
                "sort key has no extractor, using default"
            );
        }

        (self.default_key, self.default_extract)
    }

    /// Stable single-key sort
    ///
    /// Records with equal keys keep their relative input order in both
    /// directions: descending reverses the comparator, not the sequence.
    pub fn sort(&self, records: Vec<T>, requested: Option<K>, direction: SortDirection) -> Vec<T> {
        let (_, extract) = self.resolve(requested);
        order_by(records, extract, direction)
    }
}

/// Stable sort of `records` by an already resolved extractor
pub(crate) fn order_by<T>(records: Vec<T>, extract: KeyFn<T>, direction: SortDirection) -> Vec<T> {
    let mut keyed: Vec<(FieldValue, T)> = records
        .into_iter()
        .map(|record| (extract(&record), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// An entity with a closed set of sort keys
pub trait Sortable: Entity {
    /// The entity's sort key enumeration
    type SortKey: SortKey;

    /// The entity's sort table
    fn sort_table() -> &'static SortTable<Self::SortKey, Self>;
}

/// Order `records` by `key` (or the entity default) in `direction`
pub fn sort<T: Sortable>(
    records: Vec<T>,
    key: Option<T::SortKey>,
    direction: SortDirection,
) -> Vec<T> {
    T::sort_table().sort(records, key, direction)
}
