//! Filter criteria and the control fields every entity shares

use crate::query::predicate::PredicateSet;
use crate::query::sort::Sortable;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// Marker for the closed, per-entity sort key enumerations
///
/// Implemented automatically for every enum generated by [`sort_keys!`](crate::sort_keys).
pub trait SortKey:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
}

impl<K> SortKey for K where
    K: Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
}

/// Returned when a sort key name does not belong to the entity's enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc", alias = "ascending", alias = "ASC")]
    Ascending,
    #[serde(alias = "desc", alias = "descending", alias = "DESC")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Control fields: which key to sort by, in which direction, and which page
///
/// Flattened into every entity's criteria struct, so the wire shape is
/// `{ "sortKey": "Rank", "direction": "Descending", "page": 0, "pageSize": 20, ... }`.
///
/// # Defaults
/// - `sort_key`: unset, meaning the entity's default key
/// - `direction`: ascending
/// - `page`: 0 (pages are zero-based)
/// - `page_size`: unset, meaning no slicing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    default,
    bound(serialize = "K: Serialize", deserialize = "K: FromStr")
)]
pub struct PageRequest<K> {
    /// Requested sort key; unknown names deserialize to `None`
    #[serde(
        deserialize_with = "lenient_sort_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_key: Option<K>,

    /// Sort direction
    pub direction: SortDirection,

    /// Zero-based page index
    pub page: usize,

    /// Number of records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl<K> Default for PageRequest<K> {
    fn default() -> Self {
        Self {
            sort_key: None,
            direction: SortDirection::Ascending,
            page: 0,
            page_size: None,
        }
    }
}

impl<K> PageRequest<K> {
    /// Sort by `key` in `direction`
    pub fn sorted_by(mut self, key: K, direction: SortDirection) -> Self {
        self.sort_key = Some(key);
        self.direction = direction;
        self
    }

    /// Return page `page` of `page_size` records
    pub fn paged(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = Some(page_size);
        self
    }
}

/// Accepts a key name, a declaration index, or anything else.
///
/// Anything that does not parse into `K` becomes `None`, which the sort
/// resolver turns into the entity's default key.
fn lenient_sort_key<'de, D, K>(deserializer: D) -> Result<Option<K>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        Some(serde_json::Value::Number(n)) => n.to_string().parse().ok(),
        _ => None,
    })
}

/// A per-entity criteria object
///
/// Implementors register one predicate per filter field with the
/// [`PredicateSet`]; the set takes care of ordering (equality, then
/// substring, then range) and of skipping absent fields.
///
/// # Example
/// ```rust,ignore
/// impl FilterCriteria<Allergy> for AllergyFilter {
///     fn predicates(&self, set: &mut PredicateSet<'_, Allergy>) {
///         set.equal("owner", self.owner, |a| a.owner)
///             .text("name", self.name.as_deref(), Comparison::Contains, |a| Some(a.name.as_str()))
///             .range("created", self.min_created, self.max_created, |a| a.created);
///     }
///
///     fn page_request(&self) -> &PageRequest<AllergySortKey> {
///         &self.request
///     }
/// }
/// ```
pub trait FilterCriteria<T: Sortable>: Send + Sync {
    /// Register the predicates for every filter field
    fn predicates(&self, set: &mut PredicateSet<'_, T>);

    /// The control fields of this criteria
    fn page_request(&self) -> &PageRequest<T::SortKey>;
}
