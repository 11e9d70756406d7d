//! Predicate composition: turning criteria fields into a conjunctive filter

use crate::config::{EntityQueryConfig, QueryConfig};
use crate::query::criteria::FilterCriteria;
use crate::query::sort::Sortable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a substring filter compares its needle against a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Exact, case-sensitive equality
    #[serde(alias = "Equal")]
    Equal,
    /// Equality after lower-casing both sides
    #[serde(alias = "EqualIgnoreCase", alias = "equalIgnoreCase")]
    EqualIgnoreCase,
    /// Case-sensitive substring match
    #[default]
    #[serde(alias = "Contains")]
    Contains,
}

impl Comparison {
    /// Compare a record value against the filter needle
    pub fn matches(self, value: &str, needle: &str) -> bool {
        match self {
            Comparison::Equal => value == needle,
            Comparison::EqualIgnoreCase => value.to_lowercase() == needle.to_lowercase(),
            Comparison::Contains => value.contains(needle),
        }
    }
}

/// What kind of criteria field a predicate came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredicateKind {
    /// Exact match on an identifier or enumerated value
    Equality,
    /// Text match with the resolved comparison mode
    Substring(Comparison),
    /// Inclusive `min`/`max` bounds; `inverted` when `min > max`
    Range { inverted: bool },
}

/// A single field-level condition
pub struct Predicate<T> {
    field: &'static str,
    kind: PredicateKind,
    test: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Predicate<T> {
    /// Name of the criteria field this predicate was built from
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    /// Whether the record satisfies this predicate
    pub fn matches(&self, record: &T) -> bool {
        (self.test)(record)
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("field", &self.field)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Accumulates the predicates of one criteria object
///
/// Criteria register fields in whatever order is convenient; evaluation
/// always runs equality predicates first, then substring, then range.
/// Absent fields register nothing, so an empty set accepts every record.
///
/// Substring comparison modes resolve, highest priority first, from:
/// 1. an explicit mode carried by the criteria (`name_comparison` and friends)
/// 2. a per-field override in the entity's [`EntityQueryConfig`]
/// 3. the default declared by the entity adapter
pub struct PredicateSet<'c, T> {
    overrides: Option<&'c EntityQueryConfig>,
    equality: Vec<Predicate<T>>,
    substring: Vec<Predicate<T>>,
    range: Vec<Predicate<T>>,
}

impl<T> Default for PredicateSet<'_, T> {
    fn default() -> Self {
        Self {
            overrides: None,
            equality: Vec::new(),
            substring: Vec::new(),
            range: Vec::new(),
        }
    }
}

impl<'c, T: 'static> PredicateSet<'c, T> {
    /// Create an empty set with no comparison overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set that consults `overrides` for comparison modes
    pub fn with_overrides(overrides: Option<&'c EntityQueryConfig>) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }

    /// Build the predicate set of `criteria` under `config`
    pub fn for_criteria<C>(criteria: &C, config: &'c QueryConfig) -> Self
    where
        T: Sortable,
        C: FilterCriteria<T> + ?Sized,
    {
        let mut set = Self::with_overrides(config.entity(T::entity_type()));
        criteria.predicates(&mut set);
        set
    }

    /// Exact match; `None` imposes no constraint
    pub fn equal<V>(&mut self, field: &'static str, value: Option<V>, extract: fn(&T) -> V) -> &mut Self
    where
        V: PartialEq + Send + Sync + 'static,
    {
        if let Some(expected) = value {
            self.equality.push(Predicate {
                field,
                kind: PredicateKind::Equality,
                test: Box::new(move |record| extract(record) == expected),
            });
        }
        self
    }

    /// Text match using the field's resolved comparison mode
    ///
    /// `None` and empty needles impose no constraint. Records whose field is
    /// missing never match a present needle.
    pub fn text(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        default: Comparison,
        extract: fn(&T) -> Option<&str>,
    ) -> &mut Self {
        self.text_with(field, value, default, None, extract)
    }

    /// Like [`text`](Self::text), with a comparison mode chosen by the caller
    pub fn text_with(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        default: Comparison,
        explicit: Option<Comparison>,
        extract: fn(&T) -> Option<&str>,
    ) -> &mut Self {
        let Some(needle) = value.filter(|v| !v.is_empty()) else {
            return self;
        };

        let mode = self.resolve_comparison(field, default, explicit);
        let needle = needle.to_string();
        self.substring.push(Predicate {
            field,
            kind: PredicateKind::Substring(mode),
            test: Box::new(move |record| {
                extract(record).is_some_and(|value| mode.matches(value, &needle))
            }),
        });
        self
    }

    /// Inclusive range; each bound is optional and independent
    ///
    /// Inverted bounds (`min > max`) are accepted and match nothing.
    pub fn range<V>(
        &mut self,
        field: &'static str,
        min: Option<V>,
        max: Option<V>,
        extract: fn(&T) -> V,
    ) -> &mut Self
    where
        V: PartialOrd + Copy + Send + Sync + 'static,
    {
        if min.is_none() && max.is_none() {
            return self;
        }

        let inverted = matches!((min, max), (Some(lo), Some(hi)) if lo > hi);
        self.range.push(Predicate {
            field,
            kind: PredicateKind::Range { inverted },
            test: Box::new(move |record| {
                let value = extract(record);
                min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
            }),
        });
        self
    }

    /// Resolve the comparison mode of a substring field
    pub fn resolve_comparison(
        &self,
        field: &str,
        default: Comparison,
        explicit: Option<Comparison>,
    ) -> Comparison {
        explicit
            .or_else(|| self.overrides.and_then(|o| o.comparisons.get(field).copied()))
            .unwrap_or(default)
    }

    /// Predicates in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &Predicate<T>> {
        self.equality
            .iter()
            .chain(self.substring.iter())
            .chain(self.range.iter())
    }

    pub fn len(&self) -> usize {
        self.equality.len() + self.substring.len() + self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the record satisfies every predicate
    pub fn matches(&self, record: &T) -> bool {
        self.iter().all(|p| p.matches(record))
    }

    /// Keep the records that satisfy every predicate, preserving their order
    pub fn apply(&self, source: Vec<T>) -> Vec<T> {
        if self.is_empty() {
            return source;
        }
        source.into_iter().filter(|r| self.matches(r)).collect()
    }
}

impl<T> fmt::Debug for PredicateSet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSet")
            .field("equality", &self.equality)
            .field("substring", &self.substring)
            .field("range", &self.range)
            .finish()
    }
}

/// Narrow `source` to the records matching every present field of `criteria`
pub fn compose<T, C>(source: Vec<T>, criteria: &C, config: &QueryConfig) -> Vec<T>
where
    T: Sortable,
    C: FilterCriteria<T> + ?Sized,
{
    PredicateSet::for_criteria(criteria, config).apply(source)
}
