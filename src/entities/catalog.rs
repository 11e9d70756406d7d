//! Catalog entries shared across accounts: specialties and places
//!
//! Catalog names are matched whole by default instead of as substrings,
//! and criteria can pick the comparison mode per request.

use crate::entities::audit_ranges;
use crate::query::{Comparison, FilterCriteria, PageRequest, PredicateSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medical specialty doctors can be registered under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Specialty, "specialty");

crate::sort_keys! {
    pub enum SpecialtySortKey {
        Name,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(Specialty, SpecialtySortKey, {
    Name => |s| (&s.name).into(),
    Created => |s| s.created.into(),
    LastModified => |s| s.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyFilter {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    /// Comparison for `name`; exact match when unset
    pub name_comparison: Option<Comparison>,
    pub description: Option<String>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<SpecialtySortKey>,
}

impl FilterCriteria<Specialty> for SpecialtyFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Specialty>) {
        set.equal("id", self.id, |s| s.id)
            .text_with(
                "name",
                self.name.as_deref(),
                Comparison::Equal,
                self.name_comparison,
                |s| Some(s.name.as_str()),
            )
            .text("description", self.description.as_deref(), Comparison::Contains, |s| {
                s.description.as_deref()
            });
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<SpecialtySortKey> {
        &self.request
    }
}

/// A practice location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Uuid,
    pub city: String,
    pub district: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Place, "place");

crate::sort_keys! {
    pub enum PlaceSortKey {
        City,
        District,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(Place, PlaceSortKey, {
    City => |p| (&p.city).into(),
    District => |p| (&p.district).into(),
    Created => |p| p.created.into(),
    LastModified => |p| p.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFilter {
    pub id: Option<Uuid>,
    pub city: Option<String>,
    /// Comparison for `city`; case-insensitive equality when unset
    pub city_comparison: Option<Comparison>,
    pub district: Option<String>,
    /// Comparison for `district`; case-insensitive equality when unset
    pub district_comparison: Option<Comparison>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<PlaceSortKey>,
}

impl FilterCriteria<Place> for PlaceFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Place>) {
        set.equal("id", self.id, |p| p.id)
            .text_with(
                "city",
                self.city.as_deref(),
                Comparison::EqualIgnoreCase,
                self.city_comparison,
                |p| Some(p.city.as_str()),
            )
            .text_with(
                "district",
                self.district.as_deref(),
                Comparison::EqualIgnoreCase,
                self.district_comparison,
                |p| Some(p.district.as_str()),
            );
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<PlaceSortKey> {
        &self.request
    }
}
