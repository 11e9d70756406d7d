//! Patient-owned medical notes: allergies and addictions

use crate::entities::audit_ranges;
use crate::query::{Comparison, FilterCriteria, PageRequest, PredicateSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allergy {
    pub id: Uuid,
    /// Patient the allergy belongs to
    pub owner: Uuid,
    pub name: String,
    pub cause: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Allergy, "allergy", owned);

crate::sort_keys! {
    /// Sort keys for allergies; `LastModified` is the default
    pub enum AllergySortKey {
        LastModified,
        Created,
        Name,
    }
}

crate::impl_sortable!(Allergy, AllergySortKey, {
    LastModified => |a| a.last_modified.into(),
    Created => |a| a.created.into(),
    Name => |a| (&a.name).into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyFilter {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub name: Option<String>,
    pub cause: Option<String>,
    pub note: Option<String>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<AllergySortKey>,
}

impl FilterCriteria<Allergy> for AllergyFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Allergy>) {
        set.equal("id", self.id, |a| a.id)
            .equal("owner", self.owner, |a| a.owner)
            .text("name", self.name.as_deref(), Comparison::Contains, |a| {
                Some(a.name.as_str())
            })
            .text("cause", self.cause.as_deref(), Comparison::Contains, |a| {
                Some(a.cause.as_str())
            })
            .text("note", self.note.as_deref(), Comparison::Contains, |a| a.note.as_deref());
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<AllergySortKey> {
        &self.request
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addiction {
    pub id: Uuid,
    /// Patient the addiction belongs to
    pub owner: Uuid,
    pub cause: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Addiction, "addiction", owned);

crate::sort_keys! {
    /// Sort keys for addictions; `LastModified` is the default
    pub enum AddictionSortKey {
        LastModified,
        Created,
        Cause,
    }
}

crate::impl_sortable!(Addiction, AddictionSortKey, {
    LastModified => |a| a.last_modified.into(),
    Created => |a| a.created.into(),
    Cause => |a| (&a.cause).into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddictionFilter {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub cause: Option<String>,
    pub note: Option<String>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<AddictionSortKey>,
}

impl FilterCriteria<Addiction> for AddictionFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Addiction>) {
        set.equal("id", self.id, |a| a.id)
            .equal("owner", self.owner, |a| a.owner)
            .text("cause", self.cause.as_deref(), Comparison::Contains, |a| {
                Some(a.cause.as_str())
            })
            .text("note", self.note.as_deref(), Comparison::Contains, |a| a.note.as_deref());
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<AddictionSortKey> {
        &self.request
    }
}
