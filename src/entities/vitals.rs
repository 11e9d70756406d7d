//! Vital sign measurements: heartbeat, blood pressure and blood sugar
//!
//! Every measurement belongs to a patient and carries the time it was
//! taken, which is the default sort key. `created` records when the
//! measurement was entered, which can be much later.

use crate::entities::audit_ranges;
use crate::query::{Comparison, FilterCriteria, PageRequest, PredicateSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heartbeat {
    pub id: Uuid,
    pub owner: Uuid,
    /// Beats per minute
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub time: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Heartbeat, "heartbeat", owned);

crate::sort_keys! {
    pub enum HeartbeatSortKey {
        Time,
        Rate,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(Heartbeat, HeartbeatSortKey, {
    Time => |h| h.time.into(),
    Rate => |h| h.rate.into(),
    Created => |h| h.created.into(),
    LastModified => |h| h.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatFilter {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub note: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub min_time: Option<DateTime<Utc>>,
    pub max_time: Option<DateTime<Utc>>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<HeartbeatSortKey>,
}

impl FilterCriteria<Heartbeat> for HeartbeatFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Heartbeat>) {
        set.equal("id", self.id, |h| h.id)
            .equal("owner", self.owner, |h| h.owner)
            .text("note", self.note.as_deref(), Comparison::Contains, |h| h.note.as_deref())
            .range("rate", self.min_rate, self.max_rate, |h| h.rate)
            .range("time", self.min_time, self.max_time, |h| h.time);
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<HeartbeatSortKey> {
        &self.request
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressure {
    pub id: Uuid,
    pub owner: Uuid,
    /// mmHg
    pub systolic: i32,
    /// mmHg
    pub diastolic: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub time: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(BloodPressure, "blood_pressure", owned);

crate::sort_keys! {
    pub enum BloodPressureSortKey {
        Time,
        Systolic,
        Diastolic,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(BloodPressure, BloodPressureSortKey, {
    Time => |b| b.time.into(),
    Systolic => |b| i64::from(b.systolic).into(),
    Diastolic => |b| i64::from(b.diastolic).into(),
    Created => |b| b.created.into(),
    LastModified => |b| b.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureFilter {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub note: Option<String>,
    pub min_systolic: Option<i32>,
    pub max_systolic: Option<i32>,
    pub min_diastolic: Option<i32>,
    pub max_diastolic: Option<i32>,
    pub min_time: Option<DateTime<Utc>>,
    pub max_time: Option<DateTime<Utc>>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<BloodPressureSortKey>,
}

impl FilterCriteria<BloodPressure> for BloodPressureFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, BloodPressure>) {
        set.equal("id", self.id, |b| b.id)
            .equal("owner", self.owner, |b| b.owner)
            .text("note", self.note.as_deref(), Comparison::Contains, |b| b.note.as_deref())
            .range("systolic", self.min_systolic, self.max_systolic, |b| b.systolic)
            .range("diastolic", self.min_diastolic, self.max_diastolic, |b| b.diastolic)
            .range("time", self.min_time, self.max_time, |b| b.time);
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<BloodPressureSortKey> {
        &self.request
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodSugar {
    pub id: Uuid,
    pub owner: Uuid,
    /// mmol/L
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub time: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(BloodSugar, "blood_sugar", owned);

crate::sort_keys! {
    pub enum BloodSugarSortKey {
        Time,
        Value,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(BloodSugar, BloodSugarSortKey, {
    Time => |b| b.time.into(),
    Value => |b| b.value.into(),
    Created => |b| b.created.into(),
    LastModified => |b| b.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodSugarFilter {
    pub id: Option<Uuid>,
    pub owner: Option<Uuid>,
    pub note: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_time: Option<DateTime<Utc>>,
    pub max_time: Option<DateTime<Utc>>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<BloodSugarSortKey>,
}

impl FilterCriteria<BloodSugar> for BloodSugarFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, BloodSugar>) {
        set.equal("id", self.id, |b| b.id)
            .equal("owner", self.owner, |b| b.owner)
            .text("note", self.note.as_deref(), Comparison::Contains, |b| b.note.as_deref())
            .range("value", self.min_value, self.max_value, |b| b.value)
            .range("time", self.min_time, self.max_time, |b| b.time);
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<BloodSugarSortKey> {
        &self.request
    }
}
