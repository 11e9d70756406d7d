//! Entity adapters: one record type, criteria type and sort-key enum per
//! entity of the healthcare backend
//!
//! | Module | Entities |
//! |---|---|
//! | [`people`] | [`Doctor`], [`Patient`] |
//! | [`notes`] | [`Allergy`], [`Addiction`] |
//! | [`vitals`] | [`Heartbeat`], [`BloodPressure`], [`BloodSugar`] |
//! | [`diary`] | [`Diary`] |
//! | [`catalog`] | [`Specialty`], [`Place`] |

#[macro_use]
pub mod macros;

pub mod catalog;
pub mod diary;
pub mod notes;
pub mod people;
pub mod vitals;

pub use catalog::{Place, PlaceFilter, PlaceSortKey, Specialty, SpecialtyFilter, SpecialtySortKey};
pub use diary::{Diary, DiaryFilter, DiarySortKey, Mood};
pub use notes::{Addiction, AddictionFilter, AddictionSortKey, Allergy, AllergyFilter, AllergySortKey};
pub use people::{Doctor, DoctorFilter, DoctorSortKey, Patient, PatientFilter, PatientSortKey};
pub use vitals::{
    BloodPressure, BloodPressureFilter, BloodPressureSortKey, BloodSugar, BloodSugarFilter,
    BloodSugarSortKey, Heartbeat, HeartbeatFilter, HeartbeatSortKey,
};

use crate::core::Entity;
use crate::query::PredicateSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender of a doctor or patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Account status of a doctor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Pending,
    Active,
    Disabled,
}

/// Register the `created` and `last_modified` range predicates every
/// entity supports
pub(crate) fn audit_ranges<T: Entity>(
    set: &mut PredicateSet<'_, T>,
    created: (Option<DateTime<Utc>>, Option<DateTime<Utc>>),
    last_modified: (Option<DateTime<Utc>>, Option<DateTime<Utc>>),
) {
    set.range("created", created.0, created.1, |r| r.created())
        .range("last_modified", last_modified.0, last_modified.1, |r| {
            r.last_modified()
        });
}
