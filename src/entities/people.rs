//! Doctors and patients

use crate::entities::{AccountStatus, Gender, audit_ranges};
use crate::query::{Comparison, FilterCriteria, PageRequest, PredicateSet};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A doctor account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub status: AccountStatus,
    /// Specialty the doctor practises
    pub specialty: Uuid,
    /// Place the doctor works at
    pub place: Uuid,
    /// Average rating given by patients
    pub rank: f64,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Doctor, "doctor");

crate::sort_keys! {
    /// Sort keys for doctors; `FirstName` is the default
    pub enum DoctorSortKey {
        FirstName,
        LastName,
        Birthday,
        Gender,
        Status,
        Rank,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(Doctor, DoctorSortKey, {
    FirstName => |d| (&d.first_name).into(),
    LastName => |d| (&d.last_name).into(),
    Birthday => |d| d.birthday.into(),
    Gender => |d| (d.gender as i64).into(),
    Status => |d| (d.status as i64).into(),
    Rank => |d| d.rank.into(),
    Created => |d| d.created.into(),
    LastModified => |d| d.last_modified.into(),
});

/// Filter for doctors
///
/// Text fields match as case-sensitive substrings unless overridden in the
/// query configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorFilter {
    pub id: Option<Uuid>,
    pub specialty: Option<Uuid>,
    pub place: Option<Uuid>,
    pub gender: Option<Gender>,
    pub status: Option<AccountStatus>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub min_birthday: Option<NaiveDate>,
    pub max_birthday: Option<NaiveDate>,
    pub min_rank: Option<f64>,
    pub max_rank: Option<f64>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<DoctorSortKey>,
}

impl FilterCriteria<Doctor> for DoctorFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Doctor>) {
        set.equal("id", self.id, |d| d.id)
            .equal("specialty", self.specialty, |d| d.specialty)
            .equal("place", self.place, |d| d.place)
            .equal("gender", self.gender, |d| d.gender)
            .equal("status", self.status, |d| d.status)
            .text("first_name", self.first_name.as_deref(), Comparison::Contains, |d| {
                Some(d.first_name.as_str())
            })
            .text("last_name", self.last_name.as_deref(), Comparison::Contains, |d| {
                Some(d.last_name.as_str())
            })
            .text("email", self.email.as_deref(), Comparison::Contains, |d| {
                Some(d.email.as_str())
            })
            .text("phone", self.phone.as_deref(), Comparison::Contains, |d| {
                Some(d.phone.as_str())
            })
            .range("birthday", self.min_birthday, self.max_birthday, |d| d.birthday)
            .range("rank", self.min_rank, self.max_rank, |d| d.rank);
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<DoctorSortKey> {
        &self.request
    }
}

/// A patient account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub birthday: NaiveDate,
    pub gender: Gender,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

crate::impl_entity!(Patient, "patient");

crate::sort_keys! {
    /// Sort keys for patients; `FirstName` is the default
    pub enum PatientSortKey {
        FirstName,
        LastName,
        Birthday,
        Gender,
        Height,
        Weight,
        Created,
        LastModified,
    }
}

crate::impl_sortable!(Patient, PatientSortKey, {
    FirstName => |p| (&p.first_name).into(),
    LastName => |p| (&p.last_name).into(),
    Birthday => |p| p.birthday.into(),
    Gender => |p| (p.gender as i64).into(),
    Height => |p| p.height.into(),
    Weight => |p| p.weight.into(),
    Created => |p| p.created.into(),
    LastModified => |p| p.last_modified.into(),
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientFilter {
    pub id: Option<Uuid>,
    pub gender: Option<Gender>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    pub min_birthday: Option<NaiveDate>,
    pub max_birthday: Option<NaiveDate>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub min_created: Option<DateTime<Utc>>,
    pub max_created: Option<DateTime<Utc>>,
    pub min_last_modified: Option<DateTime<Utc>>,
    pub max_last_modified: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: PageRequest<PatientSortKey>,
}

impl FilterCriteria<Patient> for PatientFilter {
    fn predicates(&self, set: &mut PredicateSet<'_, Patient>) {
        set.equal("id", self.id, |p| p.id)
            .equal("gender", self.gender, |p| p.gender)
            .text("first_name", self.first_name.as_deref(), Comparison::Contains, |p| {
                Some(p.first_name.as_str())
            })
            .text("last_name", self.last_name.as_deref(), Comparison::Contains, |p| {
                Some(p.last_name.as_str())
            })
            .text("email", self.email.as_deref(), Comparison::Contains, |p| {
                Some(p.email.as_str())
            })
            .text("phone", self.phone.as_deref(), Comparison::Contains, |p| {
                Some(p.phone.as_str())
            })
            .text("address", self.address.as_deref(), Comparison::Contains, |p| {
                p.address.as_deref()
            })
            .range("birthday", self.min_birthday, self.max_birthday, |p| p.birthday)
            .range("height", self.min_height, self.max_height, |p| p.height)
            .range("weight", self.min_weight, self.max_weight, |p| p.weight);
        audit_ranges(
            set,
            (self.min_created, self.max_created),
            (self.min_last_modified, self.max_last_modified),
        );
    }

    fn page_request(&self) -> &PageRequest<PatientSortKey> {
        &self.request
    }
}
