//! Shared test harness for pipeline and repository tests
//!
//! Provides record builders for the doctor and patient adapters, the
//! five-doctor ranking fixture and a record source that always fails.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod harness;
//! use harness::*;
//! ```

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use medrec::core::{Entity, RecordSource, StorageError};
use medrec::entities::{AccountStatus, Doctor, Gender, Patient};

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Fixed point all fixture timestamps are offset from
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Timestamp `n` hours after [`epoch`]
pub fn at(n: i64) -> DateTime<Utc> {
    epoch() + Duration::hours(n)
}

/// A doctor with the given names and rank, created at `at(created)`
pub fn make_doctor(first: &str, last: &str, rank: f64, created: i64) -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@clinic.vn", first.to_lowercase(), last.to_lowercase()),
        phone: format!("0903{:06}", created),
        birthday: NaiveDate::from_ymd_opt(1975, 6, 15).unwrap(),
        gender: Gender::Female,
        status: AccountStatus::Active,
        specialty: Uuid::nil(),
        place: Uuid::nil(),
        rank,
        created: at(created),
        last_modified: at(created),
    }
}

/// Five doctors with ranks `[10, 20, 20, 5, 15]` created at hours 1..=5
pub fn ranked_doctors() -> Vec<Doctor> {
    [
        ("Anh", "Vu", 10.0),
        ("Bao", "Ho", 20.0),
        ("Cuong", "Do", 20.0),
        ("Dao", "Ly", 5.0),
        ("Giang", "Mai", 15.0),
    ]
    .into_iter()
    .zip(1..)
    .map(|((first, last, rank), created)| make_doctor(first, last, rank, created))
    .collect()
}

/// A larger, varied doctor set for property tests
pub fn doctor_roster() -> Vec<Doctor> {
    let first = ["Lan", "Minh", "An", "Hai", "Thu", "Nam", "Linh", "Quang"];
    let last = ["Nguyen", "Tran", "Le", "Pham"];
    let genders = [Gender::Female, Gender::Male, Gender::Other];
    let statuses = [AccountStatus::Active, AccountStatus::Pending, AccountStatus::Disabled];

    (0..24)
        .map(|i| {
            let mut doctor = make_doctor(
                first[i % first.len()],
                last[i % last.len()],
                ((i * 7) % 11) as f64,
                i as i64,
            );
            doctor.gender = genders[i % genders.len()];
            doctor.status = statuses[(i / 2) % statuses.len()];
            doctor
        })
        .collect()
}

/// A patient with the given names, height and weight
pub fn make_patient(first: &str, last: &str, height: f64, weight: f64) -> Patient {
    Patient {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@mail.vn", first.to_lowercase()),
        phone: "0912345678".to_string(),
        address: None,
        birthday: NaiveDate::from_ymd_opt(1992, 3, 8).unwrap(),
        gender: Gender::Male,
        height,
        weight,
        created: epoch(),
        last_modified: epoch(),
    }
}

pub fn ids<T: Entity>(records: &[T]) -> Vec<Uuid> {
    records.iter().map(|r| r.id()).collect()
}

pub fn ranks(doctors: &[Doctor]) -> Vec<f64> {
    doctors.iter().map(|d| d.rank).collect()
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// A record source whose scan always fails with `error`
pub struct FailingSource {
    pub error: StorageError,
    pub scans: AtomicUsize,
}

impl FailingSource {
    pub fn new(error: StorageError) -> Self {
        Self {
            error,
            scans: AtomicUsize::new(0),
        }
    }

    pub fn timeout() -> Self {
        Self::new(StorageError::Timeout {
            backend: "postgres".to_string(),
            elapsed_ms: 5000,
        })
    }

    /// Number of scans attempted so far
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Entity> RecordSource<T> for FailingSource {
    async fn scan(&self) -> Result<Vec<T>, StorageError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}
