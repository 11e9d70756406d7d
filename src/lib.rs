//! # medrec-query
//!
//! The filter/sort/paginate engine of a healthcare record backend.
//!
//! Every entity (doctors, patients, allergies, vital signs, diary entries,
//! catalog data) is queried the same way: a criteria object carries optional
//! equality, substring and range filters plus a sort key, a direction and a
//! page. The [`FilterPipeline`](query::FilterPipeline) narrows the records,
//! counts the matches, sorts them and cuts out the page.
//!
//! ## Features
//!
//! - **Declarative adapters**: each entity lists its filter fields and sort keys once
//! - **Stable sorting**: ties keep source order in both directions
//! - **Configurable matching**: substring comparison modes can be overridden per field via YAML
//! - **Async sources**: records come from any [`RecordSource`](core::RecordSource)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use medrec::prelude::*;
//!
//! let doctors = Repository::new(InMemorySource::from_records(records));
//!
//! let response = doctors
//!     .filter(&DoctorFilter {
//!         min_rank: Some(4.0),
//!         request: PageRequest::default()
//!             .sorted_by(DoctorSortKey::Rank, SortDirection::Descending)
//!             .paged(0, 20),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("{} of {} doctors", response.items.len(), response.total);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod query;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, Entity, FieldValue, MedrecError, MedrecResult, RecordSource, StorageError,
        ValidationError,
    };

    // === Query engine ===
    pub use crate::query::{
        Comparison, FilterCriteria, FilterPipeline, FilterResponse, PageRequest, PaginationMeta,
        PredicateSet, SortDirection, SortTable, Sortable, validate_criteria,
    };

    // === Entities ===
    pub use crate::entities::*;

    // === Macros ===
    pub use crate::{impl_entity, impl_sortable, sort_keys};

    // === Storage ===
    pub use crate::storage::{InMemorySource, Repository};

    // === Config ===
    pub use crate::config::{EntityQueryConfig, QueryConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
