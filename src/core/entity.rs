//! Entity trait shared by every record the engine can filter

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all records in the system.
///
/// Every healthcare record carries the same bookkeeping fields:
/// - id: Unique identifier
/// - created: Creation timestamp
/// - last_modified: Last modification timestamp
///
/// Records are owned by the storage layer. The filter pipeline only ever
/// reads them, so the trait exposes getters and nothing else.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The entity type name (e.g., "doctor", "blood_pressure")
    ///
    /// Used as the lookup key for per-entity configuration and in log fields.
    fn entity_type() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn last_modified(&self) -> DateTime<Utc>;

    /// Owner of the record (the patient a note or measurement belongs to)
    ///
    /// Returns None for records that are not owned by a single account.
    fn owner(&self) -> Option<Uuid> {
        None
    }
}
