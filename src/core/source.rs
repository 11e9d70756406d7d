//! Record source trait: the storage collaborator seen from the engine

use crate::core::{Entity, error::StorageError};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only handle on a collection of records
///
/// Implementations return every record of one entity type in the source's
/// natural order. Ties under a sort key keep this order, so sources backed
/// by unordered containers should impose one (insertion order, primary key).
///
/// The engine performs exactly one `scan` per pipeline invocation and does
/// not retry failures; concurrent scans must be safe.
#[async_trait]
pub trait RecordSource<T: Entity>: Send + Sync {
    /// Read all records
    async fn scan(&self) -> Result<Vec<T>, StorageError>;
}

#[async_trait]
impl<T: Entity> RecordSource<T> for Vec<T> {
    async fn scan(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.clone())
    }
}

#[async_trait]
impl<T, S> RecordSource<T> for Arc<S>
where
    T: Entity,
    S: RecordSource<T> + ?Sized,
{
    async fn scan(&self) -> Result<Vec<T>, StorageError> {
        self.as_ref().scan().await
    }
}
