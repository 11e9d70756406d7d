//! In-memory record source for testing and development

use crate::core::{Entity, RecordSource, error::StorageError};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory record source
///
/// Records are keyed by id and scanned in insertion order. Replacing a
/// record keeps its original position. Clones share the same storage.
#[derive(Clone)]
pub struct InMemorySource<T> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T: Entity> InMemorySource<T> {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a source holding `records`, in order
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Insert or replace a record, returning the replaced one
    pub async fn insert(&self, record: T) -> Option<T> {
        let mut records = self.records.write().await;
        records.insert(record.id(), record)
    }

    /// Remove a record, preserving the order of the rest
    pub async fn remove(&self, id: &Uuid) -> Option<T> {
        let mut records = self.records.write().await;
        records.shift_remove(id)
    }

    pub async fn get(&self, id: &Uuid) -> Option<T> {
        self.records.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Entity> Default for InMemorySource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> RecordSource<T> for InMemorySource<T> {
    async fn scan(&self) -> Result<Vec<T>, StorageError> {
        let records = self.records.read().await;
        tracing::trace!(entity = T::entity_type(), count = records.len(), "in-memory scan");
        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::catalog::Place;
    use chrono::Utc;

    fn place(city: &str) -> Place {
        let now = Utc::now();
        Place {
            id: Uuid::new_v4(),
            city: city.to_string(),
            district: "Center".to_string(),
            created: now,
            last_modified: now,
        }
    }

    fn cities(records: &[Place]) -> Vec<&str> {
        records.iter().map(|p| p.city.as_str()).collect()
    }

    #[tokio::test]
    async fn test_scan_keeps_insertion_order() {
        let source = InMemorySource::new();
        for city in ["Hue", "Hanoi", "Can Tho"] {
            source.insert(place(city)).await;
        }

        let scanned = source.scan().await.unwrap();
        assert_eq!(cities(&scanned), vec!["Hue", "Hanoi", "Can Tho"]);
        assert_eq!(source.len().await, 3);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let first = place("Hue");
        let source = InMemorySource::from_records(vec![first.clone(), place("Hanoi")]);

        let mut renamed = first.clone();
        renamed.city = "Hoi An".to_string();
        let replaced = source.insert(renamed).await;

        assert_eq!(replaced, Some(first));
        let scanned = source.scan().await.unwrap();
        assert_eq!(cities(&scanned), vec!["Hoi An", "Hanoi"]);
    }

    #[tokio::test]
    async fn test_remove_and_get() {
        let a = place("Hue");
        let b = place("Hanoi");
        let c = place("Vinh");
        let source = InMemorySource::from_records(vec![a.clone(), b.clone(), c.clone()]);

        assert_eq!(source.remove(&b.id).await, Some(b.clone()));
        assert!(source.get(&b.id).await.is_none());
        assert_eq!(source.get(&c.id).await, Some(c));
        assert!(source.remove(&b.id).await.is_none());

        let scanned = source.scan().await.unwrap();
        assert_eq!(cities(&scanned), vec!["Hue", "Vinh"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let source = InMemorySource::<Place>::default();
        let other = source.clone();
        assert!(other.is_empty().await);

        source.insert(place("Hue")).await;
        assert_eq!(other.len().await, 1);
    }
}
