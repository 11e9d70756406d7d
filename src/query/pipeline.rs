//! The filter pipeline: filter, count, sort, slice

use crate::config::QueryConfig;
use crate::core::RecordSource;
use crate::core::error::MedrecResult;
use crate::query::criteria::FilterCriteria;
use crate::query::pager::{PaginationMeta, paginate};
use crate::query::predicate::PredicateSet;
use crate::query::sort::{Sortable, order_by};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response envelope: the page that matched plus how many records matched
///
/// `total` counts every record satisfying the filter, before sorting and
/// slicing, so it does not move when the caller pages or re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse<T> {
    /// Records on the requested page, in sorted order
    pub items: Vec<T>,

    /// Number of records matching the filter
    pub total: usize,
}

impl<T> FilterResponse<T> {
    /// A response with no matches
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Pagination metadata for the page this response was cut with
    ///
    /// Returns None when no page size was requested (nothing was sliced).
    pub fn pagination(&self, page: usize, page_size: Option<usize>) -> Option<PaginationMeta> {
        page_size.map(|size| PaginationMeta::new(page, size, self.total))
    }

    /// Transform the items, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> FilterResponse<U> {
        FilterResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Runs criteria against records
///
/// The pipeline holds only immutable configuration; cloning is cheap and
/// one instance can serve concurrent requests.
///
/// # Example
/// ```rust,ignore
/// let pipeline = FilterPipeline::new();
/// let criteria = DoctorFilter {
///     min_rank: Some(10.0),
///     request: PageRequest::default()
///         .sorted_by(DoctorSortKey::Rank, SortDirection::Ascending)
///         .paged(0, 2),
///     ..Default::default()
/// };
/// let response = pipeline.execute(&source, &criteria).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    config: Arc<QueryConfig>,
}

impl FilterPipeline {
    /// Create a pipeline with no configuration overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline using `config`
    pub fn with_config(config: QueryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Run `criteria` over an in-hand sequence of records
    ///
    /// Stages run in a fixed order: compose the predicates, count the
    /// matches, sort them, slice the requested page.
    pub fn run<T, C>(&self, source: Vec<T>, criteria: &C) -> FilterResponse<T>
    where
        T: Sortable,
        C: FilterCriteria<T> + ?Sized,
    {
        let entity = T::entity_type();
        let request = criteria.page_request();
        let scanned = source.len();

        let predicates = PredicateSet::for_criteria(criteria, &self.config);
        let filtered = predicates.apply(source);
        let total = filtered.len();
        tracing::trace!(entity, scanned, predicates = predicates.len(), total, "filtered");

        let (sort_key, extract) = T::sort_table().resolve(request.sort_key);
        let sorted = order_by(filtered, extract, request.direction);
        tracing::trace!(entity, %sort_key, direction = %request.direction, "sorted");

        let page = paginate(sorted, request.page, request.page_size);
        tracing::trace!(entity, page = request.page, returned = page.items.len(), "sliced");

        tracing::debug!(
            entity,
            predicates = predicates.len(),
            total,
            returned = page.items.len(),
            %sort_key,
            direction = %request.direction,
            page = request.page,
            page_size = ?request.page_size,
            "filter pipeline executed"
        );

        FilterResponse {
            items: page.items,
            total,
        }
    }

    /// Read every record from `source` and run `criteria` over them
    ///
    /// Storage faults are returned unchanged as [`MedrecError::Storage`](crate::core::error::MedrecError::Storage);
    /// nothing is retried.
    pub async fn execute<T, C, S>(&self, source: &S, criteria: &C) -> MedrecResult<FilterResponse<T>>
    where
        T: Sortable,
        C: FilterCriteria<T> + ?Sized,
        S: RecordSource<T> + ?Sized,
    {
        let records = source.scan().await.inspect_err(|e| {
            tracing::warn!(entity = T::entity_type(), error = %e, "record source scan failed");
        })?;

        Ok(self.run(records, criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::catalog::{Place, PlaceFilter, PlaceSortKey};
    use crate::query::criteria::{PageRequest, SortDirection};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn place(city: &str, district: &str, day: u32) -> Place {
        let at = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        Place {
            id: Uuid::new_v4(),
            city: city.to_string(),
            district: district.to_string(),
            created: at,
            last_modified: at,
        }
    }

    fn places() -> Vec<Place> {
        vec![
            place("Hanoi", "Ba Dinh", 3),
            place("Da Nang", "Hai Chau", 1),
            place("Hanoi", "Hoan Kiem", 2),
            place("Hue", "Phu Hoi", 4),
        ]
    }

    #[test]
    fn test_run_counts_before_slicing() {
        let criteria = PlaceFilter {
            city: Some("hanoi".to_string()),
            request: PageRequest::default().paged(0, 1),
            ..Default::default()
        };

        let response = FilterPipeline::new().run(places(), &criteria);
        assert_eq!(response.total, 2);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].district, "Ba Dinh");
    }

    #[test]
    fn test_run_sorts_by_requested_key() {
        let criteria = PlaceFilter {
            request: PageRequest::default()
                .sorted_by(PlaceSortKey::Created, SortDirection::Descending),
            ..Default::default()
        };

        let response = FilterPipeline::new().run(places(), &criteria);
        let cities: Vec<&str> = response.items.iter().map(|p| p.city.as_str()).collect();
        assert_eq!(cities, vec!["Hue", "Hanoi", "Hanoi", "Da Nang"]);
        assert_eq!(response.total, 4);
    }

    #[test]
    fn test_response_pagination_meta() {
        let response = FilterResponse {
            items: vec![1, 2],
            total: 5,
        };
        let meta = response.pagination(1, Some(2)).unwrap();
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);
        assert!(response.pagination(0, None).is_none());
    }

    #[test]
    fn test_response_map_keeps_total() {
        let response = FilterResponse {
            items: vec![1, 2, 3],
            total: 9,
        };
        let mapped = response.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.total, 9);
        assert_eq!(FilterResponse::<u8>::empty().total, 0);
    }
}
