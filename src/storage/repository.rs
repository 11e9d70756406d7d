//! Per-entity repositories: a record source bound to a filter pipeline

use crate::core::error::{MedrecError, MedrecResult};
use crate::core::RecordSource;
use crate::query::{FilterCriteria, FilterPipeline, FilterResponse, Sortable, validate_criteria};
use std::marker::PhantomData;

/// Filters one entity type out of one record source
///
/// # Example
/// ```rust,ignore
/// let doctors = Repository::new(InMemorySource::from_records(records));
/// let page = doctors.filter(&DoctorFilter {
///     last_name: Some("Nguyen".into()),
///     ..Default::default()
/// }).await?;
/// ```
pub struct Repository<T, S> {
    source: S,
    pipeline: FilterPipeline,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S> Repository<T, S>
where
    T: Sortable,
    S: RecordSource<T>,
{
    /// Create a repository with the default pipeline
    pub fn new(source: S) -> Self {
        Self::with_pipeline(source, FilterPipeline::new())
    }

    /// Create a repository that runs queries through `pipeline`
    pub fn with_pipeline(source: S, pipeline: FilterPipeline) -> Self {
        Self {
            source,
            pipeline,
            _entity: PhantomData,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Run `criteria` against every record in the source
    pub async fn filter<C>(&self, criteria: &C) -> MedrecResult<FilterResponse<T>>
    where
        C: FilterCriteria<T> + ?Sized,
    {
        self.pipeline.execute(&self.source, criteria).await
    }

    /// Validate `criteria` against the pipeline configuration, then filter
    ///
    /// Rejected criteria never reach the source.
    pub async fn validated_filter<C>(&self, criteria: &C) -> MedrecResult<FilterResponse<T>>
    where
        C: FilterCriteria<T> + ?Sized,
    {
        validate_criteria::<T, C>(criteria, self.pipeline.config()).map_err(|e| {
            tracing::debug!(entity = T::entity_type(), error = %e, "criteria rejected");
            MedrecError::from(e)
        })?;
        self.filter(criteria).await
    }
}

impl<T, S: Clone> Clone for Repository<T, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            pipeline: self.pipeline.clone(),
            _entity: PhantomData,
        }
    }
}
