//! Criteria validation for callers that want hard rejection
//!
//! The pipeline accepts any criteria and returns a well-defined (possibly
//! empty) result. Request layers that prefer to reject nonsensical input
//! up front run [`validate_criteria`] first.

use crate::config::QueryConfig;
use crate::core::error::{FieldValidationError, ValidationError};
use crate::query::criteria::FilterCriteria;
use crate::query::predicate::{PredicateKind, PredicateSet};
use crate::query::sort::Sortable;

/// Validator: page size, when given, must be positive
pub fn positive_page_size() -> impl Fn(&str, Option<usize>) -> Result<(), String> + Send + Sync + Clone
{
    |field: &str, value: Option<usize>| match value {
        Some(0) => Err(format!("'{}' must be greater than zero", field)),
        _ => Ok(()),
    }
}

/// Validator: page size, when given, must not exceed `max`
pub fn page_size_at_most(
    max: usize,
) -> impl Fn(&str, Option<usize>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: Option<usize>| match value {
        Some(size) if size > max => Err(format!(
            "'{}' must not exceed {} (value: {})",
            field, max, size
        )),
        _ => Ok(()),
    }
}

/// Validator: a range's lower bound must not exceed its upper bound
pub fn ordered_range() -> impl Fn(&str, PredicateKind) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, kind: PredicateKind| match kind {
        PredicateKind::Range { inverted: true } => Err(format!(
            "minimum of '{}' is greater than its maximum",
            field
        )),
        _ => Ok(()),
    }
}

/// Check `criteria` against the page size limits in `config` and for
/// inverted ranges
///
/// Every failing field is reported, not just the first.
pub fn validate_criteria<T, C>(criteria: &C, config: &QueryConfig) -> Result<(), ValidationError>
where
    T: Sortable,
    C: FilterCriteria<T> + ?Sized,
{
    let mut errors = Vec::new();
    let mut check = |field: &str, result: Result<(), String>| {
        if let Err(message) = result {
            errors.push(FieldValidationError {
                field: field.to_string(),
                message,
            });
        }
    };

    let page_size = criteria.page_request().page_size;
    check("page_size", positive_page_size()("page_size", page_size));
    if let Some(max) = config.max_page_size(T::entity_type()) {
        check("page_size", page_size_at_most(max)("page_size", page_size));
    }

    let range_check = ordered_range();
    let predicates = PredicateSet::for_criteria(criteria, config);
    for predicate in predicates.iter() {
        check(predicate.field(), range_check(predicate.field(), predicate.kind()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}
