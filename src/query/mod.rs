//! The filter/sort/paginate engine
//!
//! A query runs in four fixed stages:
//!
//! 1. [`predicate`]: narrow the records with the criteria's predicates
//! 2. count the matches
//! 3. [`sort`]: order them by the resolved sort key
//! 4. [`pager`]: cut out the requested page
//!
//! [`pipeline::FilterPipeline`] strings the stages together and returns a
//! [`FilterResponse`].

pub mod criteria;
pub mod pager;
pub mod pipeline;
pub mod predicate;
pub mod sort;
pub mod validation;

pub use criteria::{FilterCriteria, PageRequest, SortDirection, SortKey, UnknownSortKey};
pub use pager::{Page, PaginationMeta, paginate};
pub use pipeline::{FilterPipeline, FilterResponse};
pub use predicate::{Comparison, Predicate, PredicateKind, PredicateSet, compose};
pub use sort::{KeyFn, SortTable, Sortable, sort};
pub use validation::validate_criteria;
