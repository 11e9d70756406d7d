//! Behavioural properties of the filter pipeline
//!
//! These tests verify that:
//! - Filters combine as a conjunction
//! - The total is independent of sorting and paging
//! - Pages tile the sorted result exactly once
//! - Repeated runs are identical
//! - Sorting is stable in both directions
//! - Empty criteria return the source unchanged

mod harness;

use futures::future::join_all;
use harness::*;
use medrec::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn pipeline() -> FilterPipeline {
    FilterPipeline::new()
}

fn filter_ids(roster: &[Doctor], criteria: &DoctorFilter) -> HashSet<Uuid> {
    pipeline()
        .run(roster.to_vec(), criteria)
        .items
        .iter()
        .map(|d| d.id)
        .collect()
}

// =============================================================================
// Ranked doctor scenario
// =============================================================================

mod ranked_scenario {
    use super::*;

    #[test]
    fn test_min_rank_filters_and_counts() {
        let criteria = DoctorFilter {
            min_rank: Some(10.0),
            ..Default::default()
        };

        let response = pipeline().run(ranked_doctors(), &criteria);
        assert_eq!(response.total, 4);
        assert_eq!(response.items.len(), 4);
        assert!(response.items.iter().all(|d| d.rank >= 10.0));
    }

    #[test]
    fn test_rank_ascending_keeps_tie_order() {
        let criteria = DoctorFilter {
            min_rank: Some(10.0),
            request: PageRequest::default().sorted_by(DoctorSortKey::Rank, SortDirection::Ascending),
            ..Default::default()
        };

        let response = pipeline().run(ranked_doctors(), &criteria);
        assert_eq!(ranks(&response.items), vec![10.0, 15.0, 20.0, 20.0]);
        assert_eq!(response.items[2].created, at(2));
        assert_eq!(response.items[3].created, at(3));
    }

    #[test]
    fn test_first_page_of_two() {
        let criteria = DoctorFilter {
            min_rank: Some(10.0),
            request: PageRequest::default()
                .sorted_by(DoctorSortKey::Rank, SortDirection::Ascending)
                .paged(0, 2),
            ..Default::default()
        };

        let response = pipeline().run(ranked_doctors(), &criteria);
        assert_eq!(ranks(&response.items), vec![10.0, 15.0]);
        assert_eq!(response.total, 4);
    }

    #[test]
    fn test_no_matches() {
        let criteria = DoctorFilter {
            min_rank: Some(25.0),
            ..Default::default()
        };

        let response = pipeline().run(ranked_doctors(), &criteria);
        assert!(response.items.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_inverted_bounds_are_empty_not_an_error() {
        let criteria = DoctorFilter {
            min_rank: Some(20.0),
            max_rank: Some(10.0),
            ..Default::default()
        };

        let response = pipeline().run(ranked_doctors(), &criteria);
        assert!(response.items.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_page_past_the_end_keeps_total() {
        let criteria = DoctorFilter {
            min_rank: Some(10.0),
            request: PageRequest::default().paged(7, 2),
            ..Default::default()
        };

        let response = pipeline().run(ranked_doctors(), &criteria);
        assert!(response.items.is_empty());
        assert_eq!(response.total, 4);
    }
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use super::*;

    #[test]
    fn test_conjunction_is_intersection() {
        let by_gender = DoctorFilter {
            gender: Some(Gender::Male),
            ..Default::default()
        };
        let by_rank = DoctorFilter {
            min_rank: Some(3.0),
            max_rank: Some(8.0),
            ..Default::default()
        };
        let by_name = DoctorFilter {
            last_name: Some("an".to_string()),
            ..Default::default()
        };
        let combined = DoctorFilter {
            gender: Some(Gender::Male),
            min_rank: Some(3.0),
            max_rank: Some(8.0),
            last_name: Some("an".to_string()),
            ..Default::default()
        };

        let roster = doctor_roster();
        let expected: HashSet<Uuid> = filter_ids(&roster, &by_gender)
            .intersection(&filter_ids(&roster, &by_rank))
            .copied()
            .collect::<HashSet<_>>()
            .intersection(&filter_ids(&roster, &by_name))
            .copied()
            .collect();

        assert!(!expected.is_empty());
        assert_eq!(filter_ids(&roster, &combined), expected);
    }

    #[test]
    fn test_total_ignores_sort_and_page() {
        let base = DoctorFilter {
            status: Some(AccountStatus::Active),
            ..Default::default()
        };
        let expected = pipeline().run(doctor_roster(), &base).total;
        assert!(expected > 0);

        for key in DoctorSortKey::ALL {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                for (page, size) in [(0, 1), (1, 3), (5, 2), (100, 10)] {
                    let criteria = DoctorFilter {
                        request: PageRequest::default()
                            .sorted_by(*key, direction)
                            .paged(page, size),
                        ..base.clone()
                    };
                    let response = pipeline().run(doctor_roster(), &criteria);
                    assert_eq!(response.total, expected, "{key} {direction} page {page}/{size}");
                }
            }
        }
    }

    #[test]
    fn test_pages_tile_sorted_result() {
        let roster = doctor_roster();
        let sorted = DoctorFilter {
            request: PageRequest::default().sorted_by(DoctorSortKey::LastName, SortDirection::Descending),
            ..Default::default()
        };
        let full = pipeline().run(roster.clone(), &sorted);

        let mut tiled = Vec::new();
        for page in 0.. {
            let criteria = DoctorFilter {
                request: sorted.request.clone().paged(page, 5),
                ..Default::default()
            };
            let response = pipeline().run(roster.clone(), &criteria);
            if response.items.is_empty() {
                break;
            }
            assert!(response.items.len() <= 5);
            tiled.extend(response.items);
        }

        assert_eq!(ids(&tiled), ids(&full.items));
        assert_eq!(ids(&tiled).into_iter().collect::<HashSet<_>>().len(), roster.len());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let roster = doctor_roster();
        let criteria = DoctorFilter {
            gender: Some(Gender::Female),
            request: PageRequest::default()
                .sorted_by(DoctorSortKey::Rank, SortDirection::Descending)
                .paged(1, 3),
            ..Default::default()
        };

        let first = pipeline().run(roster.clone(), &criteria);
        let second = pipeline().run(roster, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_keys_keep_source_order_both_directions() {
        let roster = doctor_roster();
        let position = |id: Uuid| roster.iter().position(|d| d.id == id).unwrap();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let criteria = DoctorFilter {
                request: PageRequest::default().sorted_by(DoctorSortKey::Status, direction),
                ..Default::default()
            };
            let items = pipeline().run(roster.clone(), &criteria).items;

            for pair in items.windows(2) {
                if pair[0].status == pair[1].status {
                    assert!(position(pair[0].id) < position(pair[1].id), "{direction}");
                }
            }
        }
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let roster = doctor_roster();
        let response = pipeline().run(roster.clone(), &DoctorFilter::default());

        assert_eq!(response.total, roster.len());
        let returned: HashSet<Uuid> = ids(&response.items).into_iter().collect();
        let expected: HashSet<Uuid> = ids(&roster).into_iter().collect();
        assert_eq!(returned, expected);
    }
}

// =============================================================================
// Async execution
// =============================================================================

mod execution {
    use super::*;

    #[tokio::test]
    async fn test_execute_matches_run() {
        let roster = doctor_roster();
        let source = InMemorySource::from_records(roster.clone());
        let criteria = DoctorFilter {
            first_name: Some("L".to_string()),
            request: PageRequest::default().paged(0, 4),
            ..Default::default()
        };

        let executed = pipeline().execute(&source, &criteria).await.unwrap();
        assert_eq!(executed, pipeline().run(roster, &criteria));
    }

    #[tokio::test]
    async fn test_concurrent_queries_share_one_pipeline() {
        let source = Arc::new(InMemorySource::from_records(doctor_roster()));
        let pipeline = pipeline();

        let queries: Vec<DoctorFilter> = (0..8)
            .map(|page| DoctorFilter {
                request: PageRequest::default()
                    .sorted_by(DoctorSortKey::Created, SortDirection::Ascending)
                    .paged(page, 3),
                ..Default::default()
            })
            .collect();

        let responses = join_all(queries.iter().map(|q| pipeline.execute(&source, q))).await;

        let mut seen = Vec::new();
        for response in responses {
            let response = response.unwrap();
            assert_eq!(response.total, 24);
            seen.extend(ids(&response.items));
        }
        assert_eq!(seen, ids(&doctor_roster_by_created(&source).await));
    }

    async fn doctor_roster_by_created(source: &InMemorySource<Doctor>) -> Vec<Doctor> {
        let mut all = source.scan().await.unwrap();
        all.sort_by_key(|d| d.created);
        all
    }

    #[test]
    fn test_execute_with_block_on() {
        let source = ranked_doctors();
        let criteria = DoctorFilter {
            max_rank: Some(10.0),
            ..Default::default()
        };

        let response = tokio_test::block_on(pipeline().execute(&source, &criteria)).unwrap();
        assert_eq!(response.total, 2);
        let names: Vec<&str> = response.items.iter().map(|d| d.first_name.as_str()).collect();
        assert_eq!(names, vec!["Anh", "Dao"]);
    }

    #[test]
    fn test_response_serializes_as_envelope() {
        let response = pipeline().run(
            ranked_doctors(),
            &DoctorFilter {
                request: PageRequest::default().paged(0, 1),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["items"][0]["firstName"], "Anh");
    }
}
