//! Clinic directory example
//!
//! Loads a handful of doctors into an in-memory source and runs a few
//! directory queries against them, printing each response as JSON.
//!
//! Run with `RUST_LOG=medrec=debug` to see the pipeline log lines.

use anyhow::Result;
use medrec::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
entities:
  - entity: doctor
    max_page_size: 25
    comparisons:
      email: equal_ignore_case
"#;

fn doctor(first: &str, last: &str, gender: Gender, rank: f64, place: Uuid) -> Doctor {
    let now = Utc::now();
    Doctor {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@clinic.vn", first.to_lowercase(), last.to_lowercase()),
        phone: "0903123456".to_string(),
        birthday: NaiveDate::from_ymd_opt(1982, 4, 12).unwrap_or_default(),
        gender,
        status: AccountStatus::Active,
        specialty: Uuid::nil(),
        place,
        rank,
        created: now,
        last_modified: now,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🏥 Clinic Directory Example");
    println!("===========================\n");

    let hanoi = Uuid::new_v4();
    let hue = Uuid::new_v4();
    let source = InMemorySource::from_records(vec![
        doctor("Lan", "Nguyen", Gender::Female, 4.8, hanoi),
        doctor("Minh", "Tran", Gender::Male, 4.1, hue),
        doctor("An", "Le", Gender::Female, 3.9, hanoi),
        doctor("Hai", "Pham", Gender::Male, 4.6, hanoi),
        doctor("Thu", "Vo", Gender::Female, 4.6, hue),
    ]);

    let config = QueryConfig::from_yaml_str(CONFIG)?;
    let doctors = Repository::with_pipeline(source, FilterPipeline::with_config(config));

    // Best-ranked doctors in Hanoi
    let criteria = DoctorFilter {
        place: Some(hanoi),
        request: PageRequest::default()
            .sorted_by(DoctorSortKey::Rank, SortDirection::Descending)
            .paged(0, 2),
        ..Default::default()
    };
    let response = doctors.validated_filter(&criteria).await?;
    println!("Top doctors in Hanoi:");
    println!("{}\n", serde_json::to_string_pretty(&response)?);

    // Same criteria shape as a request body would carry it
    let criteria: DoctorFilter = serde_json::from_str(
        r#"{ "email": "MINH.TRAN@CLINIC.VN", "sortKey": "lastName" }"#,
    )?;
    let response = doctors.filter(&criteria).await?;
    println!("Lookup by email ({} match):", response.total);
    for d in &response.items {
        println!("  - Dr. {} {} ({:.1})", d.first_name, d.last_name, d.rank);
    }

    // Oversized pages are rejected before the source is read
    let criteria = DoctorFilter {
        request: PageRequest::default().paged(0, 100),
        ..Default::default()
    };
    if let Err(e) = doctors.validated_filter(&criteria).await {
        println!("\nRejected: {}", serde_json::to_string(&e.to_response())?);
    }

    Ok(())
}
