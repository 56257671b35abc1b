use super::*;
use crate::discrepancy::{Severity, analyze_discrepancies};
use crate::matcher::MatchResult;
use crate::model::{ReferenceWatch, WatchDescription};
use crate::scoring::{ComponentScores, ConfidenceTier};

fn library() -> InMemoryReferenceLibrary {
    InMemoryReferenceLibrary::new(vec![
        ReferenceWatch::new("omega-1", "Omega", "Speedmaster"),
        ReferenceWatch::new("rolex-1", "Rolex", "Submariner"),
        ReferenceWatch::new("rollex-1", "Rollex", "Submariner"),
        ReferenceWatch::new("rolex-2", "ROLEX", "Daytona"),
        ReferenceWatch::new("blank-1", "  ", "Unknown"),
    ])
}

fn best_match() -> MatchResult {
    MatchResult {
        reference: ReferenceWatch::new("rolex-1", "Rolex", "Submariner"),
        match_score: 72.5,
        components: ComponentScores {
            brand: 100.0,
            model: 93.3,
            reference: 0.0,
            physical: 0.0,
        },
        confidence: ConfidenceTier::Good,
        discrepancies: Vec::new(),
    }
}

fn ids(references: &[ReferenceWatch]) -> Vec<&str> {
    references.iter().map(|r| r.id.as_str()).collect()
}

#[tokio::test]
async fn test_in_memory_search_filters_and_orders_by_brand() {
    let found = library().find_candidates("rolex", 0.75, 10).await.unwrap();

    assert_eq!(ids(&found), vec!["rolex-1", "rolex-2", "rollex-1"]);
}

#[tokio::test]
async fn test_in_memory_search_respects_limit_and_floor() {
    let library = library();

    let limited = library.find_candidates("Rolex", 0.75, 1).await.unwrap();
    assert_eq!(ids(&limited), vec!["rolex-1"]);

    let strict = library.find_candidates("Rolex", 1.0, 10).await.unwrap();
    assert_eq!(ids(&strict), vec!["rolex-1", "rolex-2"]);

    let none = library.find_candidates("Tudor", 0.75, 10).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_load_library_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "ref-1", "identity": {"brand": "Rolex", "model": "Submariner"}},
            {"id": "ref-2", "identity": {"brand": "Omega"}, "verification_status": "verified"}
        ]"#,
    )
    .unwrap();

    let library = InMemoryReferenceLibrary::load(&path).await.unwrap();

    assert_eq!(library.len(), 2);
    assert!(library.references()[1].is_verified());
}

#[tokio::test]
async fn test_load_library_tolerates_malformed_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "ref-1", "identity": {"brand": "Omega", "model": "Speedmaster"}},
            {
                "id": "ref-2",
                "identity": {"brand": "Rolex", "model": "Submariner"},
                "physical": {"case_material": 42, "dial_color": "black"}
            }
        ]"#,
    )
    .unwrap();

    let library = InMemoryReferenceLibrary::load(&path).await.unwrap();

    assert_eq!(library.len(), 2);
    let reference = &library.references()[1];
    assert!(reference.physical.case_material.is_none());
    assert_eq!(reference.physical.dial_color.as_deref(), Some("black"));

    let mut description = WatchDescription::new("Rolex", "Submariner");
    description.physical.dial_color = Some("Black".to_string());
    let discrepancies = analyze_discrepancies(&description, reference);

    assert!(
        discrepancies
            .iter()
            .all(|d| d.field_path != "physical.case_material")
    );
    let dial = discrepancies
        .iter()
        .find(|d| d.field_path == "physical.dial_color")
        .expect("dial color compared");
    assert_eq!(dial.severity, Severity::ExactMatch);
}

#[tokio::test]
async fn test_load_library_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = InMemoryReferenceLibrary::load(&dir.path().join("missing.json")).await;
    assert!(matches!(missing, Err(LibraryError::ReadFailed { .. })));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"id": "not-an-array"}"#).unwrap();
    let broken = InMemoryReferenceLibrary::load(&path).await;
    assert!(matches!(broken, Err(LibraryError::InvalidLibrary { .. })));
}

#[test]
fn test_comparison_record_carries_best_match() {
    let description = WatchDescription::new("Rolex", "Submariner Date");
    let record = ComparisonRecord::new(&description, &best_match()).unwrap();

    assert_eq!(record.reference_id, "rolex-1");
    assert_eq!(record.description, description);
    assert_eq!(record.description_hash.len(), 64);
    assert_eq!(record.components.brand, 100.0);
    assert_eq!(record.confidence, ConfidenceTier::Good);

    let other = ComparisonRecord::new(&description, &best_match()).unwrap();
    assert_ne!(record.id, other.id);
    assert_eq!(record.description_hash, other.description_hash);
}

#[tokio::test]
async fn test_jsonl_store_appends_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("comparisons.jsonl");
    let store = JsonlComparisonStore::new(&path);
    let description = WatchDescription::new("Rolex", "Submariner");

    for _ in 0..2 {
        let record = ComparisonRecord::new(&description, &best_match()).unwrap();
        store.save_comparison(record).await.unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: ComparisonRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed.reference_id, "rolex-1");
    assert_eq!(parsed.match_score, 72.5);
}

#[tokio::test]
async fn test_jsonl_store_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonlComparisonStore::new(dir.path());
    let record =
        ComparisonRecord::new(&WatchDescription::new("Rolex", "Submariner"), &best_match())
            .unwrap();

    let result = store.save_comparison(record).await;
    assert!(matches!(result, Err(LibraryError::WriteFailed { .. })));
}

#[tokio::test]
async fn test_mock_library_records_requests_and_fails_on_demand() {
    let library = MockReferenceLibrary::with_references(vec![ReferenceWatch::new(
        "omega-1", "Omega", "Seamaster",
    )]);

    let found = library.find_candidates("Rolex", 0.75, 50).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(
        library.requests(),
        vec![CandidateRequest {
            brand: "Rolex".to_string(),
            min_similarity: 0.75,
            limit: 50,
        }]
    );

    library.set_failing(true);
    let result = library.find_candidates("Rolex", 0.75, 50).await;
    assert!(matches!(result, Err(LibraryError::Unavailable { .. })));
    assert_eq!(library.call_count(), 2);
}

#[tokio::test]
async fn test_mock_store_shares_state_between_clones() {
    let store = MockComparisonStore::new();
    let handle = store.clone();
    let record =
        ComparisonRecord::new(&WatchDescription::new("Rolex", "Submariner"), &best_match())
            .unwrap();

    store.save_comparison(record.clone()).await.unwrap();
    assert_eq!(handle.len(), 1);

    handle.set_failing(true);
    assert!(store.save_comparison(record).await.is_err());
    assert_eq!(handle.len(), 1);
    assert_eq!(handle.attempts(), 2);
}
