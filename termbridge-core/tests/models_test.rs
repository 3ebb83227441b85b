//! Model round-trip and invariant tests for termbridge-core.

use chrono::Utc;

use termbridge_core::models::*;

fn jwara() -> SourceTerm {
    SourceTerm::new("AYU001", "Jwara", "Ayurveda")
        .with_synonyms(vec!["Fever".into(), "Pyrexia".into()])
        .with_category("Symptoms")
}

fn fever_entry() -> TargetEntry {
    TargetEntry::new("http://id.who.int/icd/entity/123", "MG26", "Fever")
}

#[test]
fn mapping_result_serde_round_trip() {
    let result = MappingResult {
        source_term: jwara(),
        matches: vec![fever_entry()],
        confidence: Confidence::new(0.95),
        method: MappingMethod::ExactMatch,
        created_at: Utc::now(),
    };

    let json = serde_json::to_string(&result).unwrap();
    let back: MappingResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert!(json.contains("\"exact_match\""));
}

#[test]
fn target_entry_optional_fields_default_on_deserialize() {
    // Collaborators may omit everything except id, code, and title.
    let entry: TargetEntry =
        serde_json::from_str(r#"{"id":"e1","code":"5A10","title":"Diabetes"}"#).unwrap();
    assert!(entry.category.is_empty());
    assert!(entry.synonyms.is_empty());
}

#[test]
fn empty_result_is_failure_shaped() {
    let result = MappingResult::empty(jwara(), MappingMethod::SystemError);
    assert!(result.matches.is_empty());
    assert_eq!(result.confidence.value(), 0.0);
    assert_eq!(result.method, MappingMethod::SystemError);
}

#[test]
fn bulk_report_histogram_counts_methods() {
    let mut a = MappingResult::empty(jwara(), MappingMethod::NoResults);
    a.source_term.id = "AYU001".into();
    let mut b = MappingResult::empty(jwara(), MappingMethod::NoResults);
    b.source_term.id = "AYU002".into();
    let mut c = MappingResult::empty(jwara(), MappingMethod::SearchFailed);
    c.source_term.id = "AYU003".into();

    let report = BulkMappingReport::from_results(vec![a, b, c]);
    assert_eq!(report.total_processed, 3);
    assert_eq!(report.count(MappingMethod::NoResults), 2);
    assert_eq!(report.count(MappingMethod::SearchFailed), 1);
    assert_eq!(report.count(MappingMethod::ExactMatch), 0);
    assert!(report.results.contains_key("AYU002"));
}
