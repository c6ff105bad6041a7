use crate::core::{Duplicate, DuplicateDetector};

#[test]
fn test_no_duplicates_when_empty() {
    let detector = DuplicateDetector::new();
    assert_eq!(detector.find_duplicates().len(), 0);
    assert_eq!(detector.total_ids(), 0);
}

#[test]
fn test_no_duplicates_with_unique_ids() {
    let mut detector = DuplicateDetector::new();

    assert_eq!(detector.add_id("alpha", 0), None);
    assert_eq!(detector.add_id("beta", 1), None);
    assert_eq!(detector.add_id("gamma", 2), None);

    assert_eq!(detector.find_duplicates().len(), 0);
    assert_eq!(detector.total_ids(), 3);
}

#[test]
fn test_add_id_reports_first_occurrence() {
    let mut detector = DuplicateDetector::new();

    detector.add_id("alpha", 0);
    detector.add_id("beta", 1);
    assert_eq!(detector.add_id("alpha", 2), Some(0));
    assert_eq!(detector.add_id("alpha", 3), Some(0));
}

#[test]
fn test_detects_triple_duplicate() {
    let mut detector = DuplicateDetector::new();

    detector.add_id("a", 0);
    detector.add_id("a", 4);
    detector.add_id("a", 7);

    let duplicates = detector.find_duplicates();
    assert_eq!(
        duplicates,
        vec![Duplicate {
            id: "a".to_string(),
            indices: vec![0, 4, 7],
        }]
    );
}

#[test]
fn test_ids_are_case_sensitive() {
    let mut detector = DuplicateDetector::new();

    detector.add_id("Alpha", 0);
    detector.add_id("alpha", 1);

    assert!(detector.find_duplicates().is_empty());
}

#[test]
fn test_has_duplicate_method() {
    let mut detector = DuplicateDetector::new();

    detector.add_id("alpha", 0);
    assert!(!detector.has_duplicate("alpha"));

    detector.add_id("alpha", 1);
    assert!(detector.has_duplicate("alpha"));
    assert!(!detector.has_duplicate("beta"));
}

#[test]
fn test_multiple_duplicates_ordered_by_first_row() {
    let mut detector = DuplicateDetector::new();

    // Duplicate 1 starts at row 1, duplicate 2 at row 0
    detector.add_id("zeta", 0);
    detector.add_id("eta", 1);
    detector.add_id("eta", 2);
    detector.add_id("zeta", 3);
    detector.add_id("theta", 4);

    let duplicates = detector.find_duplicates();
    assert_eq!(duplicates.len(), 2);
    assert_eq!(duplicates[0].id, "zeta");
    assert_eq!(duplicates[1].id, "eta");
    assert_eq!(detector.total_ids(), 5);
}
