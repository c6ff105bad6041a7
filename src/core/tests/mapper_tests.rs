use crate::core::{
    build_descriptor, map_rows, BuildError, ControlDefaults, ControlDescriptor, ControlSpec,
    SpecError,
};

fn map_with_defaults(rows: &[ControlSpec]) -> Result<Vec<ControlDescriptor>, BuildError> {
    let defaults = ControlDefaults::default();
    map_rows(rows, |spec| build_descriptor(spec, &defaults))
}

#[test]
fn test_preserves_length_and_order() {
    let rows: Vec<ControlSpec> = ["delta", "alpha", "charlie", "bravo"]
        .into_iter()
        .map(ControlSpec::with_id)
        .collect();

    let descriptors = map_with_defaults(&rows).unwrap();

    assert_eq!(descriptors.len(), rows.len());
    for (row, descriptor) in rows.iter().zip(&descriptors) {
        assert_eq!(row.id(), Some(descriptor.id.as_str()));
    }
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert_eq!(map_with_defaults(&[]).unwrap(), Vec::new());
}

#[test]
fn test_duplicate_id_rejected() {
    let rows = vec![ControlSpec::with_id("a"), ControlSpec::with_id("a")];

    assert_eq!(
        map_with_defaults(&rows),
        Err(BuildError::DuplicateId {
            id: "a".to_string(),
            first: 0,
            second: 1,
        })
    );
}

#[test]
fn test_ids_differing_only_in_whitespace_are_duplicates() {
    let rows = vec![ControlSpec::with_id("a"), ControlSpec::with_id(" a ")];

    assert_eq!(
        map_with_defaults(&rows),
        Err(BuildError::DuplicateId {
            id: "a".to_string(),
            first: 0,
            second: 1,
        })
    );
}

#[test]
fn test_duplicate_reported_at_first_clash() {
    let rows = vec![
        ControlSpec::with_id("a"),
        ControlSpec::with_id("b"),
        ControlSpec::with_id("b"),
        ControlSpec::with_id("a"),
    ];

    assert!(matches!(
        map_with_defaults(&rows),
        Err(BuildError::DuplicateId { ref id, first: 1, second: 2 }) if id == "b"
    ));
}

#[test]
fn test_empty_id_rejected_with_index() {
    let rows = vec![ControlSpec::with_id("ok"), ControlSpec::with_id("")];

    assert_eq!(
        map_with_defaults(&rows),
        Err(BuildError::InvalidSpec {
            index: 1,
            source: SpecError::EmptyId,
        })
    );
}

#[test]
fn test_invalid_row_aborts_before_later_duplicates() {
    let rows = vec![
        ControlSpec::with_id("a"),
        ControlSpec::new().with("max", 3),
        ControlSpec::with_id("a"),
    ];

    assert!(matches!(
        map_with_defaults(&rows),
        Err(BuildError::InvalidSpec { index: 1, source: SpecError::MissingId })
    ));
}

#[test]
fn test_custom_builder_is_used() {
    let rows = vec![ControlSpec::with_id("a"), ControlSpec::with_id("b")];
    let defaults = ControlDefaults::default().with(crate::core::DefaultOption::Max, 100.0);

    let descriptors = map_rows(&rows, |spec| {
        build_descriptor(spec, &defaults).map(|mut d| {
            d.label = d.label.to_uppercase();
            d
        })
    })
    .unwrap();

    assert_eq!(descriptors[0].label, "A");
    assert_eq!(descriptors[1].number("max"), Some(100.0));
}
