mod common;

use common::{init_tracing, sample_map};
use regmap_core::{CodecError, FieldSpec, RegisterMapBuilder};

#[test]
fn test_contiguous_layout_passes() {
    init_tracing();
    let map = RegisterMapBuilder::new("contiguous", 0)
        .field(FieldSpec::u16("a", "A", 0))
        .field(FieldSpec::u32("b", "B", 1))
        .field(FieldSpec::u16("c", "C", 3))
        .build()
        .unwrap();
    assert_eq!(map.register_count(), 4);
    assert_eq!(map.last_address(), 3);
}

#[test]
fn test_address_gap_fails_naming_field() {
    init_tracing();
    let err = RegisterMapBuilder::new("gapped", 0)
        .field(FieldSpec::u16("a", "A", 0))
        .field(FieldSpec::u32("b", "B", 1))
        .field(FieldSpec::u16("c", "C", 4))
        .build()
        .unwrap_err();
    match err {
        CodecError::Inconsistent {
            field,
            expected,
            actual,
        } => {
            assert_eq!(field, "c");
            assert_eq!(expected, 3);
            assert_eq!(actual, 4);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_first_field_must_sit_at_base() {
    init_tracing();
    let err = RegisterMapBuilder::new("offset", 10)
        .field(FieldSpec::u16("a", "A", 11))
        .build()
        .unwrap_err();
    assert!(matches!(err, CodecError::Inconsistent { expected: 10, .. }));
}

#[test]
fn test_block_scoped_consistency_tolerates_gaps_between_blocks() {
    init_tracing();
    // Gaps between blocks are fine, drift inside a block is not
    let map = sample_map().unwrap();
    assert_eq!(map.register_count(), 1 + 1 + 2 + 1 + 2 + 2 + 2 + 8);
    assert_eq!(map.last_address(), 300);

    let err = RegisterMapBuilder::new("drift", 100)
        .field(FieldSpec::u16("a", "A", 100))
        .block(200)
        .field(FieldSpec::f32("b", "B", 200))
        .field(FieldSpec::f32("c", "C", 203))
        .build()
        .unwrap_err();
    assert!(matches!(err, CodecError::Inconsistent { expected: 202, .. }));
}

#[test]
fn test_overlapping_block_rejected() {
    init_tracing();
    let err = RegisterMapBuilder::new("overlap", 0)
        .field(FieldSpec::u32("a", "A", 0))
        .block(1)
        .field(FieldSpec::u16("b", "B", 1))
        .build()
        .unwrap_err();
    assert!(matches!(err, CodecError::InvalidSpec { .. }));
}

#[test]
fn test_unknown_field_lookup() {
    init_tracing();
    let mut map = sample_map().unwrap();
    assert!(matches!(
        map.get("no_such_field").unwrap_err(),
        CodecError::UnknownField(_)
    ));
    assert!(matches!(
        map.value("no_such_field").unwrap_err(),
        CodecError::UnknownField(_)
    ));
    assert!(matches!(
        map.set_value("no_such_field", 1i64).unwrap_err(),
        CodecError::UnknownField(_)
    ));
}

#[test]
fn test_range_resolution() {
    init_tracing();
    let map = sample_map().unwrap();
    // Spans fields at 100 (width 1) through 105 (width 2)
    let range = map.range("status", "energy_day").unwrap();
    assert_eq!(range.address_from, 100);
    assert_eq!(range.address_to, 105);
    assert_eq!(range.count, 7);

    let single = map.range("frequency", "frequency").unwrap();
    assert_eq!((single.address_from, single.address_to, single.count), (200, 200, 2));
}

#[test]
fn test_reversed_range_rejected() {
    init_tracing();
    let map = sample_map().unwrap();
    let err = map.range("energy_day", "status").unwrap_err();
    assert!(matches!(err, CodecError::InvalidRange { .. }), "got {err}");
}

#[test]
fn test_range_at_top_of_address_space() {
    init_tracing();
    // A 2-wide field at 65534 ends exactly at the address space boundary
    let map = RegisterMapBuilder::new("top", 65534)
        .field(FieldSpec::u32("tail", "Tail", 65534))
        .build()
        .unwrap();
    let range = map.range("tail", "tail").unwrap();
    assert_eq!(
        (range.address_from, range.address_to, range.count),
        (65534, 65534, 2)
    );

    // A span whose word count would not fit u16 is rejected, not wrapped
    let err = RegisterMapBuilder::new("full", 0)
        .field(FieldSpec::u16("head", "Head", 0))
        .block(65534)
        .field(FieldSpec::u32("tail", "Tail", 65534))
        .build()
        .unwrap()
        .range("head", "tail")
        .unwrap_err();
    assert!(matches!(err, CodecError::InvalidRange { .. }), "got {err}");
}

#[test]
fn test_value_f64_on_text_field_reports_value_class() {
    init_tracing();
    let map = sample_map().unwrap();
    let err = map.value_f64("serial_number").unwrap_err();
    assert!(matches!(err, CodecError::ValueClass { .. }), "got {err}");
}

#[test]
fn test_json_document_skips_non_exported_fields() {
    init_tracing();
    let mut map = RegisterMapBuilder::new("doc", 0)
        .field(FieldSpec::u16("visible", "Visible", 0).scale(0.1))
        .field(FieldSpec::u16("hidden", "Hidden", 1).no_export())
        .build()
        .unwrap();
    map.set_value("visible", 24.53f64).unwrap();
    map.set_value("hidden", 9i64).unwrap();

    let doc = map.to_json();
    assert_eq!(doc["visible"], serde_json::json!(24.53));
    assert!(doc.get("hidden").is_none());
}
