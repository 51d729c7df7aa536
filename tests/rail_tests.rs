//! Rail sizing tests

mod common;

use common::catalog;
use doorkit::core::{calculate_rail, CalcError, RailRequest, RailSizing};
use doorkit::entities::{Generation, Stile};

fn request(generation: Generation, stile: Stile, door_width: f64) -> RailRequest {
    RailRequest {
        generation,
        stile,
        door_width: Some(door_width),
    }
}

fn size_class(sizing: &RailSizing) -> &str {
    match sizing {
        RailSizing::Standard { size_class, .. } => size_class,
        RailSizing::Custom { .. } => "custom",
    }
}

#[test]
fn test_narrow_stile_36_inch_door() {
    let result = calculate_rail(
        &catalog().rails,
        &request(Generation::Series80, Stile::Narrow, 36.0),
    )
    .unwrap();

    match &result.sizing {
        RailSizing::Standard {
            size_class,
            range,
            stock_length,
        } => {
            assert_eq!(size_class, "F Size");
            assert_eq!(range, "33\" - 36\"");
            assert_eq!(stock_length.to_string(), "32.605");
        }
        other => panic!("expected standard sizing, got {:?}", other),
    }
    assert_eq!(result.cut_length.to_string(), "32.605");
    assert_eq!(result.stile_label, "Narrow Stile");
}

#[test]
fn test_size_class_boundaries() {
    let rails = catalog().rails;
    let cases = [
        (24.0, "E Size"),
        (32.0, "E Size"),
        (32.5, "F Size"),
        (33.0, "F Size"),
        (36.0, "F Size"),
        (37.0, "J Size"),
        (42.0, "J Size"),
        (43.0, "G Size"),
        (48.0, "G Size"),
        (48.01, "custom"),
        (49.0, "custom"),
    ];
    for (width, expected) in cases {
        let result =
            calculate_rail(&rails, &request(Generation::Series80, Stile::Wide, width)).unwrap();
        assert_eq!(size_class(&result.sizing), expected, "width {}", width);
    }
}

#[test]
fn test_cut_length_ignores_size_class() {
    let rails = catalog().rails;
    for width in [30.0, 36.0, 48.0, 52.0] {
        let result =
            calculate_rail(&rails, &request(Generation::Series80, Stile::Wide, width)).unwrap();
        let expected = ((width - 6.58) * 1000.0_f64).round() / 1000.0;
        assert!((result.cut_length.value() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_80_series_oversize_is_special_order() {
    let result = calculate_rail(
        &catalog().rails,
        &request(Generation::Series80, Stile::Narrow, 49.0),
    )
    .unwrap();
    assert!(result.is_custom());
    match &result.sizing {
        RailSizing::Custom {
            stock, orderable, ..
        } => {
            assert_eq!(stock, "Use NC-E20");
            assert!(*orderable);
        }
        other => panic!("expected custom sizing, got {:?}", other),
    }
    assert_eq!(result.cut_length.to_string(), "45.605");
}

#[test]
fn test_pe80_oversize_cannot_be_extended() {
    let result = calculate_rail(
        &catalog().rails,
        &request(Generation::Pe80, Stile::Wide, 50.0),
    )
    .unwrap();
    match &result.sizing {
        RailSizing::Custom {
            orderable, note, ..
        } => {
            assert!(!*orderable);
            assert!(note.contains("cannot be extended"));
        }
        other => panic!("expected custom sizing, got {:?}", other),
    }
    // Cut length is still reported as a theoretical value
    assert_eq!(result.cut_length.to_string(), "42.677");
}

#[test]
fn test_pe80_labels_and_stock() {
    let result = calculate_rail(
        &catalog().rails,
        &request(Generation::Pe80, Stile::Narrow, 40.0),
    )
    .unwrap();
    assert_eq!(result.generation_label, "PE80 Series");
    assert_eq!(result.stile_label, "NE (Narrow)");
    assert_eq!(size_class(&result.sizing), "J Size");
    assert_eq!(result.cut_length.to_string(), "35.862");
}

#[test]
fn test_below_minimum_width_rejected() {
    let err = calculate_rail(
        &catalog().rails,
        &request(Generation::Series80, Stile::Narrow, 20.0),
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::BelowMinimumWidth { .. }));
}

#[test]
fn test_missing_or_invalid_width_rejected() {
    let rails = catalog().rails;
    let missing = RailRequest {
        generation: Generation::Series80,
        stile: Stile::Narrow,
        door_width: None,
    };
    assert_eq!(
        calculate_rail(&rails, &missing),
        Err(CalcError::Missing {
            field: "Door Width"
        })
    );
    assert!(matches!(
        calculate_rail(&rails, &request(Generation::Series80, Stile::Narrow, -36.0)),
        Err(CalcError::NotPositive { .. })
    ));
}
