//! Handing classifier tests

mod common;

use common::catalog;
use doorkit::core::{classify_handing, CalcError};
use doorkit::entities::{Handing, ProductCategory};

#[test]
fn test_no_category_gives_no_result() {
    let handing = catalog().handing;
    assert_eq!(classify_handing(&handing, None, Some("8804")), Ok(None));
}

#[test]
fn test_exit_device_without_model_gives_no_result() {
    let handing = catalog().handing;
    assert_eq!(
        classify_handing(&handing, Some(ProductCategory::Exit), None),
        Ok(None)
    );
    assert_eq!(
        classify_handing(&handing, Some(ProductCategory::Exit), Some("  ")),
        Ok(None)
    );
}

#[test]
fn test_mortise_and_bored_are_field_reversible() {
    let handing = catalog().handing;
    for category in [ProductCategory::Mortise, ProductCategory::Bored] {
        let result = classify_handing(&handing, Some(category), None)
            .unwrap()
            .unwrap();
        assert_eq!(result.status, Handing::Reversible);
        assert_eq!(result.title, "Field Reversible");
        assert!(result.guidance.contains("lockbody"));
    }
}

#[test]
fn test_mortise_has_tutorial_bored_does_not() {
    let handing = catalog().handing;
    let mortise = classify_handing(&handing, Some(ProductCategory::Mortise), None)
        .unwrap()
        .unwrap();
    assert!(mortise.tutorial.is_some());

    let bored = classify_handing(&handing, Some(ProductCategory::Bored), None)
        .unwrap()
        .unwrap();
    assert!(bored.tutorial.is_none());
}

#[test]
fn test_handed_exit_device() {
    let handing = catalog().handing;
    let result = classify_handing(&handing, Some(ProductCategory::Exit), Some("8700"))
        .unwrap()
        .unwrap();
    assert_eq!(result.status, Handing::Handed);
    assert_eq!(result.title, "Handed (Specify on Order)");
    assert!(result.guidance.contains("LHR"));
    assert!(result.guidance.contains("RHR"));
}

#[test]
fn test_rim_exit_device_is_reversible() {
    let handing = catalog().handing;
    let result = classify_handing(&handing, Some(ProductCategory::Exit), Some("8800"))
        .unwrap()
        .unwrap();
    assert_eq!(result.status, Handing::Reversible);
    assert!(result.guidance.contains("rim devices"));
}

#[test]
fn test_tutorial_follows_model_generation() {
    let handing = catalog().handing;
    let pe = classify_handing(&handing, Some(ProductCategory::Exit), Some("PE8500"))
        .unwrap()
        .unwrap();
    assert_eq!(pe.tutorial.unwrap().title, "PE80 Trim Rehanding");

    let classic = classify_handing(&handing, Some(ProductCategory::Exit), Some("8500"))
        .unwrap()
        .unwrap();
    assert_eq!(classic.tutorial.unwrap().title, "80 Series Trim Rehanding");

    let rim = classify_handing(&handing, Some(ProductCategory::Exit), Some("2727"))
        .unwrap()
        .unwrap();
    assert!(rim.tutorial.is_none());
}

#[test]
fn test_model_lookup_is_case_insensitive() {
    let handing = catalog().handing;
    let result = classify_handing(&handing, Some(ProductCategory::Exit), Some("pe8300"))
        .unwrap()
        .unwrap();
    assert_eq!(result.model.as_deref(), Some("PE8300"));
}

#[test]
fn test_unknown_model_rejected() {
    let handing = catalog().handing;
    assert_eq!(
        classify_handing(&handing, Some(ProductCategory::Exit), Some("9999")),
        Err(CalcError::UnknownModel {
            model: "9999".to_string()
        })
    );
}
