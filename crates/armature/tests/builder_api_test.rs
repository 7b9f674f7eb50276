//! Integration tests for the SchemeBuilder API
//!
//! These tests verify that the public API works and is usable.

use armature::{ArmatureError, SchemeBuilder, config::AppConfig};
use armature::component::Component;
use armature::scheme::{SchemeRequest, TitleBlock};

fn component(position: i32, level: i32, parent_position: Option<i32>) -> Component {
    Component {
        position,
        name: format!("Part {position}"),
        designation: format!("1234.{position:02}.00.000"),
        quantity: 1,
        level,
        parent_position,
        notes: None,
    }
}

fn request() -> SchemeRequest {
    SchemeRequest {
        product_name: "Gear reducer".to_string(),
        product_code: "1234.00.00.000".to_string(),
        components: vec![
            component(1, 0, None),
            component(2, 1, Some(1)),
            component(3, 1, Some(1)),
        ],
        page_format: "A4".to_string(),
        orientation: "landscape".to_string(),
        layout_type: "tree".to_string(),
        title_block: Some(TitleBlock {
            designation: Some("1234.00.00.000".to_string()),
            name: Some("Division scheme".to_string()),
            developer: Some("A. Turing".to_string()),
            organization: Some("ACME".to_string()),
            ..TitleBlock::default()
        }),
        include_bom: true,
    }
}

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = SchemeBuilder::default();
}

#[test]
fn test_process_valid_scheme() {
    let builder = SchemeBuilder::new(AppConfig::default());
    let document = builder.process(&request()).expect("request is valid");

    assert!(document.report.is_valid);
    assert_eq!(document.positions.len(), 3);
    assert_eq!(document.links, vec![(1, 2), (1, 3)]);
    assert_eq!(document.bom.len(), 3);
    assert!(document.boundary_warnings.is_empty());
}

#[test]
fn test_tree_layout_on_a4_landscape() {
    // One root and two children on a 297x210 sheet: the children share a
    // row and the root sits strictly above them.
    let builder = SchemeBuilder::default();
    let document = builder.process(&request()).expect("request is valid");

    let root = document.positions[&1];
    let left_child = document.positions[&2];
    let right_child = document.positions[&3];

    assert_eq!(left_child.y(), right_child.y());
    assert!(root.y() < left_child.y());
    assert!(left_child.x() < right_child.x());
}

#[test]
fn test_process_rejects_invalid_scheme() {
    let mut bad = request();
    bad.components.push(component(2, 1, Some(1)));

    let builder = SchemeBuilder::default();
    let err = builder.process(&bad).expect_err("duplicate positions");

    match err {
        ArmatureError::Validation(outcome) => {
            assert!(!outcome.is_valid());
            assert!(
                outcome
                    .errors()
                    .iter()
                    .any(|e| e.contains("Duplicate position numbers"))
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_layout_is_permissive_about_unknown_settings() {
    // The permissive path places components even for settings the strict
    // validator would reject, falling back to tree on A3 landscape.
    let mut req = request();
    req.layout_type = "radial".to_string();
    req.page_format = "B5".to_string();

    let builder = SchemeBuilder::default();
    let layout = builder.layout(&req);

    assert_eq!(layout.positions.len(), 3);
    let root = layout.positions[&1];
    let child = layout.positions[&2];
    assert!(root.y() < child.y(), "fell back to tree layout");
}

#[test]
fn test_include_bom_opt_out() {
    let mut req = request();
    req.include_bom = false;

    let builder = SchemeBuilder::default();
    let document = builder.process(&req).expect("request is valid");
    assert!(document.bom.is_empty());
}

#[test]
fn test_builder_reusability() {
    let builder = SchemeBuilder::default();

    let first = builder.process(&request()).expect("first run");
    let second = builder.process(&request()).expect("second run");

    assert_eq!(first.positions, second.positions);
    assert_eq!(first.links, second.links);
}

#[test]
fn test_check_mode_report_for_invalid_scheme() {
    let mut bad = request();
    bad.components[1].designation = "12.3.4.5".to_string();
    bad.title_block = None;

    let builder = SchemeBuilder::default();
    let report = builder.report(&bad);

    assert!(!report.is_valid);
    assert_eq!(report.error_count, report.errors.len());
    assert!(report.errors.iter().any(|e| e.contains("'12.3.4.5'")));
    assert!(report.errors.iter().any(|e| e.contains("Title block is required")));
    assert_eq!(report.component_count, 3);
}
