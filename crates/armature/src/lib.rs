//! Armature - structural validation and sheet layout for assembly
//! division schemes.
//!
//! A division scheme shows a product and its components arranged by
//! hierarchy level on a drawing sheet. This crate validates the structure
//! of a scheme request and computes millimeter placement coordinates for
//! every component. Drawing boxes, connector lines, and text from those
//! coordinates is the job of an external renderer, which must honor the
//! coordinate contract documented on the [`layout`] module (top-left
//! origin, y growing downward).

pub mod bom;
pub mod config;
pub mod hierarchy;
pub mod layout;
pub mod validate;

mod error;

pub use armature_core::{component, geometry, scheme, sheet};

pub use error::{ArmatureError, ConfigError};

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Serialize;

use armature_core::{
    geometry::Point,
    scheme::SchemeRequest,
    sheet::{LayoutType, Orientation, PageFormat},
};

use bom::BomRow;
use config::AppConfig;
use hierarchy::HierarchyIndex;
use layout::LayoutEngine;
use validate::{ValidationOutcome, ValidationReport, Validator};

/// Computed placements for one scheme request.
#[derive(Debug, Clone, Serialize)]
pub struct SchemeLayout {
    /// Millimeter coordinates per component position. Top-left origin,
    /// y grows downward.
    pub positions: BTreeMap<i32, Point>,
    /// Advisory warnings from the boundary post-check.
    pub warnings: Vec<String>,
}

/// The full processing result handed to downstream consumers.
#[derive(Debug, Clone, Serialize)]
pub struct SchemeDocument {
    /// Validation summary for display.
    pub report: ValidationReport,
    /// Millimeter coordinates per component position. Top-left origin,
    /// y grows downward.
    pub positions: BTreeMap<i32, Point>,
    /// Parent-to-child position pairs for the hierarchy connector.
    pub links: Vec<(i32, i32)>,
    /// Advisory warnings from the boundary post-check.
    pub boundary_warnings: Vec<String>,
    /// Specification rows; empty when the request opts out.
    pub bom: Vec<BomRow>,
}

/// Facade for processing division-scheme requests.
///
/// Holds a validator and a layout engine built from one [`AppConfig`];
/// reusable across requests with no shared mutable state.
///
/// # Examples
///
/// ```rust
/// use armature::{SchemeBuilder, config::AppConfig};
/// use armature::component::Component;
/// use armature::scheme::{SchemeRequest, TitleBlock};
///
/// let request = SchemeRequest {
///     product_name: "Gear reducer".to_string(),
///     product_code: "1234.00.00.000".to_string(),
///     components: vec![Component {
///         position: 1,
///         name: "Gear reducer".to_string(),
///         designation: "1234.00.00.000".to_string(),
///         quantity: 1,
///         level: 0,
///         parent_position: None,
///         notes: None,
///     }],
///     page_format: "A4".to_string(),
///     orientation: "landscape".to_string(),
///     layout_type: "tree".to_string(),
///     title_block: Some(TitleBlock {
///         designation: Some("1234.00.00.000".to_string()),
///         name: Some("Division scheme".to_string()),
///         developer: Some("A. Turing".to_string()),
///         organization: Some("ACME".to_string()),
///         ..TitleBlock::default()
///     }),
///     include_bom: true,
/// };
///
/// let builder = SchemeBuilder::new(AppConfig::default());
/// let document = builder.process(&request).expect("valid request");
/// assert_eq!(document.positions.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    validator: Validator,
    engine: LayoutEngine,
}

impl SchemeBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            validator: Validator::new(),
            engine: LayoutEngine::new(config.layout),
        }
    }

    /// Validate a request, collecting every violation.
    pub fn validate(&self, request: &SchemeRequest) -> ValidationOutcome {
        self.validator.validate(request)
    }

    /// Validate a request and build the display summary.
    pub fn report(&self, request: &SchemeRequest) -> ValidationReport {
        self.validator.report(request)
    }

    /// Compute placements without validating first.
    ///
    /// This is the permissive path: sheet settings that fail to parse fall
    /// back to their defaults with a logged warning, mirroring the layout
    /// engine's never-fail contract. Callers that want structural
    /// guarantees should use [`SchemeBuilder::process`].
    pub fn layout(&self, request: &SchemeRequest) -> SchemeLayout {
        let layout_type = LayoutType::parse_lenient(&request.layout_type);
        let page_format = request.page_format.parse().unwrap_or_else(|_| {
            warn!(value = request.page_format; "Unknown page format, falling back to the default");
            PageFormat::default()
        });
        let orientation = request.orientation.parse().unwrap_or_else(|_| {
            warn!(value = request.orientation; "Unknown orientation, falling back to the default");
            Orientation::default()
        });

        let positions = self.engine.calculate_positions(
            &request.components,
            layout_type,
            page_format,
            orientation,
        );
        let sheet = orientation.apply(page_format.dimensions());
        let warnings = self.engine.validate_layout(&positions, sheet);

        SchemeLayout {
            positions,
            warnings,
        }
    }

    /// Run the intended validator-then-engine sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ArmatureError::Validation`] carrying the complete outcome
    /// when the request has blocking errors.
    pub fn process(&self, request: &SchemeRequest) -> Result<SchemeDocument, ArmatureError> {
        info!(product = request.product_name; "Processing scheme request");

        let outcome = self.validator.validate(request);
        if !outcome.is_valid() {
            return Err(ArmatureError::Validation(outcome));
        }

        let report = ValidationReport::from_outcome(&outcome, request);
        let SchemeLayout {
            positions,
            warnings: boundary_warnings,
        } = self.layout(request);

        let links = HierarchyIndex::build(&request.components).links();

        let bom = if request.include_bom {
            bom::bom_rows(&request.components)
        } else {
            Vec::new()
        };

        debug!(
            placed = positions.len(),
            link_count = links.len(),
            bom_rows = bom.len();
            "Scheme processed"
        );

        Ok(SchemeDocument {
            report,
            positions,
            links,
            boundary_warnings,
            bom,
        })
    }
}
