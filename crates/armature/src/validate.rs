//! Structural validation of division-scheme requests.
//!
//! The validator runs every check in a single pass and never stops at the
//! first problem: a caller always gets the complete list of violations.
//! Blocking `errors` must be fixed before a layout is computed; advisory
//! `warnings` are surfaced but never affect validity.
//!
//! ## Checks performed
//!
//! - **Title block**: presence, required designation/name, designation
//!   format, recommended developer/organization
//! - **Components**: non-empty list, unique positions, designation format,
//!   quantity and level ranges, non-empty names
//! - **Sheet settings**: page format, orientation, and layout type
//!   membership in the supported sets
//! - **Hierarchy**: parent references resolve, parents sit on strictly
//!   smaller levels, exactly one root component

use std::collections::BTreeSet;

use log::{debug, info};
use serde::Serialize;

use armature_core::{
    component::Component,
    scheme::{SchemeRequest, TitleBlock},
    sheet::{LayoutType, Orientation, PageFormat},
};

use crate::hierarchy::HierarchyIndex;

/// The outcome of validating one request.
///
/// `errors` block layout and rendering; `warnings` are advisory and never
/// affect [`ValidationOutcome::is_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationOutcome {
    /// True iff no blocking violations were collected.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Blocking violations, in check order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Advisory findings, in check order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Display summary of a validation run, for callers that report back to a
/// user rather than branch on the outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub error_count: usize,
    pub warning_count: usize,
    pub product_name: String,
    pub product_code: String,
    pub component_count: usize,
    pub layout_type: String,
    pub page_format: String,
}

impl ValidationReport {
    /// Build the summary for an already computed outcome.
    pub fn from_outcome(outcome: &ValidationOutcome, request: &SchemeRequest) -> Self {
        Self {
            is_valid: outcome.is_valid(),
            errors: outcome.errors.clone(),
            warnings: outcome.warnings.clone(),
            error_count: outcome.errors.len(),
            warning_count: outcome.warnings.len(),
            product_name: request.product_name.clone(),
            product_code: request.product_code.clone(),
            component_count: request.components.len(),
            layout_type: request.layout_type.clone(),
            page_format: request.page_format.clone(),
        }
    }
}

/// Stateless request validator.
///
/// Construct one explicitly and reuse it across requests; it holds no
/// state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Run every check over the request.
    pub fn validate(&self, request: &SchemeRequest) -> ValidationOutcome {
        info!(product = request.product_name; "Validating scheme request");

        let mut outcome = ValidationOutcome::default();

        self.check_title_block(request.title_block.as_ref(), &mut outcome);
        self.check_product_code(&request.product_code, &mut outcome);
        self.check_components(&request.components, &mut outcome);
        self.check_sheet_settings(request, &mut outcome);
        self.check_hierarchy(&request.components, &mut outcome);

        if outcome.is_valid() {
            debug!(warning_count = outcome.warnings.len(); "Request is structurally valid");
        } else {
            debug!(
                error_count = outcome.errors.len(),
                warning_count = outcome.warnings.len();
                "Request failed validation"
            );
        }

        outcome
    }

    /// Validate and build the display summary in one step.
    pub fn report(&self, request: &SchemeRequest) -> ValidationReport {
        let outcome = self.validate(request);
        ValidationReport::from_outcome(&outcome, request)
    }

    fn check_title_block(&self, title_block: Option<&TitleBlock>, outcome: &mut ValidationOutcome) {
        let Some(title_block) = title_block else {
            outcome.error("Title block is required");
            return;
        };

        match title_block.designation.as_deref() {
            None | Some("") => outcome.error("Title block designation is required"),
            Some(designation) if !is_valid_designation(designation) => outcome.error(format!(
                "Title block designation '{designation}' does not match the XXXX.XX.XX.XXX format"
            )),
            Some(_) => {}
        }

        if title_block.name.as_deref().is_none_or(str::is_empty) {
            outcome.error("Title block name is required");
        }

        if title_block.developer.as_deref().is_none_or(str::is_empty) {
            outcome.warning("Title block developer is recommended");
        }

        if title_block
            .organization
            .as_deref()
            .is_none_or(str::is_empty)
        {
            outcome.warning("Title block organization is recommended");
        }
    }

    fn check_product_code(&self, product_code: &str, outcome: &mut ValidationOutcome) {
        if !is_valid_designation(product_code) {
            outcome.error(format!(
                "Product code '{product_code}' does not match the XXXX.XX.XX.XXX format"
            ));
        }
    }

    fn check_components(&self, components: &[Component], outcome: &mut ValidationOutcome) {
        if components.is_empty() {
            outcome.error("Component list must not be empty");
            return;
        }

        // One error listing every duplicated position number.
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for component in components {
            if !seen.insert(component.position) {
                duplicates.insert(component.position);
            }
        }
        if !duplicates.is_empty() {
            let listing = duplicates
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            outcome.error(format!("Duplicate position numbers: {listing}"));
        }

        for component in components {
            self.check_component(component, outcome);
        }
    }

    fn check_component(&self, component: &Component, outcome: &mut ValidationOutcome) {
        let position = component.position;

        if position < 1 {
            outcome.error(format!(
                "Component {position}: position numbers start at 1"
            ));
        }

        if !is_valid_designation(&component.designation) {
            outcome.error(format!(
                "Component {position}: designation '{}' does not match the XXXX.XX.XX.XXX format",
                component.designation
            ));
        }

        if component.quantity < 1 {
            outcome.error(format!("Component {position}: quantity must be at least 1"));
        }

        if component.level < 0 {
            outcome.error(format!("Component {position}: level must not be negative"));
        }

        if component.name.is_empty() {
            outcome.warning(format!("Component {position}: name is empty"));
        }
    }

    fn check_sheet_settings(&self, request: &SchemeRequest, outcome: &mut ValidationOutcome) {
        if let Err(err) = request.page_format.parse::<PageFormat>() {
            outcome.error(err.to_string());
        }
        if let Err(err) = request.orientation.parse::<Orientation>() {
            outcome.error(err.to_string());
        }
        if let Err(err) = request.layout_type.parse::<LayoutType>() {
            outcome.error(err.to_string());
        }
    }

    fn check_hierarchy(&self, components: &[Component], outcome: &mut ValidationOutcome) {
        let index = HierarchyIndex::build(components);

        for component in components {
            let Some(parent_position) = component.parent_position else {
                continue;
            };

            match index.get(parent_position) {
                None => outcome.error(format!(
                    "Component {} references missing parent {parent_position}",
                    component.position
                )),
                Some(parent) if parent.level >= component.level => outcome.error(format!(
                    "Component {}: parent level must be strictly less than its own level",
                    component.position
                )),
                Some(_) => {}
            }
        }

        // Counted over the raw list so duplicated root positions are not
        // collapsed by the index.
        let root_count = components.iter().filter(|c| c.is_root()).count();
        if root_count != 1 {
            outcome.error(format!(
                "Expected exactly one root component (level 0), found {root_count}"
            ));
        }
    }
}

/// Check the fixed `XXXX.XX.XX.XXX` designation shape: digit groups of
/// four, two, two, and three, separated by dots.
fn is_valid_designation(value: &str) -> bool {
    const GROUPS: [usize; 4] = [4, 2, 2, 3];

    let mut parts = value.split('.');
    for expected_len in GROUPS {
        match parts.next() {
            Some(part)
                if part.len() == expected_len && part.bytes().all(|b| b.is_ascii_digit()) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}
