//! Bill-of-materials derivation.
//!
//! A scheme's BOM is a flat table of its components ordered by position
//! number. This module only derives the row data; drawing the table is the
//! renderer's job.

use serde::Serialize;

use armature_core::component::Component;

/// One row of the specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomRow {
    pub position: i32,
    pub designation: String,
    pub name: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Component> for BomRow {
    fn from(component: &Component) -> Self {
        Self {
            position: component.position,
            designation: component.designation.clone(),
            name: component.name.clone(),
            quantity: component.quantity,
            notes: component.notes.clone(),
        }
    }
}

/// Flatten components into specification rows, ordered by position number.
pub fn bom_rows(components: &[Component]) -> Vec<BomRow> {
    let mut rows: Vec<BomRow> = components.iter().map(BomRow::from).collect();
    rows.sort_by_key(|row| row.position);
    rows
}
