//! Component records for division schemes.

use serde::{Deserialize, Serialize};

/// A single component of the product within one division scheme.
///
/// Numeric fields are stored exactly as they arrive on the wire, signed and
/// unclamped. Range violations (a quantity below one, a negative level) are
/// the validator's business and are reported as data, never as a
/// deserialization failure.
///
/// Components are read-only inputs for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Positional reference number, the unique key within one scheme.
    pub position: i32,

    /// Human-readable name. May be empty; the validator warns about it.
    #[serde(default)]
    pub name: String,

    /// Designation in the fixed `XXXX.XX.XX.XXX` digit format.
    pub designation: String,

    /// Number of units installed. Expected to be at least one.
    #[serde(default = "default_quantity")]
    pub quantity: i32,

    /// Hierarchy depth. Zero is the root product, larger values are nested
    /// subcomponents.
    #[serde(default)]
    pub level: i32,

    /// Position of the parent component, when this component is not the
    /// root.
    #[serde(default)]
    pub parent_position: Option<i32>,

    /// Free-form remarks carried through to BOM rows.
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

impl Component {
    /// Whether this component is the root product of the scheme.
    pub fn is_root(&self) -> bool {
        self.level == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_root() {
        let component = Component {
            position: 1,
            name: "Gear reducer".to_string(),
            designation: "1234.00.00.000".to_string(),
            quantity: 1,
            level: 0,
            parent_position: None,
            notes: None,
        };
        assert!(component.is_root());

        let child = Component {
            position: 2,
            level: 1,
            parent_position: Some(1),
            ..component
        };
        assert!(!child.is_root());
    }
}
