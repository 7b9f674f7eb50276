//! Division-scheme request types.
//!
//! A [`SchemeRequest`] is one self-contained unit of work: the component
//! list, the title block, and the three sheet settings. Settings arrive as
//! raw strings so that a request with an unsupported value still
//! deserializes and the validator can report the violation as data.

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// Title block (stamp) metadata of the drawing.
///
/// Every field is optional at the wire level; which ones are required is
/// decided by the validator, not the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleBlock {
    /// Product designation in the `XXXX.XX.XX.XXX` format.
    pub designation: Option<String>,
    /// Product name.
    pub name: Option<String>,
    /// Who developed the drawing.
    pub developer: Option<String>,
    /// Who checked the drawing.
    pub checker: Option<String>,
    /// Who approved the drawing.
    pub approver: Option<String>,
    /// Issuing organization.
    pub organization: Option<String>,
    /// Drawing scale, e.g. `1:1` or `1:2`.
    pub scale: Option<String>,
    /// Sheet number within the document set.
    pub sheet_number: Option<i32>,
    /// Total sheets in the document set.
    pub total_sheets: Option<i32>,
    /// Issue date, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// A request to lay out one division scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRequest {
    /// Name of the main product.
    pub product_name: String,

    /// Designation of the main product in the `XXXX.XX.XX.XXX` format.
    pub product_code: String,

    /// Components of the product, in the order the caller wants them
    /// walked by the layout engine.
    pub components: Vec<Component>,

    /// Sheet format, one of `A0`..`A4`.
    #[serde(default = "default_page_format")]
    pub page_format: String,

    /// Sheet orientation, `portrait` or `landscape`.
    #[serde(default = "default_orientation")]
    pub orientation: String,

    /// Placement strategy, `tree`, `vertical`, or `horizontal`.
    #[serde(default = "default_layout_type")]
    pub layout_type: String,

    /// Title block metadata. Required by the validator, optional on the
    /// wire so its absence is reported instead of rejected.
    #[serde(default)]
    pub title_block: Option<TitleBlock>,

    /// Whether to derive bill-of-materials rows for the scheme.
    #[serde(default = "default_include_bom")]
    pub include_bom: bool,
}

fn default_page_format() -> String {
    "A3".to_string()
}

fn default_orientation() -> String {
    "landscape".to_string()
}

fn default_layout_type() -> String {
    "tree".to_string()
}

fn default_include_bom() -> bool {
    true
}
