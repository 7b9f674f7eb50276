//! Sheet layout for division schemes.
//!
//! ## Coordinate contract
//!
//! Positions are the top-left corners of component boxes, in millimeters,
//! with the origin at the sheet's top-left corner. The y axis grows
//! **downward**: the root level sits at the top margin and deeper levels
//! get larger y values. A renderer working from a bottom-left,
//! upward-growing origin must invert the axis explicitly.
//!
//! ## Permissiveness
//!
//! The engine never fails for a structurally valid component list, even
//! when the result overflows the sheet. Overflow is reported by the
//! advisory [`LayoutEngine::validate_layout`] post-check, which informs and
//! never rejects. The intended call sequence is validator first, engine
//! second.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use armature_core::{
    component::Component,
    geometry::{Point, Size},
    sheet::{LayoutType, Orientation, PageFormat},
};

use crate::config::LayoutConstants;

/// Placement engine for division schemes.
///
/// Stateless apart from its [`LayoutConstants`]; construct one explicitly
/// and reuse it across requests.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    constants: LayoutConstants,
}

impl LayoutEngine {
    /// Create an engine with the given drawing constants.
    pub fn new(constants: LayoutConstants) -> Self {
        Self { constants }
    }

    /// The drawing constants this engine places boxes with.
    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    /// Compute a coordinate for every component.
    ///
    /// Returns one entry per distinct position number, keyed by position.
    pub fn calculate_positions(
        &self,
        components: &[Component],
        layout_type: LayoutType,
        page_format: PageFormat,
        orientation: Orientation,
    ) -> BTreeMap<i32, Point> {
        let sheet = orientation.apply(page_format.dimensions());

        info!(
            component_count = components.len(),
            layout_type:? = layout_type;
            "Calculating positions"
        );
        debug!(sheet:? = sheet; "Sheet size");

        let positions = match layout_type {
            LayoutType::Tree => self.layout_tree(components, sheet),
            LayoutType::Vertical => self.layout_vertical(components, sheet),
            LayoutType::Horizontal => self.layout_horizontal(components, sheet),
        };

        debug!(placed = positions.len(); "Position calculation finished");
        positions
    }

    /// Tree layout: hierarchy levels stacked top to bottom, each level
    /// centered horizontally and wrapped into rows when it is wider than
    /// the working area.
    fn layout_tree(&self, components: &[Component], sheet: Size) -> BTreeMap<i32, Point> {
        let c = &self.constants;
        let mut positions = BTreeMap::new();

        let levels = group_by_level(components);
        debug!(level_count = levels.len(); "Components grouped by level");

        let available_width = sheet.width() - c.margins().horizontal_sum();
        let step_x = c.box_width + c.horizontal_spacing;
        let items_per_row = ((available_width / step_x).floor() as usize).max(1);

        let mut y = c.margin_top;

        for (level, items) in &levels {
            debug!(level = *level, count = items.len(); "Placing level");

            // Centering offset computed from the full level count. When the
            // level wraps, later rows restart at this same offset, so only
            // the first row is actually centered on the sheet.
            let total_width = items.len() as f32 * step_x;
            let x_offset = (available_width - total_width) / 2.0 + c.margin_left;

            let mut x = x_offset;
            for (idx, component) in items.iter().enumerate() {
                if idx > 0 && idx % items_per_row == 0 {
                    x = x_offset;
                    y += c.box_height + c.vertical_spacing;
                }

                positions.insert(component.position, Point::new(x, y));
                x += step_x;
            }

            y += c.level_spacing;
        }

        positions
    }

    /// Vertical layout: one horizontally centered column in input order.
    /// Hierarchy levels are ignored in this mode.
    fn layout_vertical(&self, components: &[Component], sheet: Size) -> BTreeMap<i32, Point> {
        let c = &self.constants;
        let mut positions = BTreeMap::new();

        let x = (sheet.width() - c.box_width) / 2.0;
        let mut y = c.margin_top;

        for component in components {
            positions.insert(component.position, Point::new(x, y));
            y += c.box_height + c.vertical_spacing;
        }

        positions
    }

    /// Horizontal layout: one vertically centered row in input order. The
    /// row never wraps; components past the right margin are still placed
    /// and reported by the boundary check.
    fn layout_horizontal(&self, components: &[Component], sheet: Size) -> BTreeMap<i32, Point> {
        let c = &self.constants;
        let mut positions = BTreeMap::new();

        let y = (sheet.height() - c.box_height) / 2.0;
        let mut x = c.margin_left;

        for component in components {
            if x + c.box_width > sheet.width() - c.margin_right {
                warn!(position = component.position; "Component overflows the sheet horizontally");
            }

            positions.insert(component.position, Point::new(x, y));
            x += c.box_width + c.horizontal_spacing;
        }

        positions
    }

    /// Advisory boundary check over computed positions.
    ///
    /// Returns one warning per component whose box leaves the sheet.
    /// Purely informational: positions are neither rejected nor adjusted.
    pub fn validate_layout(&self, positions: &BTreeMap<i32, Point>, sheet: Size) -> Vec<String> {
        let c = &self.constants;
        let box_size = Size::new(c.box_width, c.box_height);
        let mut warnings = Vec::new();

        for (&position, point) in positions {
            let bounds = point.to_box_bounds(box_size);

            if point.x() < 0.0 || point.y() < 0.0 {
                warnings.push(format!(
                    "Component {position} is placed at a negative coordinate"
                ));
            }
            if bounds.max_x() > sheet.width() {
                warnings.push(format!(
                    "Component {position} extends past the right sheet boundary"
                ));
            }
            if bounds.max_y() > sheet.height() {
                warnings.push(format!(
                    "Component {position} extends past the bottom sheet boundary"
                ));
            }
        }

        if !warnings.is_empty() {
            warn!(warning_count = warnings.len(); "Layout overflows the sheet");
        }

        warnings
    }
}

/// Group components by hierarchy level, levels ascending, preserving each
/// component's input order within its level.
fn group_by_level(components: &[Component]) -> BTreeMap<i32, Vec<&Component>> {
    let mut levels: BTreeMap<i32, Vec<&Component>> = BTreeMap::new();
    for component in components {
        levels.entry(component.level).or_default().push(component);
    }
    levels
}
