//! Per-request hierarchy index.
//!
//! A scheme encodes its hierarchy only as parent-pointer links. This index
//! is built once per request and turns those links into O(1) lookups, so
//! validation and link enumeration stay O(n) overall instead of rescanning
//! the component list for every reference.

use indexmap::IndexMap;

use armature_core::component::Component;

/// Lookup structure over one request's components.
///
/// Maps preserve input order, so [`HierarchyIndex::roots`] and
/// [`HierarchyIndex::links`] walk components in the order the caller
/// submitted them.
#[derive(Debug)]
pub struct HierarchyIndex<'a> {
    by_position: IndexMap<i32, &'a Component>,
    children: IndexMap<i32, Vec<i32>>,
}

impl<'a> HierarchyIndex<'a> {
    /// Index a component list.
    ///
    /// On duplicate positions the first occurrence wins; the duplication
    /// itself is the validator's finding, not this index's.
    pub fn build(components: &'a [Component]) -> Self {
        let mut by_position = IndexMap::with_capacity(components.len());
        let mut children: IndexMap<i32, Vec<i32>> = IndexMap::new();

        for component in components {
            by_position.entry(component.position).or_insert(component);
            if let Some(parent) = component.parent_position {
                children.entry(parent).or_default().push(component.position);
            }
        }

        Self {
            by_position,
            children,
        }
    }

    /// Look up a component by its position number.
    pub fn get(&self, position: i32) -> Option<&'a Component> {
        self.by_position.get(&position).copied()
    }

    /// Positions of the direct children of the given component.
    pub fn children_of(&self, position: i32) -> &[i32] {
        self.children
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Root components (level 0) in input order.
    pub fn roots(&self) -> impl Iterator<Item = &'a Component> + '_ {
        self.by_position
            .values()
            .copied()
            .filter(|component| component.is_root())
    }

    /// Parent-to-child position pairs for every resolvable link, in input
    /// order.
    ///
    /// This is the data an external hierarchy connector draws its lines
    /// from. Links whose parent position does not exist are skipped; the
    /// validator reports those separately.
    pub fn links(&self) -> Vec<(i32, i32)> {
        self.children
            .iter()
            .filter(|(parent, _)| self.by_position.contains_key(*parent))
            .flat_map(|(parent, child_positions)| {
                child_positions.iter().map(move |child| (*parent, *child))
            })
            .collect()
    }
}
