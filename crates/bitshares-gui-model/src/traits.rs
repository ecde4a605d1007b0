//! Core traits for the model/view contract.
//!
//! This module defines what a view may ask of a model. Models answer; they
//! never call back into the view.

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// Flags indicating what operations are allowed on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Item can be selected.
    pub selectable: bool,
    /// Item can be edited.
    pub editable: bool,
    /// Item can be dragged.
    pub drag_enabled: bool,
    /// Item can receive drops.
    pub drop_enabled: bool,
    /// Item has a checkbox.
    pub checkable: bool,
    /// Item is enabled (can interact).
    pub enabled: bool,
    /// Item should never have children (optimizes views).
    pub never_has_children: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a disabled item.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Sets the selectable flag.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the never-has-children hint.
    pub fn with_never_has_children(mut self, leaf: bool) -> Self {
        self.never_has_children = leaf;
        self
    }
}

/// Header orientation for `header_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal header (column headers).
    Horizontal,
    /// Vertical header (row headers).
    Vertical,
}

/// The core trait for item models.
///
/// `ItemModel` presents hierarchical data as rows and columns under parent
/// indices. Views use this interface to query and display data without
/// knowing the underlying data structure.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`row_count`](ItemModel::row_count) - Number of rows under a parent
/// - [`column_count`](ItemModel::column_count) - Number of columns
/// - [`data`](ItemModel::data) - Data for a given index and role
/// - [`index`](ItemModel::index) - Create an index for a position
/// - [`parent`](ItemModel::parent) - Get the parent of an index
///
/// The contract has no error channel. Requests the model cannot satisfy
/// are answered with "empty": zero rows, `ItemData::None`, or
/// `ModelIndex::invalid()`.
///
/// # Example
///
/// ```
/// use bitshares_gui_model::{ItemData, ItemModel, ItemRole, ModelIndex};
///
/// struct Labels(Vec<String>);
///
/// impl ItemModel for Labels {
///     fn row_count(&self, parent: &ModelIndex) -> usize {
///         if parent.is_valid() { 0 } else { self.0.len() }
///     }
///
///     fn column_count(&self, _parent: &ModelIndex) -> usize {
///         1
///     }
///
///     fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
///         match (role, self.0.get(index.row())) {
///             (ItemRole::Display, Some(label)) if index.is_valid() => {
///                 ItemData::from(label.as_str())
///             }
///             _ => ItemData::None,
///         }
///     }
///
///     fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
///         if self.has_index(row, column, parent) {
///             ModelIndex::new(row, column, 0)
///         } else {
///             ModelIndex::invalid()
///         }
///     }
///
///     fn parent(&self, _index: &ModelIndex) -> ModelIndex {
///         ModelIndex::invalid() // Flat list has no parents
///     }
/// }
///
/// let model = Labels(vec!["a".into(), "b".into()]);
/// let second = model.index(1, 0, &ModelIndex::invalid());
/// assert_eq!(model.display_text(&second).as_deref(), Some("b"));
/// ```
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the number of columns for children of the given parent.
    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the data stored under the given role for the item at index.
    ///
    /// Return `ItemData::None` if the index is invalid, the role is not
    /// supported, or there's no data for that role.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Creates a model index for the given row and column under parent.
    ///
    /// Return `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Returns the parent of the given index.
    ///
    /// Return `ModelIndex::invalid()` for top-level items and invalid indices.
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns the flags for the item at the given index.
    ///
    /// The default returns selectable and enabled flags.
    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    /// Returns `true` if the item at parent has any children.
    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    /// Returns `true` if `(row, column)` lies inside `parent`'s bounds.
    ///
    /// Models call this at the top of `index` before resolving anything.
    fn has_index(&self, row: usize, column: usize, parent: &ModelIndex) -> bool {
        column < self.column_count(parent) && row < self.row_count(parent)
    }

    /// Returns header data for the given section.
    ///
    /// The default returns `ItemData::None`.
    fn header_data(&self, _section: usize, _orientation: Orientation, _role: ItemRole) -> ItemData {
        ItemData::None
    }

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns the display text for an item (convenience for `data(index, Display)`).
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).into_string()
    }

    /// Creates a sibling index at the given row and column.
    ///
    /// This validates against the model, unlike `ModelIndex::sibling`.
    fn sibling(&self, index: &ModelIndex, row: usize, column: usize) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }
        self.index(row, column, &self.parent(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grid {
        rows: usize,
        columns: usize,
    }

    impl ItemModel for Grid {
        fn row_count(&self, parent: &ModelIndex) -> usize {
            if parent.is_valid() { 0 } else { self.rows }
        }

        fn column_count(&self, _parent: &ModelIndex) -> usize {
            self.columns
        }

        fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
            if index.is_valid() && role == ItemRole::Display {
                ItemData::from(format!("{}:{}", index.row(), index.column()))
            } else {
                ItemData::None
            }
        }

        fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
            if self.has_index(row, column, parent) {
                ModelIndex::new(row, column, 0)
            } else {
                ModelIndex::invalid()
            }
        }

        fn parent(&self, _index: &ModelIndex) -> ModelIndex {
            ModelIndex::invalid()
        }
    }

    #[test]
    fn test_item_flags() {
        let flags = ItemFlags::new();
        assert!(flags.selectable);
        assert!(flags.enabled);
        assert!(!flags.editable);
        assert!(!flags.checkable);

        let disabled = ItemFlags::disabled();
        assert!(!disabled.enabled);
        assert!(!disabled.selectable);

        let leaf = ItemFlags::new().with_never_has_children(true);
        assert!(leaf.never_has_children);
        assert!(leaf.enabled);
    }

    #[test]
    fn test_has_index_bounds() {
        let grid = Grid { rows: 2, columns: 3 };
        let root = ModelIndex::invalid();
        assert!(grid.has_index(1, 2, &root));
        assert!(!grid.has_index(2, 0, &root));
        assert!(!grid.has_index(0, 3, &root));
    }

    #[test]
    fn test_default_methods() {
        let grid = Grid { rows: 2, columns: 2 };
        let root = ModelIndex::invalid();
        let cell = grid.index(1, 1, &root);

        assert!(grid.has_children(&root));
        assert!(!grid.has_children(&cell));
        assert_eq!(grid.display_text(&cell).as_deref(), Some("1:1"));
        assert_eq!(grid.flags(&cell), ItemFlags::new());
        assert!(grid.header_data(0, Orientation::Horizontal, ItemRole::Display).is_none());
    }

    #[test]
    fn test_checked_sibling() {
        let grid = Grid { rows: 2, columns: 1 };
        let first = grid.index(0, 0, &ModelIndex::invalid());

        assert_eq!(grid.sibling(&first, 1, 0).row(), 1);
        assert!(!grid.sibling(&first, 5, 0).is_valid());
        assert!(!grid.sibling(&ModelIndex::invalid(), 0, 0).is_valid());
    }
}
