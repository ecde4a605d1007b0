//! Model index for addressing items in hierarchical models.
//!
//! A `ModelIndex` is the token a view hands back to a model to say which
//! item it means. It carries a row and column plus an opaque handle that
//! the model chooses; the model alone knows how to turn that handle back
//! into its own data.

use std::hash::{Hash, Hasher};

/// Represents a position within an `ItemModel`.
///
/// Each valid index contains:
/// - Row and column within the containing item
/// - An opaque `internal_id` the model uses to find the containing item
///
/// The index does not store its parent. Views ask the model for the parent
/// via [`ItemModel::parent`](crate::ItemModel::parent), which keeps indices
/// small and `Copy`.
///
/// # Index Validity
///
/// Model indices should be used immediately and not stored long-term.
/// An invalid index stands for the (invisible) root of the model.
///
/// # Example
///
/// ```
/// use bitshares_gui_model::ModelIndex;
///
/// let root = ModelIndex::invalid();
/// assert!(!root.is_valid());
///
/// let index = ModelIndex::new(2, 0, 7);
/// assert_eq!(index.row(), 2);
/// assert_eq!(index.internal_id(), 7);
///
/// let next = index.sibling_at_row(3);
/// assert_eq!(next.internal_id(), 7);
/// ```
#[derive(Clone, Copy)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    /// Model-specific handle. Typically identifies the item that contains
    /// this row rather than the item itself.
    internal_id: u64,
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index is used to represent:
    /// - The root of the model (as a parent reference)
    /// - A non-existent or out-of-bounds item
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            internal_id: 0,
            valid: false,
        }
    }

    /// Creates a new valid model index.
    ///
    /// Models call this from their `index` and `parent` implementations;
    /// views should obtain indices from the model instead.
    ///
    /// # Arguments
    ///
    /// * `row` - The row within the containing item
    /// * `column` - The column within the containing item
    /// * `internal_id` - Model-specific handle
    #[inline]
    pub const fn new(row: usize, column: usize, internal_id: u64) -> Self {
        Self {
            row,
            column,
            internal_id,
            valid: true,
        }
    }

    /// Returns `true` if this is a valid index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row of this index. Returns 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this index. Returns 0 for invalid indices.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the opaque handle associated with this index.
    #[inline]
    pub fn internal_id(&self) -> u64 {
        self.internal_id
    }

    /// Creates a sibling index at the given row and column.
    ///
    /// Siblings share the containing item, so the handle is carried over
    /// unchanged. Returns an invalid index if this index is invalid.
    ///
    /// Note: this does not validate against a model. Use
    /// [`ItemModel::sibling`](crate::ItemModel::sibling) for a checked
    /// version.
    #[inline]
    pub fn sibling(&self, row: usize, column: usize) -> ModelIndex {
        if !self.is_valid() {
            return ModelIndex::invalid();
        }
        ModelIndex::new(row, column, self.internal_id)
    }

    /// Convenience for `sibling(row, self.column())`.
    #[inline]
    pub fn sibling_at_row(&self, row: usize) -> ModelIndex {
        self.sibling(row, self.column)
    }

    /// Convenience for `sibling(self.row(), column)`.
    #[inline]
    pub fn sibling_at_column(&self, column: usize) -> ModelIndex {
        self.sibling(self.row, column)
    }
}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("column", &self.column)
                .field("internal_id", &self.internal_id)
                .finish()
        } else {
            write!(f, "ModelIndex(invalid)")
        }
    }
}

impl PartialEq for ModelIndex {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            // Two invalid indices are equal regardless of leftover fields
            (false, false) => true,
            (true, true) => {
                self.row == other.row
                    && self.column == other.column
                    && self.internal_id == other.internal_id
            }
            _ => false,
        }
    }
}

impl Eq for ModelIndex {}

impl Hash for ModelIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.row.hash(state);
            self.column.hash(state);
            self.internal_id.hash(state);
        }
    }
}

impl PartialOrd for ModelIndex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModelIndex {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        match (self.is_valid(), other.is_valid()) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => self
                .row
                .cmp(&other.row)
                .then(self.column.cmp(&other.column))
                .then(self.internal_id.cmp(&other.internal_id)),
        }
    }
}

static_assertions::assert_impl_all!(ModelIndex: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert_eq!(index.column(), 0);
        assert_eq!(index.internal_id(), 0);
        assert_eq!(ModelIndex::default(), index);
    }

    #[test]
    fn test_valid_index() {
        let index = ModelIndex::new(5, 3, 42);
        assert!(index.is_valid());
        assert_eq!(index.row(), 5);
        assert_eq!(index.column(), 3);
        assert_eq!(index.internal_id(), 42);
    }

    #[test]
    fn test_sibling_keeps_handle() {
        let index = ModelIndex::new(1, 0, 9);
        let sibling = index.sibling(2, 0);

        assert!(sibling.is_valid());
        assert_eq!(sibling.row(), 2);
        assert_eq!(sibling.internal_id(), 9);
        assert_eq!(index.sibling_at_column(4).column(), 4);
        assert!(!ModelIndex::invalid().sibling(1, 1).is_valid());
    }

    #[test]
    fn test_equality() {
        assert_eq!(ModelIndex::invalid(), ModelIndex::invalid());
        assert_eq!(ModelIndex::new(1, 0, 100), ModelIndex::new(1, 0, 100));
        assert_ne!(ModelIndex::new(1, 0, 100), ModelIndex::new(1, 0, 101));
        assert_ne!(ModelIndex::new(0, 0, 0), ModelIndex::invalid());
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(ModelIndex::new(1, 0, 3));
        set.insert(ModelIndex::new(1, 0, 3));
        set.insert(ModelIndex::invalid());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering() {
        let idx1 = ModelIndex::new(0, 0, 1);
        let idx2 = ModelIndex::new(1, 0, 1);
        let idx3 = ModelIndex::new(0, 1, 1);

        assert!(idx1 < idx2); // Row 0 < Row 1
        assert!(idx1 < idx3); // Same row, Column 0 < Column 1
        assert!(ModelIndex::invalid() < idx1);
    }
}
