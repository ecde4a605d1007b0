//! Item model adapter over the mode tree.
//!
//! `ModeTreeModel` answers a tree view's `row_count` / `index` / `parent` /
//! `data` queries against a [`ModeTree`].
//!
//! # Indexing Scheme
//!
//! A `ModelIndex` for row `r` stores, as its handle, the [`NodeId`](crate::tree::NodeId) of the
//! node that *contains* row `r`, not of the item at row `r`. Top-level rows
//! therefore carry the root's id, and the rows under a mode carry that
//! mode's id:
//!
//! ```text
//! index(1, 0, invalid)        -> (row 1, handle = root)     "Mail"
//! index(2, 0, (1, root))      -> (row 2, handle = mail)     "Pending"
//! parent((2, mail))           -> (row_of(mail) = 1, handle = root)
//! parent((1, root))           -> invalid (root has no parent)
//! ```
//!
//! To find what a valid index `i` *is*, resolve `i.internal_id()` to the
//! containing node and ask it for `child(i.row())`: a node for mode rows,
//! `None` for leaf items.

use bitshares_gui_model::{ItemData, ItemFlags, ItemModel, ItemRole, ModelIndex, Orientation};

use crate::config::TreeLayout;
use crate::domain::ModeKind;
use crate::error::Result;
use crate::logging::targets;
use crate::tree::{ModeTree, Node, TreeNode};

/// The tree always has exactly one column.
pub const COLUMN_COUNT: usize = 1;

/// Tree view model over a [`ModeTree`].
///
/// The model owns its tree. It is read-only: nothing in the tree changes
/// after construction, so handles given to a view never go stale.
///
/// # Example
///
/// ```
/// use bitshares_gui::{ItemModel, ModeTreeModel, ModelIndex};
///
/// let model = ModeTreeModel::default();
/// let root = ModelIndex::invalid();
/// assert_eq!(model.row_count(&root), 3);
///
/// let mail = model.index(1, 0, &root);
/// assert_eq!(model.display_text(&mail).as_deref(), Some("Mail"));
///
/// let inbox = model.index(0, 0, &mail);
/// assert_eq!(model.display_text(&inbox).as_deref(), Some("Inbox"));
/// assert_eq!(model.parent(&inbox), mail);
/// ```
#[derive(Debug)]
pub struct ModeTreeModel {
    tree: ModeTree,
}

impl ModeTreeModel {
    /// Creates a model over an already built tree.
    pub fn new(tree: ModeTree) -> Self {
        Self { tree }
    }

    /// Builds the tree from a layout and wraps it.
    pub fn from_layout(layout: &TreeLayout) -> Result<Self> {
        Ok(Self::new(ModeTree::new(layout)?))
    }

    /// The underlying tree.
    pub fn tree(&self) -> &ModeTree {
        &self.tree
    }

    /// Index of a mode's top-level row, or invalid if the mode is absent.
    pub fn mode_index(&self, kind: ModeKind) -> ModelIndex {
        let root = self.tree.root();
        self.tree
            .mode(kind)
            .and_then(|mode| root.find_row(mode.id()))
            .map_or_else(ModelIndex::invalid, |row| {
                ModelIndex::new(row, 0, root.id().as_handle())
            })
    }

    /// Resolves an index handle to the node containing the index's row.
    fn containing_node(&self, index: &ModelIndex) -> Option<&Node> {
        let node = self.tree.node_from_handle(index.internal_id());
        if node.is_none() {
            tracing::warn!(
                target: targets::MODEL,
                handle = index.internal_id(),
                row = index.row(),
                "model index handle does not resolve to a tree node"
            );
        }
        node
    }

    /// Resolves a parent index to the node whose rows it lists.
    ///
    /// The invalid index stands for the root. A valid index names a row of
    /// its containing node; that row is a node only if it is a mode.
    fn node_for_parent(&self, parent: &ModelIndex) -> Option<&Node> {
        if !parent.is_valid() {
            return self.tree.node(self.tree.root_id());
        }
        let child = self.containing_node(parent)?.child(parent.row())?;
        self.tree.node(child)
    }
}

impl Default for ModeTreeModel {
    fn default() -> Self {
        Self::new(ModeTree::sample())
    }
}

impl ItemModel for ModeTreeModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.column() > 0 {
            return 0;
        }
        // Leaf rows resolve to no node and therefore have no rows.
        self.node_for_parent(parent).map_or(0, TreeNode::child_count)
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        COLUMN_COUNT
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if role != ItemRole::Display || !index.is_valid() {
            return ItemData::None;
        }
        self.containing_node(index)
            .map(|node| node.data(self.tree.nodes(), index.row()))
            .unwrap_or_default()
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if !self.has_index(row, column, parent) {
            return ModelIndex::invalid();
        }

        let Some(container) = self.node_for_parent(parent) else {
            return ModelIndex::invalid();
        };
        if row >= container.child_count() {
            return ModelIndex::invalid();
        }

        tracing::trace!(
            target: targets::MODEL,
            row,
            column,
            container = container.name(),
            "created index"
        );
        ModelIndex::new(row, column, container.id().as_handle())
    }

    fn parent(&self, index: &ModelIndex) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }
        let Some(container) = self.containing_node(index) else {
            return ModelIndex::invalid();
        };
        // Rows of the root are top-level items.
        let Some(grandparent) = container.parent() else {
            return ModelIndex::invalid();
        };
        let Some(row) = container.row(self.tree.nodes()) else {
            return ModelIndex::invalid();
        };

        tracing::trace!(
            target: targets::MODEL,
            row,
            container = container.name(),
            "resolved parent"
        );
        ModelIndex::new(row, 0, grandparent.as_handle())
    }

    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        match (section, orientation, role) {
            (0, Orientation::Horizontal, ItemRole::Display) => ItemData::from(self.tree.header()),
            _ => ItemData::None,
        }
    }
}

static_assertions::assert_impl_all!(ModeTreeModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModeLayout;
    use crate::tree::NodeId;

    fn labels(model: &ModeTreeModel, parent: &ModelIndex) -> Vec<String> {
        (0..model.row_count(parent))
            .filter_map(|row| model.display_text(&model.index(row, 0, parent)))
            .collect()
    }

    #[test]
    fn test_top_level() {
        let model = ModeTreeModel::default();
        let root = ModelIndex::invalid();

        assert_eq!(model.column_count(&root), 1);
        assert_eq!(model.row_count(&root), 3);
        assert_eq!(labels(&model, &root), ["Identities", "Mail", "Contacts"]);

        let identities = model.index(0, 0, &root);
        let handle = NodeId::from_handle(identities.internal_id());
        assert_eq!(handle, model.tree().root_id());
        assert!(!model.parent(&identities).is_valid());
    }

    #[test]
    fn test_mode_rows() {
        let model = ModeTreeModel::default();

        let identities = model.mode_index(ModeKind::Identities);
        let mail = model.mode_index(ModeKind::Mail);
        let contacts = model.mode_index(ModeKind::Contacts);

        assert_eq!(labels(&model, &identities), ["Dan1", "Dan2", "Dan3"]);
        assert_eq!(labels(&model, &mail), ["Inbox", "Drafts", "Pending", "Sent"]);
        assert_eq!(model.row_count(&contacts), 0);
        assert!(!model.has_children(&contacts));
    }

    #[test]
    fn test_leaf_rows_have_no_children() {
        let model = ModeTreeModel::default();
        let mail = model.mode_index(ModeKind::Mail);
        let drafts = model.index(1, 0, &mail);

        assert!(drafts.is_valid());
        assert_eq!(model.row_count(&drafts), 0);
        assert!(!model.index(0, 0, &drafts).is_valid());
        assert_eq!(model.parent(&drafts), mail);
    }

    #[test]
    fn test_out_of_bounds() {
        let model = ModeTreeModel::default();
        let root = ModelIndex::invalid();
        let mail = model.mode_index(ModeKind::Mail);

        assert!(!model.index(3, 0, &root).is_valid());
        assert!(!model.index(0, 1, &root).is_valid());
        assert!(!model.index(4, 0, &mail).is_valid());
        assert_eq!(model.row_count(&mail.sibling_at_column(1)), 0);
    }

    #[test]
    fn test_non_display_roles_are_empty() {
        let model = ModeTreeModel::default();
        let mail = model.mode_index(ModeKind::Mail);
        let inbox = model.index(0, 0, &mail);

        for role in ItemRole::STANDARD.into_iter().chain([ItemRole::User(0)]) {
            if role == ItemRole::Display {
                continue;
            }
            assert!(model.data(&mail, role).is_none());
            assert!(model.data(&inbox, role).is_none());
        }
        assert!(model.data(&ModelIndex::invalid(), ItemRole::Display).is_none());
    }

    #[test]
    fn test_flags_and_header() {
        let model = ModeTreeModel::default();
        let mail = model.mode_index(ModeKind::Mail);

        let flags = model.flags(&mail);
        assert!(flags.enabled && flags.selectable);
        assert!(!flags.editable);

        let header = model.header_data(0, Orientation::Horizontal, ItemRole::Display);
        assert_eq!(header.as_string(), Some("BitShares"));
        assert!(model.header_data(1, Orientation::Horizontal, ItemRole::Display).is_none());
        assert!(model.header_data(0, Orientation::Vertical, ItemRole::Display).is_none());
    }

    #[test]
    fn test_stale_handle_is_empty() {
        let model = ModeTreeModel::default();
        let bogus = ModelIndex::new(0, 0, u64::MAX);

        assert_eq!(model.row_count(&bogus), 0);
        assert!(model.data(&bogus, ItemRole::Display).is_none());
        assert!(!model.parent(&bogus).is_valid());
        assert!(!model.index(0, 0, &bogus).is_valid());
    }

    #[test]
    fn test_mode_index_missing_mode() {
        let layout = TreeLayout {
            header: "Mail only".into(),
            modes: vec![ModeLayout::new(ModeKind::Mail)],
        };
        let model = ModeTreeModel::from_layout(&layout).unwrap();

        assert!(!model.mode_index(ModeKind::Contacts).is_valid());
        assert_eq!(model.mode_index(ModeKind::Mail).row(), 0);
    }
}
