//! The mode tree: an invisible root over one node per GUI mode.
//!
//! All nodes live in a single slotmap arena owned by the [`ModeTree`].
//! Nodes refer to each other by [`NodeId`], and the same ids double as
//! the opaque handles stored in model indices. Nothing is ever removed,
//! so an id handed to a view stays valid for as long as the tree does.
//!
//! ```text
//! invisibleRoot
//! ├── Identities   (Dan1, Dan2, Dan3)
//! ├── Mail         (Inbox, Drafts, Pending, Sent)
//! └── Contacts     ()
//! ```

mod node;

pub use node::{ModeItems, ModeNode, Node, NodeArena, NodeId, RootNode, TreeNode};

use bitshares_gui_model::ItemData;

use crate::config::TreeLayout;
use crate::domain::ModeKind;
use crate::error::Result;
use crate::logging::targets;

/// An immutable tree of GUI modes.
#[derive(Debug)]
pub struct ModeTree {
    nodes: NodeArena,
    root: NodeId,
    header: String,
}

impl ModeTree {
    /// Builds a tree from a layout, validating it first.
    pub fn new(layout: &TreeLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self::build(layout))
    }

    /// The tree the GUI ships with: three identities, the standard
    /// mailboxes and no contacts.
    pub fn sample() -> Self {
        Self::build(&TreeLayout::default())
    }

    fn build(layout: &TreeLayout) -> Self {
        let mut nodes = NodeArena::with_key();
        let root = nodes.insert_with_key(|id| Node::Root(RootNode::new(id)));

        let mut mode_ids = Vec::with_capacity(layout.modes.len());
        for mode in &layout.modes {
            let items = ModeItems::from_names(mode.kind, &mode.items);
            let label = mode.effective_label().to_string();
            let id = nodes.insert_with_key(|id| Node::Mode(ModeNode::new(id, root, label, items)));
            mode_ids.push(id);
        }

        if let Some(Node::Root(root_node)) = nodes.get_mut(root) {
            for id in mode_ids {
                root_node.push_child(id);
            }
        }

        tracing::debug!(
            target: targets::TREE,
            modes = layout.modes.len(),
            "built mode tree"
        );

        Self {
            nodes,
            root,
            header: layout.header.clone(),
        }
    }

    /// Id of the invisible root.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// The invisible root.
    pub fn root(&self) -> &RootNode {
        match &self.nodes[self.root] {
            Node::Root(root) => root,
            Node::Mode(_) => unreachable!("root id always refers to the root node"),
        }
    }

    /// Column header title.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The arena backing this tree.
    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Looks up a node from an opaque index handle.
    pub fn node_from_handle(&self, handle: u64) -> Option<&Node> {
        self.node(NodeId::from_handle(handle))
    }

    /// Number of rows under a node. Unknown ids have none.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, TreeNode::child_count)
    }

    /// The node at `row` under `parent`, if that row is a node.
    pub fn resolve_child(&self, parent: NodeId, row: usize) -> Option<NodeId> {
        self.node(parent)?.child(row)
    }

    /// The node a node hangs under.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent()
    }

    /// A node's row within its parent. The root reports row 0.
    pub fn row_of(&self, id: NodeId) -> Option<usize> {
        self.node(id)?.row(&self.nodes)
    }

    /// Display data of the `row`-th row under `id`.
    pub fn data(&self, id: NodeId, row: usize) -> ItemData {
        self.node(id)
            .map(|node| node.data(&self.nodes, row))
            .unwrap_or_default()
    }

    /// Mode nodes in display order.
    pub fn modes(&self) -> impl Iterator<Item = &ModeNode> + '_ {
        self.root()
            .children()
            .iter()
            .filter_map(|&id| self.node(id).and_then(Node::as_mode))
    }

    /// Number of modes.
    pub fn mode_count(&self) -> usize {
        self.root().child_count()
    }

    /// Finds the node for a mode kind, if the layout included it.
    pub fn mode(&self, kind: ModeKind) -> Option<&ModeNode> {
        self.modes().find(|mode| mode.kind() == kind)
    }
}

impl Default for ModeTree {
    fn default() -> Self {
        Self::sample()
    }
}
