//! Node types stored in the mode tree arena.

use bitshares_gui_model::ItemData;
use slotmap::{new_key_type, SlotMap};

use crate::domain::{Contact, Identity, LeafItem, MailBox, ModeKind};

new_key_type! {
    /// Stable identifier of a node in a [`ModeTree`](super::ModeTree).
    ///
    /// Ids never change for the lifetime of the tree, which is what lets a
    /// view carry them around inside model indices.
    pub struct NodeId;
}

impl NodeId {
    /// Converts the id to the opaque handle stored in a `ModelIndex`.
    ///
    /// The handle can be converted back using [`NodeId::from_handle`].
    #[inline]
    pub fn as_handle(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Recovers a node id from an opaque handle.
    ///
    /// Note: this does not check that the node exists. Garbage handles
    /// produce ids that simply fail to resolve in the arena.
    #[inline]
    pub fn from_handle(handle: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(handle))
    }
}

/// Storage for all nodes of one tree.
pub type NodeArena = SlotMap<NodeId, Node>;

/// The query surface every non-leaf node answers.
///
/// Leaf items are not nodes: they are only reachable as rows of the mode
/// that owns them, through [`data`](TreeNode::data).
pub trait TreeNode {
    /// This node's own id.
    fn id(&self) -> NodeId;

    /// Display name of the node itself.
    fn name(&self) -> &str;

    /// The node this one hangs under, `None` for the root.
    fn parent(&self) -> Option<NodeId>;

    /// Number of rows under this node.
    fn child_count(&self) -> usize;

    /// The node shown at `row`, or `None` when that row is a leaf item.
    fn child(&self, row: usize) -> Option<NodeId>;

    /// Display data of the row-th row under this node.
    fn data(&self, nodes: &NodeArena, row: usize) -> ItemData;

    /// Position of `child` among this node's node children.
    fn find_row(&self, child: NodeId) -> Option<usize>;

    /// This node's row within its parent.
    ///
    /// Asks the parent every time; nothing is cached.
    fn row(&self, nodes: &NodeArena) -> Option<usize> {
        let parent = nodes.get(self.parent()?)?;
        parent.find_row(self.id())
    }
}

/// The invisible root. Owns the mode nodes in display order.
#[derive(Debug)]
pub struct RootNode {
    id: NodeId,
    children: Vec<NodeId>,
}

impl RootNode {
    pub(crate) const NAME: &'static str = "invisibleRoot";

    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Mode node ids in display order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl TreeNode for RootNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn parent(&self) -> Option<NodeId> {
        None
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, row: usize) -> Option<NodeId> {
        self.children.get(row).copied()
    }

    fn data(&self, nodes: &NodeArena, row: usize) -> ItemData {
        self.child(row)
            .and_then(|id| nodes.get(id))
            .map(|node| ItemData::from(node.name()))
            .unwrap_or_default()
    }

    fn find_row(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&id| id == child)
    }

    fn row(&self, _nodes: &NodeArena) -> Option<usize> {
        Some(0)
    }
}

/// Leaf items owned by a mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeItems {
    /// Rows of the identities mode.
    Identities(Vec<Identity>),
    /// Rows of the mail mode.
    MailBoxes(Vec<MailBox>),
    /// Rows of the contacts mode.
    Contacts(Vec<Contact>),
}

impl ModeItems {
    /// Builds the item list for `kind` from plain names.
    ///
    /// Mail with no names gets the standard mailboxes.
    pub fn from_names(kind: ModeKind, names: &[String]) -> Self {
        match kind {
            ModeKind::Identities => {
                Self::Identities(names.iter().map(Identity::new).collect())
            }
            ModeKind::Mail if names.is_empty() => Self::MailBoxes(MailBox::standard_boxes()),
            ModeKind::Mail => Self::MailBoxes(names.iter().map(MailBox::new).collect()),
            ModeKind::Contacts => Self::Contacts(names.iter().map(Contact::new).collect()),
        }
    }

    /// The mode kind these items belong to.
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Identities(_) => ModeKind::Identities,
            Self::MailBoxes(_) => ModeKind::Mail,
            Self::Contacts(_) => ModeKind::Contacts,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        match self {
            Self::Identities(items) => items.len(),
            Self::MailBoxes(items) => items.len(),
            Self::Contacts(items) => items.len(),
        }
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the item at `row`.
    pub fn name_at(&self, row: usize) -> Option<&str> {
        match self {
            Self::Identities(items) => items.get(row).map(LeafItem::name),
            Self::MailBoxes(items) => items.get(row).map(LeafItem::name),
            Self::Contacts(items) => items.get(row).map(LeafItem::name),
        }
    }

    /// Item names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len()).filter_map(move |row| self.name_at(row))
    }
}

/// A top-level section of the GUI. Always a direct child of the root.
#[derive(Debug)]
pub struct ModeNode {
    id: NodeId,
    parent: NodeId,
    label: String,
    items: ModeItems,
}

impl ModeNode {
    pub(crate) fn new(
        id: NodeId,
        parent: NodeId,
        label: impl Into<String>,
        items: ModeItems,
    ) -> Self {
        Self {
            id,
            parent,
            label: label.into(),
            items,
        }
    }

    /// Which mode this is.
    pub fn kind(&self) -> ModeKind {
        self.items.kind()
    }

    /// The mode's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The leaf items shown under this mode.
    pub fn items(&self) -> &ModeItems {
        &self.items
    }
}

impl TreeNode for ModeNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.label
    }

    fn parent(&self) -> Option<NodeId> {
        Some(self.parent)
    }

    fn child_count(&self) -> usize {
        self.items.len()
    }

    fn child(&self, _row: usize) -> Option<NodeId> {
        // Rows under a mode are leaf items, never nodes
        None
    }

    fn data(&self, _nodes: &NodeArena, row: usize) -> ItemData {
        self.items.name_at(row).map(ItemData::from).unwrap_or_default()
    }

    fn find_row(&self, _child: NodeId) -> Option<usize> {
        None
    }
}

/// A node in the arena.
#[derive(Debug)]
pub enum Node {
    /// The invisible root.
    Root(RootNode),
    /// A GUI mode.
    Mode(ModeNode),
}

impl Node {
    /// Returns the mode node, if this is one.
    pub fn as_mode(&self) -> Option<&ModeNode> {
        match self {
            Node::Mode(mode) => Some(mode),
            Node::Root(_) => None,
        }
    }

    fn inner(&self) -> &dyn TreeNode {
        match self {
            Node::Root(root) => root,
            Node::Mode(mode) => mode,
        }
    }
}

impl TreeNode for Node {
    fn id(&self) -> NodeId {
        self.inner().id()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn parent(&self) -> Option<NodeId> {
        self.inner().parent()
    }

    fn child_count(&self) -> usize {
        self.inner().child_count()
    }

    fn child(&self, row: usize) -> Option<NodeId> {
        self.inner().child(row)
    }

    fn data(&self, nodes: &NodeArena, row: usize) -> ItemData {
        self.inner().data(nodes, row)
    }

    fn find_row(&self, child: NodeId) -> Option<usize> {
        self.inner().find_row(child)
    }

    fn row(&self, nodes: &NodeArena) -> Option<usize> {
        self.inner().row(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with_mail() -> (NodeArena, NodeId, NodeId) {
        let mut nodes = NodeArena::with_key();
        let root = nodes.insert_with_key(|id| Node::Root(RootNode::new(id)));
        let items = ModeItems::from_names(ModeKind::Mail, &[]);
        let mail = nodes.insert_with_key(|id| Node::Mode(ModeNode::new(id, root, "Mail", items)));
        if let Some(Node::Root(r)) = nodes.get_mut(root) {
            r.push_child(mail);
        }
        (nodes, root, mail)
    }

    #[test]
    fn test_handle_round_trip() {
        let (_nodes, _root, mail) = arena_with_mail();
        assert_eq!(NodeId::from_handle(mail.as_handle()), mail);
    }

    #[test]
    fn test_root_queries() {
        let (nodes, root, mail) = arena_with_mail();
        let root_node = &nodes[root];

        assert_eq!(root_node.name(), "invisibleRoot");
        assert_eq!(root_node.parent(), None);
        assert_eq!(root_node.row(&nodes), Some(0));
        assert_eq!(root_node.child_count(), 1);
        assert_eq!(root_node.child(0), Some(mail));
        assert_eq!(root_node.child(1), None);
        assert_eq!(root_node.data(&nodes, 0).as_string(), Some("Mail"));
        assert_eq!(root_node.find_row(mail), Some(0));
    }

    #[test]
    fn test_mode_queries() {
        let (nodes, root, mail) = arena_with_mail();
        let mode = &nodes[mail];

        assert_eq!(mode.parent(), Some(root));
        assert_eq!(mode.row(&nodes), Some(0));
        assert_eq!(mode.child_count(), 4);
        assert_eq!(mode.child(0), None);
        assert_eq!(mode.data(&nodes, 3).as_string(), Some("Sent"));
        assert!(mode.data(&nodes, 4).is_none());
        assert_eq!(mode.find_row(root), None);
        assert_eq!(mode.as_mode().map(ModeNode::kind), Some(ModeKind::Mail));
    }

    #[test]
    fn test_mode_items_from_names() {
        let names = vec!["Work".to_string()];
        let items = ModeItems::from_names(ModeKind::Mail, &names);
        assert_eq!(items.names().collect::<Vec<_>>(), ["Work"]);

        let contacts = ModeItems::from_names(ModeKind::Contacts, &[]);
        assert!(contacts.is_empty());
        assert_eq!(contacts.kind(), ModeKind::Contacts);
    }
}
