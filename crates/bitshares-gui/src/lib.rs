//! BitShares GUI navigation tree.
//!
//! The GUI's left-hand tree lists the application's modes (Identities,
//! Mail, Contacts) with their items underneath. This crate holds that tree
//! and presents it to tree views through the [`ItemModel`] contract:
//!
//! - **Domain**: placeholder identities, mailboxes and contacts
//! - **Tree**: an arena of nodes, one invisible root over one node per mode
//! - **Model**: [`ModeTreeModel`], which maps `(row, column, parent)`
//!   queries onto the tree
//! - **Config**: [`TreeLayout`], the TOML-loadable description of which
//!   modes appear and what they contain
//!
//! # Example
//!
//! ```
//! use bitshares_gui::{ItemModel, ModeKind, ModeTreeModel, ModelIndex};
//!
//! let model = ModeTreeModel::default();
//!
//! let identities = model.mode_index(ModeKind::Identities);
//! let names: Vec<String> = (0..model.row_count(&identities))
//!     .filter_map(|row| model.display_text(&model.index(row, 0, &identities)))
//!     .collect();
//! assert_eq!(names, ["Dan1", "Dan2", "Dan3"]);
//! ```
//!
//! # Lifecycle
//!
//! There is no global tree. The application builds one at startup, either
//! [`ModeTree::sample`] or from a layout file, and hands it to the model:
//!
//! ```no_run
//! use bitshares_gui::{ModeTree, ModeTreeModel, TreeLayout};
//!
//! # fn main() -> bitshares_gui::Result<()> {
//! let layout = TreeLayout::load("layout.toml")?;
//! let model = ModeTreeModel::new(ModeTree::new(&layout)?);
//! # let _ = model;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod model;
pub mod tree;

pub use config::{ModeLayout, TreeLayout};
pub use domain::{Contact, Identity, LeafItem, MailBox, ModeKind};
pub use error::{Error, Result};
pub use model::ModeTreeModel;
pub use tree::{ModeTree, NodeId, TreeNode};

pub use bitshares_gui_model::{
    ItemData, ItemFlags, ItemModel, ItemRole, ModelIndex, Orientation,
};
