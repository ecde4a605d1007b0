//! Model/View contract for the BitShares GUI.
//!
//! Views never touch application data directly. They hold a model behind
//! the [`ItemModel`] trait and navigate it with [`ModelIndex`] values,
//! asking for [`ItemData`] under an [`ItemRole`].
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies an item's position in a model
//! - `ItemRole`: Specifies what aspect of the item to access
//! - `ItemData`: Container for item data
//! - `ItemFlags`: What a view may do with an item
//! - `ItemModel`: The trait that models implement
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐   row_count / index / parent   ┌─────────────┐
//! │    Model    │<───────────────────────────────│    View     │
//! │ (ItemModel) │───────────────────────────────>│             │
//! └─────────────┘   ModelIndex / ItemData        └─────────────┘
//! ```
//!
//! A `ModelIndex` carries `(row, column)` plus an opaque handle chosen by
//! the model. The view treats the handle as a token and hands it back
//! unchanged; only the model interprets it.

mod index;
mod role;
mod traits;

pub use index::ModelIndex;
pub use role::{ItemData, ItemRole};
pub use traits::{ItemFlags, ItemModel, Orientation};
