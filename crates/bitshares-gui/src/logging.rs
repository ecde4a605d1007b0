//! Logging and debugging facilities.
//!
//! This module provides:
//! - Target names for filtering this crate's `tracing` output
//! - [`TreeDebug`], a text rendering of any [`ItemModel`]
//!
//! # Tracing Integration
//!
//! The crate logs through `tracing` and never installs a subscriber itself.
//! Applications install one at startup:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("bitshares_gui::model=trace")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! `TreeDebug` walks a model using only `row_count`, `index` and `data`,
//! so its output is exactly what a tree view would see:
//!
//! ```ignore
//! use bitshares_gui::{ModeTreeModel, logging::TreeDebug};
//!
//! let model = ModeTreeModel::default();
//! println!("{}", TreeDebug::new().format(&model));
//! ```

use std::fmt::{self, Write as FmtWrite};

use bitshares_gui_model::{ItemModel, ItemRole, ModelIndex, Orientation};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Tree construction.
    pub const TREE: &str = "bitshares_gui::tree";
    /// Index resolution in the item model.
    pub const MODEL: &str = "bitshares_gui::model";
    /// Layout loading.
    pub const CONFIG: &str = "bitshares_gui::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to prefix each label with its row.
    pub show_rows: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_rows: false,
            max_depth: None,
        }
    }
}

/// Debug utility for rendering an item model as text.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole model into a string.
    pub fn format<M: ItemModel + ?Sized>(&self, model: &M) -> String {
        let mut output = String::new();
        self.write_model(model, &mut output).expect("write to String");
        output
    }

    /// Write the whole model into any formatter sink.
    pub fn write_model<M, W>(&self, model: &M, out: &mut W) -> fmt::Result
    where
        M: ItemModel + ?Sized,
        W: FmtWrite,
    {
        let root = ModelIndex::invalid();
        if self.options.style == TreeStyle::Compact {
            return self.write_compact(model, &root, 0, out);
        }

        let title = model
            .header_data(0, Orientation::Horizontal, ItemRole::Display)
            .into_string()
            .unwrap_or_else(|| "(root)".to_string());
        writeln!(out, "{title}")?;

        let mut prefix = String::new();
        self.write_children(model, &root, 0, &mut prefix, out)
    }

    fn write_children<M, W>(
        &self,
        model: &M,
        parent: &ModelIndex,
        depth: usize,
        prefix: &mut String,
        out: &mut W,
    ) -> fmt::Result
    where
        M: ItemModel + ?Sized,
        W: FmtWrite,
    {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let (branch, last_branch, pipe, gap) = match self.options.style {
            TreeStyle::Ascii => ("|-- ", "`-- ", "|   ", "    "),
            _ => ("├── ", "└── ", "│   ", "    "),
        };

        let rows = model.row_count(parent);
        for row in 0..rows {
            let index = model.index(row, 0, parent);
            let is_last = row + 1 == rows;

            out.write_str(prefix)?;
            out.write_str(if is_last { last_branch } else { branch })?;
            self.write_label(model, &index, out)?;
            out.write_char('\n')?;

            if model.has_children(&index) {
                let len = prefix.len();
                prefix.push_str(if is_last { gap } else { pipe });
                self.write_children(model, &index, depth + 1, prefix, out)?;
                prefix.truncate(len);
            }
        }
        Ok(())
    }

    fn write_compact<M, W>(
        &self,
        model: &M,
        parent: &ModelIndex,
        depth: usize,
        out: &mut W,
    ) -> fmt::Result
    where
        M: ItemModel + ?Sized,
        W: FmtWrite,
    {
        let rows = model.row_count(parent);
        for row in 0..rows {
            if row > 0 {
                out.write_str(", ")?;
            }
            let index = model.index(row, 0, parent);
            self.write_label(model, &index, out)?;

            let within_depth = self.options.max_depth.is_none_or(|max| depth < max);
            if within_depth && model.has_children(&index) {
                out.write_char('(')?;
                self.write_compact(model, &index, depth + 1, out)?;
                out.write_char(')')?;
            }
        }
        Ok(())
    }

    fn write_label<M, W>(&self, model: &M, index: &ModelIndex, out: &mut W) -> fmt::Result
    where
        M: ItemModel + ?Sized,
        W: FmtWrite,
    {
        if self.options.show_rows {
            write!(out, "[{}] ", index.row())?;
        }
        match model.display_text(index) {
            Some(text) => out.write_str(&text),
            None => out.write_str("(unnamed)"),
        }
    }
}
