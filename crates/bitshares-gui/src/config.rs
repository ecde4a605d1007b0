//! Tree layout configuration.
//!
//! A [`TreeLayout`] says which modes appear, in which order, under which
//! labels, and which placeholder items they start with. The default layout
//! is the sample data the GUI ships with; a TOML file can replace it.
//!
//! ```toml
//! header = "BitShares"
//!
//! [[modes]]
//! kind = "identities"
//! items = ["Dan1", "Dan2", "Dan3"]
//!
//! [[modes]]
//! kind = "mail"          # no items: the standard mailboxes
//!
//! [[modes]]
//! kind = "contacts"
//! label = "People"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ModeKind;
use crate::error::{Error, Result};
use crate::logging::targets;

/// Default title for the tree's single column header.
pub const DEFAULT_HEADER: &str = "BitShares";

/// Layout of a single mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeLayout {
    /// Which mode this is.
    pub kind: ModeKind,
    /// Label override. `None` uses [`ModeKind::default_label`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Names of the leaf items, in display order.
    ///
    /// For [`ModeKind::Mail`] an empty list means the standard mailboxes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl ModeLayout {
    /// Creates a mode layout with the default label and no items.
    pub fn new(kind: ModeKind) -> Self {
        Self {
            kind,
            label: None,
            items: Vec::new(),
        }
    }

    /// Sets the label override.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the leaf item names.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// The label this mode is displayed under.
    pub fn effective_label(&self) -> &str {
        self.label
            .as_deref()
            .unwrap_or_else(|| self.kind.default_label())
    }
}

/// Which modes the tree shows and what they contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeLayout {
    /// Column header title.
    pub header: String,
    /// Modes in display order.
    pub modes: Vec<ModeLayout>,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            modes: vec![
                ModeLayout::new(ModeKind::Identities).with_items(["Dan1", "Dan2", "Dan3"]),
                ModeLayout::new(ModeKind::Mail),
                ModeLayout::new(ModeKind::Contacts),
            ],
        }
    }
}

impl TreeLayout {
    /// Parses and validates a layout from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let layout: TreeLayout = toml::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads, parses and validates a layout file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let layout = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            modes = layout.modes.len(),
            "loaded tree layout"
        );
        Ok(layout)
    }

    /// Serializes the layout back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks the layout for problems the tree can't represent.
    ///
    /// Each mode kind may appear at most once, and labels and item names
    /// must be non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for mode in &self.modes {
            if !seen.insert(mode.kind) {
                return Err(Error::DuplicateMode { kind: mode.kind });
            }
            if mode.effective_label().trim().is_empty() {
                return Err(Error::EmptyLabel { kind: mode.kind });
            }
            if let Some(position) = mode.items.iter().position(|i| i.trim().is_empty()) {
                return Err(Error::EmptyItemName {
                    kind: mode.kind,
                    position,
                });
            }
        }
        Ok(())
    }

    /// Returns the layout for a mode, if it is present.
    pub fn mode(&self, kind: ModeKind) -> Option<&ModeLayout> {
        self.modes.iter().find(|m| m.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = TreeLayout::default();
        assert_eq!(layout.header, "BitShares");
        let kinds: Vec<_> = layout.modes.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, ModeKind::ALL);

        let identities = layout.mode(ModeKind::Identities).unwrap();
        assert_eq!(identities.items, ["Dan1", "Dan2", "Dan3"]);
        assert!(layout.mode(ModeKind::Mail).unwrap().items.is_empty());
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_parse_with_overrides() {
        let layout = TreeLayout::from_toml_str(
            r#"
            header = "Wallet"

            [[modes]]
            kind = "contacts"
            label = "People"
            items = ["Alice", "Bob"]

            [[modes]]
            kind = "mail"
            "#,
        )
        .unwrap();

        assert_eq!(layout.header, "Wallet");
        assert_eq!(layout.modes.len(), 2);
        assert_eq!(layout.modes[0].effective_label(), "People");
        assert_eq!(layout.modes[0].items, ["Alice", "Bob"]);
        assert_eq!(layout.modes[1].effective_label(), "Mail");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let layout = TreeLayout::from_toml_str("").unwrap();
        assert_eq!(layout, TreeLayout::default());
    }

    #[test]
    fn test_duplicate_mode_rejected() {
        let err = TreeLayout::from_toml_str(
            r#"
            [[modes]]
            kind = "mail"

            [[modes]]
            kind = "mail"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateMode { kind: ModeKind::Mail }));
    }

    #[test]
    fn test_empty_names_rejected() {
        let layout = TreeLayout {
            header: DEFAULT_HEADER.into(),
            modes: vec![ModeLayout::new(ModeKind::Identities).with_items(["Dan1", " "])],
        };
        assert!(matches!(
            layout.validate(),
            Err(Error::EmptyItemName {
                kind: ModeKind::Identities,
                position: 1
            })
        ));

        let layout = TreeLayout {
            header: DEFAULT_HEADER.into(),
            modes: vec![ModeLayout::new(ModeKind::Mail).with_label("")],
        };
        assert!(matches!(
            layout.validate(),
            Err(Error::EmptyLabel {
                kind: ModeKind::Mail
            })
        ));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = TreeLayout::from_toml_str("[[modes]]\nkind = \"calendar\"\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_toml_string_reparses() {
        let layout = TreeLayout::default();
        let text = layout.to_toml_string().unwrap();
        assert!(text.contains("identities"));
        assert_eq!(TreeLayout::from_toml_str(&text).unwrap(), layout);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TreeLayout::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "[[modes]]\nkind = \"identities\"\nitems = [\"Eve\"]\n").unwrap();

        let layout = TreeLayout::load(&path).unwrap();
        assert_eq!(layout.modes.len(), 1);
        assert_eq!(layout.modes[0].items, ["Eve"]);
    }
}
