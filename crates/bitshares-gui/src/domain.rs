//! Placeholder domain items shown under each mode.
//!
//! These are name-holding values only. Identities, mailboxes and contacts
//! get real storage once the wallet and mail backends exist; until then a
//! mode simply owns a list of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything that can appear as a leaf row under a mode.
pub trait LeafItem {
    /// The label shown for this item.
    fn name(&self) -> &str;
}

/// A user identity (used for email and chat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
}

impl Identity {
    /// Creates an identity with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LeafItem for Identity {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A group of email messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailBox {
    name: String,
}

impl MailBox {
    /// Incoming mail.
    pub const INBOX: &'static str = "Inbox";
    /// Unfinished, unsent mail.
    pub const DRAFTS: &'static str = "Drafts";
    /// Mail scheduled to be sent but not yet acknowledged by the recipient.
    pub const PENDING: &'static str = "Pending";
    /// Mail successfully delivered.
    pub const SENT: &'static str = "Sent";

    /// Creates a mailbox with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The four mailboxes every identity has, in display order.
    pub fn standard_boxes() -> Vec<MailBox> {
        [Self::INBOX, Self::DRAFTS, Self::PENDING, Self::SENT]
            .into_iter()
            .map(MailBox::new)
            .collect()
    }
}

impl LeafItem for MailBox {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Someone you communicate with over mail or chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
}

impl Contact {
    /// Creates a contact with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LeafItem for Contact {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The top-level sections of the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// The user's own identities.
    Identities,
    /// Mailboxes for the current identity.
    Mail,
    /// People the user communicates with.
    Contacts,
}

impl ModeKind {
    /// All modes, in their default display order.
    pub const ALL: [ModeKind; 3] = [ModeKind::Identities, ModeKind::Mail, ModeKind::Contacts];

    /// The label shown for this mode when the layout doesn't override it.
    pub fn default_label(self) -> &'static str {
        match self {
            ModeKind::Identities => "Identities",
            ModeKind::Mail => "Mail",
            ModeKind::Contacts => "Contacts",
        }
    }

    /// The key used for this mode in layout files.
    pub fn as_str(self) -> &'static str {
        match self {
            ModeKind::Identities => "identities",
            ModeKind::Mail => "mail",
            ModeKind::Contacts => "contacts",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_boxes_order() {
        let names: Vec<_> = MailBox::standard_boxes()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, ["Inbox", "Drafts", "Pending", "Sent"]);
    }

    #[test]
    fn test_mode_kind_labels() {
        assert_eq!(ModeKind::Identities.default_label(), "Identities");
        assert_eq!(ModeKind::Mail.default_label(), "Mail");
        assert_eq!(ModeKind::Contacts.default_label(), "Contacts");
        assert_eq!(ModeKind::Mail.to_string(), "mail");
    }

    #[test]
    fn test_leaf_names() {
        assert_eq!(Identity::new("Dan1").name(), "Dan1");
        assert_eq!(Contact::new("Alice").name(), "Alice");
    }
}
