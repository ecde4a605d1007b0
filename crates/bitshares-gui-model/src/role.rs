//! Data roles for item models.
//!
//! Roles define what aspect of an item is being requested. Each item can
//! answer for several roles; views mostly ask for [`ItemRole::Display`].

/// Standard roles for accessing different aspects of item data.
///
/// When querying data from a model via `ItemModel::data()`, the role
/// specifies what information is being requested.
///
/// # Example
///
/// ```ignore
/// use bitshares_gui_model::{ItemModel, ItemRole};
///
/// let text = model.data(&index, ItemRole::Display);
/// let custom = model.data(&index, ItemRole::User(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display (the item label).
    Display,
    /// Icon or decoration to show.
    Decoration,
    /// Value for editing (may differ from display text).
    Edit,
    /// Tooltip text shown on hover.
    ToolTip,
    /// Text shown in the status bar when the item is selected.
    StatusTip,
    /// Extended "What's This?" help text.
    WhatsThis,
    /// Custom font for this item.
    Font,
    /// Text alignment for this item.
    TextAlignment,
    /// Background color for the item.
    BackgroundColor,
    /// Foreground (text) color for the item.
    ForegroundColor,
    /// Check state for checkable items.
    CheckState,
    /// Size hint for the item.
    SizeHint,
    /// Accessible name for screen readers.
    AccessibleText,
    /// Accessible description for screen readers.
    AccessibleDescription,
    /// Application-specific role. `User(0)` has value 256.
    User(u32),
}

impl ItemRole {
    /// Every standard (non-user) role, in value order.
    pub const STANDARD: [ItemRole; 14] = [
        ItemRole::Display,
        ItemRole::Decoration,
        ItemRole::Edit,
        ItemRole::ToolTip,
        ItemRole::StatusTip,
        ItemRole::WhatsThis,
        ItemRole::Font,
        ItemRole::TextAlignment,
        ItemRole::BackgroundColor,
        ItemRole::ForegroundColor,
        ItemRole::CheckState,
        ItemRole::SizeHint,
        ItemRole::AccessibleText,
        ItemRole::AccessibleDescription,
    ];

    /// Returns `true` if this is a user-defined role.
    #[inline]
    pub fn is_user_role(&self) -> bool {
        matches!(self, ItemRole::User(_))
    }

    /// Returns the numeric value of this role.
    ///
    /// Standard roles have fixed values 0-13. User roles have values >= 256.
    pub fn value(&self) -> u32 {
        match self {
            ItemRole::Display => 0,
            ItemRole::Decoration => 1,
            ItemRole::Edit => 2,
            ItemRole::ToolTip => 3,
            ItemRole::StatusTip => 4,
            ItemRole::WhatsThis => 5,
            ItemRole::Font => 6,
            ItemRole::TextAlignment => 7,
            ItemRole::BackgroundColor => 8,
            ItemRole::ForegroundColor => 9,
            ItemRole::CheckState => 10,
            ItemRole::SizeHint => 11,
            ItemRole::AccessibleText => 12,
            ItemRole::AccessibleDescription => 13,
            ItemRole::User(n) => 256 + n,
        }
    }

    /// Creates an ItemRole from a numeric value.
    ///
    /// Returns `None` for reserved but undefined role values (14-255).
    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            0..=13 => Some(Self::STANDARD[value as usize]),
            14..=255 => None,
            n => Some(ItemRole::User(n - 256)),
        }
    }
}

/// Type-erased container for item data.
///
/// The mode tree only ever produces labels, so the variants cover plain
/// values rather than rendering resources.
///
/// # Example
///
/// ```
/// use bitshares_gui_model::ItemData;
///
/// let data = ItemData::from("Inbox");
/// assert_eq!(data.as_string(), Some("Inbox"));
/// assert!(ItemData::None.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data (for Display, ToolTip, etc.).
    String(String),
    /// Integer data.
    Int(i64),
    /// Boolean data.
    Bool(bool),
}

impl ItemData {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the data as an owned string.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemData::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the data as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ItemData::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<i32> for ItemData {
    fn from(n: i32) -> Self {
        ItemData::Int(n as i64)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

impl From<Option<String>> for ItemData {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => ItemData::String(s),
            None => ItemData::None,
        }
    }
}
