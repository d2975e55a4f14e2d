//! Domain types representing household members.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed palette of display colors assigned to members. Purely a display
/// hint; the split engine never reads it.
pub const MEMBER_COLORS: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#f97316", "#06b6d4", "#84cc16",
];

/// Returns the palette color for the `index`-th member, cycling past the end.
pub fn default_member_color(index: usize) -> &'static str {
    MEMBER_COLORS[index % MEMBER_COLORS.len()]
}

/// A household member who can add and purchase items.
///
/// Members are created once and never mutated afterwards. There is no
/// delete operation for members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
