//! The playlist role model.
//!
//! Three tiers apply to human members (viewer < moderator < owner); the
//! fourth, `group`, is the reserved marker role whose grant maps an external
//! chat id back to its playlist.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a subject holds on a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Moderator,
    Owner,
    /// Reserved marker: the grant's subject slot holds a chat id.
    Group,
}

impl Role {
    /// The string form stored in the `permissions.role` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Moderator => "moderator",
            Role::Owner => "owner",
            Role::Group => "group",
        }
    }

    /// Parse the stored string form.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "viewer" => Some(Role::Viewer),
            "moderator" => Some(Role::Moderator),
            "owner" => Some(Role::Owner),
            "group" => Some(Role::Group),
            _ => None,
        }
    }

    /// Whether this is one of the three roles a human member can hold.
    ///
    /// Group-marker grants must never make a playlist visible to the chat-id
    /// "subject" that carries them.
    pub fn is_member(self) -> bool {
        matches!(self, Role::Viewer | Role::Moderator | Role::Owner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a role may approve, decline or unapprove tracks.
pub fn can_moderate(role: Role) -> bool {
    matches!(role, Role::Moderator | Role::Owner)
}
