//! Translation of external chat-roster events into the internal role model.

use crate::roles::Role;
use crate::types::{ChatId, UserId};

/// Concrete participant kinds reported by the external chat source, across
/// both chat flavors it distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    /// Plain member.
    Member,
    /// The reporting identity itself, listed as a plain member.
    SelfMember,
    /// Administrator.
    Admin,
    /// Chat creator.
    Creator,
    /// Left the chat.
    Left,
    /// Removed from the chat.
    Banned,
}

impl ParticipantKind {
    /// Collapse the external kind into the internal three-tier role.
    ///
    /// `None` means "not a member".
    pub fn into_role(self) -> Option<Role> {
        match self {
            ParticipantKind::Member | ParticipantKind::SelfMember => Some(Role::Viewer),
            ParticipantKind::Admin => Some(Role::Moderator),
            ParticipantKind::Creator => Some(Role::Owner),
            ParticipantKind::Left | ParticipantKind::Banned => None,
        }
    }
}

/// A single membership-change event, already translated into internal roles.
///
/// `prev_role` / `new_role` of `None` mean "not a member".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDelta {
    pub chat_id: ChatId,
    /// The member whose role changed.
    pub user_id: UserId,
    /// The member who performed the change.
    pub actor_id: UserId,
    pub prev_role: Option<Role>,
    pub new_role: Option<Role>,
}

/// One entry of an initial roster seeding batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub user_id: UserId,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_translation() {
        assert_eq!(ParticipantKind::Member.into_role(), Some(Role::Viewer));
        assert_eq!(ParticipantKind::SelfMember.into_role(), Some(Role::Viewer));
        assert_eq!(ParticipantKind::Admin.into_role(), Some(Role::Moderator));
        assert_eq!(ParticipantKind::Creator.into_role(), Some(Role::Owner));
        assert_eq!(ParticipantKind::Left.into_role(), None);
        assert_eq!(ParticipantKind::Banned.into_role(), None);
    }
}
