//! Seams to the external chat system.

use async_trait::async_trait;
use lotti_core::roster::ParticipantKind;
use lotti_core::types::{ChatId, UserId};

/// Page size for member-snapshot fetches.
pub const PAGE_SIZE: usize = 100;

/// The two filtered views of the external roster.
///
/// A subject may legitimately appear in both; the snapshot deduplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFilter {
    /// Recently active members.
    Recent,
    /// Administrators.
    Admins,
}

/// One member row as reported by the external roster.
#[derive(Debug, Clone)]
pub struct RosterMember {
    pub user_id: UserId,
    pub kind: ParticipantKind,
}

/// Read access to an external chat's roster and metadata.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// The chat title, used as the playlist title on auto-creation.
    async fn chat_title(&self, chat_id: ChatId) -> anyhow::Result<String>;

    /// One page of the member list under the given filter.
    ///
    /// A page shorter than `limit` marks the end of the view.
    async fn participants(
        &self,
        chat_id: ChatId,
        filter: RosterFilter,
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<Vec<RosterMember>>;
}

/// Fire-and-forget message delivery to a chat.
///
/// Failures are logged by callers and never roll back the triggering
/// operation.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()>;
}
