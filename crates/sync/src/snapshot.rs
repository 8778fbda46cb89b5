//! Full member snapshot of an external chat.

use lotti_core::types::{ChatId, UserId};

use crate::error::SyncError;
use crate::source::{RosterFilter, RosterSource, PAGE_SIZE};

/// Fetch the ids of every current member of `chat_id`.
///
/// Pages through the Recent and Admins views in fixed-size pages, keeps only
/// kinds that translate to a member role, deduplicates by subject id (a
/// subject may appear in both views) and excludes the bot's own identity.
pub async fn fetch_member_ids(
    source: &dyn RosterSource,
    chat_id: ChatId,
    bot_id: UserId,
) -> Result<Vec<UserId>, SyncError> {
    let mut members: Vec<UserId> = Vec::new();

    for filter in [RosterFilter::Recent, RosterFilter::Admins] {
        let mut offset = 0;
        loop {
            let page = source
                .participants(chat_id, filter, offset, PAGE_SIZE)
                .await?;

            for member in &page {
                if member.kind.into_role().is_none() {
                    continue;
                }
                if member.user_id == bot_id || members.contains(&member.user_id) {
                    continue;
                }
                members.push(member.user_id);
            }

            if page.len() < PAGE_SIZE {
                break;
            }
            offset += page.len();
        }
    }

    Ok(members)
}
