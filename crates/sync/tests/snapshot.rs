//! Tests for the paginated member snapshot. No database involved.

use async_trait::async_trait;
use lotti_core::roster::ParticipantKind;
use lotti_core::types::{ChatId, UserId};
use lotti_sync::snapshot::fetch_member_ids;
use lotti_sync::{RosterFilter, RosterMember, RosterSource};

struct PagedChat {
    recent: Vec<RosterMember>,
    admins: Vec<RosterMember>,
}

#[async_trait]
impl RosterSource for PagedChat {
    async fn chat_title(&self, _chat_id: ChatId) -> anyhow::Result<String> {
        Ok("Paged".to_string())
    }

    async fn participants(
        &self,
        _chat_id: ChatId,
        filter: RosterFilter,
        offset: usize,
        limit: usize,
    ) -> anyhow::Result<Vec<RosterMember>> {
        let view = match filter {
            RosterFilter::Recent => &self.recent,
            RosterFilter::Admins => &self.admins,
        };
        Ok(view.iter().skip(offset).take(limit).cloned().collect())
    }
}

fn members(range: std::ops::Range<i64>, kind: ParticipantKind) -> Vec<RosterMember> {
    range
        .map(|user_id| RosterMember { user_id, kind })
        .collect()
}

#[tokio::test]
async fn test_snapshot_pages_through_the_whole_view() {
    // 250 recent members forces three pages (100 + 100 + 50).
    let source = PagedChat {
        recent: members(1..251, ParticipantKind::Member),
        admins: Vec::new(),
    };

    let ids = fetch_member_ids(&source, -1, 9999).await.unwrap();
    assert_eq!(ids.len(), 250);
    assert_eq!(ids.first(), Some(&1));
    assert_eq!(ids.last(), Some(&250));
}

#[tokio::test]
async fn test_snapshot_deduplicates_across_views() {
    // Admins also show up in the recent view.
    let mut recent = members(1..6, ParticipantKind::Member);
    recent.push(RosterMember {
        user_id: 1,
        kind: ParticipantKind::Admin,
    });
    let source = PagedChat {
        recent,
        admins: vec![
            RosterMember {
                user_id: 1,
                kind: ParticipantKind::Admin,
            },
            RosterMember {
                user_id: 42,
                kind: ParticipantKind::Creator,
            },
        ],
    };

    let ids = fetch_member_ids(&source, -1, 9999).await.unwrap();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 42]);
}

#[tokio::test]
async fn test_snapshot_excludes_departed_and_bot() {
    const BOT: UserId = 500;
    let source = PagedChat {
        recent: vec![
            RosterMember {
                user_id: 1,
                kind: ParticipantKind::Member,
            },
            RosterMember {
                user_id: 2,
                kind: ParticipantKind::Left,
            },
            RosterMember {
                user_id: 3,
                kind: ParticipantKind::Banned,
            },
            RosterMember {
                user_id: BOT,
                kind: ParticipantKind::SelfMember,
            },
        ],
        admins: Vec::new(),
    };

    let ids = fetch_member_ids(&source, -1, BOT).await.unwrap();
    assert_eq!(ids, vec![1]);
}
