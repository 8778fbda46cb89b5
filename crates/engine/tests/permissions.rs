//! Integration tests for the permission store.

use assert_matches::assert_matches;
use lotti_core::error::CoreError;
use lotti_core::roles::Role;
use lotti_core::roster::GroupMember;
use lotti_db::models::playlist::{CreatePlaylist, KIND_GROUP};
use lotti_db::repositories::{GrantRepo, PlaylistRepo, UserRepo};
use lotti_engine::{permissions, EngineError};
use sqlx::PgPool;

async fn seed_playlist(pool: &PgPool, id: &str) {
    let mut tx = pool.begin().await.unwrap();
    PlaylistRepo::create_inner(
        &mut tx,
        &CreatePlaylist {
            id: id.to_string(),
            title: "Mirrored".to_string(),
            kind: KIND_GROUP.to_string(),
        },
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_creates_user_row_lazily(pool: PgPool) {
    seed_playlist(&pool, "p1").await;

    permissions::add(&pool, Role::Viewer, "p1", 77).await.unwrap();

    let user = UserRepo::find_by_id(&pool, 77).await.unwrap();
    assert!(user.is_some());

    let grant = GrantRepo::find(&pool, "p1", 77).await.unwrap().unwrap();
    assert_eq!(grant.role, "viewer");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_duplicate_grant_conflicts(pool: PgPool) {
    seed_playlist(&pool, "p1").await;

    permissions::add(&pool, Role::Viewer, "p1", 77).await.unwrap();
    let err = permissions::add(&pool, Role::Moderator, "p1", 77)
        .await
        .unwrap_err();

    assert_matches!(err, EngineError::Core(CoreError::AlreadyExists(_)));

    // The original grant is untouched.
    let grant = GrantRepo::find(&pool, "p1", 77).await.unwrap().unwrap();
    assert_eq!(grant.role, "viewer");
}

// ---------------------------------------------------------------------------
// add_group
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_group_seeds_whole_roster(pool: PgPool) {
    seed_playlist(&pool, "p1").await;

    let members = vec![
        GroupMember { user_id: 1, role: Role::Owner },
        GroupMember { user_id: 2, role: Role::Viewer },
        GroupMember { user_id: 3, role: Role::Viewer },
    ];
    permissions::add_group(&pool, "p1", &members).await.unwrap();

    for member in &members {
        let grant = GrantRepo::find(&pool, "p1", member.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(grant.role, member.role.as_str());
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_seeded_members_see_the_playlist_with_their_role(pool: PgPool) {
    seed_playlist(&pool, "p1").await;

    let members = vec![
        GroupMember { user_id: 1, role: Role::Viewer },
        GroupMember { user_id: 2, role: Role::Moderator },
    ];
    permissions::add_group(&pool, "p1", &members).await.unwrap();

    let listed = lotti_engine::playlists::get_all(&pool, 1).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "p1");
    assert_eq!(listed[0].role, "viewer");

    let listed = lotti_engine::playlists::get_all(&pool, 2).await.unwrap();
    assert_eq!(listed[0].role, "moderator");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_group_is_atomic(pool: PgPool) {
    seed_playlist(&pool, "p1").await;
    permissions::add(&pool, Role::Viewer, "p1", 2).await.unwrap();

    // Member 2 already holds a grant; the whole seeding must roll back.
    let members = vec![
        GroupMember { user_id: 1, role: Role::Owner },
        GroupMember { user_id: 2, role: Role::Viewer },
    ];
    let err = permissions::add_group(&pool, "p1", &members).await.unwrap_err();
    assert_matches!(err, EngineError::Core(CoreError::AlreadyExists(_)));

    let grant = GrantRepo::find(&pool, "p1", 1).await.unwrap();
    assert!(grant.is_none(), "seeding must not be partially applied");
}

// ---------------------------------------------------------------------------
// remove / edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_remove_absent_grant_is_not_an_error(pool: PgPool) {
    seed_playlist(&pool, "p1").await;
    permissions::remove(&pool, "p1", 404).await.unwrap();
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_edit_updates_role(pool: PgPool) {
    seed_playlist(&pool, "p1").await;
    permissions::add(&pool, Role::Viewer, "p1", 5).await.unwrap();

    permissions::edit(&pool, Role::Moderator, "p1", 5).await.unwrap();

    let grant = GrantRepo::find(&pool, "p1", 5).await.unwrap().unwrap();
    assert_eq!(grant.role, "moderator");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_edit_missing_grant_fails(pool: PgPool) {
    seed_playlist(&pool, "p1").await;

    let err = permissions::edit(&pool, Role::Moderator, "p1", 5)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        EngineError::Core(CoreError::NotFound { entity: "grant", .. })
    );
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_resolves_group_marker(pool: PgPool) {
    seed_playlist(&pool, "p1").await;
    permissions::add(&pool, Role::Group, "p1", -200).await.unwrap();

    let playlist_id = permissions::get(&pool, -200, Role::Group).await.unwrap();
    assert_eq!(playlist_id, "p1");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_without_marker_fails(pool: PgPool) {
    let err = permissions::get(&pool, -200, Role::Group).await.unwrap_err();
    assert_matches!(err, EngineError::Core(CoreError::NotFound { .. }));
}
