//! The lazily-populated track catalog.
//!
//! Tracks are stored on first reference with whatever metadata the catalog
//! enrichment source returned; the engine only persists that output.

use lotti_core::error::CoreError;
use lotti_db::models::track::{CreateTrack, Track};
use lotti_db::repositories::TrackRepo;
use lotti_db::DbPool;

use crate::error::{is_unique_violation, EngineResult};

/// Store enrichment metadata for a track unless the catalog already holds it.
/// Returns the stored row either way.
pub async fn ensure_track(pool: &DbPool, input: &CreateTrack) -> EngineResult<Track> {
    if let Some(existing) = TrackRepo::find_by_id(pool, &input.id).await? {
        return Ok(existing);
    }

    let mut tx = pool.begin().await?;
    let created = TrackRepo::create_inner(&mut *tx, input).await;
    match created {
        Ok(track) => {
            tx.commit().await?;
            tracing::debug!(track_id = %track.id, "Track added to catalog");
            Ok(track)
        }
        // Lost a race with a concurrent first reference; the existing row wins.
        Err(err) if is_unique_violation(&err) => {
            drop(tx);
            TrackRepo::find_by_id(pool, &input.id)
                .await?
                .ok_or_else(|| {
                    CoreError::NotFound {
                        entity: "track",
                        id: input.id.clone(),
                    }
                    .into()
                })
        }
        Err(err) => Err(err.into()),
    }
}

/// Fetch a catalog track by its external id.
pub async fn get_track(pool: &DbPool, track_id: &str) -> EngineResult<Track> {
    TrackRepo::find_by_id(pool, track_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "track",
                id: track_id.to_string(),
            }
            .into()
        })
}
