//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` (or a transaction connection for the `_inner` variants) as the
//! first argument.

pub mod grant_repo;
pub mod playlist_repo;
pub mod track_repo;
pub mod user_repo;

pub use grant_repo::GrantRepo;
pub use playlist_repo::PlaylistRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
