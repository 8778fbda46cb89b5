//! Orchestration layer: the moderation engine, playlist aggregate access,
//! the permission store and the lazily-populated track catalog.
//!
//! Every multi-step mutation runs inside one database transaction; either
//! the whole effect commits or none of it does.

pub mod catalog;
pub mod error;
pub mod moderation;
pub mod permissions;
pub mod playlists;

pub use error::{EngineError, EngineResult};
