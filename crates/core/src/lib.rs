//! Pure domain logic for the Lotti collaborative playlist service.
//!
//! Everything in this crate is I/O-free: the track moderation state machine,
//! the role model, and the translation of external chat-roster events into
//! internal roles. Persistence lives in `lotti-db`, orchestration in
//! `lotti-engine` and `lotti-sync`.

pub mod error;
pub mod moderation;
pub mod roles;
pub mod roster;
pub mod types;
