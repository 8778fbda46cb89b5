//! The roster synchronizer.
//!
//! Consumes membership-change events from an external group chat and mirrors
//! them into playlist grants and playlist lifecycle:
//!
//! - [`source`] — the [`RosterSource`] / [`Notifier`] seams to the external
//!   chat system.
//! - [`snapshot`] — paginated full-member snapshot with deduplication.
//! - [`reconcile`] — the per-event reconciliation algorithm.
//!
//! Events for different chats are independent; events for the same chat are
//! handled one at a time in delivery order.

pub mod error;
pub mod reconcile;
pub mod snapshot;
pub mod source;

pub use error::SyncError;
pub use reconcile::{reconcile, reconcile_title};
pub use source::{Notifier, RosterFilter, RosterMember, RosterSource};
