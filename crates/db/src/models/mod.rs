//! Entity models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the create DTOs the repositories accept.

pub mod grant;
pub mod playlist;
pub mod track;
pub mod user;
