//! Request handlers, one module per resource.

pub mod playlist;
pub mod track;
