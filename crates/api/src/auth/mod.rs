//! Authentication: JWT access tokens.
//!
//! Tokens are minted out of band (the chat bot hands them out in deep links);
//! the API only validates them. There is no login endpoint.

pub mod jwt;
