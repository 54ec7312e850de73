//! Request/response processing: session wrappers and authentication guards.

pub mod auth;
pub mod session;
