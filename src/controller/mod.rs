//! HTTP request handlers.
//!
//! Controllers stay thin: resolve the session through `AuthGuard`, convert
//! DTOs to operation parameters, call the service layer, and wrap the result
//! in the response envelope.

pub mod auth;
pub mod booking;
pub mod court;
