//! Domain models, operation parameters, and API DTOs.
//!
//! Domain models are what the services and repositories exchange; DTOs carry
//! the same data in the `{status, data}` response envelope the clients expect.

pub mod api;
pub mod booking;
pub mod court;
pub mod user;
