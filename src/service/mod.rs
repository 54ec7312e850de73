//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits
//! between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Booking window validation, the status lifecycle,
//!   credential checks
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or
//!   entity models

pub mod booking;
pub mod court;
pub mod user;
