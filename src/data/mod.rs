//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and convert to domain models at the boundary. All
//! database queries, inserts, updates, and deletes are performed through
//! these repositories.

pub mod booking;
pub mod court;
pub mod user;
