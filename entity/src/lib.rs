//! SeaORM entity definitions for the courtbook database schema.

pub mod booking;
pub mod court;
pub mod user;

pub mod prelude {
    pub use super::booking::Entity as Booking;
    pub use super::court::Entity as Court;
    pub use super::user::Entity as User;
}
