//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every sale query is scoped by the owning user.

pub mod sale;
pub mod user;

pub use sale::SaleRepository;
pub use user::UserRepository;
