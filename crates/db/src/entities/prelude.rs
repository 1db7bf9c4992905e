//! Entity re-exports.

pub use super::sales::Entity as Sales;
pub use super::users::Entity as Users;
