//! `SeaORM` entity definitions.

pub mod prelude;
pub mod sales;
pub mod sea_orm_active_enums;
pub mod users;
