//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod bill;

pub use bill::{Column as BillColumn, Entity as BillEntity, Model as BillModel};
