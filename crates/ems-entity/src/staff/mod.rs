//! Staff domain entities.

pub mod model;

pub use model::{NewStaff, StaffRecord};
