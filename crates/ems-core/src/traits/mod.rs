//! Core traits defined in `ems-core` and implemented by other crates.

pub mod events;
pub mod storage;

pub use events::{EventPublisher, PublishError};
pub use storage::ObjectStore;
