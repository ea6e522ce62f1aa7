//! # ems-storage
//!
//! Object storage for staff record snapshots. Providers implement
//! [`ObjectStore`](ems_core::traits::ObjectStore) for the local filesystem,
//! S3-compatible object stores (`s3` feature) and process memory; the
//! [`StaffArchiver`] writes JSON snapshots through whichever one is
//! configured.

pub mod archiver;
pub mod factory;
pub mod providers;

pub use archiver::{ArchiveError, ArchiveLocation, StaffArchiver};
pub use factory::build_object_store;
