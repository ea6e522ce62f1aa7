//! Staff enrollment: validate, hash, persist, archive, publish.

pub mod request;
pub mod service;

pub use request::{EnrollStaffRequest, ValidatedEnrollment};
pub use service::{EnrolledStaff, EnrollmentError, EnrollmentService, EnrollmentStage};
