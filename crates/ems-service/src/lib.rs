//! # ems-service
//!
//! Business logic for staff accounts. Each service orchestrates the
//! repository, credential hasher, archiver, event publisher and token
//! issuer to implement one use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod authentication;
pub mod bootstrap;
pub mod context;
pub mod enrollment;
pub mod retry;
pub mod staff;

pub use authentication::{AuthenticationService, LoginError, LoginOutcome};
pub use bootstrap::seed_initial_staff;
pub use context::RequestContext;
pub use enrollment::{
    EnrollStaffRequest, EnrolledStaff, EnrollmentError, EnrollmentService, EnrollmentStage,
};
pub use retry::RetryPolicy;
pub use staff::StaffService;
