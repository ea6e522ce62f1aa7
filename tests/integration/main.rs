//! End-to-end tests driving the HTTP router against in-memory backends.

mod helpers;

mod enrollment_test;
mod health_test;
mod login_test;
mod staff_test;
mod startup_test;
