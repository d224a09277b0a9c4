//! Application layer - the two diagnostic flows.

mod expect;
pub mod probe;
pub mod verify;

pub use expect::expect_visible;
pub use verify::{Verification, VerificationPlan};
