//! Per-session feedback accumulation.
//!
//! Each interactive session owns one [`FeedbackAccumulator`]; the
//! [`SessionStore`] keeps them isolated from each other.

mod accumulator;
mod store;

pub use accumulator::FeedbackAccumulator;
pub use store::{SessionStore, SharedAccumulator};
