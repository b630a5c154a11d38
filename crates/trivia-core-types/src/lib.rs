//! Types shared by the trivia error and logging facilities
//!
//! - **Correlation**: `RequestId` attached to every HTTP request span
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
