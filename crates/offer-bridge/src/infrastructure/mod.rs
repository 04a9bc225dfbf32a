//! Infrastructure layer for offer-bridge.
//!
//! Home of the seam to the native driver library: the traits a concrete
//! binding implements ([`driver::SchedulerDriver`], [`driver::DriverFactory`])
//! and the callback interface the bridge implements for it
//! ([`driver::Scheduler`]), plus the recording fake used by tests.
//!
//! Nothing in this layer decodes payloads or touches the recipient mailbox;
//! that is the application layer's job.

pub mod driver;

pub use driver::{DriverFactory, Scheduler, SchedulerDriver};
