//! Application layer for offer-bridge.
//!
//! The two halves of the bridge live here:
//!
//! - **`lifecycle`** – the command path. Decodes payload arguments, enforces
//!   decode-then-call, and forwards exactly one synchronous call per command
//!   to the native driver.
//! - **`dispatch`** – the event path. Implements the driver's callback
//!   interface and pushes tagged records into the recipient mailbox without
//!   blocking the callback thread.
//!
//! The two paths are deliberately separate concurrency regimes: blocking
//! request/response for commands, fire-and-forget push for events. Nothing
//! in this layer opens sockets or talks to a real cluster; the native driver
//! is reached only through the `infrastructure::driver` traits.

pub mod dispatch;
pub mod lifecycle;

pub use dispatch::{EventDispatcher, EventSink};
pub use lifecycle::SchedulerBridge;
