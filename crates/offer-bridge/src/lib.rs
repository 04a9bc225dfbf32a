//! # offer-bridge
//!
//! Command/event bridge between a host scheduler runtime and a native
//! resource-offer driver library (the kind exposed by Mesos-style cluster
//! managers).
//!
//! The host drives the bridge with structured commands whose arguments are
//! opaque serialized payloads; the bridge decodes them and makes typed,
//! synchronous calls into the driver. The driver's asynchronous callbacks
//! travel the other way: re-encoded into fresh payloads, wrapped in tagged
//! event records, and pushed into the recipient's mailbox without ever
//! blocking the native callback thread.
//!
//! ```text
//! Host runtime (payloads)
//!       ↓ commands                       ↑ SchedulerEvent records
//! [offer-bridge]
//!   ├── domain/           DriverHandle, DriverStatus, CommandError
//!   ├── application/
//!   │     ├── lifecycle/  decode-then-call command surface
//!   │     └── dispatch/   callback sink → recipient mailbox
//!   └── infrastructure/
//!         └── driver/     SchedulerDriver / Scheduler / DriverFactory seam
//!       ↓ typed calls                    ↑ callbacks (driver threads)
//! Native driver library (external)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no knowledge of the driver seam.
//! - `application` depends on `domain`, `offer-core`, and the seam traits.
//! - `infrastructure` declares the seam; a concrete native binding (or the
//!   test fake) implements it.
//!
//! # What the bridge does not do
//!
//! It never interprets payload contents (the codec contract belongs to
//! `offer-core`), never retries a command, and never re-issues anything
//! after the driver reports an unrecoverable error. Those decisions belong
//! to the host actor consuming [`CommandResult`]s and
//! [`offer_core::SchedulerEvent`]s.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the types that make up the public surface so hosts can write
// `offer_bridge::SchedulerBridge` directly.
pub use application::dispatch::{EventDispatcher, EventSink};
pub use application::lifecycle::SchedulerBridge;
pub use domain::{CommandError, CommandResult, DriverHandle, DriverStatus, InitError};
pub use infrastructure::driver::{DriverFactory, Scheduler, SchedulerDriver};
