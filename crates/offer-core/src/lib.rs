//! # offer-core
//!
//! Shared library for the offer-bridge workspace: the structured protocol
//! value types of a resource-offer scheduling service, the opaque payload
//! codec contract, and the tagged event records the bridge delivers to the
//! host runtime's mailbox.
//!
//! This crate has no dependency on the native driver, on any I/O, or on an
//! async runtime. It defines:
//!
//! - **`protocol::messages`** – typed forms of every value crossing the
//!   bridge boundary (framework and task descriptions, offers, filters,
//!   status reports, identifier wrappers).
//!
//! - **`protocol::codec`** – the [`Payload`] buffer and the
//!   `encode`/`decode` pair every boundary value passes through. The bridge
//!   routes payloads without interpreting them.
//!
//! - **`protocol::events`** – [`SchedulerEvent`], the immutable tagged
//!   records built from native driver callbacks.

pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `offer_core::Payload` instead of `offer_core::protocol::codec::Payload`.
pub use protocol::codec::{decode_all, CodecError, Payload};
pub use protocol::events::SchedulerEvent;
pub use protocol::messages::{
    CommandInfo, Credential, ExecutorId, Filters, FrameworkId, FrameworkInfo, MasterInfo, Offer,
    OfferId, OfferOperation, Request, Resource, ResourceValue, SlaveId, TaskId, TaskInfo,
    TaskState, TaskStatus,
};
