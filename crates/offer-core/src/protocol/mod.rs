//! Protocol module containing the structured value types, the payload codec
//! contract, and the tagged event records.

pub mod codec;
pub mod events;
pub mod messages;

pub use codec::{decode_all, CodecError, Payload};
pub use events::SchedulerEvent;
pub use messages::*;
