//! Tagged event records delivered to the scheduler's recipient mailbox.
//!
//! Every asynchronous callback the native driver raises is turned into
//! exactly one [`SchedulerEvent`] (except `resourceOffers`, which fans out to
//! one record per offer). The structured arguments of the callback travel as
//! opaque [`Payload`]s; the two callbacks that carry a plain scalar keep it
//! alongside the payloads unmodified.
//!
//! Records are immutable once built and are delivered at most once per
//! callback invocation. The host decodes the payloads with the codec
//! contract when it consumes the record.

use crate::protocol::codec::Payload;

/// One asynchronous notification from the driver, ready for mailbox delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerEvent {
    /// The framework registered with the master for the first time.
    Registered {
        framework_id: Payload,
        master_info: Payload,
    },
    /// The framework re-registered with a newly elected master.
    Reregistered { master_info: Payload },
    /// The driver lost its connection to the master.
    Disconnected,
    /// One resource offer. A batch of N offers from the driver yields N of
    /// these records, delivered independently in batch order.
    ResourceOffers { offer: Payload },
    /// A previously delivered offer is no longer valid.
    OfferRescinded { offer_id: Payload },
    /// A task changed state.
    StatusUpdate { status: Payload },
    /// An executor sent a best-effort message to the framework.
    FrameworkMessage {
        executor_id: Payload,
        slave_id: Payload,
        data: String,
    },
    /// A slave became unreachable.
    SlaveLost { slave_id: Payload },
    /// An executor exited or terminated on a slave.
    ExecutorLost {
        executor_id: Payload,
        slave_id: Payload,
        status: i32,
    },
    /// Unrecoverable driver error. The driver is already aborted by the time
    /// this record is raised.
    Error { message: String },
}

impl SchedulerEvent {
    /// The callback-kind name this record was produced from, for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            SchedulerEvent::Registered { .. } => "registered",
            SchedulerEvent::Reregistered { .. } => "reregistered",
            SchedulerEvent::Disconnected => "disconnected",
            SchedulerEvent::ResourceOffers { .. } => "resourceOffers",
            SchedulerEvent::OfferRescinded { .. } => "offerRescinded",
            SchedulerEvent::StatusUpdate { .. } => "statusUpdate",
            SchedulerEvent::FrameworkMessage { .. } => "frameworkMessage",
            SchedulerEvent::SlaveLost { .. } => "slaveLost",
            SchedulerEvent::ExecutorLost { .. } => "executorLost",
            SchedulerEvent::Error { .. } => "error",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
