//! Event dispatch: native driver callbacks → recipient mailbox.
//!
//! The native driver raises callbacks from its own internal threads. The
//! [`EventDispatcher`] implements the driver's [`Scheduler`] callback
//! interface and turns every callback into exactly one asynchronously
//! delivered [`SchedulerEvent`] (one per offer for `resource_offers`):
//! encode the structured arguments into fresh payloads, build the tagged
//! record, hand it to the recipient's [`EventSink`].
//!
//! Delivery is enqueue-and-return. The dispatcher never waits for the
//! recipient to consume anything, so the native callback thread is never
//! blocked on the host runtime. Events raised from a single callback thread
//! are delivered in the order the callbacks were raised; no ordering is
//! promised across concurrent native threads.
//!
//! The dispatcher's only state is the immutable recipient reference bound at
//! `init` time, which is what makes it safe to invoke concurrently with
//! itself and with any lifecycle operation.

use std::sync::mpsc;
use std::sync::Arc;

use tracing::{debug, error};

use offer_core::{
    ExecutorId, FrameworkId, MasterInfo, Offer, OfferId, Payload, SchedulerEvent, SlaveId,
    TaskStatus,
};

use crate::infrastructure::driver::Scheduler;

/// Destination for event records: the host runtime's mailbox for one
/// scheduler actor.
///
/// `deliver` must not block and must not fail outward; a sink whose consumer
/// is gone simply swallows the record (the host is shutting down and has no
/// use for it).
pub trait EventSink: Send + Sync {
    fn deliver(&self, event: SchedulerEvent);
}

/// A plain std channel as mailbox. Sending never blocks; a disconnected
/// receiver is ignored.
impl EventSink for mpsc::Sender<SchedulerEvent> {
    fn deliver(&self, event: SchedulerEvent) {
        let _ = self.send(event);
    }
}

/// A tokio unbounded channel as mailbox, for hosts consuming events on an
/// async runtime. Unbounded keeps the send non-blocking from the native
/// callback thread; there is deliberately no backpressure toward the driver.
impl EventSink for tokio::sync::mpsc::UnboundedSender<SchedulerEvent> {
    fn deliver(&self, event: SchedulerEvent) {
        let _ = self.send(event);
    }
}

/// The driver's callback sink for one session.
///
/// Created by `init` and bound to a single recipient for its whole life; no
/// re-binding is supported.
pub struct EventDispatcher {
    recipient: Arc<dyn EventSink>,
}

impl EventDispatcher {
    pub fn new(recipient: Arc<dyn EventSink>) -> Self {
        EventDispatcher { recipient }
    }

    /// Encodes one callback argument into a fresh payload.
    ///
    /// Encoding a well-formed protocol value cannot fail; if it ever does,
    /// the record is dropped rather than delivered partially, and never
    /// panics on the driver's thread.
    fn encode<T: serde::Serialize>(value: &T, what: &'static str) -> Option<Payload> {
        match Payload::encode(value) {
            Ok(payload) => Some(payload),
            Err(e) => {
                error!("dropping event: '{what}' failed to encode: {e}");
                None
            }
        }
    }

    fn send(&self, event: SchedulerEvent) {
        debug!(tag = event.tag(), "delivering scheduler event");
        self.recipient.deliver(event);
    }
}

impl Scheduler for EventDispatcher {
    fn registered(&self, framework_id: &FrameworkId, master_info: &MasterInfo) {
        let Some(framework_id) = Self::encode(framework_id, "frameworkId") else {
            return;
        };
        let Some(master_info) = Self::encode(master_info, "masterInfo") else {
            return;
        };
        self.send(SchedulerEvent::Registered {
            framework_id,
            master_info,
        });
    }

    fn reregistered(&self, master_info: &MasterInfo) {
        let Some(master_info) = Self::encode(master_info, "masterInfo") else {
            return;
        };
        self.send(SchedulerEvent::Reregistered { master_info });
    }

    fn disconnected(&self) {
        self.send(SchedulerEvent::Disconnected);
    }

    /// A batch of N offers yields N independent records, each encoded
    /// synchronously before the next is started, so the records reach the
    /// mailbox in batch order.
    fn resource_offers(&self, offers: &[Offer]) {
        for offer in offers {
            let Some(offer) = Self::encode(offer, "offer") else {
                continue;
            };
            self.send(SchedulerEvent::ResourceOffers { offer });
        }
    }

    fn offer_rescinded(&self, offer_id: &OfferId) {
        let Some(offer_id) = Self::encode(offer_id, "offerId") else {
            return;
        };
        self.send(SchedulerEvent::OfferRescinded { offer_id });
    }

    fn status_update(&self, status: &TaskStatus) {
        let Some(status) = Self::encode(status, "taskStatus") else {
            return;
        };
        self.send(SchedulerEvent::StatusUpdate { status });
    }

    fn framework_message(&self, executor_id: &ExecutorId, slave_id: &SlaveId, data: &str) {
        let Some(executor_id) = Self::encode(executor_id, "executorId") else {
            return;
        };
        let Some(slave_id) = Self::encode(slave_id, "slaveId") else {
            return;
        };
        self.send(SchedulerEvent::FrameworkMessage {
            executor_id,
            slave_id,
            data: data.to_string(),
        });
    }

    fn slave_lost(&self, slave_id: &SlaveId) {
        let Some(slave_id) = Self::encode(slave_id, "slaveId") else {
            return;
        };
        self.send(SchedulerEvent::SlaveLost { slave_id });
    }

    fn executor_lost(&self, executor_id: &ExecutorId, slave_id: &SlaveId, status: i32) {
        let Some(executor_id) = Self::encode(executor_id, "executorId") else {
            return;
        };
        let Some(slave_id) = Self::encode(slave_id, "slaveId") else {
            return;
        };
        self.send(SchedulerEvent::ExecutorLost {
            executor_id,
            slave_id,
            status,
        });
    }

    fn error(&self, message: &str) {
        self.send(SchedulerEvent::Error {
            message: message.to_string(),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
