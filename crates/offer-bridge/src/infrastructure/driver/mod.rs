//! The native scheduler-driver seam.
//!
//! The actual offer/allocation engine lives in a separate native library.
//! Everything the bridge needs from it is captured by three traits:
//!
//! - [`SchedulerDriver`] – the synchronous, potentially blocking command API
//!   of one driver session.
//! - [`Scheduler`] – the callback interface the driver invokes from its own
//!   internal threads. The bridge's event dispatcher implements this.
//! - [`DriverFactory`] – constructs a driver bound to a framework
//!   description, a master address, optional credentials, and a callback
//!   sink. Stands in for the native library's driver constructor.
//!
//! # Threading
//!
//! Driver methods run on the caller's thread and may block for an unbounded
//! time (`join` blocks until the driver terminates). Callback methods are
//! invoked from the driver's own threads, concurrently with command calls;
//! implementors of [`Scheduler`] must not rely on any calling-thread
//! affinity.
//!
//! # Testability
//!
//! The traits let tests stand in a recording fake ([`mock::FakeDriverFactory`])
//! or a `mockall`-generated mock for the native library, so every bridge
//! behavior is checkable without a cluster.

use std::sync::Arc;

use offer_core::{
    Credential, ExecutorId, Filters, FrameworkId, FrameworkInfo, MasterInfo, Offer, OfferId,
    OfferOperation, Request, SlaveId, TaskId, TaskInfo, TaskStatus,
};

use crate::domain::DriverStatus;

pub mod mock;

/// Callback interface of the native driver.
///
/// One method per callback kind. The driver guarantees it never raises a
/// callback after it has been destroyed; it makes no guarantee about which
/// of its threads a callback arrives on.
pub trait Scheduler: Send + Sync {
    /// The framework registered with the master. Carries the id the master
    /// assigned and the elected master's identity.
    fn registered(&self, framework_id: &FrameworkId, master_info: &MasterInfo);

    /// The framework re-registered with a newly elected master.
    fn reregistered(&self, master_info: &MasterInfo);

    /// The driver lost its connection to the master.
    fn disconnected(&self);

    /// Resources were offered to the framework. A single batch may span
    /// several slaves but each offer is from exactly one slave.
    fn resource_offers(&self, offers: &[Offer]);

    /// A previously delivered offer is no longer valid.
    fn offer_rescinded(&self, offer_id: &OfferId);

    /// A task changed state. Returning acknowledges receipt.
    fn status_update(&self, status: &TaskStatus);

    /// An executor sent a best-effort message.
    fn framework_message(&self, executor_id: &ExecutorId, slave_id: &SlaveId, data: &str);

    /// A slave was determined unreachable.
    fn slave_lost(&self, slave_id: &SlaveId);

    /// An executor exited on a slave with the given status code.
    fn executor_lost(&self, executor_id: &ExecutorId, slave_id: &SlaveId, status: i32);

    /// Unrecoverable error. The driver is aborted before this is invoked.
    fn error(&self, message: &str);
}

/// Synchronous command API of one native driver session.
///
/// Every method returns the driver's own [`DriverStatus`], which the bridge
/// passes through to the host unmodified. Methods may block; `join` blocks
/// until the driver terminates.
#[cfg_attr(test, mockall::automock)]
pub trait SchedulerDriver: Send {
    fn start(&mut self) -> DriverStatus;

    /// Blocks the calling thread until the driver terminates.
    fn join(&mut self) -> DriverStatus;

    fn abort(&mut self) -> DriverStatus;

    /// `failover: true` keeps the framework registered so a replacement
    /// scheduler can take over within the failover timeout.
    fn stop(&mut self, failover: bool) -> DriverStatus;

    fn accept_offers(
        &mut self,
        offer_ids: Vec<OfferId>,
        operations: Vec<OfferOperation>,
        filters: Filters,
    ) -> DriverStatus;

    fn decline_offer(&mut self, offer_id: OfferId, filters: Filters) -> DriverStatus;

    fn launch_tasks(
        &mut self,
        offer_id: OfferId,
        tasks: Vec<TaskInfo>,
        filters: Filters,
    ) -> DriverStatus;

    fn kill_task(&mut self, task_id: TaskId) -> DriverStatus;

    fn revive_offers(&mut self) -> DriverStatus;

    fn request_resources(&mut self, requests: Vec<Request>) -> DriverStatus;

    fn reconcile_tasks(&mut self, statuses: Vec<TaskStatus>) -> DriverStatus;

    fn send_framework_message(
        &mut self,
        executor_id: ExecutorId,
        slave_id: SlaveId,
        data: String,
    ) -> DriverStatus;
}

/// Constructs native driver sessions.
///
/// `callbacks` is the event sink the driver will invoke from its internal
/// threads for the whole lifetime of the session; the driver must hold the
/// `Arc` so the sink outlives every callback.
pub trait DriverFactory: Send + Sync {
    fn create(
        &self,
        callbacks: Arc<dyn Scheduler>,
        framework: FrameworkInfo,
        master: &str,
        credential: Option<Credential>,
    ) -> Box<dyn SchedulerDriver>;
}
