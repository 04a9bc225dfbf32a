//! Recording fake of the native driver, for tests.
//!
//! [`FakeDriverFactory`] creates [`FakeDriver`]s that log every command as a
//! typed [`DriverCall`] and return a configurable status. For each driver it
//! creates, the factory keeps a [`CreatedDriver`] view that tests use to:
//!
//! - assert exactly which calls (with which decoded arguments) reached the
//!   driver,
//! - raise native callbacks from any thread, the way the real library's
//!   internal threads would,
//! - observe teardown: the driver sets a flag when dropped, and the callback
//!   sink becomes unreachable once the bridge has released it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use offer_core::{
    Credential, ExecutorId, Filters, FrameworkInfo, OfferId, OfferOperation, Request, SlaveId,
    TaskId, TaskInfo, TaskStatus,
};

use super::{DriverFactory, Scheduler, SchedulerDriver};
use crate::domain::DriverStatus;

/// One recorded driver call, with the arguments exactly as the driver
/// received them (i.e. after the bridge decoded the payloads).
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    Start,
    Join,
    Abort,
    Stop {
        failover: bool,
    },
    AcceptOffers {
        offer_ids: Vec<OfferId>,
        operations: Vec<OfferOperation>,
        filters: Filters,
    },
    DeclineOffer {
        offer_id: OfferId,
        filters: Filters,
    },
    LaunchTasks {
        offer_id: OfferId,
        tasks: Vec<TaskInfo>,
        filters: Filters,
    },
    KillTask {
        task_id: TaskId,
    },
    ReviveOffers,
    RequestResources {
        requests: Vec<Request>,
    },
    ReconcileTasks {
        statuses: Vec<TaskStatus>,
    },
    SendFrameworkMessage {
        executor_id: ExecutorId,
        slave_id: SlaveId,
        data: String,
    },
}

/// A fake driver session: records calls, returns a configurable status,
/// and holds the callback sink alive the way the native driver would.
pub struct FakeDriver {
    calls: Arc<Mutex<Vec<DriverCall>>>,
    status: Arc<Mutex<DriverStatus>>,
    dropped: Arc<AtomicBool>,
    // Held so the dispatcher stays reachable for callbacks until the bridge
    // tears this driver down.
    _callbacks: Arc<dyn Scheduler>,
}

impl FakeDriver {
    fn record(&self, call: DriverCall) -> DriverStatus {
        self.calls.lock().expect("lock poisoned").push(call);
        *self.status.lock().expect("lock poisoned")
    }
}

impl Drop for FakeDriver {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

impl SchedulerDriver for FakeDriver {
    fn start(&mut self) -> DriverStatus {
        self.record(DriverCall::Start)
    }

    fn join(&mut self) -> DriverStatus {
        self.record(DriverCall::Join)
    }

    fn abort(&mut self) -> DriverStatus {
        self.record(DriverCall::Abort)
    }

    fn stop(&mut self, failover: bool) -> DriverStatus {
        self.record(DriverCall::Stop { failover })
    }

    fn accept_offers(
        &mut self,
        offer_ids: Vec<OfferId>,
        operations: Vec<OfferOperation>,
        filters: Filters,
    ) -> DriverStatus {
        self.record(DriverCall::AcceptOffers {
            offer_ids,
            operations,
            filters,
        })
    }

    fn decline_offer(&mut self, offer_id: OfferId, filters: Filters) -> DriverStatus {
        self.record(DriverCall::DeclineOffer { offer_id, filters })
    }

    fn launch_tasks(
        &mut self,
        offer_id: OfferId,
        tasks: Vec<TaskInfo>,
        filters: Filters,
    ) -> DriverStatus {
        self.record(DriverCall::LaunchTasks {
            offer_id,
            tasks,
            filters,
        })
    }

    fn kill_task(&mut self, task_id: TaskId) -> DriverStatus {
        self.record(DriverCall::KillTask { task_id })
    }

    fn revive_offers(&mut self) -> DriverStatus {
        self.record(DriverCall::ReviveOffers)
    }

    fn request_resources(&mut self, requests: Vec<Request>) -> DriverStatus {
        self.record(DriverCall::RequestResources { requests })
    }

    fn reconcile_tasks(&mut self, statuses: Vec<TaskStatus>) -> DriverStatus {
        self.record(DriverCall::ReconcileTasks { statuses })
    }

    fn send_framework_message(
        &mut self,
        executor_id: ExecutorId,
        slave_id: SlaveId,
        data: String,
    ) -> DriverStatus {
        self.record(DriverCall::SendFrameworkMessage {
            executor_id,
            slave_id,
            data,
        })
    }
}

/// Test-side view of one driver the factory created.
#[derive(Clone)]
pub struct CreatedDriver {
    calls: Arc<Mutex<Vec<DriverCall>>>,
    status: Arc<Mutex<DriverStatus>>,
    dropped: Arc<AtomicBool>,
    callbacks: Weak<dyn Scheduler>,
    /// Framework description the driver was constructed with.
    pub framework: FrameworkInfo,
    /// Master address the driver was pointed at.
    pub master: String,
    /// Credential supplied at construction, if any.
    pub credential: Option<Credential>,
}

impl CreatedDriver {
    /// Snapshot of every call the driver has received, in order.
    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// Sets the status every subsequent call returns.
    pub fn set_status(&self, status: DriverStatus) {
        *self.status.lock().expect("lock poisoned") = status;
    }

    /// Whether the driver has been dropped (torn down by `destroy`).
    pub fn is_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }

    /// The callback sink, for simulating native callbacks.
    ///
    /// Panics if the bridge has already torn the session down; after
    /// `destroy`, no further callbacks are possible.
    pub fn callbacks(&self) -> Arc<dyn Scheduler> {
        self.callbacks
            .upgrade()
            .expect("driver session destroyed; callbacks are gone")
    }

    /// Whether the callback sink is still reachable. `false` once the bridge
    /// has released the dispatcher.
    pub fn callbacks_alive(&self) -> bool {
        self.callbacks.upgrade().is_some()
    }
}

/// A [`DriverFactory`] producing [`FakeDriver`]s, remembering every one.
///
/// Clones share the same creation log, so a test can keep one clone and hand
/// the other to the bridge.
#[derive(Clone)]
pub struct FakeDriverFactory {
    created: Arc<Mutex<Vec<CreatedDriver>>>,
    initial_status: DriverStatus,
}

impl FakeDriverFactory {
    /// Creates a factory whose drivers initially return
    /// [`DriverStatus::Running`] from every call.
    pub fn new() -> Self {
        FakeDriverFactory {
            created: Arc::new(Mutex::new(Vec::new())),
            initial_status: DriverStatus::Running,
        }
    }

    /// Creates a factory whose drivers initially return `status`.
    pub fn with_status(status: DriverStatus) -> Self {
        FakeDriverFactory {
            created: Arc::new(Mutex::new(Vec::new())),
            initial_status: status,
        }
    }

    /// Number of drivers created so far.
    pub fn created_count(&self) -> usize {
        self.created.lock().expect("lock poisoned").len()
    }

    /// View of the most recently created driver.
    ///
    /// Panics if no driver has been created yet.
    pub fn last_created(&self) -> CreatedDriver {
        self.created
            .lock()
            .expect("lock poisoned")
            .last()
            .expect("no driver has been created")
            .clone()
    }
}

impl Default for FakeDriverFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverFactory for FakeDriverFactory {
    fn create(
        &self,
        callbacks: Arc<dyn Scheduler>,
        framework: FrameworkInfo,
        master: &str,
        credential: Option<Credential>,
    ) -> Box<dyn SchedulerDriver> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let status = Arc::new(Mutex::new(self.initial_status));
        let dropped = Arc::new(AtomicBool::new(false));

        self.created.lock().expect("lock poisoned").push(CreatedDriver {
            calls: Arc::clone(&calls),
            status: Arc::clone(&status),
            dropped: Arc::clone(&dropped),
            callbacks: Arc::downgrade(&callbacks),
            framework: framework.clone(),
            master: master.to_string(),
            credential: credential.clone(),
        });

        Box::new(FakeDriver {
            calls,
            status,
            dropped,
            _callbacks: callbacks,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
