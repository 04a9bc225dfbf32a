//! Driver lifecycle management: host commands → typed native driver calls.
//!
//! [`SchedulerBridge`] owns every live driver session. `init` decodes the
//! registration payloads, builds the session's [`EventDispatcher`], asks the
//! [`DriverFactory`] for a driver wired to it, and hands the caller an
//! opaque [`DriverHandle`]. Every other command looks the session up by
//! handle, decodes its payload arguments, and forwards one synchronous call
//! to the driver.
//!
//! # Decode-then-call
//!
//! A command's structured arguments are decoded in full before the driver is
//! touched. If any one payload in a multi-value collection fails, the whole
//! operation returns [`CommandError::MalformedPayload`] and the driver
//! receives zero calls; there is no partial invocation. Empty collections
//! are valid input and reach the driver as empty `Vec`s.
//!
//! # Locking
//!
//! The session table lock is held only for lookup, never across a driver
//! call. Each session guards its driver with its own mutex, so a `join`
//! blocking for minutes on one handle does not stall commands on another.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use offer_core::{
    Credential, ExecutorId, Filters, FrameworkInfo, OfferId, OfferOperation, Payload, Request,
    SlaveId, TaskId, TaskInfo, TaskStatus,
};

use crate::application::dispatch::{EventDispatcher, EventSink};
use crate::domain::{CommandError, CommandResult, DriverHandle, InitError};
use crate::infrastructure::driver::{DriverFactory, Scheduler, SchedulerDriver};

/// One live driver session: the exclusively owned native driver plus the
/// dispatcher the driver raises callbacks into. Torn down together, exactly
/// once, by `destroy`.
struct DriverSlot {
    driver: Mutex<Box<dyn SchedulerDriver>>,
    // Kept so the callback sink lives exactly as long as the session.
    _dispatcher: Arc<EventDispatcher>,
}

/// The bridge's command surface.
///
/// All operations are synchronous on the calling thread; `join` (and,
/// transitively, `stop`/`abort` during driver shutdown) may block for an
/// unbounded time. The event path runs independently: the driver invokes
/// each session's dispatcher from its own threads, concurrently with any
/// command here.
///
/// # Panics
///
/// Every operation that takes a [`DriverHandle`] panics when given a handle
/// that was never issued or has already been destroyed. That is a caller
/// contract violation (the host's reference discipline must prevent it), not
/// a recoverable error.
pub struct SchedulerBridge {
    factory: Box<dyn DriverFactory>,
    slots: Mutex<HashMap<u64, Arc<DriverSlot>>>,
    next_handle: AtomicU64,
}

impl SchedulerBridge {
    /// Creates a bridge that constructs drivers through `factory`.
    pub fn new(factory: Box<dyn DriverFactory>) -> Self {
        SchedulerBridge {
            factory,
            slots: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(1),
        }
    }

    // ── Session lifecycle ─────────────────────────────────────────────────────

    /// Creates a driver session.
    ///
    /// Decodes `framework_info` (and `credential`, when supplied) before
    /// anything else; a decode failure returns [`InitError`] with no driver
    /// and no dispatcher constructed. On success the session's dispatcher is
    /// bound to `recipient` permanently: every asynchronous event for this
    /// handle is delivered there, and no re-binding is supported.
    ///
    /// # Errors
    ///
    /// [`InitError::MalformedPayload`] if either payload fails to decode.
    pub fn init(
        &self,
        recipient: Arc<dyn EventSink>,
        framework_info: &Payload,
        master: &str,
        credential: Option<&Payload>,
    ) -> Result<DriverHandle, InitError> {
        // All-or-nothing: both payloads must decode before the factory runs.
        let framework: FrameworkInfo =
            framework_info
                .decode()
                .map_err(|source| InitError::MalformedPayload {
                    argument: "frameworkInfo",
                    source,
                })?;
        let credential: Option<Credential> = match credential {
            Some(payload) => Some(payload.decode().map_err(|source| {
                InitError::MalformedPayload {
                    argument: "credential",
                    source,
                }
            })?),
            None => None,
        };

        let dispatcher = Arc::new(EventDispatcher::new(recipient));
        let callbacks: Arc<dyn Scheduler> = dispatcher.clone();
        let driver = self.factory.create(callbacks, framework, master, credential);

        let raw = self.next_handle.fetch_add(1, Ordering::Relaxed);
        let slot = Arc::new(DriverSlot {
            driver: Mutex::new(driver),
            _dispatcher: dispatcher,
        });
        self.slots
            .lock()
            .expect("session table lock poisoned")
            .insert(raw, slot);

        debug!(handle = raw, master, "driver session created");
        Ok(DriverHandle::from_raw(raw))
    }

    /// Tears the session down, synchronously releasing the driver and its
    /// dispatcher exactly once.
    ///
    /// Must be called after the driver reached a terminal state (stopped or
    /// aborted) or after `join` returned. The caller must ensure no command
    /// or callback is still in flight for this handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle is unknown or already destroyed.
    pub fn destroy(&self, handle: DriverHandle) {
        let slot = self
            .slots
            .lock()
            .expect("session table lock poisoned")
            .remove(&handle.raw())
            .unwrap_or_else(|| panic!("destroy: unknown or already-destroyed {handle:?}"));
        debug!(handle = handle.raw(), "driver session destroyed");
        // Last owner: dropping the slot drops driver, then dispatcher.
        drop(slot);
    }

    // ── State transitions ─────────────────────────────────────────────────────

    /// Starts the driver. Registration with the master proceeds on the
    /// driver's own threads after this returns.
    pub fn start(&self, handle: DriverHandle) -> CommandResult {
        debug!(handle = handle.raw(), "command: start");
        Ok(self.with_driver(handle, |driver| driver.start()))
    }

    /// Blocks the calling thread until the driver terminates.
    pub fn join(&self, handle: DriverHandle) -> CommandResult {
        debug!(handle = handle.raw(), "command: join");
        Ok(self.with_driver(handle, |driver| driver.join()))
    }

    /// Aborts the driver. Only affects the driver's subsequent behavior; an
    /// already-issued blocking call is not interrupted.
    pub fn abort(&self, handle: DriverHandle) -> CommandResult {
        debug!(handle = handle.raw(), "command: abort");
        Ok(self.with_driver(handle, |driver| driver.abort()))
    }

    /// Stops the driver. With `failover` the framework stays registered so a
    /// replacement scheduler can take over.
    pub fn stop(&self, handle: DriverHandle, failover: bool) -> CommandResult {
        debug!(handle = handle.raw(), failover, "command: stop");
        Ok(self.with_driver(handle, |driver| driver.stop(failover)))
    }

    // ── Offer and task commands ───────────────────────────────────────────────

    /// Accepts offers, applying the given operations to their resources.
    pub fn accept_offers(
        &self,
        handle: DriverHandle,
        offer_ids: &[Payload],
        operations: &[Payload],
        filters: &Payload,
    ) -> CommandResult {
        debug!(handle = handle.raw(), "command: acceptOffers");
        let offer_ids: Vec<OfferId> = decode_collection(offer_ids, "offerIds")?;
        let operations: Vec<OfferOperation> = decode_collection(operations, "operations")?;
        let filters: Filters = decode_argument(filters, "filters")?;
        Ok(self.with_driver(handle, |driver| {
            driver.accept_offers(offer_ids, operations, filters)
        }))
    }

    /// Declines a single offer in full.
    pub fn decline_offer(
        &self,
        handle: DriverHandle,
        offer_id: &Payload,
        filters: &Payload,
    ) -> CommandResult {
        debug!(handle = handle.raw(), "command: declineOffer");
        let offer_id: OfferId = decode_argument(offer_id, "offerId")?;
        let filters: Filters = decode_argument(filters, "filters")?;
        Ok(self.with_driver(handle, |driver| driver.decline_offer(offer_id, filters)))
    }

    /// Launches tasks against one offer. Zero tasks is a valid call that
    /// declines the offer's remaining resources.
    pub fn launch_tasks(
        &self,
        handle: DriverHandle,
        offer_id: &Payload,
        tasks: &[Payload],
        filters: &Payload,
    ) -> CommandResult {
        debug!(
            handle = handle.raw(),
            task_count = tasks.len(),
            "command: launchTasks"
        );
        let offer_id: OfferId = decode_argument(offer_id, "offerId")?;
        let tasks: Vec<TaskInfo> = decode_collection(tasks, "taskInfos")?;
        let filters: Filters = decode_argument(filters, "filters")?;
        Ok(self.with_driver(handle, |driver| {
            driver.launch_tasks(offer_id, tasks, filters)
        }))
    }

    /// Kills a running task.
    pub fn kill_task(&self, handle: DriverHandle, task_id: &Payload) -> CommandResult {
        debug!(handle = handle.raw(), "command: killTask");
        let task_id: TaskId = decode_argument(task_id, "taskId")?;
        Ok(self.with_driver(handle, |driver| driver.kill_task(task_id)))
    }

    /// Clears any filters previously installed, making the framework
    /// eligible for all offers again.
    pub fn revive_offers(&self, handle: DriverHandle) -> CommandResult {
        debug!(handle = handle.raw(), "command: reviveOffers");
        Ok(self.with_driver(handle, |driver| driver.revive_offers()))
    }

    /// Sends resource requests ahead of offers.
    pub fn request_resources(&self, handle: DriverHandle, requests: &[Payload]) -> CommandResult {
        debug!(handle = handle.raw(), "command: requestResources");
        let requests: Vec<Request> = decode_collection(requests, "requests")?;
        Ok(self.with_driver(handle, |driver| driver.request_resources(requests)))
    }

    /// Asks the master to re-send current state for the given tasks. An
    /// empty collection reconciles all tasks implicitly.
    pub fn reconcile_tasks(&self, handle: DriverHandle, statuses: &[Payload]) -> CommandResult {
        debug!(handle = handle.raw(), "command: reconcileTasks");
        let statuses: Vec<TaskStatus> = decode_collection(statuses, "taskStatuses")?;
        Ok(self.with_driver(handle, |driver| driver.reconcile_tasks(statuses)))
    }

    /// Sends an arbitrary message to an executor. Best effort; the data
    /// string is forwarded verbatim.
    pub fn send_framework_message(
        &self,
        handle: DriverHandle,
        executor_id: &Payload,
        slave_id: &Payload,
        data: &str,
    ) -> CommandResult {
        debug!(handle = handle.raw(), "command: sendFrameworkMessage");
        let executor_id: ExecutorId = decode_argument(executor_id, "executorId")?;
        let slave_id: SlaveId = decode_argument(slave_id, "slaveId")?;
        Ok(self.with_driver(handle, |driver| {
            driver.send_framework_message(executor_id, slave_id, data.to_string())
        }))
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    /// Looks the session up, releasing the table lock before touching the
    /// driver.
    fn slot(&self, handle: DriverHandle) -> Arc<DriverSlot> {
        self.slots
            .lock()
            .expect("session table lock poisoned")
            .get(&handle.raw())
            .cloned()
            .unwrap_or_else(|| panic!("unknown or already-destroyed {handle:?}"))
    }

    fn with_driver<R>(
        &self,
        handle: DriverHandle,
        call: impl FnOnce(&mut dyn SchedulerDriver) -> R,
    ) -> R {
        let slot = self.slot(handle);
        let mut driver = slot.driver.lock().expect("driver lock poisoned");
        call(driver.as_mut())
    }
}

/// Decodes one required command argument.
fn decode_argument<T: DeserializeOwned>(
    payload: &Payload,
    argument: &'static str,
) -> Result<T, CommandError> {
    payload.decode().map_err(|source| {
        warn!(argument, "command rejected: payload failed to decode");
        CommandError::MalformedPayload { argument, source }
    })
}

/// Decodes a multi-value argument, independently and in input order; the
/// first failure rejects the whole command.
fn decode_collection<T: DeserializeOwned>(
    payloads: &[Payload],
    argument: &'static str,
) -> Result<Vec<T>, CommandError> {
    offer_core::decode_all(payloads).map_err(|source| {
        warn!(argument, "command rejected: payload failed to decode");
        CommandError::MalformedPayload { argument, source }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DriverStatus;
    use crate::infrastructure::driver::MockSchedulerDriver;
    use mockall::predicate::eq;
    use offer_core::SchedulerEvent;
    use std::sync::mpsc;

    /// Factory that hands out pre-built drivers, one per `init`.
    struct StubFactory {
        drivers: Mutex<Vec<Box<dyn SchedulerDriver>>>,
    }

    impl StubFactory {
        fn with(driver: MockSchedulerDriver) -> Box<Self> {
            Box::new(StubFactory {
                drivers: Mutex::new(vec![Box::new(driver)]),
            })
        }
    }

    impl DriverFactory for StubFactory {
        fn create(
            &self,
            _callbacks: Arc<dyn Scheduler>,
            _framework: FrameworkInfo,
            _master: &str,
            _credential: Option<Credential>,
        ) -> Box<dyn SchedulerDriver> {
            self.drivers
                .lock()
                .expect("lock poisoned")
                .pop()
                .expect("stub factory exhausted")
        }
    }

    fn framework_payload() -> Payload {
        Payload::encode(&FrameworkInfo {
            user: "tester".to_string(),
            name: "lifecycle-test".to_string(),
            id: None,
            failover_timeout: None,
            checkpoint: false,
            role: None,
            hostname: None,
            principal: None,
        })
        .unwrap()
    }

    fn recipient() -> (Arc<dyn EventSink>, mpsc::Receiver<SchedulerEvent>) {
        let (tx, rx) = mpsc::channel();
        (Arc::new(tx), rx)
    }

    fn init_with(driver: MockSchedulerDriver) -> (SchedulerBridge, DriverHandle) {
        let bridge = SchedulerBridge::new(StubFactory::with(driver));
        let (sink, _rx) = recipient();
        let handle = bridge
            .init(sink, &framework_payload(), "master:5050", None)
            .expect("init failed");
        (bridge, handle)
    }

    fn corrupt_payload() -> Payload {
        Payload::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF])
    }

    #[test]
    fn test_start_passes_driver_status_through() {
        // Arrange
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_start()
            .times(1)
            .return_const(DriverStatus::Running);
        let (bridge, handle) = init_with(driver);

        // Act / Assert
        assert_eq!(bridge.start(handle).unwrap(), DriverStatus::Running);
    }

    #[test]
    fn test_stop_forwards_failover_flag() {
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_stop()
            .with(eq(true))
            .times(1)
            .return_const(DriverStatus::Stopped);
        let (bridge, handle) = init_with(driver);

        assert_eq!(bridge.stop(handle, true).unwrap(), DriverStatus::Stopped);
    }

    #[test]
    fn test_join_blocks_on_the_driver_and_passes_status_through() {
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_join()
            .times(1)
            .return_const(DriverStatus::Stopped);
        let (bridge, handle) = init_with(driver);

        assert_eq!(bridge.join(handle).unwrap(), DriverStatus::Stopped);
    }

    #[test]
    fn test_abort_passes_status_through() {
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_abort()
            .times(1)
            .return_const(DriverStatus::Aborted);
        let (bridge, handle) = init_with(driver);

        assert_eq!(bridge.abort(handle).unwrap(), DriverStatus::Aborted);
    }

    #[test]
    fn test_non_success_status_is_not_interpreted() {
        // A driver refusing to start is passed through, not retried.
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_start()
            .times(1)
            .return_const(DriverStatus::Aborted);
        let (bridge, handle) = init_with(driver);

        assert_eq!(bridge.start(handle).unwrap(), DriverStatus::Aborted);
    }

    #[test]
    fn test_kill_task_decodes_argument_before_calling() {
        let task_id = TaskId {
            value: "task-5".to_string(),
        };
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_kill_task()
            .with(eq(task_id.clone()))
            .times(1)
            .return_const(DriverStatus::Running);
        let (bridge, handle) = init_with(driver);

        let result = bridge.kill_task(handle, &Payload::encode(&task_id).unwrap());
        assert_eq!(result.unwrap(), DriverStatus::Running);
    }

    #[test]
    fn test_corrupt_payload_means_zero_driver_calls() {
        // Arrange: a mock with NO expectations; any call would panic.
        let driver = MockSchedulerDriver::new();
        let (bridge, handle) = init_with(driver);

        // Act
        let result = bridge.kill_task(handle, &corrupt_payload());

        // Assert
        match result {
            Err(CommandError::MalformedPayload { argument, .. }) => {
                assert_eq!(argument, "taskId");
            }
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_one_bad_task_in_collection_rejects_whole_launch() {
        // Arrange: no expectations; the launch entry point must not fire.
        let driver = MockSchedulerDriver::new();
        let (bridge, handle) = init_with(driver);

        let offer_id = Payload::encode(&OfferId {
            value: "offer-1".to_string(),
        })
        .unwrap();
        let good_task = Payload::encode(&TaskInfo {
            name: "t1".to_string(),
            task_id: TaskId {
                value: "t1".to_string(),
            },
            slave_id: SlaveId {
                value: "s1".to_string(),
            },
            resources: vec![],
            command: None,
        })
        .unwrap();
        let filters = Payload::encode(&Filters::default()).unwrap();

        // Act: second task payload is corrupt
        let result = bridge.launch_tasks(
            handle,
            &offer_id,
            &[good_task, corrupt_payload()],
            &filters,
        );

        // Assert
        match result {
            Err(CommandError::MalformedPayload { argument, .. }) => {
                assert_eq!(argument, "taskInfos");
            }
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_filters_after_good_tasks_still_rejects_launch() {
        // Decode order must not matter: a corrupt trailing argument also
        // aborts before the driver call.
        let driver = MockSchedulerDriver::new();
        let (bridge, handle) = init_with(driver);

        let offer_id = Payload::encode(&OfferId {
            value: "offer-1".to_string(),
        })
        .unwrap();
        let result = bridge.launch_tasks(handle, &offer_id, &[], &corrupt_payload());
        assert!(matches!(
            result,
            Err(CommandError::MalformedPayload {
                argument: "filters",
                ..
            })
        ));
    }

    #[test]
    fn test_launch_with_zero_tasks_reaches_driver_as_empty_vec() {
        let offer_id = OfferId {
            value: "offer-2".to_string(),
        };
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_launch_tasks()
            .withf(|id, tasks, _filters| id.value == "offer-2" && tasks.is_empty())
            .times(1)
            .return_const(DriverStatus::Running);
        let (bridge, handle) = init_with(driver);

        let result = bridge.launch_tasks(
            handle,
            &Payload::encode(&offer_id).unwrap(),
            &[],
            &Payload::encode(&Filters::default()).unwrap(),
        );
        assert_eq!(result.unwrap(), DriverStatus::Running);
    }

    #[test]
    fn test_accept_offers_arguments_survive_the_boundary() {
        let offer_ids = vec![
            OfferId {
                value: "o1".to_string(),
            },
            OfferId {
                value: "o2".to_string(),
            },
        ];
        let operations = vec![OfferOperation::Launch { task_infos: vec![] }];
        let filters = Filters {
            refuse_seconds: Some(10.0),
        };

        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_accept_offers()
            .with(
                eq(offer_ids.clone()),
                eq(operations.clone()),
                eq(filters.clone()),
            )
            .times(1)
            .return_const(DriverStatus::Running);
        let (bridge, handle) = init_with(driver);

        let id_payloads: Vec<Payload> = offer_ids
            .iter()
            .map(|id| Payload::encode(id).unwrap())
            .collect();
        let op_payloads: Vec<Payload> = operations
            .iter()
            .map(|op| Payload::encode(op).unwrap())
            .collect();

        let result = bridge.accept_offers(
            handle,
            &id_payloads,
            &op_payloads,
            &Payload::encode(&filters).unwrap(),
        );
        assert_eq!(result.unwrap(), DriverStatus::Running);
    }

    #[test]
    fn test_send_framework_message_forwards_data_verbatim() {
        let eid = ExecutorId {
            value: "e1".to_string(),
        };
        let sid = SlaveId {
            value: "s1".to_string(),
        };
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_send_framework_message()
            .with(eq(eid.clone()), eq(sid.clone()), eq("hello".to_string()))
            .times(1)
            .return_const(DriverStatus::Running);
        let (bridge, handle) = init_with(driver);

        let result = bridge.send_framework_message(
            handle,
            &Payload::encode(&eid).unwrap(),
            &Payload::encode(&sid).unwrap(),
            "hello",
        );
        assert_eq!(result.unwrap(), DriverStatus::Running);
    }

    #[test]
    fn test_init_with_corrupt_framework_info_constructs_nothing() {
        // The stub factory panics if asked for a second driver, and the
        // first is never requested here because init must fail first.
        struct PanickingFactory;
        impl DriverFactory for PanickingFactory {
            fn create(
                &self,
                _callbacks: Arc<dyn Scheduler>,
                _framework: FrameworkInfo,
                _master: &str,
                _credential: Option<Credential>,
            ) -> Box<dyn SchedulerDriver> {
                panic!("factory must not run when init input is corrupt");
            }
        }

        let bridge = SchedulerBridge::new(Box::new(PanickingFactory));
        let (sink, _rx) = recipient();

        let result = bridge.init(sink, &corrupt_payload(), "master:5050", None);
        assert!(matches!(
            result,
            Err(InitError::MalformedPayload {
                argument: "frameworkInfo",
                ..
            })
        ));
    }

    #[test]
    fn test_init_with_corrupt_credential_constructs_nothing() {
        struct PanickingFactory;
        impl DriverFactory for PanickingFactory {
            fn create(
                &self,
                _callbacks: Arc<dyn Scheduler>,
                _framework: FrameworkInfo,
                _master: &str,
                _credential: Option<Credential>,
            ) -> Box<dyn SchedulerDriver> {
                panic!("factory must not run when init input is corrupt");
            }
        }

        let bridge = SchedulerBridge::new(Box::new(PanickingFactory));
        let (sink, _rx) = recipient();

        let result = bridge.init(
            sink,
            &framework_payload(),
            "master:5050",
            Some(&corrupt_payload()),
        );
        assert!(matches!(
            result,
            Err(InitError::MalformedPayload {
                argument: "credential",
                ..
            })
        ));
    }

    #[test]
    #[should_panic(expected = "unknown or already-destroyed")]
    fn test_command_on_destroyed_handle_panics() {
        let mut driver = MockSchedulerDriver::new();
        driver
            .expect_stop()
            .return_const(DriverStatus::Stopped);
        let (bridge, handle) = init_with(driver);

        bridge.stop(handle, false).unwrap();
        bridge.destroy(handle);
        // Contract violation: the handle is gone.
        let _ = bridge.revive_offers(handle);
    }

    #[test]
    #[should_panic(expected = "destroy: unknown or already-destroyed")]
    fn test_double_destroy_panics() {
        let driver = MockSchedulerDriver::new();
        let (bridge, handle) = init_with(driver);

        bridge.destroy(handle);
        bridge.destroy(handle);
    }

    #[test]
    fn test_sessions_are_independent() {
        // Two sessions; a command on one must reach only that session's
        // driver.
        let mut first = MockSchedulerDriver::new();
        first
            .expect_revive_offers()
            .times(1)
            .return_const(DriverStatus::Running);
        let second = MockSchedulerDriver::new(); // no expectations

        // Stub hands drivers out LIFO, so push `second` last.
        let factory = Box::new(StubFactory {
            drivers: Mutex::new(vec![Box::new(first), Box::new(second)]),
        });
        let bridge = SchedulerBridge::new(factory);
        let (sink_a, _rx_a) = recipient();
        let (sink_b, _rx_b) = recipient();

        let handle_second = bridge
            .init(sink_a, &framework_payload(), "master-a:5050", None)
            .unwrap();
        let handle_first = bridge
            .init(sink_b, &framework_payload(), "master-b:5050", None)
            .unwrap();

        assert_eq!(
            bridge.revive_offers(handle_first).unwrap(),
            DriverStatus::Running
        );
        // `handle_second`'s driver saw nothing; any call on it would have
        // panicked, since it has no expectations set.
        bridge.destroy(handle_second);
        bridge.destroy(handle_first);
    }
}
