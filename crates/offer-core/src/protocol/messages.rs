//! Structured protocol values exchanged with the resource-offer service.
//!
//! These are the typed forms of every value that crosses the bridge boundary
//! as an opaque payload: the host runtime serializes them before issuing a
//! command, and decodes them out of event records it receives. The bridge
//! itself only ever sees them briefly, between decoding a payload and handing
//! the value to the native driver.
//!
//! All types derive `Serialize`/`Deserialize` so the payload codec in
//! [`crate::protocol::codec`] can round-trip them: `decode(encode(x)) == x`.

use serde::{Deserialize, Serialize};

// ── Identifier wrappers ───────────────────────────────────────────────────────

/// Unique identity of a framework registered with the offer service.
///
/// Assigned by the master at registration time and carried in the
/// `registered` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameworkId {
    pub value: String,
}

/// Identity of a single resource offer. Offers are one-shot: an id is never
/// reused after the offer is accepted, declined, or rescinded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId {
    pub value: String,
}

/// Identity of a worker node (slave) in the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlaveId {
    pub value: String,
}

/// Identity of an executor running on a slave on behalf of a framework.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutorId {
    pub value: String,
}

/// Identity of a task launched by a framework.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId {
    pub value: String,
}

// ── Registration values ───────────────────────────────────────────────────────

/// Description of a framework, supplied to `init` and used by the native
/// driver when registering with the master.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkInfo {
    /// OS user the framework's tasks run as. Empty means "current user".
    pub user: String,
    /// Human-readable framework name shown in the service UI.
    pub name: String,
    /// Set when re-registering after a failover; `None` on first registration.
    pub id: Option<FrameworkId>,
    /// Seconds the master keeps the framework's tasks alive after a
    /// disconnect before declaring them lost.
    pub failover_timeout: Option<f64>,
    /// Whether the slaves should checkpoint framework state.
    pub checkpoint: bool,
    /// Resource role the framework registers under.
    pub role: Option<String>,
    /// Hostname reported to the master; `None` lets the driver pick one.
    pub hostname: Option<String>,
    /// Principal used for authentication and resource accounting.
    pub principal: Option<String>,
}

/// Authentication credential presented to the master at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub principal: String,
    pub secret: Option<String>,
}

/// Address and identity of the currently elected master, carried by the
/// `registered` and `reregistered` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterInfo {
    pub id: String,
    /// IPv4 address, network byte order, as the native library reports it.
    pub ip: u32,
    pub port: u32,
    pub hostname: Option<String>,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// The quantity carried by a [`Resource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceValue {
    /// A divisible quantity, e.g. `cpus: 4.0` or `mem: 2048.0`.
    Scalar(f64),
    /// Inclusive integer ranges, e.g. port ranges `[(31000, 32000)]`.
    Ranges(Vec<(u64, u64)>),
    /// A set of distinct strings, e.g. disk names.
    Set(Vec<String>),
}

/// One named resource on a slave, as advertised in an offer or requested for
/// a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub value: ResourceValue,
}

/// A batch of resources on one slave, offered to the framework for a bounded
/// time. A single offer never spans slaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub framework_id: FrameworkId,
    pub slave_id: SlaveId,
    pub hostname: String,
    pub resources: Vec<Resource>,
}

// ── Tasks ─────────────────────────────────────────────────────────────────────

/// Command line an executor runs for a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub value: String,
    pub arguments: Vec<String>,
    /// `true` runs `value` through a shell; `false` execs it directly with
    /// `arguments`.
    pub shell: bool,
}

/// Description of one task to launch against an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub name: String,
    pub task_id: TaskId,
    pub slave_id: SlaveId,
    pub resources: Vec<Resource>,
    pub command: Option<CommandInfo>,
}

/// Lifecycle state of a task, as reported in status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    Staging,
    Starting,
    Running,
    Finished,
    Failed,
    Killed,
    Lost,
    Error,
}

impl TaskState {
    /// Whether the task can no longer transition to another state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskState::Finished
                | TaskState::Failed
                | TaskState::Killed
                | TaskState::Lost
                | TaskState::Error
        )
    }
}

/// A point-in-time report about a task. Carried by the `statusUpdate` event
/// and supplied to `reconcileTasks` to ask the master for fresh state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: TaskId,
    pub state: TaskState,
    pub message: Option<String>,
    pub slave_id: Option<SlaveId>,
    pub executor_id: Option<ExecutorId>,
    /// Seconds since the epoch at which the update was generated.
    pub timestamp: Option<f64>,
}

// ── Offer responses ───────────────────────────────────────────────────────────

/// Constraints on which future offers the framework is willing to receive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Seconds the declined/unused resources are withheld from this
    /// framework. `None` uses the service default.
    pub refuse_seconds: Option<f64>,
}

/// A resource request sent ahead of offers, hinting what the framework wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Restrict the request to one slave, or `None` for anywhere.
    pub slave_id: Option<SlaveId>,
    pub resources: Vec<Resource>,
}

/// One operation applied to accepted offers via `acceptOffers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OfferOperation {
    /// Launch tasks against the offered resources.
    Launch { task_infos: Vec<TaskInfo> },
    /// Dynamically reserve resources for the framework's role.
    Reserve { resources: Vec<Resource> },
    /// Release a dynamic reservation.
    Unreserve { resources: Vec<Resource> },
    /// Create persistent volumes from reserved disk.
    Create { volumes: Vec<Resource> },
    /// Destroy persistent volumes.
    Destroy { volumes: Vec<Resource> },
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_task_states() {
        assert!(TaskState::Finished.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(TaskState::Killed.is_terminal());
        assert!(TaskState::Lost.is_terminal());
        assert!(TaskState::Error.is_terminal());
    }

    #[test]
    fn test_non_terminal_task_states() {
        assert!(!TaskState::Staging.is_terminal());
        assert!(!TaskState::Starting.is_terminal());
        assert!(!TaskState::Running.is_terminal());
    }

    #[test]
    fn test_default_filters_use_service_default_refusal() {
        let filters = Filters::default();
        assert_eq!(filters.refuse_seconds, None);
    }
}
