//! Command result types: the native driver's status enumeration and the
//! bridge-local errors that are kept visibly distinct from it.

use offer_core::CodecError;
use thiserror::Error;

// ── Driver status ─────────────────────────────────────────────────────────────

/// The native driver's status enumeration, passed through to the caller
/// unmodified whenever a command reaches the driver.
///
/// Discriminants match the native library's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DriverStatus {
    /// The driver has been created but `start` has not been called.
    NotStarted = 1,
    /// The driver is running and connected (or connecting) to the master.
    Running = 2,
    /// The driver was aborted; no further callbacks will be made.
    Aborted = 3,
    /// The driver was stopped after running.
    Stopped = 4,
}

impl DriverStatus {
    /// Whether the driver can no longer leave this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, DriverStatus::Aborted | DriverStatus::Stopped)
    }
}

impl TryFrom<i32> for DriverStatus {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, ()> {
        match value {
            1 => Ok(DriverStatus::NotStarted),
            2 => Ok(DriverStatus::Running),
            3 => Ok(DriverStatus::Aborted),
            4 => Ok(DriverStatus::Stopped),
            _ => Err(()),
        }
    }
}

// ── Bridge-local command errors ───────────────────────────────────────────────

/// A command was rejected by the bridge before the driver was invoked.
///
/// This is deliberately a separate type from [`DriverStatus`]: a payload
/// that fails to decode is a local input error, not a driver lifecycle
/// state, and callers can always tell the two apart.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A required input payload did not decode as its expected structured
    /// value. The driver received zero calls for this operation.
    #[error("argument '{argument}' did not decode; the driver was not called")]
    MalformedPayload {
        /// Name of the offending argument, e.g. `"taskInfos"`.
        argument: &'static str,
        #[source]
        source: CodecError,
    },
}

impl CommandError {
    /// Name of the argument whose payload failed to decode.
    pub fn argument(&self) -> &'static str {
        match self {
            CommandError::MalformedPayload { argument, .. } => argument,
        }
    }
}

/// `init` was rejected before any driver was constructed.
#[derive(Debug, Error)]
pub enum InitError {
    /// The framework-info or credential payload did not decode. No driver
    /// and no dispatcher were created.
    #[error("argument '{argument}' did not decode; no driver was constructed")]
    MalformedPayload {
        argument: &'static str,
        #[source]
        source: CodecError,
    },
}

/// Outcome of a command operation: the driver's own status on success, or a
/// bridge-local rejection that guarantees the driver was never called.
pub type CommandResult = Result<DriverStatus, CommandError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
