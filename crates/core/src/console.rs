//! Boundary to the host debugging console.

use crate::error::Result;

/// Which attached clients see the output of an executed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputControl {
    /// Broadcast to every attached client.
    AllClients,
    /// Only the client that issued the command.
    ThisClient,
}

/// Whether the host records the executed command in its log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionLogging {
    /// Host default logging.
    Default,
    /// Keep the command out of the host's log.
    NotLogged,
}

/// Command-execution capability exposed by the host debugging console.
///
/// The host guarantees that invocations are not dispatched concurrently
/// within one process; implementations may assume single-threaded use.
pub trait DebugConsole {
    /// Hands an opaque command string to the host for execution. The host's
    /// own status is surfaced unchanged through the returned error.
    fn execute(
        &mut self,
        control: OutputControl,
        command: &str,
        logging: ExecutionLogging,
    ) -> Result<()>;

    /// Writes informational text to the console.
    fn output(&mut self, text: &str) -> Result<()>;
}
