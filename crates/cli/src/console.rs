//! Console shim for running the sequencer without a debugger attached.

use jsdbg_ext::{DebugConsole, ExecutionLogging, OutputControl, Result};
use tracing::debug;

/// Stands in for the host console: help text goes to stdout, dispatched
/// commands are logged rather than executed (the CLI has no debugging host
/// behind it, so dispatch is a dry run; the report shows the command).
#[derive(Debug, Default)]
pub struct EchoConsole;

impl DebugConsole for EchoConsole {
    fn execute(
        &mut self,
        _control: OutputControl,
        command: &str,
        _logging: ExecutionLogging,
    ) -> Result<()> {
        debug!(command, "dry-run dispatch");
        Ok(())
    }

    fn output(&mut self, text: &str) -> Result<()> {
        print!("{text}");
        Ok(())
    }
}
