//! Bootstrap and launch sequencing for the JsDbg debugger toolset.
//!
//! On invocation the [`Dispatcher`] resolves a release channel from the raw
//! argument string, downloads the toolset into the platform scratch directory
//! the first time a process asks for it, and hands the composed launch
//! command to the host debugging console. Later invocations in the same
//! process skip straight to launch.
//!
//! ```ignore
//! use jsdbg_ext::{BootstrapConfig, CancelToken, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::new(BootstrapConfig::default())?;
//! dispatcher.launch(&mut console, Some("-unstable"), &CancelToken::new())?;
//! ```

mod bootstrap;
mod channel;
mod command;
mod config;
mod console;
mod dispatch;
mod error;
mod fetch;

#[cfg(test)]
mod testing;

pub use bootstrap::{BootstrapReport, BootstrapState, CancelToken};
pub use channel::{Channel, EXECUTABLE_NAME, SUPPORT_LIBRARY_NAME};
pub use command::{COMMAND_PREFIX, MAX_SCRIPT_PATH_LEN, build_launch_command};
pub use config::{BootstrapConfig, DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT};
pub use console::{DebugConsole, ExecutionLogging, OutputControl};
pub use dispatch::{Dispatcher, HelpDisposition, LaunchOutcome, help};
pub use error::{Error, Result};
pub use fetch::{ArtifactSource, HttpSource, RemoteArtifact};
