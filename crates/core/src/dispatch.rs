//! Invocation entry points: the launch command and its help companion.

use tracing::debug;

use crate::bootstrap::{self, BootstrapReport, BootstrapState, CancelToken};
use crate::channel::Channel;
use crate::command::build_launch_command;
use crate::config::BootstrapConfig;
use crate::console::{DebugConsole, ExecutionLogging, OutputControl};
use crate::error::Result;
use crate::fetch::{ArtifactSource, HttpSource};

const HELP_SUMMARY: &str = "!jsdbg [-unstable]         - Launches JsDbg, debugger extensions in the browser (http://aka.ms/jsdbg)\n";

const HELP_DETAIL: &str = "JsDbg is a platform for debugger extensions that run in a web browser.  For more information, see http://aka.ms/jsdbg.\n!jsdbg [-unstable]\n  -[u]nstable - Launches the latest unstable version of JsDbg.\n";

/// How the help companion answered a topic query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpDisposition {
    /// The topic was ours; the host should stop searching.
    Handled,
    /// Not our topic (or a bare listing request); the host should consult
    /// other extensions too.
    ContinueSearch,
}

/// Orchestrates one launch invocation end to end.
///
/// Owns the process's [`BootstrapState`] explicitly: construct one
/// `Dispatcher` per process and route every invocation through it to get
/// the once-per-process download behavior.
pub struct Dispatcher<S = HttpSource> {
    config: BootstrapConfig,
    source: S,
    state: BootstrapState,
}

impl Dispatcher<HttpSource> {
    /// Dispatcher over plain HTTP, per `config`.
    pub fn new(config: BootstrapConfig) -> Result<Self> {
        let source = HttpSource::new(config.fetch_timeout)?;
        Ok(Self::with_source(config, source))
    }
}

impl<S: ArtifactSource> Dispatcher<S> {
    /// Dispatcher over a caller-supplied artifact source.
    pub fn with_source(config: BootstrapConfig, source: S) -> Self {
        Self {
            config,
            source,
            state: BootstrapState::Pending,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Runs one launch invocation: resolve the channel, bootstrap if this
    /// process has not completed a sequence yet, compose the launch
    /// command, and hand it to `console` for execution.
    ///
    /// A bootstrap failure leaves the state `Pending` (the next invocation
    /// retries every resource) and is returned verbatim; the console's
    /// status is likewise propagated unchanged.
    pub fn launch(
        &mut self,
        console: &mut dyn DebugConsole,
        args: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<LaunchOutcome> {
        let channel = Channel::resolve(args);
        debug!(%channel, state = ?self.state, "launch invoked");

        let bootstrap = match self.state {
            BootstrapState::Complete => None,
            BootstrapState::Pending => {
                let report = bootstrap::run(&self.source, channel, &self.config, cancel)?;
                self.state = BootstrapState::Complete;
                Some(report)
            }
        };

        let command = build_launch_command(&self.config.scratch_dir, channel.script_name())?;
        console.execute(OutputControl::AllClients, &command, ExecutionLogging::NotLogged)?;

        Ok(LaunchOutcome {
            channel,
            command,
            bootstrap,
        })
    }
}

/// What a successful launch invocation did.
#[derive(Debug)]
pub struct LaunchOutcome {
    pub channel: Channel,
    /// The exact command string handed to the host console.
    pub command: String,
    /// Download report when this invocation ran the sequence, `None` when
    /// the gate skipped straight to launch.
    pub bootstrap: Option<BootstrapReport>,
}

/// The help companion command.
///
/// No argument prints the one-line summary and still tells the host to keep
/// searching other extensions; the literal `jsdbg` topic prints the detail
/// block; any other topic is passed on silently.
pub fn help(console: &mut dyn DebugConsole, args: Option<&str>) -> Result<HelpDisposition> {
    match args {
        None | Some("") => {
            console.output(HELP_SUMMARY)?;
            Ok(HelpDisposition::ContinueSearch)
        }
        Some("jsdbg") => {
            console.output(HELP_DETAIL)?;
            Ok(HelpDisposition::Handled)
        }
        Some(_) => Ok(HelpDisposition::ContinueSearch),
    }
}
