//! The once-per-process download sequence and its gate.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::channel::{Channel, EXECUTABLE_NAME, SUPPORT_LIBRARY_NAME};
use crate::config::BootstrapConfig;
use crate::error::{Error, Result};
use crate::fetch::{ArtifactSource, RemoteArtifact};

/// Whether the download sequence still has to run in this process.
///
/// Starts `Pending`, flips to `Complete` exactly once after a fully
/// successful sequence, and is never reset. A failed sequence leaves it
/// `Pending` so the next invocation retries every resource from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapState {
    #[default]
    Pending,
    Complete,
}

/// Cooperative cancellation for a bootstrap run.
///
/// Checked between sequence steps; a transfer already in flight is bounded
/// by the fetch timeout instead.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// What a successful sequence downloaded.
#[derive(Clone, Debug)]
pub struct BootstrapReport {
    /// Archive name the version descriptor resolved to, verbatim.
    pub archive_name: String,
    /// Files written into the scratch directory, in download order.
    pub files: Vec<PathBuf>,
}

/// Runs the full six-resource sequence for `channel`, strictly in order.
///
/// Four fixed-name artifacts are downloaded first (tool executable, support
/// library, channel script, version descriptor), then the descriptor's
/// content is read fresh over the network, then the archive it names is
/// downloaded. The first failure aborts the remaining steps; files already
/// written are left in place and overwritten by the next attempt.
pub fn run<S>(
    source: &S,
    channel: Channel,
    config: &BootstrapConfig,
    cancel: &CancelToken,
) -> Result<BootstrapReport>
where
    S: ArtifactSource + ?Sized,
{
    let fixed = [
        EXECUTABLE_NAME,
        SUPPORT_LIBRARY_NAME,
        channel.script_name(),
        channel.version_descriptor_name(),
    ];

    let mut files = Vec::with_capacity(fixed.len() + 1);
    for name in fixed {
        cancel.check()?;
        let artifact = RemoteArtifact::new(name, &config.base_url);
        files.push(source.fetch(&artifact, &config.scratch_dir)?);
    }

    cancel.check()?;
    // Read fresh on every attempt; the remote archive name can change
    // between releases.
    let archive_name =
        source.read_descriptor(&channel.version_descriptor_url(&config.base_url))?;
    debug!(archive = %archive_name, "version descriptor resolved");

    cancel.check()?;
    let archive = RemoteArtifact::new(archive_name.as_str(), &config.base_url);
    files.push(source.fetch(&archive, &config.scratch_dir)?);

    info!(%channel, files = files.len(), "bootstrap sequence complete");
    Ok(BootstrapReport {
        archive_name,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSource;

    fn config() -> BootstrapConfig {
        BootstrapConfig::default()
            .with_base_url("http://localhost:9/tools")
            .with_scratch_dir("/scratch")
    }

    #[test]
    fn sequence_runs_in_fixed_order() {
        let source = MockSource::new("tools-v42.zip");
        let report = run(&source, Channel::Stable, &config(), &CancelToken::new()).unwrap();

        assert_eq!(
            source.ops(),
            vec![
                "fetch:JsDbg.exe",
                "fetch:JsDbg.Remoting.dll",
                "fetch:jsdbg.script",
                "fetch:jsdbg-version.txt",
                "read-descriptor",
                "fetch:tools-v42.zip",
            ]
        );
        assert_eq!(report.archive_name, "tools-v42.zip");
        assert_eq!(report.files.len(), 5);
    }

    #[test]
    fn unstable_sequence_uses_unstable_names() {
        let source = MockSource::new("x.zip");
        run(&source, Channel::Unstable, &config(), &CancelToken::new()).unwrap();

        let ops = source.ops();
        assert!(ops.contains(&"fetch:jsdbg-UNSTABLE.script".to_string()));
        assert!(ops.contains(&"fetch:jsdbg-UNSTABLE-version.txt".to_string()));
    }

    #[test]
    fn first_failure_stops_the_sequence() {
        let source = MockSource::failing("tools-v42.zip", "fetch:JsDbg.Remoting.dll");
        let err = run(&source, Channel::Stable, &config(), &CancelToken::new()).unwrap_err();

        assert!(matches!(err, Error::HttpStatus { .. }));
        assert_eq!(source.ops(), vec!["fetch:JsDbg.exe", "fetch:JsDbg.Remoting.dll"]);
    }

    #[test]
    fn descriptor_content_is_used_verbatim() {
        let source = MockSource::new("  spaced archive name.zip");
        let report = run(&source, Channel::Stable, &config(), &CancelToken::new()).unwrap();

        assert_eq!(report.archive_name, "  spaced archive name.zip");
        assert!(source.ops().contains(&"fetch:  spaced archive name.zip".to_string()));
    }

    #[test]
    fn empty_descriptor_is_an_opaque_name() {
        let source = MockSource::new("");
        let report = run(&source, Channel::Stable, &config(), &CancelToken::new()).unwrap();

        assert_eq!(report.archive_name, "");
        assert_eq!(source.ops().last().unwrap(), "fetch:");
    }

    #[test]
    fn cancelled_token_aborts_before_any_download() {
        let source = MockSource::new("tools-v42.zip");
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = run(&source, Channel::Stable, &config(), &cancel).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(source.ops().is_empty());
    }
}
