use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed endpoint every channel's artifacts are served from.
pub const DEFAULT_BASE_URL: &str = "https://jsdbg.blob.core.windows.net/tools";

/// Default per-request network timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a bootstrap run.
///
/// The defaults reproduce the fixed naming convention: artifacts come from
/// [`DEFAULT_BASE_URL`] and land flat in the platform temp directory. The
/// overrides exist for the standalone launcher's flags and for tests.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Base URL artifacts and version descriptors are fetched from.
    pub base_url: String,
    /// Directory downloaded artifacts land in, flat, named identically to
    /// their remote counterparts.
    pub scratch_dir: PathBuf,
    /// Connect and whole-request timeout applied to every network operation.
    pub fetch_timeout: Duration,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            scratch_dir: env::temp_dir(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl BootstrapConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_scratch_dir(mut self, scratch_dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = scratch_dir.into();
        self
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}
