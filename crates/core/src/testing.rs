//! Shared mocks for unit tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::console::{DebugConsole, ExecutionLogging, OutputControl};
use crate::error::{Error, Result};
use crate::fetch::{ArtifactSource, RemoteArtifact};

/// Records every remote operation in order and can be told to fail one of
/// them. Operation keys are `fetch:{name}` and `read-descriptor`.
pub struct MockSource {
    descriptor: String,
    fail_on: Mutex<Option<String>>,
    ops: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new(descriptor: &str) -> Self {
        Self {
            descriptor: descriptor.to_string(),
            fail_on: Mutex::new(None),
            ops: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(descriptor: &str, op: &str) -> Self {
        let source = Self::new(descriptor);
        *source.fail_on.lock().unwrap() = Some(op.to_string());
        source
    }

    pub fn clear_failure(&self) {
        *self.fail_on.lock().unwrap() = None;
    }

    pub fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: &str) -> Result<()> {
        self.ops.lock().unwrap().push(op.to_string());
        if self.fail_on.lock().unwrap().as_deref() == Some(op) {
            return Err(Error::HttpStatus {
                url: format!("mock://{op}"),
                status: reqwest::StatusCode::NOT_FOUND,
            });
        }
        Ok(())
    }
}

impl ArtifactSource for MockSource {
    fn fetch(&self, artifact: &RemoteArtifact, dest_dir: &Path) -> Result<PathBuf> {
        self.record(&format!("fetch:{}", artifact.name))?;
        Ok(dest_dir.join(&artifact.name))
    }

    fn read_descriptor(&self, _url: &str) -> Result<String> {
        self.record("read-descriptor")?;
        Ok(self.descriptor.clone())
    }
}

/// Captures dispatched commands and help output.
#[derive(Default)]
pub struct MockConsole {
    pub executed: Vec<(OutputControl, String, ExecutionLogging)>,
    pub output: String,
    pub fail_status: Option<i32>,
}

impl DebugConsole for MockConsole {
    fn execute(
        &mut self,
        control: OutputControl,
        command: &str,
        logging: ExecutionLogging,
    ) -> Result<()> {
        self.executed.push((control, command.to_string(), logging));
        match self.fail_status {
            Some(status) => Err(Error::Console { status }),
            None => Ok(()),
        }
    }

    fn output(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}
