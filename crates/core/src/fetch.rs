//! Artifact downloads and the version-descriptor read.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// A single named remote resource, immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteArtifact {
    pub name: String,
    pub url: String,
}

impl RemoteArtifact {
    /// Pairs a file name with its URL under `base_url`. The name is used
    /// verbatim, both in the URL and as the local file name.
    pub fn new(name: impl Into<String>, base_url: &str) -> Self {
        let name = name.into();
        let url = format!("{}/{}", base_url.trim_end_matches('/'), name);
        Self { name, url }
    }
}

/// Network seam of the bootstrap sequence.
///
/// The production implementation is [`HttpSource`]; tests substitute their
/// own to drive the sequence without a network.
pub trait ArtifactSource {
    /// Downloads one artifact into `dest_dir`, creating or overwriting the
    /// file named after the artifact. Blocks until the transfer completes or
    /// fails; there is no retry and no partial resume.
    fn fetch(&self, artifact: &RemoteArtifact, dest_dir: &Path) -> Result<PathBuf>;

    /// Reads a small remote text resource and returns its content verbatim,
    /// with no trimming or validation. An empty body yields an empty string.
    fn read_descriptor(&self, url: &str) -> Result<String>;
}

/// [`ArtifactSource`] over plain anonymous HTTP.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Builds a client with `timeout` applied both to connection
    /// establishment and to each whole request.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

impl ArtifactSource for HttpSource {
    fn fetch(&self, artifact: &RemoteArtifact, dest_dir: &Path) -> Result<PathBuf> {
        debug!(name = %artifact.name, url = %artifact.url, "downloading artifact");
        let response = self.get(&artifact.url)?;
        let body = response.bytes().map_err(|source| Error::Network {
            url: artifact.url.clone(),
            source,
        })?;

        let path = dest_dir.join(&artifact.name);
        fs::write(&path, &body).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = body.len(), "artifact written");
        Ok(path)
    }

    fn read_descriptor(&self, url: &str) -> Result<String> {
        debug!(url, "reading version descriptor");
        let response = self.get(url)?;
        let body = response.bytes().map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;
        // The content is an exact file name; nothing is trimmed.
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_url_joins_base_and_name() {
        let artifact = RemoteArtifact::new("tools-v42.zip", "http://example.test/tools");
        assert_eq!(artifact.name, "tools-v42.zip");
        assert_eq!(artifact.url, "http://example.test/tools/tools-v42.zip");
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let artifact = RemoteArtifact::new("JsDbg.exe", "http://example.test/tools/");
        assert_eq!(artifact.url, "http://example.test/tools/JsDbg.exe");
    }

    #[test]
    fn empty_name_is_kept_verbatim() {
        // An empty version descriptor produces an empty archive name; the
        // pair is still constructed and fails downstream at fetch time.
        let artifact = RemoteArtifact::new("", "http://example.test/tools");
        assert_eq!(artifact.url, "http://example.test/tools/");
        assert_eq!(artifact.name, "");
    }
}
