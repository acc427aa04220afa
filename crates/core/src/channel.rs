//! Release-channel resolution.
//!
//! The invocation argument selects one of two release tracks; everything a
//! channel determines (script name, script URL, version-descriptor URL) is
//! derived from fixed templates with no user input interpolated.

use std::fmt;

/// Name of the tool executable served under the artifact base URL.
pub const EXECUTABLE_NAME: &str = "JsDbg.exe";

/// Name of the remoting support library served under the artifact base URL.
pub const SUPPORT_LIBRARY_NAME: &str = "JsDbg.Remoting.dll";

/// A release track of the remote toolset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Channel {
    #[default]
    Stable,
    Unstable,
}

impl Channel {
    /// Resolves the channel from the raw argument string passed to the
    /// extension command.
    ///
    /// An argument whose first two characters are `-u` (case-sensitive
    /// prefix match, no further parsing) selects [`Channel::Unstable`];
    /// anything else, including an absent or empty argument, selects
    /// [`Channel::Stable`]. Resolution is total and never fails.
    pub fn resolve(args: Option<&str>) -> Self {
        match args {
            Some(args) if args.starts_with("-u") => Channel::Unstable,
            _ => Channel::Stable,
        }
    }

    /// File name of this channel's launch script.
    pub fn script_name(self) -> &'static str {
        match self {
            Channel::Stable => "jsdbg.script",
            Channel::Unstable => "jsdbg-UNSTABLE.script",
        }
    }

    /// File name of this channel's version descriptor.
    pub fn version_descriptor_name(self) -> &'static str {
        match self {
            Channel::Stable => "jsdbg-version.txt",
            Channel::Unstable => "jsdbg-UNSTABLE-version.txt",
        }
    }

    /// URL of this channel's launch script under `base_url`.
    pub fn script_url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.script_name())
    }

    /// URL of this channel's version descriptor under `base_url`.
    pub fn version_descriptor_url(self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.version_descriptor_name()
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Unstable => "unstable",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
