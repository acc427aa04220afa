use std::path::PathBuf;

use clap::Parser;

/// Bootstraps the JsDbg toolset out-of-band and reports the launch command
/// a debugger front end would execute.
#[derive(Parser, Debug)]
#[command(name = "jsdbg", version, about = "Fetches the JsDbg toolset and prints its launch command")]
pub struct Cli {
    /// Use the unstable release channel
    #[arg(short = 'u', long)]
    pub unstable: bool,

    /// Artifact base URL to download from
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory artifacts land in (defaults to the system temp directory)
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,

    /// Per-request network timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Emit the launch report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stable_channel_and_plain_output() {
        let cli = Cli::parse_from(["jsdbg"]);
        assert!(!cli.unstable);
        assert!(!cli.json);
        assert_eq!(cli.timeout_secs, 30);
        assert!(cli.base_url.is_none());
        assert!(cli.scratch_dir.is_none());
    }

    #[test]
    fn unstable_flag_parses_short_and_long() {
        assert!(Cli::parse_from(["jsdbg", "-u"]).unstable);
        assert!(Cli::parse_from(["jsdbg", "--unstable"]).unstable);
    }
}
