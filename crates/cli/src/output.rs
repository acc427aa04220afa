//! Launch report rendering.

use std::path::{Path, PathBuf};

use jsdbg_ext::LaunchOutcome;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    channel: &'a str,
    script: &'a str,
    command: &'a str,
    scratch_dir: &'a Path,
    bootstrapped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    archive: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    downloaded: Vec<&'a Path>,
}

impl<'a> Report<'a> {
    fn from_outcome(outcome: &'a LaunchOutcome, scratch_dir: &'a Path) -> Self {
        Self {
            channel: outcome.channel.label(),
            script: outcome.channel.script_name(),
            command: &outcome.command,
            scratch_dir,
            bootstrapped: outcome.bootstrap.is_some(),
            archive: outcome.bootstrap.as_ref().map(|b| b.archive_name.as_str()),
            downloaded: outcome
                .bootstrap
                .as_ref()
                .map(|b| b.files.iter().map(PathBuf::as_path).collect())
                .unwrap_or_default(),
        }
    }
}

pub fn print_report(outcome: &LaunchOutcome, scratch_dir: &Path, json: bool) -> anyhow::Result<()> {
    let report = Report::from_outcome(outcome, scratch_dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("channel:  {}", report.channel);
    if let Some(archive) = report.archive {
        println!("archive:  {archive}");
    }
    println!("scratch:  {}", scratch_dir.display());
    println!("command:  {}", report.command);
    Ok(())
}
