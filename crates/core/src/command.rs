//! Launch command composition.

use std::path::Path;

use crate::error::{Error, Result};

/// Marker prefix the host console recognizes as "run this script file".
pub const COMMAND_PREFIX: &str = "$$><";

/// Longest script path the composed command may carry.
pub const MAX_SCRIPT_PATH_LEN: usize = 260;

/// Composes the launch command: the marker prefix immediately followed by
/// the script's fully qualified path inside `scratch_dir`. No separator is
/// inserted beyond the path join, and nothing is escaped.
///
/// # Errors
///
/// Returns [`Error::CommandTooLong`] when the joined script path exceeds
/// [`MAX_SCRIPT_PATH_LEN`] bytes.
pub fn build_launch_command(scratch_dir: &Path, script_name: &str) -> Result<String> {
    let script_path = scratch_dir.join(script_name);
    let script_path = script_path.to_string_lossy();
    if script_path.len() > MAX_SCRIPT_PATH_LEN {
        return Err(Error::CommandTooLong {
            len: script_path.len(),
            max: MAX_SCRIPT_PATH_LEN,
        });
    }
    Ok(format!("{COMMAND_PREFIX}{script_path}"))
}
