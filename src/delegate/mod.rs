//! Handing execution off to the bundled binary.
//!
//! The child inherits the launcher's standard streams and runs to completion;
//! nothing is buffered, filtered, or timed out. Interrupt signals reach the
//! child through normal process-group delivery. The launcher's only output
//! contribution on this path is the child's own exit status.

use anyhow::Result;
use log::debug;
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::LauncherError;
use crate::locator::ResolvedArtifact;

/// Termination status of the delegated binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegationResult {
    /// The child's numeric exit code, absent when it was terminated
    /// abnormally (e.g. by a signal).
    pub exit_code: Option<i32>,
    /// The signal that terminated the child, Unix only.
    pub signal: Option<i32>,
}

impl DelegationResult {
    /// Exit code the launcher reports when the child died without one.
    ///
    /// Inherited convention from the original launcher; callers pass it to
    /// [`DelegationResult::exit_code_or`] explicitly so the fallback stays
    /// visible and overridable rather than an implicit success.
    pub const DEFAULT_ABNORMAL_EXIT: i32 = 0;

    fn from_status(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            signal: Self::signal(status),
        }
    }

    #[cfg(unix)]
    fn signal(status: ExitStatus) -> Option<i32> {
        use std::os::unix::process::ExitStatusExt;
        status.signal()
    }

    #[cfg(not(unix))]
    fn signal(_status: ExitStatus) -> Option<i32> {
        None
    }

    /// The child's exit code, or `fallback` when it terminated abnormally.
    pub fn exit_code_or(&self, fallback: i32) -> i32 {
        self.exit_code.unwrap_or(fallback)
    }
}

/// Run the binary synchronously with every argument forwarded unchanged and
/// standard streams inherited. Failure to start the child at all is
/// `LaunchFailed`; a child that ran and exited non-zero is a normal result.
pub fn delegate(artifact: &ResolvedArtifact, args: &[OsString]) -> Result<DelegationResult> {
    debug!(
        "Delegating to {:?} with {} argument(s)",
        artifact.path,
        args.len()
    );
    let status = Command::new(&artifact.path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LauncherError::LaunchFailed {
            path: artifact.path.clone(),
            source,
        })?;

    debug!("Child exited with {:?}", status);
    Ok(DelegationResult::from_status(status))
}
