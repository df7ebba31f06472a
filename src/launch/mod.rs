//! The launcher pipeline: resolve the platform, locate the binary, delegate.
//!
//! Strictly linear and synchronous; the only blocking step is the child
//! process itself.

use anyhow::Result;
use log::debug;
use std::ffi::OsString;

use crate::artifact;
use crate::delegate::{self, DelegationResult};
use crate::locator;
use crate::platform::HostIdentity;
use crate::runtime::Runtime;

/// Run the full pipeline and return the exit code the launcher must
/// terminate with. Errors are the launcher's own failures; a non-zero code
/// from the child comes back as `Ok`.
pub fn run<R: Runtime>(runtime: &R, args: &[OsString]) -> Result<i32> {
    let host = HostIdentity::detect();
    let artifact = artifact::resolve(&host)?;
    debug!(
        "Resolved {}-{} to artifact {}",
        host.os,
        host.arch,
        artifact.file_name()
    );

    let resolved = locator::locate(runtime, artifact)?;
    let result = delegate::delegate(&resolved, args)?;
    Ok(result.exit_code_or(DelegationResult::DEFAULT_ABNORMAL_EXIT))
}
