//! Locating the bundled binary and guarding its execute permission.
//!
//! The binary's path is deterministic: the directory holding the launcher's
//! own executable, joined with the artifact file name. No search path, no
//! environment override. The permission guard runs only on platforms with a
//! permission-bit model and repairs a missing owner-execute bit at most once
//! per invocation. The check-then-repair sequence is not atomic against
//! concurrent modification of the file; single-user CLI invocation is
//! assumed.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactId;
use crate::error::LauncherError;
use crate::runtime::Runtime;

/// Owner-execute permission bit.
const OWNER_EXECUTE: u32 = 0o100;

/// Mode applied when repairing a non-executable binary.
const EXECUTABLE_MODE: u32 = 0o755;

/// A binary that exists on disk and is ready to be handed off to.
///
/// `permissions_verified` is false when the platform has no permission bits
/// to verify. Created once per invocation, consumed by the delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub path: PathBuf,
    pub permissions_verified: bool,
}

/// Resolve the artifact to a path next to the launcher and make sure it can
/// run. Fails with `ArtifactMissing` or `PermissionRepairFailed` before any
/// execution is attempted.
pub fn locate<R: Runtime>(runtime: &R, artifact: ArtifactId) -> Result<ResolvedArtifact> {
    let exe = runtime.current_exe()?;
    let install_dir = exe
        .parent()
        .context("Launcher executable has no parent directory")?;
    let path = install_dir.join(artifact.file_name());
    debug!("Expecting {:?} binary at {:?}", artifact, path);

    if !runtime.is_file(&path) {
        return Err(LauncherError::ArtifactMissing { path }.into());
    }

    let permissions_verified = ensure_executable(runtime, &path)?;
    Ok(ResolvedArtifact {
        path,
        permissions_verified,
    })
}

/// Idempotent: an already-executable file is left untouched.
fn ensure_executable<R: Runtime>(runtime: &R, path: &Path) -> Result<bool> {
    let mode = match runtime.file_mode(path) {
        Ok(Some(mode)) => mode,
        Ok(None) => {
            debug!("No permission-bit model on this platform, skipping executable check");
            return Ok(false);
        }
        Err(err) => return Err(repair_failed(runtime, path, &err).into()),
    };

    if mode & OWNER_EXECUTE != 0 {
        return Ok(true);
    }

    debug!(
        "{:?} has mode {:o}, setting execute permissions",
        path, mode
    );
    if let Err(err) = runtime.set_permissions(path, EXECUTABLE_MODE) {
        return Err(repair_failed(runtime, path, &err).into());
    }
    Ok(true)
}

fn repair_failed<R: Runtime>(runtime: &R, path: &Path, cause: &anyhow::Error) -> LauncherError {
    LauncherError::PermissionRepairFailed {
        path: path.to_path_buf(),
        use_sudo: !runtime.is_privileged(),
        cause: format!("{:#}", cause),
    }
}
