//! Error types for the launcher pipeline.
//!
//! Every variant is terminal for the current invocation: nothing is retried,
//! the user follows the printed remediation and runs again. A child process
//! that launched successfully and exited non-zero is NOT represented here;
//! its exit code is forwarded untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Where to ask for a new platform to be supported.
pub const ISSUES_URL: &str = "https://github.com/quill-cli/quill/issues";

#[derive(Debug, Error)]
pub enum LauncherError {
    /// No bundled binary exists for this host.
    #[error("it doesn't seem that quill supports your platform ({os}-{arch}) yet")]
    UnsupportedPlatform { os: String, arch: String },

    /// The host is supported but the bundled binary is not on disk.
    #[error("bundled binary not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    /// The binary exists but is not executable and chmod failed.
    #[error("binary is not executable and permissions could not be set automatically: {cause}")]
    PermissionRepairFailed {
        path: PathBuf,
        use_sudo: bool,
        cause: String,
    },

    /// The binary passed the permission check but still failed to start
    /// (wrong architecture, corrupted file, ...).
    #[error("failed to launch {}: {source}", path.display())]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    /// Exit status for the wrapper's own failures. Child exit codes are
    /// forwarded separately and never pass through here.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Extra diagnostic line with the exact remedial action, where one exists.
    pub fn remediation(&self) -> Option<String> {
        match self {
            LauncherError::UnsupportedPlatform { os, arch } => Some(format!(
                "Please open an issue at {} and include your platform: {}-{}.",
                ISSUES_URL, os, arch
            )),
            LauncherError::ArtifactMissing { .. } => {
                Some("Reinstalling the package should restore it.".to_string())
            }
            LauncherError::PermissionRepairFailed { path, use_sudo, .. } => {
                let sudo = if *use_sudo { "sudo " } else { "" };
                Some(format!("Please run: {}chmod +x \"{}\"", sudo, path.display()))
            }
            LauncherError::LaunchFailed { .. } => None,
        }
    }
}
