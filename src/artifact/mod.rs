//! Mapping from a host platform to the bundled binary that can run on it.
//!
//! The table is a closed match over (OS, architecture) pairs: adding a new
//! platform means adding an [`ArtifactId`] variant and one match arm, which
//! keeps the mapping exhaustive by construction. Matching is exact-pair only;
//! an unsupported architecture on an otherwise-supported OS is still
//! unsupported. Partial matches risk running an incompatible binary.

use crate::error::LauncherError;
use crate::platform::HostIdentity;

/// Base name shared by the launcher and the bundled binaries.
pub const BIN_BASE: &str = "quill";

/// One prebuilt binary variant, named by its target triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactId {
    LinuxX64,
    MacosX64,
    MacosArm64,
    WindowsX64,
}

impl ArtifactId {
    pub const ALL: [ArtifactId; 4] = [
        ArtifactId::LinuxX64,
        ArtifactId::MacosX64,
        ArtifactId::MacosArm64,
        ArtifactId::WindowsX64,
    ];

    /// The target triple the binary was built for. Stable across releases;
    /// packaging stages one file per triple under this name.
    pub fn target_triple(self) -> &'static str {
        match self {
            ArtifactId::LinuxX64 => "x86_64-unknown-linux-gnu",
            ArtifactId::MacosX64 => "x86_64-apple-darwin",
            ArtifactId::MacosArm64 => "aarch64-apple-darwin",
            ArtifactId::WindowsX64 => "x86_64-pc-windows-msvc",
        }
    }

    /// File name of the bundled binary, e.g. `quill-x86_64-unknown-linux-gnu`.
    pub fn file_name(self) -> String {
        let suffix = match self {
            ArtifactId::WindowsX64 => ".exe",
            _ => "",
        };
        format!("{}-{}{}", BIN_BASE, self.target_triple(), suffix)
    }
}

/// Map the host to its artifact, or fail with `UnsupportedPlatform`.
///
/// Pure: no filesystem access, no randomness.
pub fn resolve(host: &HostIdentity) -> Result<ArtifactId, LauncherError> {
    match (host.os.as_str(), host.arch.as_str()) {
        ("linux", "x86_64") => Ok(ArtifactId::LinuxX64),
        ("macos", "x86_64") => Ok(ArtifactId::MacosX64),
        ("macos", "aarch64") => Ok(ArtifactId::MacosArm64),
        ("windows", "x86_64") => Ok(ArtifactId::WindowsX64),
        _ => Err(LauncherError::UnsupportedPlatform {
            os: host.os.clone(),
            arch: host.arch.clone(),
        }),
    }
}
