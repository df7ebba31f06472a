//! Runtime abstraction for system operations.
//!
//! Trait-based abstraction over the handful of system calls the launcher
//! makes, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Process environment (own executable path, privilege)
//! - `fs` - File system operations (existence, permission bits)

mod env;
mod fs;

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    /// Path of the launcher's own executable. The bundled binaries live in
    /// the same directory.
    fn current_exe(&self) -> Result<PathBuf>;

    fn is_file(&self, path: &Path) -> bool;

    /// Permission bits of the file, or `None` on platforms without a
    /// permission-bit model (Windows). Callers skip the permission guard
    /// entirely when this is `None`.
    fn file_mode(&self, path: &Path) -> Result<Option<u32>>;

    /// Set file permissions (mode) on Unix systems. No-op on Windows.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Privilege
    fn is_privileged(&self) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn file_mode(&self, path: &Path) -> Result<Option<u32>> {
        self.file_mode_impl(path)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    fn is_privileged(&self) -> bool {
        self.is_privileged_impl()
    }
}
