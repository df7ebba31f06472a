//! File system operations (existence, permission bits).

use anyhow::Result;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn is_file_impl(&self, path: &Path) -> bool {
        path.is_file()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn file_mode_impl(&self, path: &Path) -> Result<Option<u32>> {
        #[cfg(unix)]
        {
            use anyhow::Context;
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).context("Failed to read file metadata")?;
            Ok(Some(metadata.permissions().mode()))
        }
        #[cfg(not(unix))]
        {
            let _ = path; // Suppress unused warnings on non-Unix
            Ok(None)
        }
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn set_permissions_impl(&self, path: &Path, mode: u32) -> Result<()> {
        #[cfg(unix)]
        {
            use anyhow::Context;
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(mode);
            std::fs::set_permissions(path, permissions).context("Failed to set permissions")?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, mode); // Suppress unused warnings on non-Unix
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_is_file() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary");

        assert!(!runtime.is_file(&file_path));
        std::fs::write(&file_path, b"#!/bin/sh\n").unwrap();
        assert!(runtime.is_file(&file_path));

        // A directory is not a regular file
        assert!(!runtime.is_file(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_runtime_mode_round_trip() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary");
        std::fs::write(&file_path, b"#!/bin/sh\n").unwrap();

        runtime.set_permissions(&file_path, 0o644).unwrap();
        let mode = runtime.file_mode(&file_path).unwrap().unwrap();
        assert_eq!(mode & 0o777, 0o644);

        runtime.set_permissions(&file_path, 0o755).unwrap();
        let mode = runtime.file_mode(&file_path).unwrap().unwrap();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_real_runtime_mode_of_missing_file() {
        let runtime = RealRuntime;
        let result = runtime.file_mode(std::path::Path::new("/nonexistent/path/binary"));
        #[cfg(unix)]
        assert!(result.is_err());
        #[cfg(not(unix))]
        assert_eq!(result.unwrap(), None);
    }
}
