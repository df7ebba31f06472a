//! Host platform detection.
//!
//! The (OS, architecture) pair is captured once at startup and never
//! re-detected; the resolver matches it against the supported set.

/// The operating system and CPU architecture the launcher is running on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub os: String,
    pub arch: String,
}

impl HostIdentity {
    /// Detect the current host.
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "macos".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64".to_string()
        }
        #[cfg(target_arch = "aarch64")]
        {
            "aarch64".to_string()
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            std::env::consts::ARCH.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_identity_detect() {
        let host = HostIdentity::detect();

        // Should return non-empty strings
        assert!(!host.os.is_empty());
        assert!(!host.arch.is_empty());

        // On known platforms, verify expected values
        #[cfg(target_os = "macos")]
        assert_eq!(host.os, "macos");

        #[cfg(target_os = "linux")]
        assert_eq!(host.os, "linux");

        #[cfg(target_os = "windows")]
        assert_eq!(host.os, "windows");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(host.arch, "x86_64");

        #[cfg(target_arch = "aarch64")]
        assert_eq!(host.arch, "aarch64");
    }

    #[test]
    fn test_host_identity_clone_and_eq() {
        let h1 = HostIdentity {
            os: "linux".into(),
            arch: "x86_64".into(),
        };
        let h2 = h1.clone();

        assert_eq!(h1, h2);
    }
}
