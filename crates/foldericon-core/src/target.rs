//! Target-folder checks to keep icon changes away from sensitive locations.

use std::fmt;
use std::path::Path;

/// A reason the target folder cannot take a custom icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetViolation {
    /// Path does not exist
    Missing { path: String },
    /// Path exists but is not a directory
    NotADirectory { path: String },
    /// Path resolves to a protected system location
    ProtectedPath { path: String, reason: String },
}

impl fmt::Display for TargetViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetViolation::Missing { path } => write!(f, "{}: no such folder", path),
            TargetViolation::NotADirectory { path } => write!(f, "{}: not a folder", path),
            TargetViolation::ProtectedPath { path, reason } => write!(f, "{}: {}", path, reason),
        }
    }
}

impl std::error::Error for TargetViolation {}

/// Check that a folder exists, is a directory, and is not a protected
/// system location.
pub fn check_target(folder: &Path) -> Result<(), TargetViolation> {
    if !folder.exists() {
        return Err(TargetViolation::Missing {
            path: folder.display().to_string(),
        });
    }
    if !folder.is_dir() {
        return Err(TargetViolation::NotADirectory {
            path: folder.display().to_string(),
        });
    }

    // Resolve symlinks so the protection check sees the real location
    let resolved = folder
        .canonicalize()
        .unwrap_or_else(|_| folder.to_path_buf());

    if let Some(reason) = is_protected_path(&resolved) {
        return Err(TargetViolation::ProtectedPath {
            path: folder.display().to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(())
}

/// Check if a path is in a protected location (platform-specific).
#[cfg(target_os = "macos")]
fn is_protected_path(path: &Path) -> Option<&'static str> {
    let path_str = path.to_string_lossy();

    // Check for .app bundle interiors
    if path_str.contains(".app/") {
        return Some("Cannot change icons inside .app bundles");
    }

    // Check system directories
    let protected_prefixes = [
        "/System",
        "/Library",
        "/usr",
        "/bin",
        "/sbin",
        "/var",
        "/etc",
        "/private",
    ];

    for prefix in protected_prefixes {
        if path_str.starts_with(prefix) {
            // Exception: /usr/local is allowed
            if prefix == "/usr" && path_str.starts_with("/usr/local") {
                continue;
            }
            return Some("Cannot change icons of system directories");
        }
    }

    // Check ~/Library
    if let Some(home) = dirs::home_dir() {
        if path.starts_with(home.join("Library")) {
            return Some("Cannot change icons inside ~/Library");
        }
    }

    None
}

#[cfg(target_os = "windows")]
fn is_protected_path(path: &Path) -> Option<&'static str> {
    let path_str = path.to_string_lossy().to_lowercase();

    let protected_patterns = [
        "c:\\windows",
        "c:\\program files",
        "c:\\program files (x86)",
        "c:\\programdata",
    ];

    for pattern in protected_patterns {
        if path_str.starts_with(pattern) {
            return Some("Cannot change icons of Windows system directories");
        }
    }

    None
}

#[cfg(target_os = "linux")]
fn is_protected_path(path: &Path) -> Option<&'static str> {
    let path_str = path.to_string_lossy();

    let protected_prefixes = [
        "/usr", "/bin", "/sbin", "/lib", "/lib64", "/etc", "/var", "/boot", "/opt",
    ];

    for prefix in protected_prefixes {
        if path_str.starts_with(prefix) {
            // Exception: /usr/local is allowed
            if prefix == "/usr" && path_str.starts_with("/usr/local") {
                continue;
            }
            return Some("Cannot change icons of system directories");
        }
    }

    None
}

// Fallback for other platforms
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn is_protected_path(_path: &Path) -> Option<&'static str> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn ordinary_folder_is_allowed() {
        let dir = tempdir().unwrap();
        assert!(check_target(dir.path()).is_ok());
    }

    #[test]
    fn missing_path_is_rejected() {
        let result = check_target(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(TargetViolation::Missing { .. })));
    }

    #[test]
    fn file_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"data").unwrap();

        let result = check_target(&file);
        assert!(matches!(result, Err(TargetViolation::NotADirectory { .. })));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_app_bundle_interior_is_blocked() {
        let path = Path::new("/Applications/Safari.app/Contents/Resources");
        assert!(is_protected_path(path).is_some());
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_system_dirs_are_blocked() {
        assert!(is_protected_path(Path::new("/System/Library")).is_some());
        assert!(is_protected_path(Path::new("/usr/bin")).is_some());
        assert!(is_protected_path(Path::new("/Library/Preferences")).is_some());
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_usr_local_is_allowed() {
        assert!(is_protected_path(Path::new("/usr/local/share")).is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_system_dirs_are_blocked() {
        assert!(is_protected_path(Path::new("/usr/share")).is_some());
        assert!(is_protected_path(Path::new("/etc")).is_some());
        assert!(is_protected_path(Path::new("/var/log")).is_some());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_usr_local_is_allowed() {
        assert!(is_protected_path(Path::new("/usr/local/share")).is_none());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_system_dirs_are_blocked() {
        assert!(is_protected_path(Path::new("C:\\Windows\\System32")).is_some());
        assert!(is_protected_path(Path::new("C:\\Program Files\\App")).is_some());
    }
}
