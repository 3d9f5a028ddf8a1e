use std::fmt;
use std::path::Path;

use foldericon_core::target::{self, TargetViolation};
use foldericon_core::workspace::{self, ApplyError};

/// Errors from the `clear` command.
#[derive(Debug)]
pub enum ClearIconError {
    /// Target folder failed validation.
    Target(TargetViolation),
    /// The OS call failed.
    Apply(ApplyError),
}

impl fmt::Display for ClearIconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearIconError::Target(e) => write!(f, "{}", e),
            ClearIconError::Apply(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClearIconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClearIconError::Target(e) => Some(e),
            ClearIconError::Apply(e) => Some(e),
        }
    }
}

impl From<TargetViolation> for ClearIconError {
    fn from(e: TargetViolation) -> Self {
        ClearIconError::Target(e)
    }
}

impl From<ApplyError> for ClearIconError {
    fn from(e: ApplyError) -> Self {
        ClearIconError::Apply(e)
    }
}

/// Remove a folder's custom icon, restoring the default rendering.
pub fn run(folder: &Path) -> Result<(), ClearIconError> {
    target::check_target(folder)?;
    workspace::clear_folder_icon(folder)?;
    println!("Custom icon removed for {}", folder.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_folder_is_rejected() {
        let result = run(Path::new("/nonexistent/folder"));
        assert!(matches!(
            result,
            Err(ClearIconError::Target(TargetViolation::Missing { .. }))
        ));
    }

    #[test]
    fn file_target_is_rejected() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("plain.txt");
        fs::write(&target, b"data").unwrap();

        let result = run(&target);
        assert!(matches!(
            result,
            Err(ClearIconError::Target(TargetViolation::NotADirectory { .. }))
        ));
    }
}
