//! The single outbound OS call: associate (or remove) a custom icon for a
//! filesystem path.
//!
//! On macOS this goes through `NSWorkspace setIcon:forFile:options:`; other
//! platforms report `Unsupported` so the frontends stay buildable and the
//! GUI demo mode works everywhere.

use crate::icon::IconImage;
use std::fmt;
use std::path::Path;

/// Errors from the icon assignment call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Apply was invoked without both a folder and an image selected.
    SelectionIncomplete,
    /// The OS image type could not read the picked file.
    ImageRejected { path: String },
    /// The OS refused the icon change, typically a permissions problem.
    Rejected { path: String },
    /// Custom folder icons are a macOS capability.
    Unsupported,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::SelectionIncomplete => {
                write!(f, "select a folder and an image before applying")
            }
            ApplyError::ImageRejected { path } => {
                write!(f, "the system could not read '{}' as an image", path)
            }
            ApplyError::Rejected { path } => {
                write!(f, "the system refused the change for '{}'. Check permissions.", path)
            }
            ApplyError::Unsupported => {
                write!(f, "custom folder icons are only supported on macOS")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Set the custom icon of `folder` to `icon`.
///
/// The encoded file bytes are handed to `NSImage` unchanged, so the OS
/// decodes exactly the file the user picked.
#[cfg(target_os = "macos")]
pub fn set_folder_icon(folder: &Path, icon: &IconImage) -> Result<(), ApplyError> {
    use objc2::AllocAnyThread;
    use objc2_app_kit::NSImage;
    use objc2_foundation::NSData;

    let data = NSData::with_bytes(icon.file_bytes());
    let image =
        NSImage::initWithData(NSImage::alloc(), &data).ok_or_else(|| ApplyError::ImageRejected {
            path: icon.source().display().to_string(),
        })?;

    workspace_set_icon(folder, Some(&image))
}

/// Remove the custom icon of `folder`, restoring the default rendering.
#[cfg(target_os = "macos")]
pub fn clear_folder_icon(folder: &Path) -> Result<(), ApplyError> {
    workspace_set_icon(folder, None)
}

#[cfg(target_os = "macos")]
fn workspace_set_icon(
    folder: &Path,
    image: Option<&objc2_app_kit::NSImage>,
) -> Result<(), ApplyError> {
    use objc2_app_kit::{NSWorkspace, NSWorkspaceIconCreationOptions};
    use objc2_foundation::NSString;

    let path = NSString::from_str(&folder.to_string_lossy());
    let ok = unsafe {
        let workspace = NSWorkspace::sharedWorkspace();
        workspace.setIcon_forFile_options(image, &path, NSWorkspaceIconCreationOptions(0))
    };

    if ok {
        Ok(())
    } else {
        Err(ApplyError::Rejected {
            path: folder.display().to_string(),
        })
    }
}

#[cfg(not(target_os = "macos"))]
pub fn set_folder_icon(_folder: &Path, _icon: &IconImage) -> Result<(), ApplyError> {
    Err(ApplyError::Unsupported)
}

#[cfg(not(target_os = "macos"))]
pub fn clear_folder_icon(_folder: &Path) -> Result<(), ApplyError> {
    Err(ApplyError::Unsupported)
}
