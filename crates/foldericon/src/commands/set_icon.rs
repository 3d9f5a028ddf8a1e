use std::fmt;
use std::path::Path;

use foldericon_core::icon::{IconError, IconImage};
use foldericon_core::target::{self, TargetViolation};
use foldericon_core::workspace::{self, ApplyError};

/// Errors from the `set` command.
#[derive(Debug)]
pub enum SetIconError {
    /// Target folder failed validation.
    Target(TargetViolation),
    /// Image could not be read or decoded.
    Icon(IconError),
    /// The OS call failed.
    Apply(ApplyError),
}

impl fmt::Display for SetIconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetIconError::Target(e) => write!(f, "{}", e),
            SetIconError::Icon(e) => write!(f, "{}", e),
            SetIconError::Apply(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SetIconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetIconError::Target(e) => Some(e),
            SetIconError::Icon(e) => Some(e),
            SetIconError::Apply(e) => Some(e),
        }
    }
}

impl From<TargetViolation> for SetIconError {
    fn from(e: TargetViolation) -> Self {
        SetIconError::Target(e)
    }
}

impl From<IconError> for SetIconError {
    fn from(e: IconError) -> Self {
        SetIconError::Icon(e)
    }
}

impl From<ApplyError> for SetIconError {
    fn from(e: ApplyError) -> Self {
        SetIconError::Apply(e)
    }
}

/// Set a folder's custom icon from an image file.
///
/// Workflow:
/// 1. Validate the target folder (exists, directory, not protected)
/// 2. Load and decode the image
/// 3. Make the OS call
pub fn run(folder: &Path, image: &Path) -> Result<(), SetIconError> {
    target::check_target(folder)?;

    println!("Loading {}...", image.display());
    let icon = IconImage::load(image)?;
    println!("  {}x{} pixels", icon.width(), icon.height());

    workspace::set_folder_icon(folder, &icon)?;
    println!("Icon set for {}", folder.display());

    Ok(())
}
