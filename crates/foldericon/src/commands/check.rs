use std::path::Path;

use foldericon_core::target::{self, TargetViolation};

/// Validate that a folder can take a custom icon.
///
/// Runs the same checks `set` runs before touching anything: the path must
/// exist, be a directory, and not be a protected system location.
pub fn run(folder: &Path) -> Result<(), TargetViolation> {
    target::check_target(folder)?;
    println!("{} can take a custom icon", folder.display());
    Ok(())
}
