use std::path::Path;

use foldericon_core::icon::{IconError, IconImage};

/// Convert an image file to an .icns icon file.
pub fn run(image: &Path, output: &Path) -> Result<(), IconError> {
    let icon = IconImage::load(image)?;
    icon.write_icns(output)?;
    println!("Created {}", output.display());
    Ok(())
}
