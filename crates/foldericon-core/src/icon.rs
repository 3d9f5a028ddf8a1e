//! Icon image loading and .icns encoding.
//!
//! An [`IconImage`] keeps both the decoded pixels (for previews and icns
//! encoding) and the encoded file bytes as read from disk, which go to the
//! OS unchanged.

use icns::{IconFamily, PixelFormat};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Square sizes included when building an icon family.
pub const ICON_SIZES: &[u32] = &[16, 32, 128, 256, 512];

/// Extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp", "ico"];

/// Errors from loading or encoding an icon image.
#[derive(Debug)]
pub enum IconError {
    /// Failed to read the image file.
    Read(io::Error),
    /// The file bytes did not decode as a recognized image.
    Decode { path: String, reason: String },
    /// Failed to encode the icns data.
    IcnsEncode(String),
    /// Failed to write the icns file.
    Write(io::Error),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Read(e) => write!(f, "Failed to read image: {}", e),
            IconError::Decode { path, reason } => {
                write!(f, "Failed to decode '{}': {}", path, reason)
            }
            IconError::IcnsEncode(msg) => write!(f, "Icns encoding failed: {}", msg),
            IconError::Write(e) => write!(f, "Failed to write icns file: {}", e),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::Read(e) => Some(e),
            IconError::Write(e) => Some(e),
            _ => None,
        }
    }
}

/// A decoded icon image plus its original encoded bytes.
#[derive(Clone)]
pub struct IconImage {
    source: PathBuf,
    bytes: Vec<u8>,
    rgba: RgbaImage,
}

impl fmt::Debug for IconImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconImage")
            .field("source", &self.source)
            .field("width", &self.rgba.width())
            .field("height", &self.rgba.height())
            .finish_non_exhaustive()
    }
}

impl IconImage {
    /// Read and decode an image file.
    pub fn load(path: &Path) -> Result<IconImage, IconError> {
        let bytes = fs::read(path).map_err(IconError::Read)?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| IconError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(IconImage {
            source: path.to_path_buf(),
            bytes,
            rgba: decoded.to_rgba8(),
        })
    }

    /// Path the image was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The original encoded file contents.
    pub fn file_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Decoded RGBA pixels.
    pub fn rgba(&self) -> &RgbaImage {
        &self.rgba
    }

    /// Build an icon family with the standard square sizes.
    ///
    /// The source is resized per size, so arbitrary input dimensions still
    /// produce a valid family.
    pub fn to_icon_family(&self) -> Result<IconFamily, IconError> {
        let mut family = IconFamily::new();
        for &size in ICON_SIZES {
            let resized = imageops::resize(&self.rgba, size, size, FilterType::Lanczos3);
            let element = icns::Image::from_data(PixelFormat::RGBA, size, size, resized.into_raw())
                .map_err(|e| IconError::IcnsEncode(e.to_string()))?;
            family
                .add_icon(&element)
                .map_err(|e| IconError::IcnsEncode(e.to_string()))?;
        }
        Ok(family)
    }

    /// Encode the image as an .icns file.
    pub fn write_icns(&self, path: &Path) -> Result<(), IconError> {
        let family = self.to_icon_family()?;
        let mut file = File::create(path).map_err(IconError::Write)?;
        family
            .write(&mut file)
            .map_err(|e| IconError::IcnsEncode(e.to_string()))?;
        Ok(())
    }
}
