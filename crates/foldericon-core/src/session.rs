//! Selection state for the pick-folder / pick-image / apply workflow.

use crate::icon::IconImage;
use crate::workspace::ApplyError;
use std::fmt;
use std::path::{Path, PathBuf};

/// The pair of user picks an apply operates on.
///
/// Both fields start empty and are overwritten (not accumulated) whenever
/// the user makes a new pick.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub folder: Option<PathBuf>,
    pub icon: Option<IconImage>,
}

/// Human-readable status line shown after every operation.
///
/// Carries no program logic; purely user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing picked yet
    Idle,
    /// A folder is selected, no image yet
    FolderSelected,
    /// An image is loaded and ready
    ImageLoaded,
    /// The icon was applied successfully
    Applied { folder: String },
    /// The OS call failed
    ApplyFailed { reason: String },
    /// The picked file did not decode as an image
    ImageLoadFailed { reason: String },
    /// The picked folder failed validation
    FolderRejected { reason: String },
    /// The folder preview could not be read
    PreviewFailed,
    /// A custom icon was removed
    IconRemoved { folder: String },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "Select a folder to begin"),
            Status::FolderSelected => write!(f, "Folder selected. Now pick an image."),
            Status::ImageLoaded => write!(f, "Image loaded. Ready to apply!"),
            Status::Applied { folder } => write!(f, "Success! Icon changed for {}.", folder),
            Status::ApplyFailed { reason } => write!(f, "Failed to set icon: {}", reason),
            Status::ImageLoadFailed { reason } => {
                write!(f, "Could not load that image: {}", reason)
            }
            Status::FolderRejected { reason } => write!(f, "Cannot use that folder: {}", reason),
            Status::PreviewFailed => write!(f, "Error reading folder contents."),
            Status::IconRemoved { folder } => write!(f, "Custom icon removed for {}.", folder),
        }
    }
}

/// Holds the current [`Selection`] and [`Status`] and runs the apply step.
///
/// The OS call itself is passed into [`Session::apply_with`] by the caller,
/// so frontends inject the real workspace call and tests inject a recorder.
pub struct Session {
    selection: Selection,
    status: Status,
    reset_after_apply: bool,
}

impl Session {
    pub fn new(reset_after_apply: bool) -> Session {
        Session {
            selection: Selection::default(),
            status: Status::Idle,
            reset_after_apply,
        }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.selection.folder.as_deref()
    }

    pub fn icon(&self) -> Option<&IconImage> {
        self.selection.icon.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The status line is free-form feedback; frontends may set it directly
    /// for events outside the core workflow (preview failures etc.).
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn reset_after_apply(&self) -> bool {
        self.reset_after_apply
    }

    pub fn set_reset_after_apply(&mut self, reset: bool) {
        self.reset_after_apply = reset;
    }

    /// Store a confirmed folder pick.
    ///
    /// Callers only invoke this when the picker returned a path, so a
    /// cancelled dialog never reaches the session.
    pub fn set_folder(&mut self, folder: PathBuf) {
        self.selection.folder = Some(folder);
        self.status = Status::FolderSelected;
    }

    /// Store a loaded icon image.
    pub fn set_icon(&mut self, icon: IconImage) {
        self.selection.icon = Some(icon);
        self.status = Status::ImageLoaded;
    }

    /// Record a failed image load. The icon field is left empty.
    pub fn icon_load_failed(&mut self, reason: impl fmt::Display) {
        self.selection.icon = None;
        self.status = Status::ImageLoadFailed {
            reason: reason.to_string(),
        };
    }

    /// True iff both the folder and the image are selected.
    pub fn can_apply(&self) -> bool {
        self.selection.folder.is_some() && self.selection.icon.is_some()
    }

    /// Run the assignment with exactly the current (folder, icon) pair.
    ///
    /// Returns `SelectionIncomplete` without touching any state when
    /// [`Session::can_apply`] is false. On success the status becomes the
    /// success message and, when `reset_after_apply` is set, the selection
    /// is cleared for the next pairing. On failure the selection is left
    /// untouched so the user may retry.
    pub fn apply_with<F>(&mut self, assign: F) -> Result<(), ApplyError>
    where
        F: FnOnce(&Path, &IconImage) -> Result<(), ApplyError>,
    {
        let (folder, icon) = match (&self.selection.folder, &self.selection.icon) {
            (Some(folder), Some(icon)) => (folder, icon),
            _ => return Err(ApplyError::SelectionIncomplete),
        };

        match assign(folder, icon) {
            Ok(()) => {
                self.status = Status::Applied {
                    folder: display_name(folder),
                };
                if self.reset_after_apply {
                    self.selection = Selection::default();
                }
                Ok(())
            }
            Err(e) => {
                self.status = Status::ApplyFailed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Reset both picks and return to the idle status.
    pub fn clear(&mut self) {
        self.selection = Selection::default();
        self.status = Status::Idle;
    }
}

/// Last path component, matching what the picker showed the user.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn test_icon(dir: &Path, name: &str) -> IconImage {
        let path = dir.join(name);
        image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 30, 30, 255]))
            .save(&path)
            .unwrap();
        IconImage::load(&path).unwrap()
    }

    #[test]
    fn empty_selection_cannot_apply() {
        let session = Session::new(false);
        assert!(!session.can_apply());
        assert_eq!(session.status(), &Status::Idle);
    }

    #[test]
    fn folder_alone_cannot_apply() {
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/target"));
        assert!(!session.can_apply());
        assert_eq!(session.status(), &Status::FolderSelected);
    }

    #[test]
    fn image_alone_cannot_apply() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(false);
        session.set_icon(test_icon(dir.path(), "icon.png"));
        assert!(!session.can_apply());
        assert_eq!(session.status(), &Status::ImageLoaded);
    }

    #[test]
    fn both_picks_can_apply() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/target"));
        session.set_icon(test_icon(dir.path(), "icon.png"));
        assert!(session.can_apply());
    }

    #[test]
    fn apply_without_selection_is_rejected_and_mutates_nothing() {
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/target"));

        let mut called = false;
        let result = session.apply_with(|_, _| {
            called = true;
            Ok(())
        });

        assert!(matches!(result, Err(ApplyError::SelectionIncomplete)));
        assert!(!called);
        assert_eq!(session.status(), &Status::FolderSelected);
        assert_eq!(session.folder(), Some(Path::new("/tmp/target")));
    }

    #[test]
    fn apply_receives_current_selection() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/Users/x/Desktop/Projects"));
        session.set_icon(test_icon(dir.path(), "icon.png"));

        let mut seen = None;
        session
            .apply_with(|folder, icon| {
                seen = Some((folder.to_path_buf(), icon.source().to_path_buf()));
                Ok(())
            })
            .unwrap();

        let (folder, icon) = seen.unwrap();
        assert_eq!(folder, PathBuf::from("/Users/x/Desktop/Projects"));
        assert_eq!(icon, dir.path().join("icon.png"));
        assert_eq!(
            session.status(),
            &Status::Applied {
                folder: "Projects".to_string()
            }
        );
        assert!(session.status().to_string().contains("Success!"));
    }

    #[test]
    fn apply_never_uses_stale_values() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/first"));
        session.set_icon(test_icon(dir.path(), "first.png"));

        // Reselect both before applying
        session.set_folder(PathBuf::from("/tmp/second"));
        session.set_icon(test_icon(dir.path(), "second.png"));

        let mut seen = None;
        session
            .apply_with(|folder, icon| {
                seen = Some((folder.to_path_buf(), icon.source().to_path_buf()));
                Ok(())
            })
            .unwrap();

        let (folder, icon) = seen.unwrap();
        assert_eq!(folder, PathBuf::from("/tmp/second"));
        assert_eq!(icon, dir.path().join("second.png"));
    }

    #[test]
    fn reset_variant_clears_selection_after_success() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(true);
        session.set_folder(PathBuf::from("/tmp/target"));
        session.set_icon(test_icon(dir.path(), "icon.png"));

        session.apply_with(|_, _| Ok(())).unwrap();

        assert!(session.folder().is_none());
        assert!(session.icon().is_none());
        assert!(!session.can_apply());
        // The success message survives the reset
        assert!(matches!(session.status(), Status::Applied { .. }));
    }

    #[test]
    fn keep_variant_leaves_selection_after_success() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/target"));
        session.set_icon(test_icon(dir.path(), "icon.png"));

        session.apply_with(|_, _| Ok(())).unwrap();

        assert!(session.can_apply());
        assert_eq!(session.folder(), Some(Path::new("/tmp/target")));
    }

    #[test]
    fn failed_apply_keeps_selection_for_retry() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(true);
        session.set_folder(PathBuf::from("/tmp/target"));
        session.set_icon(test_icon(dir.path(), "icon.png"));

        let result = session.apply_with(|folder, _| {
            Err(ApplyError::Rejected {
                path: folder.display().to_string(),
            })
        });

        assert!(result.is_err());
        assert!(session.can_apply());
        assert!(session.status().to_string().contains("Failed to set icon"));

        // Retry succeeds with the same pair
        session.apply_with(|_, _| Ok(())).unwrap();
        assert!(matches!(session.status(), Status::Applied { .. }));
    }

    #[test]
    fn new_pick_overwrites_previous() {
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/first"));
        session.set_folder(PathBuf::from("/tmp/second"));
        assert_eq!(session.folder(), Some(Path::new("/tmp/second")));
    }

    #[test]
    fn icon_load_failure_leaves_icon_empty() {
        let mut session = Session::new(false);
        session.icon_load_failed("bad magic number");
        assert!(session.icon().is_none());
        assert!(
            session
                .status()
                .to_string()
                .contains("Could not load that image")
        );
    }

    #[test]
    fn clear_returns_to_idle() {
        let dir = tempdir().unwrap();
        let mut session = Session::new(false);
        session.set_folder(PathBuf::from("/tmp/target"));
        session.set_icon(test_icon(dir.path(), "icon.png"));

        session.clear();

        assert!(!session.can_apply());
        assert_eq!(session.status(), &Status::Idle);
    }

    #[test]
    fn display_name_uses_last_component() {
        assert_eq!(display_name(Path::new("/Users/x/Desktop/Projects")), "Projects");
        assert_eq!(display_name(Path::new("Projects")), "Projects");
    }
}
