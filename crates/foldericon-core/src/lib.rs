//! Core logic for assigning custom folder icons.
//!
//! The workflow is: pick a folder, pick an image, apply. [`session`] holds
//! the two picks and the status line, [`icon`] loads and encodes the image,
//! [`target`] validates the folder, and [`workspace`] makes the one outbound
//! OS call that associates the icon with the folder. The GUI and CLI crates
//! are thin frontends over these modules.

pub mod config;
pub mod icon;
pub mod preview;
pub mod session;
pub mod target;
pub mod workspace;
