//! # foldericon-gui
//!
//! Single-window application for assigning custom folder icons: pick a
//! folder, pick an image, apply.
//!
//! ## Modes
//!
//! - **Normal** (default): `foldericon-gui` - the OS icon call is live
//! - **Demo**: `foldericon-gui demo` - pickers work but applying is
//!   simulated; useful for UI development on any platform

mod app;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "foldericon-gui")]
#[command(about = "GUI for assigning custom folder icons")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run with the OS icon call disabled (for development/testing)
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let demo_mode = matches!(args.command, Some(Command::Demo));
    app::run(demo_mode).map_err(|e| e.into())
}
