//! # foldericon
//!
//! Command-line frontend for assigning custom folder icons. The GUI covers
//! the interactive workflow; this binary covers scripting:
//!
//! - `foldericon set <folder> <image>` - set a folder's custom icon
//! - `foldericon clear <folder>` - remove a custom icon
//! - `foldericon check <folder>` - validate a folder can take one
//! - `foldericon convert <image> <out.icns>` - encode an .icns file

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "foldericon")]
#[command(about = "Assign custom folder icons from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set a folder's custom icon from an image file
    Set {
        /// Target folder
        folder: PathBuf,
        /// Image file to use as the icon
        image: PathBuf,
    },
    /// Remove a folder's custom icon
    Clear {
        /// Target folder
        folder: PathBuf,
    },
    /// Check whether a folder can take a custom icon
    Check {
        /// Target folder
        folder: PathBuf,
    },
    /// Convert an image to an .icns icon file
    Convert {
        /// Source image
        image: PathBuf,
        /// Path to write the .icns file to
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Set { folder, image } => {
            commands::set_icon::run(&folder, &image).map_err(Into::into)
        }
        Commands::Clear { folder } => commands::clear_icon::run(&folder).map_err(Into::into),
        Commands::Check { folder } => commands::check::run(&folder).map_err(Into::into),
        Commands::Convert { image, output } => {
            commands::convert::run(&image, &output).map_err(Into::into)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
