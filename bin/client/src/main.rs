//! dropnotes: download/upload one note file to Dropbox

mod config;
mod constants;
mod editor;
mod logger;

use anyhow::Context;
use clap::{Parser, Subcommand};
use editor::FileEditor;
use log::error;
use std::path::PathBuf;
use transfer::{download_command, http_client, upload_command, Transport};

#[derive(Parser)]
#[command(name = "dropnotes")]
#[command(about = "Download or upload the configured note file to Dropbox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the file's contents with the copy stored in Dropbox
    Download {
        /// Active document
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Directory containing settings.cfg (default: DROPNOTES_DIR, then the executable's directory)
        #[arg(short, long)]
        settings_dir: Option<PathBuf>,
    },
    /// Upload the file to Dropbox, overwriting the remote copy
    Upload {
        /// Active document
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Directory containing settings.cfg (default: DROPNOTES_DIR, then the executable's directory)
        #[arg(short, long)]
        settings_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let transport = http_client().context("Failed to build HTTP client")?;

    if !run(cli.command, &transport) {
        std::process::exit(1);
    }
    Ok(())
}

/// Run one command; failures are logged and reported as false
fn run<T: Transport>(command: Commands, transport: &T) -> bool {
    let (name, done) = match command {
        Commands::Download { file, settings_dir } => {
            let settings_dir = config::resolve_settings_dir(settings_dir);
            let mut editor = FileEditor::new(file);
            ("download", download_command(&mut editor, &settings_dir, transport))
        }
        Commands::Upload { file, settings_dir } => {
            let settings_dir = config::resolve_settings_dir(settings_dir);
            let editor = FileEditor::new(file);
            ("upload", upload_command(&editor, &settings_dir, transport))
        }
    };

    if !done {
        error!("{} did not complete", name);
    }
    done
}
