//! Dropkit command-line driver.
//!
//! Attaches files from disk through an attachment controller configured from
//! `config/*` files and `DROPKIT_*` environment variables, then prints the
//! controller state as JSON.
//!
//! Usage:
//!   dropkit a.png b.pdf            - Attach through the file-chooser binding
//!   dropkit --drop a.png           - Attach through the drop binding
//!   dropkit --delete 0 a.png       - Attach, then delete accepted entry 0
//!   dropkit --delete-all a.png     - Attach, then delete everything

mod mime;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dropkit_core::props::InputProps;
use dropkit_core::{
    AcceptedEntry, AttachEvent, AttachmentController, ControllerOptions, FileHandle,
    RejectedEntry, RemovedUri,
};
use dropkit_shared::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "dropkit")]
#[command(about = "Validate and attach files with the Dropkit controller", long_about = None)]
struct Args {
    /// Files to attach
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Deliver the files as a drop event instead of an input selection
    #[arg(long)]
    drop: bool,

    /// Delete the accepted entry at this index after attaching (repeatable)
    #[arg(long, value_name = "INDEX")]
    delete: Vec<usize>,

    /// Delete all files after attaching
    #[arg(long)]
    delete_all: bool,
}

/// Controller state printed on exit.
#[derive(Serialize)]
struct Snapshot<'a> {
    input: InputProps,
    accepted: &'a [AcceptedEntry],
    rejected: &'a [RejectedEntry],
    removed: &'a [RemovedUri],
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize tracing; stdout is reserved for the JSON snapshot
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let files = args
        .files
        .iter()
        .map(|path| file_handle(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut controller = AttachmentController::new(ControllerOptions::from(&config.uploader));
    controller.on_attach(|accepted, rejected, event| {
        info!(
            drop = event.is_drop(),
            accepted = accepted.len(),
            rejected = rejected.len(),
            "Attach event handled"
        );
    });

    let (handler, mut event) = if args.drop {
        (controller.root_props().on_drop, AttachEvent::drop(files))
    } else {
        (controller.input_props().on_change, AttachEvent::change(files))
    };
    controller.dispatch(handler, &mut event);

    for index in args.delete {
        controller
            .delete_file(index)
            .with_context(|| format!("failed to delete entry {index}"))?;
    }
    if args.delete_all {
        controller.delete_all_files();
    }

    let snapshot = Snapshot {
        input: controller.input_props(),
        accepted: controller.accepted_files(),
        rejected: controller.rejected_files(),
        removed: controller.removed_uris(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

/// Read a file's metadata from disk.
fn file_handle(path: &Path) -> anyhow::Result<FileHandle> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read metadata of {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid file name: {}", path.display()))?;

    let file = FileHandle::new(name, metadata.len());
    Ok(match mime::guess(path) {
        Some(mime_type) => file.with_mime_type(mime_type),
        None => file,
    })
}
