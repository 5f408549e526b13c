// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{InfoViewer, MetadataRepository, ModelInfoDialog, VersionLookup};
use crate::cli::args::{Args, Command};
use crate::domain::ModelRef;
use crate::infrastructure::{CivitaiIndex, ComfyRepository, ContentRenderer};
use crate::ports::dialog::DialogHost;
use crate::ports::{HeadlessDialog, HtmlPresenter, TerminalDialog};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting modelview with arguments");

    match args.command {
        Command::Show {
            kind,
            name,
            open,
            no_lookup,
        } => show(&args.host, kind, name, open, no_lookup).await,
        Command::Metadata { kind, name, json } => print_metadata(&args.host, kind, name, json).await,
        Command::Lookup { hash, file } => lookup(hash, file).await,
    }
}

async fn show(host: &str, kind: String, name: String, open: bool, no_lookup: bool) -> Result<()> {
    let model = ModelRef::new(kind, name);
    let repository = ComfyRepository::new(host)?;
    info!(%model, "Showing model info");

    if open {
        let dialog = run_session(model, repository, HeadlessDialog::new(), no_lookup).await?;

        let presenter = HtmlPresenter::new();
        let html = presenter.render(dialog.view(), dialog.metadata());
        debug!(?html, "Generated HTML");

        let mut renderer = ContentRenderer::new();
        let temp_path = renderer.create_temp_file(&html)?;
        renderer.open_in_browser(&temp_path)?;
    } else {
        run_session(model, repository, TerminalDialog::new(), no_lookup).await?;
    }

    Ok(())
}

/// Drive one dialog session to its terminal state: open, then enrich
/// unless the lookup was skipped.
async fn run_session<R: MetadataRepository, H: DialogHost>(
    model: ModelRef,
    repository: R,
    host: H,
    no_lookup: bool,
) -> Result<ModelInfoDialog<R, H>> {
    let mut dialog = ModelInfoDialog::new(model, repository, host);
    dialog
        .open()
        .await
        .context("Failed to load model metadata")?;

    if !no_lookup {
        let lookup = VersionLookup::new(CivitaiIndex::new()?);
        dialog.enrich(&lookup).await;
    }

    Ok(dialog)
}

async fn print_metadata(host: &str, kind: String, name: String, json: bool) -> Result<()> {
    let model = ModelRef::new(kind, name);
    let repository = ComfyRepository::new(host)?;
    let viewer = InfoViewer::new(repository);

    info!(%model, "Fetching raw metadata");
    let record = viewer.view_metadata(&model).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        for (key, value) in record.entries() {
            println!("{key}: {value}");
        }
    }

    Ok(())
}

async fn lookup(hash: Option<String>, file: Option<std::path::PathBuf>) -> Result<()> {
    let hash = match file {
        Some(path) => {
            info!(?path, "Hashing model file");
            util::hasher::sha256_file(&path)?
        }
        None => hash.context("A content hash or --file is required")?,
    };

    let lookup = VersionLookup::new(CivitaiIndex::new()?);
    info!(%hash, "Looking up model version");
    let version = lookup.by_hash(&hash).await?;

    println!("Name: {}", version.model_name);
    println!("Page: {}", version.page_url());
    if let Some(preview) = version.preview_image() {
        println!("Preview: {preview}");
    }

    Ok(())
}
