use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use folio::carousel::{Carousel, RecordingNavigator};
use folio::catalog::{Catalog, SequentialIds};
use folio::cli::Cli;
use folio::config::Config;
use folio::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration after overrides")?;

    let catalog = Catalog::load_from(&cli.catalog, &mut SequentialIds::default())?;
    let title = cli
        .catalog
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "folio".to_string());
    tracing::info!(items = catalog.len(), catalog = %cli.catalog.display(), "Catalog loaded");

    let navigator = Arc::new(RecordingNavigator::new());
    let mut builder = Carousel::builder(catalog.items)
        .config(&config)
        .navigator(navigator.clone());
    if config.carousel.enable_full_screen_view {
        // Projects with a gallery open their page; lone images open fullscreen.
        builder = builder.full_screen_predicate(|item| item.is_single_image_gallery());
    }

    folio::tui::run(builder.build(), navigator, &title, &config.terminal)
        .context("Terminal session failed")?;
    Ok(())
}
