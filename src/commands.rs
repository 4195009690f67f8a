use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::browser::RecordBrowser;
use crate::config::Config;
use crate::source::{InMemorySource, RecordSource};
use crate::terminal::{self, render};

/// Options for a one-shot page listing
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub collection: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub query: Option<String>,
}

fn open_session(config: &Config) -> Result<RecordBrowser> {
    let source: Arc<dyn RecordSource> = Arc::new(InMemorySource::simulated(
        config.dataset.records_per_collection,
        config.dataset.embedding_dimension,
    ));
    RecordBrowser::new(source, &config.browser).context("Failed to start browsing session")
}

/// Print every collection the source knows about
#[inline]
pub async fn list_collections(config: &Config) -> Result<()> {
    let mut browser = open_session(config)?;
    let collections = browser
        .load_collections()
        .await
        .context("Failed to list collections")?;

    println!("Collections ({} total):", collections.len());
    for collection in collections {
        println!("  {} (ID: {})", collection.name, collection.id);
    }

    Ok(())
}

/// Render a single page of a collection to stdout
#[inline]
pub async fn show_page(config: &Config, options: ShowOptions) -> Result<()> {
    let mut browser = open_session(config)?;
    browser
        .load_collections()
        .await
        .context("Failed to load collections")?;
    browser.select_collection(&options.collection).await?;

    if let Some(size) = options.page_size {
        browser.set_page_size(size).await?;
    }
    if let Some(query) = options.query {
        browser.submit_query(query).await?;
    }
    if let Some(page) = options.page {
        browser.go_to_page(page).await?;
    }

    print!(
        "{}",
        render::render_view(browser.state(), config.browser.embedding_preview_len)
    );
    Ok(())
}

/// Interactive browsing session on the terminal
#[inline]
pub async fn browse(
    config: &Config,
    collection: Option<String>,
    page_size: Option<u32>,
) -> Result<()> {
    let mut browser = open_session(config)?;
    browser
        .load_collections()
        .await
        .context("Failed to load collections")?;

    if let Some(size) = page_size {
        browser.set_page_size(size).await?;
    }
    if let Some(id) = collection {
        browser.select_collection(&id).await?;
    }

    info!("Starting interactive session");
    terminal::run(&mut browser, config.browser.embedding_preview_len).await
}
