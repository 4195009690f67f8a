
use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select};

use super::{BrowserConfig, Config, DatasetConfig};
use crate::browser::pagination::PAGE_SIZES;

#[inline]
pub fn run_interactive_config() -> Result<()> {
    eprintln!("{}", style("🔧 Record Browser Configuration Setup").bold().cyan());
    eprintln!();

    let mut config = load_existing_config()?;

    eprintln!("{}", style("Browser Settings").bold().yellow());
    eprintln!("Choose how records are paged and displayed.");
    eprintln!();

    configure_browser(&mut config.browser)?;

    eprintln!();
    eprintln!("{}", style("Simulated Dataset").bold().yellow());
    eprintln!("Size of the in-memory collections used for browsing.");
    eprintln!();

    configure_dataset(&mut config.dataset)?;

    eprintln!();
    if Confirm::new()
        .with_prompt("Save configuration?")
        .default(true)
        .interact()?
    {
        config.save().context("Failed to save configuration")?;
        eprintln!("{}", style("✓ Configuration saved successfully!").green());
        eprintln!(
            "Configuration saved to: {}",
            style(config.config_file_path().display()).cyan()
        );
    } else {
        eprintln!("Configuration not saved.");
    }

    Ok(())
}

#[inline]
pub fn show_config() -> Result<()> {
    let config = Config::load_default().context("Failed to load configuration")?;

    eprintln!("{}", style("📋 Current Configuration").bold().cyan());
    eprintln!();

    for line in describe_config(&config) {
        eprintln!("{}", line);
    }

    eprintln!();
    eprintln!(
        "Config file: {}",
        style(config.config_file_path().display()).dim()
    );

    Ok(())
}

fn describe_config(config: &Config) -> Vec<String> {
    vec![
        format!("{}", style("Browser Settings:").bold().yellow()),
        format!(
            "  Default Page Size: {}",
            style(config.browser.default_page_size).cyan()
        ),
        format!(
            "  Embedding Preview: {} values",
            style(config.browser.embedding_preview_len).cyan()
        ),
        format!(
            "  Event Capacity: {}",
            style(config.browser.event_capacity).cyan()
        ),
        format!("{}", style("Simulated Dataset:").bold().yellow()),
        format!(
            "  Records per Collection: {}",
            style(config.dataset.records_per_collection).cyan()
        ),
        format!(
            "  Embedding Dimension: {}",
            style(config.dataset.embedding_dimension).cyan()
        ),
    ]
}

fn load_existing_config() -> Result<Config> {
    Config::load_default().map_or_else(
        |_| -> Result<Config> {
            eprintln!(
                "{}",
                style("No existing configuration found. Using defaults.").yellow()
            );
            Ok(Config {
                base_dir: Config::config_dir()?,
                ..Config::default()
            })
        },
        |config| {
            eprintln!("{}", style("Found existing configuration.").green());
            Ok(config)
        },
    )
}

fn configure_browser(browser: &mut BrowserConfig) -> Result<()> {
    let labels: Vec<String> = PAGE_SIZES.iter().map(ToString::to_string).collect();
    let default_index = PAGE_SIZES
        .iter()
        .position(|&size| size == browser.default_page_size)
        .unwrap_or(0);

    let size_index = Select::new()
        .with_prompt("Default page size")
        .default(default_index)
        .items(&labels)
        .interact()?;

    let preview_len: usize = Input::new()
        .with_prompt("Embedding values shown per row")
        .default(browser.embedding_preview_len)
        .validate_with(|input: &usize| -> Result<(), &str> {
            if (1..=32).contains(input) {
                Ok(())
            } else {
                Err("Preview length must be between 1 and 32")
            }
        })
        .interact_text()?;

    browser.set_default_page_size(PAGE_SIZES[size_index])?;
    browser.set_embedding_preview_len(preview_len)?;

    Ok(())
}

fn configure_dataset(dataset: &mut DatasetConfig) -> Result<()> {
    let records: usize = Input::new()
        .with_prompt("Records per collection")
        .default(dataset.records_per_collection)
        .validate_with(|input: &usize| -> Result<(), &str> {
            if *input > 100_000 {
                Err("At most 100000 records per collection")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let dimension: usize = Input::new()
        .with_prompt("Embedding dimension")
        .default(dataset.embedding_dimension)
        .validate_with(|input: &usize| -> Result<(), &str> {
            if (1..=4096).contains(input) {
                Ok(())
            } else {
                Err("Dimension must be between 1 and 4096")
            }
        })
        .interact_text()?;

    dataset.set_records_per_collection(records)?;
    dataset.set_embedding_dimension(dimension)?;

    Ok(())
}
