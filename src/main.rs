use clap::{Parser, Subcommand};
use record_browser::commands::{ShowOptions, browse, list_collections, show_page};
use record_browser::config::{Config, run_interactive_config, show_config};

#[derive(Parser)]
#[command(name = "record-browser")]
#[command(about = "Browse, page, filter and bulk-delete records grouped into collections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure paging and the simulated dataset
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List all collections
    Collections,
    /// Print one page of a collection
    Show {
        /// Collection ID
        #[arg(long)]
        collection: String,
        /// Page number, clamped to the last page
        #[arg(long)]
        page: Option<u32>,
        /// Records per page: 10, 20, 50, 100 or 200
        #[arg(long)]
        page_size: Option<u32>,
        /// Metadata query as a JSON object, e.g. '{"type":"Type A"}'
        #[arg(long)]
        query: Option<String>,
    },
    /// Start an interactive browsing session
    Browse {
        /// Collection to open on start
        #[arg(long)]
        collection: Option<String>,
        /// Records per page: 10, 20, 50, 100 or 200
        #[arg(long)]
        page_size: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { show } => {
            if show {
                show_config()?;
            } else {
                run_interactive_config()?;
            }
        }
        Commands::Collections => {
            list_collections(&Config::load_default()?).await?;
        }
        Commands::Show {
            collection,
            page,
            page_size,
            query,
        } => {
            let options = ShowOptions {
                collection,
                page,
                page_size,
                query,
            };
            show_page(&Config::load_default()?, options).await?;
        }
        Commands::Browse {
            collection,
            page_size,
        } => {
            browse(&Config::load_default()?, collection, page_size).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["record-browser", "collections"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            assert!(matches!(parsed.command, Commands::Collections));
        }
    }

    #[test]
    fn show_command_with_options() {
        let cli = Cli::try_parse_from([
            "record-browser",
            "show",
            "--collection",
            "2",
            "--page",
            "3",
            "--page-size",
            "20",
            "--query",
            r#"{"type":"Type A"}"#,
        ]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Show {
                collection,
                page,
                page_size,
                query,
            } = parsed.command
            {
                assert_eq!(collection, "2");
                assert_eq!(page, Some(3));
                assert_eq!(page_size, Some(20));
                assert_eq!(query.as_deref(), Some(r#"{"type":"Type A"}"#));
            }
        }
    }

    #[test]
    fn show_requires_collection() {
        let cli = Cli::try_parse_from(["record-browser", "show"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn browse_command_defaults() {
        let cli = Cli::try_parse_from(["record-browser", "browse"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Browse {
                collection,
                page_size,
            } = parsed.command
            {
                assert_eq!(collection, None);
                assert_eq!(page_size, None);
            }
        }
    }

    #[test]
    fn config_show_flag() {
        let cli = Cli::try_parse_from(["record-browser", "config", "--show"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Config { show } = parsed.command {
                assert!(show);
            }
        }
    }

    #[test]
    fn invalid_command() {
        let cli = Cli::try_parse_from(["record-browser", "invalid"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        }
    }

    #[test]
    fn help_message() {
        let cli = Cli::try_parse_from(["record-browser", "--help"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
