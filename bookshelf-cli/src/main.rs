//! Bookshelf CLI - Command-line catalog browser

mod commands;
mod screen;

use anyhow::Result;
use bookshelf_core::{BrowseConfig, Query, Selector, Theme, DEFAULT_PAGE_SIZE};
use clap::{Parser, Subcommand};
use commands::OptionKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate page size argument (must be at least 1)
fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog JSON file (defaults to $BOOKSHELF_CATALOG, then the bundled sample)
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    /// Books per page (must be at least 1)
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    page_size: usize,

    /// Colour theme for browsing (defaults to the terminal's $COLORFGBG preference)
    #[arg(long, global = true)]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books matching a search
    List {
        /// Title substring (case-insensitive)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author id or "any"
        #[arg(short, long, default_value = "any")]
        author: Selector,

        /// Genre id or "any"
        #[arg(short, long, default_value = "any")]
        genre: Selector,

        /// Number of times to load more results
        #[arg(short, long, default_value = "0")]
        more: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details of a book
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the entries of a filter drop-down
    Options {
        /// Which directory to list
        #[arg(value_enum)]
        kind: OptionKind,
    },

    /// Validate author and genre references in the catalog
    Validate,

    /// Print the colour palette of a theme (day, night)
    Theme {
        #[arg(value_name = "THEME")]
        name: Theme,
    },

    /// Browse the catalog interactively
    Browse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BrowseConfig::default()
        .with_page_size(cli.page_size)
        .with_theme(commands::resolve_theme(cli.theme));

    let catalog_path = cli.catalog;

    match cli.command {
        Commands::List {
            title,
            author,
            genre,
            more,
            json,
        } => {
            let catalog = commands::load_catalog(catalog_path.as_deref())?;
            let query = Query {
                title,
                author,
                genre,
            };
            commands::list(&catalog, &config, &query, more, json)
        }

        Commands::Show { id, json } => {
            let catalog = commands::load_catalog(catalog_path.as_deref())?;
            commands::show(&catalog, &id, json)
        }

        Commands::Options { kind } => {
            let catalog = commands::load_catalog(catalog_path.as_deref())?;
            commands::options(&catalog, kind)
        }

        Commands::Validate => {
            let catalog = commands::load_catalog(catalog_path.as_deref())?;
            commands::validate(&catalog)
        }

        Commands::Theme { name } => commands::theme(name),

        Commands::Browse => {
            let catalog = commands::load_catalog(catalog_path.as_deref())?;
            let stdin = std::io::stdin().lock();
            commands::browse(&catalog, &config, stdin, &mut std::io::stdout().lock())
        }
    }
}
