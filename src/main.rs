//! Tourdesk CLI application entry point
//!
//! Command-line front end for the tour storefront: filter the catalog, look
//! at single tours and their tag counts, or open an interactive session with
//! a cart and favorites.
//!
//! # Usage
//!
//! ```bash
//! # List every tour (default command)
//! tourdesk
//!
//! # Filter the catalog
//! tourdesk search --theme Beach --max-price 5000
//! tourdesk search --defaults --feature "Hotel pickup" --format csv
//!
//! # One tour, or the tag counts
//! tourdesk show phi-phi-speedboat
//! tourdesk facets
//!
//! # Interactive session
//! tourdesk shell
//!
//! # Quiet mode (only output results)
//! tourdesk -q search --location krabi
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/tourdesk/config.toml` on Linux) and `TOURDESK_*` environment
//! variables. Log verbosity follows `RUST_LOG` (default `warn`); logs go to
//! stderr.

use std::io;
use std::sync::Arc;
use tourdesk::{
    TourdeskError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::StoreConfig,
    notify::ToastBuffer,
    session::Session,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, TourdeskError>;

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Catalog precedence: `--catalog`, then the config file, then the built-in dataset
fn load_catalog(cli: &Cli, config: &StoreConfig) -> Result<Catalog> {
    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => StoreConfig::load_from(path)?,
        None => StoreConfig::load()?,
    };

    let quiet = cli.quiet || config.quiet;
    let catalog = load_catalog(&cli, &config)?;
    let currency = config.currency.as_str();

    let mut stdout = io::stdout().lock();

    match cli.get_command() {
        Commands::Search { filters, format } => {
            let state = filters.to_filter_state(&config.filter_defaults);
            commands::search(&mut stdout, &catalog, &state, format, currency, quiet)?;
        }
        Commands::Show { id } => {
            commands::show(&mut stdout, &catalog, &id, currency)?;
        }
        Commands::Facets => {
            commands::facets(&mut stdout, &catalog, quiet)?;
        }
        Commands::Shell => {
            let toasts = Arc::new(ToastBuffer::with_ttl(config.toast_ttl()));
            let mut session =
                Session::with_defaults(Arc::new(catalog), toasts.clone(), config.filter_defaults);
            commands::shell(&mut session, &toasts, io::stdin().lock(), &mut stdout, currency, quiet)?;
        }
    }

    Ok(())
}
