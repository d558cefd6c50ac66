//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tourdesk using the `clap` crate,
//! plus the line grammar of the interactive shell, which is parsed by clap
//! as well.
//!
//! # Commands
//!
//! - **search**: filter the catalog and print the matching tours (default)
//! - **show**: print the details of one tour
//! - **facets**: print every tag with the number of tours carrying it
//! - **shell**: interactive session with a cart and favorites
//!
//! # Examples
//!
//! ```bash
//! tourdesk search --location phuket --theme Beach --max-price 5000
//! tourdesk search --feature "Hotel pickup" --feature "Lunch included" --format json
//! tourdesk show phi-phi-speedboat
//! tourdesk shell
//! ```

use crate::catalog::TimeOfDay;
use crate::filter::{FilterDefaults, FilterState};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for tour listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON array of tours
    Json,
    /// CSV with one row per tour
    Csv,
}

/// Filter flags shared by the `search` command and the shell
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive text matched against location and title
    #[arg(short = 'l', long = "location", value_name = "TEXT")]
    pub location: Option<String>,

    /// Keep tours with ANY of these themes
    #[arg(short = 't', long = "theme", value_name = "THEME")]
    pub themes: Vec<String>,

    /// Keep tours with ANY of these activities
    #[arg(short = 'a', long = "activity", value_name = "ACTIVITY")]
    pub activities: Vec<String>,

    /// Keep tours with ANY of these vehicles
    #[arg(short = 'v', long = "vehicle", value_name = "VEHICLE")]
    pub vehicles: Vec<String>,

    /// Keep tours with ALL of these features
    #[arg(short = 'f', long = "feature", value_name = "FEATURE")]
    pub features: Vec<String>,

    /// Inclusive price ceiling
    #[arg(long = "max-price", value_name = "AMOUNT")]
    pub max_price: Option<u32>,

    /// Latest start time, compared by hour (e.g. 17:00)
    #[arg(long = "max-start-time", value_name = "HH:MM")]
    pub max_start_time: Option<TimeOfDay>,

    /// Largest group size
    #[arg(long = "max-group-size", value_name = "N")]
    pub max_group_size: Option<u32>,

    /// Start from the filter panel defaults instead of no ceilings
    #[arg(short = 'd', long = "defaults")]
    pub defaults: bool,
}

impl FilterArgs {
    /// Build the filter state these flags describe
    ///
    /// Explicit ceilings override the panel defaults when `--defaults` is set.
    #[must_use]
    pub fn to_filter_state(&self, defaults: &FilterDefaults) -> FilterState {
        let mut state = if self.defaults {
            FilterState::with_defaults(defaults)
        } else {
            FilterState::default()
        };

        if let Some(location) = &self.location {
            state.location.clone_from(location);
        }
        state.themes.extend(self.themes.iter().cloned());
        state.activities.extend(self.activities.iter().cloned());
        state.vehicles.extend(self.vehicles.iter().cloned());
        state.features.extend(self.features.iter().cloned());

        if self.max_price.is_some() {
            state.max_price = self.max_price;
        }
        if self.max_start_time.is_some() {
            state.max_start_time = self.max_start_time;
        }
        if self.max_group_size.is_some() {
            state.max_group_size = self.max_group_size;
        }
        state
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tourdesk")]
#[command(about = "Browse, filter and book tours", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file to load (overrides config)
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; a bare `tourdesk` lists the whole catalog
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Search {
            filters: FilterArgs::default(),
            format: OutputFormat::Text,
        })
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Filter the catalog and list matching tours (default)
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show details for one tour
    Show {
        /// Tour id
        id: String,
    },

    /// List every tag with the number of tours carrying it
    Facets,

    /// Start an interactive session with a cart and favorites
    #[command(visible_alias = "sh")]
    Shell,
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands understood by the interactive shell
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Commit a filter and show the matching tours
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Drop the panel's price, start time and group size ceilings
        #[arg(long = "no-ceilings", conflicts_with = "defaults")]
        no_ceilings: bool,
    },

    /// Restore the initial view
    Reset,

    /// Show the tours currently visible
    #[command(visible_alias = "ls")]
    List,

    /// Show details for one tour
    Show { id: String },

    /// Show the cart with its total
    Cart,

    /// Add a tour to the cart
    CartAdd { id: String },

    /// Remove a tour from the cart
    CartRemove { id: String },

    /// Show the favorites
    #[command(visible_alias = "favs")]
    Favorites,

    /// Favorite or unfavorite a tour
    Fav { id: String },

    /// Remove a tour from the favorites
    Unfav { id: String },

    /// List every tag with its tour count
    Facets,

    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

/// Split a shell line into words, honoring single and double quotes
///
/// An unterminated quote runs to the end of the line.
#[must_use]
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_search() {
        let cli = Cli::try_parse_from(["tourdesk"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Search {
                filters: FilterArgs::default(),
                format: OutputFormat::Text
            }
        );
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from([
            "tourdesk",
            "search",
            "--location",
            "Khao Lak",
            "--feature",
            "wifi",
            "--feature",
            "lunch",
            "--max-start-time",
            "17:30",
            "--format",
            "json",
        ])
        .unwrap();

        let Some(Commands::Search { filters, format }) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(filters.location.as_deref(), Some("Khao Lak"));
        assert_eq!(filters.features, vec!["wifi", "lunch"]);
        assert_eq!(filters.max_start_time, Some(TimeOfDay::new(17, 30).unwrap()));
    }

    #[test]
    fn test_search_rejects_bad_time() {
        let result = Cli::try_parse_from(["tourdesk", "search", "--max-start-time", "teatime"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tourdesk", "facets", "-q", "--catalog", "tours.json"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.catalog, Some(PathBuf::from("tours.json")));
        assert_eq!(cli.command, Some(Commands::Facets));
    }

    #[test]
    fn test_filter_args_without_defaults_are_unconstrained() {
        let state = FilterArgs::default().to_filter_state(&FilterDefaults::default());
        assert!(state.is_unconstrained());
    }

    #[test]
    fn test_filter_args_with_defaults_and_override() {
        let args = FilterArgs {
            defaults: true,
            max_price: Some(3000),
            themes: vec!["Beach".to_string()],
            ..FilterArgs::default()
        };
        let state = args.to_filter_state(&FilterDefaults::default());

        assert_eq!(state.max_price, Some(3000));
        assert_eq!(state.max_group_size, Some(40));
        assert!(state.themes.contains("Beach"));
    }

    #[test]
    fn test_shell_line_parsing() {
        let line = ShellLine::try_parse_from(["cart-add", "phi-phi-speedboat"]).unwrap();
        assert_eq!(
            line.command,
            ShellCommand::CartAdd {
                id: "phi-phi-speedboat".to_string()
            }
        );

        let line = ShellLine::try_parse_from(["exit"]).unwrap();
        assert_eq!(line.command, ShellCommand::Quit);
    }

    #[test]
    fn test_shell_search_line() {
        let words = split_words("search --theme 'Island Hopping' -d");
        let line = ShellLine::try_parse_from(words).unwrap();
        let ShellCommand::Search { filters, no_ceilings } = line.command else {
            panic!("expected search");
        };
        assert_eq!(filters.themes, vec!["Island Hopping"]);
        assert!(filters.defaults);
        assert!(!no_ceilings);
    }

    #[test]
    fn test_shell_search_no_ceilings_conflicts_with_defaults() {
        let line = ShellLine::try_parse_from(["search", "--no-ceilings"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Search { no_ceilings: true, .. }));

        assert!(ShellLine::try_parse_from(["search", "--no-ceilings", "-d"]).is_err());
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("  show   a-b  "), vec!["show", "a-b"]);
        assert_eq!(
            split_words(r#"search -l "Khao Lak" -f 'Hotel pickup'"#),
            vec!["search", "-l", "Khao Lak", "-f", "Hotel pickup"]
        );
        assert_eq!(split_words("search -l \"\""), vec!["search", "-l", ""]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_split_words_unterminated_quote() {
        assert_eq!(split_words("search -l 'Khao"), vec!["search", "-l", "Khao"]);
    }
}
