//! Shell command - interactive storefront session
//!
//! Reads one command per line, parses it with clap and applies it to a
//! [`Session`]. Filter changes only take effect on an explicit `search`,
//! which starts from the panel's price, start time and group size ceilings
//! unless `--no-ceilings` is given. Notifications raised by a command are
//! collected in a [`ToastBuffer`] and printed after it. Unknown tour ids and
//! malformed lines are reported and the shell keeps running; end of input or
//! `quit` ends it.

use crate::{
    TourdeskError,
    cli::{ShellCommand, ShellLine, split_words},
    notify::ToastBuffer,
    output,
    session::Session,
};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, TourdeskError>;

const PROMPT: &str = "tourdesk> ";

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input
///
/// `toasts` must be the sink the session was created with; its unexpired
/// notifications are printed after every command.
///
/// # Errors
/// Returns an error if reading input or writing output fails. Command
/// errors (unknown ids, bad arguments) are printed, not returned.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    toasts: &ToastBuffer,
    input: R,
    out: &mut W,
    currency: &str,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        writeln!(
            out,
            "{} tours loaded. Type 'help' for commands.",
            session.catalog().len()
        )?;
    }

    let mut lines = input.lines();
    loop {
        if !quiet {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let words = split_words(&line?);
        let Some(first) = words.first() else {
            continue;
        };

        if first == "help" || first == "?" {
            writeln!(out, "{}", help_text())?;
            continue;
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };
        tracing::debug!(?command, "shell command");

        let flow = match dispatch(session, command, out, currency, quiet) {
            Ok(flow) => flow,
            Err(TourdeskError::Session(e)) => {
                writeln!(out, "{}", format!("Error: {e}").red())?;
                Flow::Continue
            }
            Err(e) => return Err(e),
        };
        print_toasts(out, toasts, quiet)?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn print_toasts<W: Write>(out: &mut W, toasts: &ToastBuffer, quiet: bool) -> Result<()> {
    for notification in toasts.drain() {
        if !quiet {
            writeln!(out, "{}", notification.render())?;
        }
    }
    Ok(())
}

fn dispatch<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    out: &mut W,
    currency: &str,
    quiet: bool,
) -> Result<Flow> {
    match command {
        ShellCommand::Search {
            mut filters,
            no_ceilings,
        } => {
            filters.defaults = !no_ceilings;
            let state = filters.to_filter_state(session.defaults());
            if !quiet {
                writeln!(out, "{} {state}", "Filters:".bold())?;
            }
            let visible = session.search(state);
            print_tours(out, visible, currency, quiet)?;
        }
        ShellCommand::Reset => {
            let visible = session.reset_filters();
            if !quiet {
                writeln!(out, "Filters reset, showing all {} tours", visible.len())?;
            }
        }
        ShellCommand::List => print_tours(out, session.visible(), currency, quiet)?,
        ShellCommand::Show { id } => {
            let tour = session.tour(&id)?;
            writeln!(out, "{}", output::tour_details(tour, currency))?;
        }
        ShellCommand::Cart => {
            if quiet {
                print_tours(out, session.cart().items(), currency, true)?;
            } else {
                writeln!(out, "{}", output::cart_summary(session.cart(), currency))?;
            }
        }
        ShellCommand::CartAdd { id } => {
            if !session.add_to_cart(&id)? && !quiet {
                writeln!(out, "{}", format!("'{id}' is already in your cart").dimmed())?;
            }
        }
        ShellCommand::CartRemove { id } => {
            session.remove_from_cart(&id);
        }
        ShellCommand::Favorites => {
            let favorites = session.favorites().items();
            if favorites.is_empty() {
                if !quiet {
                    writeln!(out, "{}", "No favorites yet".dimmed())?;
                }
            } else {
                print_tours(out, favorites, currency, quiet)?;
            }
        }
        ShellCommand::Fav { id } => {
            session.toggle_favorite(&id)?;
        }
        ShellCommand::Unfav { id } => {
            session.remove_favorite(&id);
        }
        ShellCommand::Facets => {
            writeln!(out, "{}", output::facet_counts(&session.facets(), quiet))?;
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn print_tours<W: Write>(
    out: &mut W,
    tours: &[std::sync::Arc<crate::catalog::Tour>],
    currency: &str,
    quiet: bool,
) -> Result<()> {
    let listing = output::tour_list(tours, currency, quiet);
    if !listing.is_empty() {
        writeln!(out, "{listing}")?;
    }
    Ok(())
}

fn help_text() -> String {
    let command = ShellLine::command();
    let mut lines = vec!["Commands:".to_string()];
    for sub in command.get_subcommands() {
        let about = sub.get_about().map(ToString::to_string).unwrap_or_default();
        lines.push(format!("  {:<12} {about}", sub.get_name()));
    }
    lines.push(format!("  {:<12} Show this message", "help"));
    lines.push("Run '<command> --help' for its options.".to_string());
    lines.join("\n")
}
