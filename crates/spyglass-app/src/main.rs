//! SPYGLASS shell entry point.
//!
//! A line-driven stand-in for the desktop chrome: it loads the config,
//! restores bookmarks, opens the home page, and then maps stdin
//! commands onto the viewer session. Rendering is out of scope here --
//! the sink just prints each location the session decides to display.

mod commands;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use spyglass_core::{NavigationSink, Persisted, ViewerConfig, ViewerSession};
use spyglass_types::error::Result as CoreResult;
use spyglass_types::location::Location;

use commands::ShellCommand;

/// Prints each displayed location on its own line.
struct StatusLineSink;

impl NavigationSink for StatusLineSink {
    fn on_navigate(&mut self, location: &Location) {
        println!("-> {location}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config path from CLI arg, SPYGLASS_CONFIG env var, or default.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SPYGLASS_CONFIG").ok())
        .unwrap_or_else(|| "spyglass.toml".to_string());
    let config = ViewerConfig::load(Path::new(&config_path));
    log::info!(
        "Starting SPYGLASS shell (bookmarks: {})",
        config.bookmarks_path.display()
    );

    let mut session = ViewerSession::new(&config);
    session.load_bookmarks();
    log::info!("Loaded {} bookmarks", session.bookmarks().len());

    let mut sink = StatusLineSink;
    if let Err(e) = session.open(&config.home_url, &mut sink) {
        log::warn!("could not open home page: {e}");
    }

    let stdin = io::stdin();
    print_prompt(&session)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = ShellCommand::parse(&line) else {
            print_prompt(&session)?;
            continue;
        };
        if cmd == ShellCommand::Quit {
            break;
        }
        run_command(cmd, &mut session, &mut sink);
        print_prompt(&session)?;
    }

    log::info!("SPYGLASS shell shut down cleanly");
    Ok(())
}

fn run_command(cmd: ShellCommand, session: &mut ViewerSession, sink: &mut dyn NavigationSink) {
    match cmd {
        ShellCommand::Open(url) => report_navigation(session.open(&url, sink)),
        ShellCommand::Back => report_navigation(session.go_back(sink)),
        ShellCommand::Forward => report_navigation(session.go_forward(sink)),
        ShellCommand::Bookmarks => {
            if session.bookmarks().is_empty() {
                println!("(no bookmarks)");
            }
            for bookmark in session.bookmarks() {
                println!("  {}", bookmark.location);
            }
        },
        ShellCommand::BookmarkAdd(url) => report_mutation("added", session.add_bookmark(&url)),
        ShellCommand::BookmarkRemove(url) => {
            report_mutation("removed", session.remove_bookmark(&url));
        },
        ShellCommand::Current => match session.current() {
            Some(location) => println!("{location}"),
            None => println!("(no page)"),
        },
        ShellCommand::Help => println!("{}", commands::HELP_TEXT),
        ShellCommand::Quit => {},
        ShellCommand::Unknown(input) => println!("unknown command: {input} (try 'help')"),
    }
}

/// Print a refused navigation; successful ones already went through the
/// sink.
fn report_navigation(result: CoreResult<Location>) {
    if let Err(e) = result {
        println!("error: {e}");
    }
}

/// Print the outcome of a bookmark mutation, including the case where
/// the change applied in memory but never reached the file.
fn report_mutation(verb: &str, result: CoreResult<Persisted>) {
    match result {
        Ok(Persisted::Synced) => println!("{verb}"),
        Ok(Persisted::Diverged(e)) => {
            log::warn!("bookmark {verb} in memory only: {e}");
            println!("{verb} (not saved: {e})");
        },
        Err(e) => println!("error: {e}"),
    }
}

/// Prompt showing whether back/forward are currently possible.
fn print_prompt(session: &ViewerSession) -> io::Result<()> {
    let back = if session.can_go_back() { "<" } else { "-" };
    let forward = if session.can_go_forward() { ">" } else { "-" };
    print!("[{back}{forward}] ");
    io::stdout().flush()
}
