//! FIVEKEY - Five-Button Text Entry
//!
//! Terminal demo for the two five-key composers. Arrow keys and Enter
//! drive the session on one live line; Esc aborts. The finished string
//! prints to stdout once the terminal is restored.

use clap::{Parser, ValueEnum};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement};
use fivekey::infrastructure::{CrosstermEvents, LayoutRepository, LineDisplay};
use fivekey::{Layout, RollComposer, TernaryComposer, reference_layout};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Input method to run
    #[clap(value_enum, default_value_t = Method::Roll)]
    method: Method,

    /// Initial text to edit
    #[clap(long, short, default_value = "")]
    text: String,

    /// Load a roll layout from a JSON file instead of the built-in one
    #[clap(long, value_name = "FILE")]
    layout: Option<String>,

    /// Write the built-in layout to a JSON file and exit
    #[clap(long, value_name = "FILE")]
    dump_layout: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Type code points as base-3 digit sequences
    Ternary,
    /// Pick characters from a grid layout
    Roll,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.dump_layout {
        LayoutRepository::save(&reference_layout(), path)?;
        println!("Wrote layout to {}", path);
        return Ok(());
    }

    let layout = match &cli.layout {
        Some(path) => LayoutRepository::load(path)?,
        None => reference_layout(),
    };
    // Surface configuration errors before the terminal goes raw.
    layout.validate()?;

    enable_raw_mode()?;
    let release_reported = supports_keyboard_enhancement().unwrap_or(false);
    if release_reported {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = run(cli.method, &cli.text, layout, release_reported);

    if release_reported {
        execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;

    match result? {
        Some(text) => println!("{text}"),
        None => eprintln!("Aborted"),
    }
    Ok(())
}

fn run(
    method: Method,
    text: &str,
    layout: Layout,
    release_reported: bool,
) -> io::Result<Option<String>> {
    let mut events = CrosstermEvents::new(release_reported);
    let mut display = LineDisplay::new(io::stdout());
    match method {
        Method::Ternary => TernaryComposer::new(text).compose(&mut events, &mut display),
        Method::Roll => RollComposer::new(text, layout)
            .map_err(io::Error::other)?
            .compose(&mut events, &mut display),
    }
}
