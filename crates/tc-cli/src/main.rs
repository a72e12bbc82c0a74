//! Console tour of introductory language concepts.

mod commands;
mod demos;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "concepts",
    about = "A menu-driven tour of types, arrays and trait objects",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Do not wait for Enter after each demo
    #[arg(long, global = true)]
    no_pause: bool,

    /// Never clear the screen
    #[arg(long, global = true)]
    no_clear: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the interactive menu (default)
    Menu,

    /// Run a single demo by its menu number
    Run {
        /// Menu number
        choice: u32,
    },

    /// List the creature kinds and what they do
    Bestiary {
        /// Only show this kind (vampire, zombie, skeleton)
        #[arg(short, long)]
        kind: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(!cli.no_pause, !cli.no_clear),
        Commands::Run { choice } => commands::run::run(choice),
        Commands::Bestiary { kind, json } => commands::bestiary::run(kind.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
