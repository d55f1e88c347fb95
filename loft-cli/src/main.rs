//! loft CLI - command-line interface
//!
//! Drives a configured handler stack from the shell: emit records, inspect
//! level routing and write starter configurations.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::{emit, init, resolve};

#[derive(Parser)]
#[command(name = "loft", version = loft::VERSION)]
#[command(about = "Leveled logging through a handler stack", long_about = None)]
struct Cli {
    /// Show loft's own debug diagnostics on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a message through the configured handler stack
    Emit(emit::EmitArgs),
    /// Show which handler services each level
    Resolve(resolve::ResolveArgs),
    /// Write a starter configuration file
    Init(init::InitArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = loft::logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let result = match cli.command {
        Commands::Emit(args) => emit::run(args),
        Commands::Resolve(args) => resolve::run(args),
        Commands::Init(args) => init::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
