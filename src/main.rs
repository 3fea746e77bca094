//! Farelens CLI entry point

use std::time::Instant;

use clap::Parser;

use farelens::cli::{Cli, Commands};
use farelens::utils::{print_banner, print_elapsed, print_error};
use farelens::{allocate, economics};

fn main() {
    let start = Instant::now();
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Allocate { input_file } => allocate::run(input_file),
        Commands::Economics { data_path } => economics::run(data_path),
    };

    // Diagnostics are printed rather than signalled; the process exits
    // normally even when a pipeline fails.
    if let Err(e) = result {
        print_error(&format!("An unexpected error occurred: {:#}", e));
    }

    print_elapsed(start.elapsed());
}
