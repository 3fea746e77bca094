//! CLI module - argument parsing

mod args;

pub use args::{allocation_output_path, economics_output_dir, Cli, Commands};
