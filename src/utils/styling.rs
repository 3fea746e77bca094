//! Terminal styling helpers built on console

use console::style;
use std::time::Duration;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("farelens").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("ℹ").cyan(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print elapsed wall-clock time for a step or the whole run
pub fn print_elapsed(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("Completed in {:.4}s", elapsed.as_secs_f64())).dim()
    );
}
