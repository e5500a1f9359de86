//! Utilities module - Colored terminal output for the commands

use colored::*;
use std::path::Path;

/// Print one `label: value` input line
pub fn print_field(label: &str, value: &str) {
    println!("   {:<10} {}", format!("{label}:").bright_black(), value.bright_green());
}

/// Print a created path, directories with a folder icon
pub fn print_created(path: &Path) {
    let icon = if path.is_dir() { "📁" } else { "📄" };
    println!(
        "   {} {} {}",
        "✓".bright_green(),
        icon,
        path.display().to_string().bright_cyan()
    );
}
