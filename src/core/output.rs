//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the formatting functions used by the non-interactive
//! commands and by the final report printed after the terminal UI exits, so
//! every message shares the same colors and spacing.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Repository states**: Green check for enabled, red cross for disabled

use crate::core::repository::Repository;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a warning, used when a save succeeded but a later step failed
pub fn print_warning(message: &str) {
    eprintln!("\n{} {}\n", "!".yellow(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
///
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Render one repository as `[✓] name` or `[✗] name`
pub fn format_repository_line(repository: &Repository) -> String {
    let marker = if repository.enabled {
        "[✓]".green()
    } else {
        "[✗]".red()
    };
    format!("   {} {}", marker, repository.name.white())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_functions_do_not_panic() {
        print_error("Test error message");
        print_warning("Saved, but failed to sync");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Repositories");
    }

    #[test]
    fn test_format_repository_line() {
        colored::control::set_override(false);
        let enabled = format_repository_line(&Repository::new("core", true));
        let disabled = format_repository_line(&Repository::new("multilib", false));
        colored::control::unset_override();

        assert_eq!(enabled, "   [✓] core");
        assert_eq!(disabled, "   [✗] multilib");
    }
}
