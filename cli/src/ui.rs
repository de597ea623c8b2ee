use crate::error::WorkflowViolation;
use colored::Colorize;
use std::io::{self, Write};

/// Print a status message for an operation in flight
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message on stderr
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {title} ====").cyan().bold());
}

pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print a step in a numbered list of steps
pub fn step_message(step_number: usize, message: &str) {
    println!("  {}. {}", step_number.to_string().cyan(), message);
}

/// Print a `label: value` line
pub fn field(label: &str, value: &str) {
    println!("{} {}", format!("{label}:").bold(), value);
}

/// Horizontal rule under a heading
pub fn rule() {
    println!("{}", "─".repeat(80).dimmed());
}

/// Print a blocked-workflow report on stderr
pub fn violation_block(violation: &WorkflowViolation) {
    eprintln!(
        "\n{} {}",
        format!("❌ {}:", violation.category).red().bold(),
        violation.explanation.red()
    );
    if violation.next_steps.is_empty() {
        return;
    }
    eprintln!("\n{}", "Next steps:".bold());
    for (i, step) in violation.next_steps.iter().enumerate() {
        eprintln!("  {}. {}", (i + 1).to_string().cyan(), step);
    }
}
