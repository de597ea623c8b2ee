use crate::cli::{ConfigAction, ConfigKey};
use crate::error::{Result, ResultExt};
use crate::ui;
use colored::Colorize;
use config::{Config, FileUpdate, KNOWN_KEYS, ValueSource};
use std::path::Path;

pub fn execute(root: &Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::List => list(root),
        ConfigAction::Get { key, show_source } => {
            let config = config::resolve(root)?;
            println!("{}", get_line(&config, key, show_source));
            Ok(())
        }
        ConfigAction::Set { key, value } => set(root, key, &value),
        ConfigAction::Unset { key } => unset(root, key),
    }
}

/// The `config get` output line.
pub(crate) fn get_line(config: &Config, key: ConfigKey, show_source: bool) -> String {
    match (config.get(key.as_str()), show_source) {
        (Some((value, source)), true) => format!("{value} ({source})"),
        (Some((value, _)), false) => value,
        (None, true) => "(not set)".to_string(),
        (None, false) => String::new(),
    }
}

fn list(root: &Path) -> Result<()> {
    let config = config::resolve(root)?;
    ui::section_header("Configuration");
    for key in KNOWN_KEYS {
        match config.get(key) {
            Some((value, source)) => println!(
                "  {} = {} {}",
                key.bold(),
                value,
                format!("({source})").dimmed()
            ),
            None => println!("  {} {}", key.bold(), "(not set)".dimmed()),
        }
    }
    for (key, value) in config.extras() {
        println!(
            "  {} = {} {}",
            key.bold(),
            value,
            format!("({})", ValueSource::File).dimmed()
        );
    }
    println!();
    ui::info_message("CLI flags override config values, which override defaults.");
    Ok(())
}

fn set(root: &Path, key: ConfigKey, value: &str) -> Result<()> {
    config::update_value(root, key.as_str(), Some(value))
        .with_context(|| format!("Failed to set {key}"))?;
    ui::success_message(&format!("{key} = {value}"));
    Ok(())
}

fn unset(root: &Path, key: ConfigKey) -> Result<()> {
    match config::update_value(root, key.as_str(), None)? {
        FileUpdate::Unchanged => ui::info_message(&format!(
            "{key} is not set in configuration (already using default)"
        )),
        FileUpdate::Written(_) => ui::success_message(&format!("Removed {key}")),
        FileUpdate::Deleted(path) => ui::success_message(&format!(
            "Removed {key}; {} was empty and has been deleted",
            path.display()
        )),
    }
    Ok(())
}
