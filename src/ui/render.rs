//! Terminal output for the shell

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::storage::history::History;
use crate::types::{QualitySelector, VideoMetadata};

/// (label, value) rows shown for probed metadata
pub fn metadata_rows(meta: &VideoMetadata) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Title", meta.title.clone().unwrap_or_else(|| "N/A".into()))];

    if let Some(duration) = meta.duration_display() {
        rows.push(("Duration", duration));
    }
    if let Some(size) = meta.size_display_mb() {
        rows.push(("Approximate Size", format!("{} MB", size)));
    }

    rows
}

/// Numbered history lines with the finish time, newest first
pub fn history_lines(history: &History) -> Vec<String> {
    history
        .list_most_recent_first()
        .enumerate()
        .map(|(i, entry)| format!("{}. {} ({})", i + 1, entry.url, entry.downloaded_at.format("%H:%M")))
        .collect()
}

pub fn metadata(meta: &VideoMetadata) {
    for (label, value) in metadata_rows(meta) {
        println!("{} {}", format!("{}:", label).bold(), value);
    }
}

/// Re-show the most recent lookup, if any
pub fn last_lookup(meta: Option<&VideoMetadata>) {
    let Some(meta) = meta else {
        return;
    };

    println!("{}", "Last looked up".bold());
    metadata(meta);
}

pub fn probe_warning() {
    println!("{}", "Unable to fetch video info. Please check the URL.".yellow());
}

pub fn prompt_error(error: &dialoguer::Error) {
    eprintln!("{} {}", "Input error:".red(), error);
}

pub fn error(error: &crate::error::YtGrabError) {
    eprintln!("{} {}", "Error:".red(), error);
}

pub fn empty_url_warning() {
    println!("{}", "Please enter a valid URL.".yellow());
}

pub fn starting(quality: QualitySelector) {
    println!("Starting download in {} quality...", quality.label().bold());
}

pub fn log(log: &str) {
    println!("{}", "Download Log:".dimmed());
    if log.is_empty() {
        println!("{}", "  (no output)".dimmed());
    }
    for line in log.lines() {
        println!("  {}", line.dimmed());
    }
}

pub fn success() {
    println!("{}", "✓ Download completed successfully.".green());
}

pub fn failure() {
    eprintln!("{}", "✗ Download failed. Please check the URL or try again.".red());
}

pub fn history(history: &History) {
    if history.is_empty() {
        println!("{}", "No downloads yet.".yellow());
        return;
    }

    println!("{}", "Download History".bold());
    for line in history_lines(history) {
        println!("{}", line);
    }
}

/// Spinner shown while a child process runs
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
