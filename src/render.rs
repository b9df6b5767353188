//! TUI rendering traits for rozpis types.
//!
//! Extension traits that add colored terminal rendering to rozpis-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use rozpis_core::{FeedConfig, Venue};

use crate::batch::BatchReport;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for FeedConfig {
    fn render(&self) -> String {
        format!("📅 {} {}", self.output_name(), self.title.dimmed())
    }
}

impl Render for Venue {
    fn render(&self) -> String {
        format!(
            "{:<3} {:>4} min  {}",
            self.code().bold(),
            self.travel_minutes(),
            self.label()
        )
    }
}

impl Render for BatchReport {
    fn render(&self) -> String {
        if self.is_success() {
            let line = format!(
                "Generated {} {}",
                self.total,
                pluralize("calendar", self.total)
            );
            line.green().to_string()
        } else {
            let line = format!(
                "{} of {} {} failed",
                self.failures.len(),
                self.total,
                pluralize("calendar", self.total)
            );
            line.red().to_string()
        }
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
