//! Verification Report
//!
//! Colorized rendering of the "which variables are set" report, plus the
//! single color helper used across the crate. Rendering is separated from
//! printing so the report body is testable.

use colored::{Color, Colorize};

use crate::env::EnvStore;
use crate::types::Section;

/// Color a message, defaulting to green when no color is supplied.
pub fn colorize(message: &str, color: Option<Color>) -> String {
    message.color(color.unwrap_or(Color::Green)).to_string()
}

/// Render the report lines for the given sections against an environment
/// store: one decorative header per section, one status line per variable,
/// and exactly one closing footer after all sections.
pub fn render_report(sections: &[Section], env: &dyn EnvStore) -> Vec<String> {
    let mut lines = Vec::new();

    for section in sections {
        let rail = "\u{2550}".repeat(11);
        lines.push(colorize(
            &format!("{} \u{22C6} {} \u{22C6} {}", rail, section.label, rail),
            Some(Color::Magenta),
        ));

        for variable in &section.variables {
            let status = if env.is_set(variable) {
                colorize("Set", None)
            } else {
                colorize("Not set", Some(Color::Red))
            };
            lines.push(format!(
                "{} {}",
                colorize(&format!("\u{22C6}\u{29BF} \u{22C6} {}: ", variable), Some(Color::Cyan)),
                status
            ));
        }
    }

    let rail = "\u{2550}".repeat(16);
    lines.push(colorize(
        &format!("{} \u{22C6}\u{2605} \u{22C6} {}", rail, rail),
        Some(Color::Magenta),
    ));

    lines
}
