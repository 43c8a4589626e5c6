//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan   (object names and designations)
//!   - Hazard:    red    (potentially hazardous objects)
//!   - Muted:     dimmed (times, notes)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply semantic "hazard" color (bold red) to text.
pub fn hazard(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().bold().to_string()
}

/// Dim text of secondary importance.
pub fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Color an object's full name: red when potentially hazardous, cyan
/// otherwise.
pub(crate) fn colorize_name(full_name: &str, hazardous: bool, config: &OutputConfig) -> String {
    if hazardous {
        hazard(full_name, config)
    } else {
        info(full_name, config)
    }
}
