//! Color utilities for request ID visualization.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// Distinct ANSI colors for request ID coloring
///
/// The standard and bright variants of the six chromatic colors; all stay
/// readable on both light and dark backgrounds.
const COLORS: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to one of the palette colors
///
/// Uses a stable multiplicative string hash so the same ID always gets the
/// same color, across runs and without any shared state.
pub fn get_color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(131).wrapping_add(b as u32));
    COLORS[(hash as usize) % COLORS.len()]
}

/// Formats a request ID with consistent color coding
///
/// Returns a `String` with embedded ANSI color codes; owo-colors degrades
/// to plain text when output is not a terminal.
pub fn colored_id(id: &str) -> String {
    let color = get_color_for_id(id);
    let style = Style::new().color(DynColors::Ansi(color));
    format!("[{}]", id).style(style).to_string()
}
