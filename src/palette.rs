//! Color palette and styling for CLI output.
//!
//! This module defines a consistent visual style for all resume output.
//! Every formatter takes a `use_color` flag and returns plain text when it is
//! false, so callers never need to branch on color themselves.

use owo_colors::{OwoColorize, Style};

/// Gradient start color for the name and banner.
pub const GRADIENT_FROM: (u8, u8, u8) = (0, 200, 255);
/// Gradient end color for the name and banner.
pub const GRADIENT_TO: (u8, u8, u8) = (200, 80, 255);

/// Style for the person's name - the most prominent line.
pub fn name() -> Style {
    Style::new().cyan().bold()
}

/// Style for section headings like "Education" or "Projects".
pub fn heading() -> Style {
    Style::new().white().bold()
}

/// Style for the rule under a heading.
pub fn rule() -> Style {
    Style::new().dimmed()
}

/// Style for entry titles such as schools and project names.
pub fn entry() -> Style {
    Style::new().cyan()
}

/// Style for labels like "Email:" or "Languages:".
pub fn label() -> Style {
    Style::new().blue()
}

/// Style for bullet markers.
pub fn bullet() -> Style {
    Style::new().blue()
}

/// Style for the box border.
pub fn border() -> Style {
    Style::new().dimmed()
}

/// Apply a style when color is enabled.
pub fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Format the name with styling.
pub fn fmt_name(text: &str, use_color: bool) -> String {
    paint(text, name(), use_color)
}

/// Format a section heading with styling.
pub fn fmt_heading(text: &str, use_color: bool) -> String {
    paint(text, heading(), use_color)
}

/// Format a label with styling.
pub fn fmt_label(text: &str, use_color: bool) -> String {
    paint(text, label(), use_color)
}

/// Color each character along a gradient between two RGB colors.
///
/// Whitespace is left unstyled so trailing padding stays invisible.
pub fn fmt_gradient(text: &str, from: (u8, u8, u8), to: (u8, u8, u8)) -> String {
    let count = text.chars().count();
    let mut output = String::new();
    for (index, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            output.push(ch);
            continue;
        }
        let position = if count > 1 {
            index as f32 / (count - 1) as f32
        } else {
            0.0
        };
        let (r, g, b) = blend(from, to, position);
        let style = Style::new().truecolor(r, g, b).bold();
        output.push_str(&ch.style(style).to_string());
    }
    output
}

/// Linearly interpolate between two colors.
fn blend(from: (u8, u8, u8), to: (u8, u8, u8), position: f32) -> (u8, u8, u8) {
    let mix = |a: u8, b: u8| {
        let value = f32::from(a) + (f32::from(b) - f32::from(a)) * position;
        value.round().clamp(0.0, 255.0) as u8
    };
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}
