//! Terminal Renderer
//!
//! Renders page snapshots as ANSI text for the `pagekit` binary.

use std::fmt::Write;

use super::{Page, RenderTarget, TargetContent};
use crate::theme::{Rgb, VisualStyle};

const RESET: &str = "\x1b[0m";

/// Render every visible target of the page
pub fn render_page(page: &Page, color: bool) -> String {
    page.snapshots()
        .iter()
        .filter(|t| t.is_visible())
        .map(|t| render_target(t, color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one target: a `[key]` header followed by its content lines
pub fn render_target(target: &RenderTarget, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", target.key());

    let lines: Vec<String> = match target.content() {
        TargetContent::Empty => Vec::new(),
        TargetContent::Text(text) => text.lines().map(str::to_string).collect(),
        TargetContent::List(items) => items.iter().map(|item| format!("  - {item}")).collect(),
        TargetContent::Lines(lines) => lines.clone(),
    };

    for line in lines {
        match (color, target.style()) {
            (true, Some(style)) => {
                let _ = writeln!(out, "{}{line}{RESET}", ansi_prefix(style));
            }
            _ => {
                let _ = writeln!(out, "{line}");
            }
        }
    }
    out
}

fn ansi_prefix(style: &VisualStyle) -> String {
    let mut prefix = fg(style.foreground);
    if let Some(bg_color) = style.background {
        prefix.push_str(&bg(bg_color));
    }
    prefix
}

fn fg(c: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", c.r(), c.g(), c.b())
}

fn bg(c: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", c.r(), c.g(), c.b())
}
