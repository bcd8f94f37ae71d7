//! Bold ANSI color formatting.
//!
//! Each helper returns the text wrapped in a bold, colored ANSI sequence
//! followed by a reset. The semantic helpers map onto colors:
//! [`info`] is teal, [`warn`] is yellow and [`fatal`] is red.

use std::fmt::Display;

use owo_colors::{AnsiColors, OwoColorize, Style};

fn paint(text: impl Display, color: AnsiColors) -> String {
    let style = Style::new().color(color).bold();
    text.style(style).to_string()
}

pub fn black(text: impl Display) -> String {
    paint(text, AnsiColors::Black)
}

pub fn red(text: impl Display) -> String {
    paint(text, AnsiColors::Red)
}

pub fn green(text: impl Display) -> String {
    paint(text, AnsiColors::Green)
}

pub fn yellow(text: impl Display) -> String {
    paint(text, AnsiColors::Yellow)
}

/// Purple is ANSI blue.
pub fn purple(text: impl Display) -> String {
    paint(text, AnsiColors::Blue)
}

pub fn magenta(text: impl Display) -> String {
    paint(text, AnsiColors::Magenta)
}

/// Teal is ANSI cyan.
pub fn teal(text: impl Display) -> String {
    paint(text, AnsiColors::Cyan)
}

pub fn white(text: impl Display) -> String {
    paint(text, AnsiColors::White)
}

pub fn info(text: impl Display) -> String {
    teal(text)
}

pub fn warn(text: impl Display) -> String {
    yellow(text)
}

pub fn fatal(text: impl Display) -> String {
    red(text)
}
