//! ANSI decoration for the console transport. 24-bit true color — the
//! terminals this library targets all support it, and it keeps the level
//! palette exact instead of approximated to the nearest 256-color cell.

use crate::level::Level;
use std::fmt;

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// `const` so the level palette can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape — callers shouldn't hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default palette keyed by severity — Trace/Debug muted, Warn/Error loud.
#[must_use]
pub const fn level_color(level: Level) -> Color {
    match level {
        Level::Trace | Level::Debug => Color::purple(),
        Level::Info => Color::cyan(),
        Level::Warn => Color::yellow(),
        Level::Error => Color::red(),
    }
}

/// Convenience wrapper — most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
