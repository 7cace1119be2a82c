//! Colorful human-friendly backend

use super::console::{ConsoleBackend, ConsoleStyle};
use crate::core::Level;
use colored::Colorize;

pub const NAME: &str = "pretty";

/// Level symbol colored with the level color, message left plain.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrettyStyle;

impl ConsoleStyle for PrettyStyle {
    const NAME: &'static str = NAME;

    fn symbol(&self, level: Level) -> &'static str {
        match level {
            Level::Warning => "❗ ",
            Level::Success => "✔️  ",
            Level::Fatal | Level::Error => "❌  ",
            Level::Debug => "—  ",
            _ => "〜 ",
        }
    }

    fn render(&self, level: Level, message: &str) -> String {
        format!("{}{}\n", self.symbol(level).color(level.color()), message)
    }
}

pub type PrettyBackend = ConsoleBackend<PrettyStyle>;

/// Force colors off (`true`) or on (`false`) for every pretty backend.
pub fn disable_color(flag: bool) {
    colored::control::set_override(!flag);
}

/// Force colors on (`true`) or off (`false`) for every pretty backend.
pub fn enable_color(flag: bool) {
    colored::control::set_override(flag);
}
