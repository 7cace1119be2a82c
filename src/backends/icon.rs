//! Human-friendly backend decorated with emoji

use super::console::{ConsoleBackend, ConsoleStyle};
use crate::core::Level;

pub const NAME: &str = "icon";

#[derive(Debug, Default, Clone, Copy)]
pub struct IconStyle;

impl ConsoleStyle for IconStyle {
    const NAME: &'static str = NAME;

    fn symbol(&self, level: Level) -> &'static str {
        match level {
            Level::Warning => " ❗ ",
            Level::Success => "✅  ",
            Level::Fatal | Level::Error => "❌  ",
            Level::Debug => "🐞  ",
            _ => "ℹ️ ",
        }
    }
}

pub type IconBackend = ConsoleBackend<IconStyle>;
