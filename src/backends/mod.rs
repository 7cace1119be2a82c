//! Backend implementations

pub mod console;
pub mod icon;
pub mod none;
pub mod pretty;
pub mod structured;

pub use console::{ConsoleBackend, ConsoleStyle};
pub use icon::{IconBackend, IconStyle};
pub use none::NoneBackend;
pub use pretty::{disable_color, enable_color, PrettyBackend, PrettyStyle};
pub use structured::StructuredBackend;

// Re-export the trait for convenience
pub use crate::core::Backend;
