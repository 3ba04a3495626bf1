pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod theme;

pub use config::{AppConfig, MagnetTuning, MarqueeTuning, RevealTuning, ScrollTuning};
pub use content::{Section, WorkItem};
pub use error::{Error, Result};
pub use theme::{ThemeEvent, ThemeMode, ThemeStore};
