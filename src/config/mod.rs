//! Configuration management for focuswave.
//!
//! This module handles loading and saving configuration from `~/.focuswave/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FocusConfig, GeneralConfig, StatsConfig};
