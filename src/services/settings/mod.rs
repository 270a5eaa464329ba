//! TOML settings file for the planner.

mod service;

pub use service::SettingsService;
