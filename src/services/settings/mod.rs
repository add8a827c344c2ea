// Settings service
// TOML-backed application configuration

mod service;

pub use service::SettingsService;
