// Models module
// Flash event records and application configuration

pub mod flash_event;
pub mod settings;
