// Flash Countdown Library
// Countdown, progress and status derivation for flash community events

pub mod models;
pub mod services;

pub use models::flash_event::{FlashEvent, FlashEventId, FlashStatus, TriggerType};
pub use services::countdown::{
    classify_status, compute_countdown, start_ticker, CancelHandle, Clock, CountdownError,
    CountdownSnapshot,
};
