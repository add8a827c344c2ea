mod calculator;
mod clock;
mod error;
mod format;
mod models;
mod ring;
mod status;
mod ticker;

pub use calculator::{compute_countdown, compute_countdown_from_millis, compute_countdown_with};
pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use error::{
    parse_timestamp, timestamp_from_millis, timestamp_from_millis_f64, CountdownError, Result,
};
pub use format::DisplayFormat;
pub use models::{
    display_text_or_placeholder, CountdownSettings, CountdownSnapshot, RemainingTime, ENDED_TEXT,
    MAX_DURATION_HOURS, PLACEHOLDER_TEXT,
};
pub use ring::{bar_fill_width, ProgressRing, RingSize, RING_STROKE_WIDTH};
pub use status::classify_status;
pub use ticker::{
    start_ticker, start_ticker_with, CancelHandle, CountdownTicker, TickerOptions,
    DEFAULT_TICK_INTERVAL,
};
