//! Periodic countdown refresh.
//!
//! [`CountdownTicker`] holds the per-countdown tick logic and is driven by
//! explicit instants. [`start_ticker`] runs one on a tokio interval and hands
//! back a [`CancelHandle`] that tears it down.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::calculator::compute_countdown_with;
use super::clock::{Clock, SystemClock};
use super::error::{CountdownError, Result};
use super::models::{CountdownSettings, CountdownSnapshot};

/// Default refresh cadence.
pub const DEFAULT_TICK_INTERVAL: StdDuration = StdDuration::from_millis(1_000);

/// Tick logic for one displayed countdown.
///
/// Yields a snapshot per tick until it has yielded the ended snapshot once,
/// then stays finished.
#[derive(Debug, Clone)]
pub struct CountdownTicker {
    ends_at: DateTime<Utc>,
    settings: CountdownSettings,
    finished: bool,
}

impl CountdownTicker {
    pub fn new(ends_at: DateTime<Utc>, settings: CountdownSettings) -> Self {
        Self {
            ends_at,
            settings,
            finished: false,
        }
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<CountdownSnapshot> {
        if self.finished {
            return None;
        }

        let snapshot = compute_countdown_with(now, self.ends_at, &self.settings);
        if snapshot.is_ended {
            self.finished = true;
        }
        Some(snapshot)
    }
}

/// Everything a running ticker needs.
#[derive(Debug, Clone)]
pub struct TickerOptions<C> {
    pub clock: C,
    pub interval: StdDuration,
    pub settings: CountdownSettings,
}

impl Default for TickerOptions<SystemClock> {
    fn default() -> Self {
        Self {
            clock: SystemClock,
            interval: DEFAULT_TICK_INTERVAL,
            settings: CountdownSettings::default(),
        }
    }
}

impl<C: Clock> TickerOptions<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            interval: DEFAULT_TICK_INTERVAL,
            settings: CountdownSettings::default(),
        }
    }
}

struct TickerSlot<F> {
    on_tick: Option<F>,
    cancelled: bool,
}

impl<F> TickerSlot<F> {
    fn close(&mut self) {
        self.cancelled = true;
        self.on_tick = None;
    }
}

type SharedSlot<F> = Arc<Mutex<TickerSlot<F>>>;

fn lock_slot<F>(slot: &Mutex<TickerSlot<F>>) -> MutexGuard<'_, TickerSlot<F>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Object-safe view of a ticker's shared state so the handle does not
/// carry the callback type.
trait TickerControl: Send + Sync {
    fn close(&self) -> bool;
    fn is_closed(&self) -> bool;
}

impl<F: Send> TickerControl for Mutex<TickerSlot<F>> {
    fn close(&self) -> bool {
        let mut slot = lock_slot(self);
        let was_open = !slot.cancelled;
        slot.close();
        was_open
    }

    fn is_closed(&self) -> bool {
        lock_slot(self).cancelled
    }
}

/// Owner of a running ticker. Dropping it cancels the ticker.
pub struct CancelHandle {
    control: Arc<dyn TickerControl>,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl CancelHandle {
    /// Stop the ticker. Waits for an in-flight tick to finish, so no
    /// callback runs after this returns. Cancelling twice is a no-op.
    ///
    /// Must not be called from inside the ticker's own callback.
    pub fn cancel(&mut self) {
        if self.control.close() {
            log::debug!("Countdown ticker cancelled");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True once cancelled or self-cancelled after reporting "Ended".
    pub fn is_cancelled(&self) -> bool {
        self.control.is_closed()
    }

    /// Wait until the ticker stops on its own or is cancelled.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.take() {
            // An aborted task reports a JoinError; either way it is done.
            let _ = task.await;
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start a one-second ticker against the system clock.
///
/// `on_tick` receives the first snapshot before this returns, then one per
/// `interval` until the countdown has reported "Ended".
pub fn start_ticker<F>(ends_at: DateTime<Utc>, on_tick: F, interval: StdDuration) -> Result<CancelHandle>
where
    F: FnMut(CountdownSnapshot) + Send + 'static,
{
    let options = TickerOptions {
        interval,
        ..TickerOptions::default()
    };
    start_ticker_with(ends_at, options, on_tick)
}

/// Start a ticker with an explicit clock, interval and settings.
pub fn start_ticker_with<C, F>(ends_at: DateTime<Utc>, options: TickerOptions<C>, mut on_tick: F) -> Result<CancelHandle>
where
    C: Clock + 'static,
    F: FnMut(CountdownSnapshot) + Send + 'static,
{
    if options.interval.is_zero() {
        return Err(CountdownError::InvalidSetting {
            field: "tick_interval_ms",
            reason: "must be greater than zero".to_string(),
        });
    }
    let runtime = tokio::runtime::Handle::try_current().map_err(|_| CountdownError::RuntimeUnavailable)?;

    let TickerOptions {
        clock,
        interval,
        settings,
    } = options;
    let mut ticker = CountdownTicker::new(ends_at, settings);

    // First snapshot is delivered synchronously, without waiting a period.
    if let Some(first) = ticker.tick(clock.now()) {
        on_tick(first);
    }

    let slot: SharedSlot<F> = Arc::new(Mutex::new(TickerSlot {
        on_tick: Some(on_tick),
        cancelled: false,
    }));

    if ticker.is_finished() {
        log::debug!("Countdown to {ends_at} already ended; ticker not scheduled");
        lock_slot(&slot).close();
        return Ok(CancelHandle {
            control: slot,
            task: None,
        });
    }

    log::debug!("Starting countdown ticker to {ends_at} every {interval:?}");
    let task_slot = Arc::clone(&slot);
    let task = runtime.spawn(async move {
        run_ticker(ticker, clock, interval, task_slot).await;
    });

    Ok(CancelHandle {
        control: slot,
        task: Some(task),
    })
}

async fn run_ticker<C, F>(mut ticker: CountdownTicker, clock: C, period: StdDuration, slot: SharedSlot<F>)
where
    C: Clock,
    F: FnMut(CountdownSnapshot) + Send,
{
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut guard = lock_slot(&slot);
        if guard.cancelled {
            break;
        }
        let Some(snapshot) = ticker.tick(clock.now()) else {
            guard.close();
            break;
        };
        let ended = snapshot.is_ended;
        if let Some(on_tick) = guard.on_tick.as_mut() {
            on_tick(snapshot);
        }
        if ended {
            log::debug!("Countdown to {} ended; ticker self-cancelled", ticker.ends_at());
            guard.close();
            break;
        }
    }
}
