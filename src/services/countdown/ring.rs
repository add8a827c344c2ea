//! Stroke geometry for circular and bar timers.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::models::CountdownSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RingSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl RingSize {
    /// Side of the square the ring is drawn in.
    pub fn box_size(&self) -> f32 {
        match self {
            RingSize::Sm => 56.0,
            RingSize::Md => 96.0,
            RingSize::Lg => 128.0,
            RingSize::Xl => 160.0,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            RingSize::Sm => 24.0,
            RingSize::Md => 42.0,
            RingSize::Lg => 58.0,
            RingSize::Xl => 74.0,
        }
    }
}

pub const RING_STROKE_WIDTH: f32 = 6.0;

/// Dash pattern for a progress ring at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub size: RingSize,
    pub circumference: f32,
    /// Length of the undrawn part of the stroke.
    pub dash_offset: f32,
}

impl ProgressRing {
    pub fn new(size: RingSize, progress_fraction: f64) -> Self {
        let circumference = 2.0 * PI * size.radius();
        let progress = progress_fraction.clamp(0.0, 1.0) as f32;
        Self {
            size,
            circumference,
            dash_offset: circumference * (1.0 - progress),
        }
    }

    pub fn for_snapshot(size: RingSize, snapshot: &CountdownSnapshot) -> Self {
        Self::new(size, snapshot.progress_fraction)
    }

    pub fn center(&self) -> f32 {
        self.size.box_size() / 2.0
    }

    pub fn drawn_length(&self) -> f32 {
        self.circumference - self.dash_offset
    }
}

/// Width of a linear progress bar in pixels.
pub fn bar_fill_width(total_width: f32, snapshot: &CountdownSnapshot) -> f32 {
    total_width.max(0.0) * snapshot.progress_fraction.clamp(0.0, 1.0) as f32
}
