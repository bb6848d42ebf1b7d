//! Gesture activation constraints.
//!
//! A pointer-down only becomes a drag gesture once its sensor's constraint
//! is met, so plain clicks on cards and menus are not swallowed as drags.

use crate::drag::collision::Point;
use serde::Deserialize;

/// Mouse/pen: activate after the pointer travels `distance` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointerActivation {
    pub distance: f64,
}

impl Default for PointerActivation {
    fn default() -> Self {
        Self { distance: 5.0 }
    }
}

/// Touch: activate after holding `delay_ms` without drifting past `tolerance` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TouchActivation {
    pub delay_ms: u64,
    pub tolerance: f64,
}

impl Default for TouchActivation {
    fn default() -> Self {
        Self {
            delay_ms: 250,
            tolerance: 5.0,
        }
    }
}

/// Outcome of feeding one pointer sample to a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Constraint not met yet; keep sampling.
    Pending,
    /// Start the drag gesture.
    Activated,
    /// Touch drifted before the hold delay elapsed; treat as a scroll.
    Aborted,
}

impl PointerActivation {
    /// Evaluates one move sample relative to the pointer-down origin.
    pub fn evaluate(&self, origin: Point, current: Point) -> Activation {
        if origin.distance_to(current) >= self.distance {
            Activation::Activated
        } else {
            Activation::Pending
        }
    }
}

impl TouchActivation {
    /// Evaluates one sample taken `elapsed_ms` after touch start.
    pub fn evaluate(&self, origin: Point, current: Point, elapsed_ms: u64) -> Activation {
        if origin.distance_to(current) > self.tolerance {
            return Activation::Aborted;
        }
        if elapsed_ms >= self.delay_ms {
            Activation::Activated
        } else {
            Activation::Pending
        }
    }
}
