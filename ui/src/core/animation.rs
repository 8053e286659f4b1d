//! Count-up interpolation for animated metric counters.
//!
//! The easing math is pure; the frame loop that drives it lives in the
//! counter component and only supplies a [`Clock`].

use super::timing::Clock;

/// Default duration of a count-up run.
pub const COUNT_UP_DURATION_MS: f64 = 1200.0;

/// Linear interpolation from zero to `target` over `duration_ms`.
///
/// Elapsed time is clamped, so values before the start read as `0.0` and
/// values at or past the end read as `target`. A non-positive duration
/// jumps straight to `target`.
pub fn value_at(elapsed_ms: f64, duration_ms: f64, target: f64) -> f64 {
    if duration_ms <= 0.0 || !duration_ms.is_finite() {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    target * progress
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpConfig {
    pub duration_ms: f64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: COUNT_UP_DURATION_MS,
        }
    }
}

/// One sample of a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub finished: bool,
}

/// A single count-up run anchored at the clock time it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    started_ms: f64,
    target: f64,
    config: CountUpConfig,
}

impl CountUp {
    pub fn start(clock: &impl Clock, target: f64, config: CountUpConfig) -> Self {
        Self {
            started_ms: clock.now_ms(),
            target,
            config,
        }
    }

    pub fn sample(&self, clock: &impl Clock) -> Frame {
        let elapsed = clock.now_ms() - self.started_ms;
        Frame {
            value: value_at(elapsed, self.config.duration_ms, self.target),
            finished: elapsed >= self.config.duration_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}
