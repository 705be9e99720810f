//! # Animation Timelines
//!
//! Cosmetic motion as data. A [`Timeline`] is a start value, an optional
//! delay, and a sequence of keyframes, each with a target, a duration, and
//! an easing curve. Components ask a timeline for its value at "time since
//! the screen appeared" and turn that into a glyph, color, or offset.
//!
//! ```text
//!   from ──delay──▶ kf[0].to ──▶ kf[1].to ──▶ ... ──▶ (repeat: back to from)
//! ```
//!
//! Nothing here owns a clock. The event loop measures elapsed time and
//! passes it in, which keeps every timeline a pure function.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(to: f32, millis: u64, easing: Easing) -> Self {
        Self {
            to,
            duration: Duration::from_millis(millis),
            easing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub from: f32,
    pub delay: Duration,
    pub keyframes: Vec<Keyframe>,
    pub repeat: bool,
}

impl Timeline {
    pub fn new(from: f32) -> Self {
        Self {
            from,
            delay: Duration::ZERO,
            keyframes: Vec::new(),
            repeat: false,
        }
    }

    pub fn then(mut self, to: f32, millis: u64, easing: Easing) -> Self {
        self.keyframes.push(Keyframe::new(to, millis, easing));
        self
    }

    pub fn delayed(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Length of one pass through the keyframes (excluding delay).
    pub fn cycle(&self) -> Duration {
        self.keyframes.iter().map(|kf| kf.duration).sum()
    }

    /// True once a non-repeating timeline has reached its final value.
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        !self.repeat && elapsed >= self.delay + self.cycle()
    }

    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return self.from;
        }
        let cycle = self.cycle();
        if cycle.is_zero() {
            return self.keyframes.last().map_or(self.from, |kf| kf.to);
        }

        let mut t = elapsed - self.delay;
        if self.repeat {
            t = Duration::from_nanos((t.as_nanos() % cycle.as_nanos()) as u64);
        } else if t >= cycle {
            return self.keyframes.last().map_or(self.from, |kf| kf.to);
        }

        let mut start = self.from;
        for kf in &self.keyframes {
            if t < kf.duration {
                let progress = t.as_secs_f32() / kf.duration.as_secs_f32();
                return start + (kf.to - start) * kf.easing.apply(progress);
            }
            t -= kf.duration;
            start = kf.to;
        }
        start
    }
}

// ============================================================================
// Timelines used by the screens
// ============================================================================

/// Globe rotation in degrees, one turn every 3 s.
pub fn globe_spin() -> Timeline {
    Timeline::new(0.0).then(360.0, 3000, Easing::Linear).repeating()
}

/// Outer ring rotation in degrees, counter-clockwise every 4 s.
pub fn ring_spin() -> Timeline {
    Timeline::new(0.0).then(-360.0, 4000, Easing::Linear).repeating()
}

/// Opacity of the "..." after the loading title.
pub fn loading_dots() -> Timeline {
    Timeline::new(0.0)
        .then(0.0, 500, Easing::Linear)
        .then(1.0, 500, Easing::Linear)
        .then(0.0, 500, Easing::Linear)
        .repeating()
}

/// Opacity of skeleton placeholder rows.
pub fn skeleton_pulse() -> Timeline {
    Timeline::new(0.4)
        .then(0.7, 1000, Easing::EaseInOut)
        .then(0.4, 1000, Easing::EaseInOut)
        .repeating()
}

/// Scale of one expanding ring around the error icon.
pub fn error_ring_scale(delay_ms: u64) -> Timeline {
    Timeline::new(1.0)
        .then(1.8, 2000, Easing::EaseOut)
        .delayed(delay_ms)
        .repeating()
}

/// Opacity of one expanding ring around the error icon.
pub fn error_ring_opacity(delay_ms: u64) -> Timeline {
    Timeline::new(0.5)
        .then(0.0, 2000, Easing::EaseOut)
        .delayed(delay_ms)
        .repeating()
}

/// Vertical bob of a floating icon, in tenths of a row.
pub fn float_bob(offset: f32, half_period_ms: u64, delay_ms: u64) -> Timeline {
    Timeline::new(0.0)
        .then(offset, half_period_ms, Easing::EaseInOut)
        .then(0.0, half_period_ms, Easing::EaseInOut)
        .delayed(delay_ms)
        .repeating()
}

/// One-shot fade from 0 to 1.
pub fn fade_in(delay_ms: u64) -> Timeline {
    Timeline::new(0.0).then(1.0, 400, Easing::EaseOut).delayed(delay_ms)
}
