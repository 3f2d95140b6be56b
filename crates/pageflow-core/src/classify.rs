//! Scroll intensity classification
//!
//! Turns a stream of normalized scroll events into a tri-state speed verdict
//! used to pick transition timing. Three weak signals are combined: the mean
//! interval between recent events, their mean magnitude, and a streak counter
//! of consecutive fast classifications. Any one of them alone misfires across
//! heterogeneous input devices (wheel granularity varies by terminal and OS);
//! together they are stable.
//!
//! The classifier is pure with respect to time: callers pass `Instant`s in,
//! which keeps every threshold testable without sleeping.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::MotionConfig;

/// One normalized scroll event in the rolling history.
#[derive(Debug, Clone)]
pub struct ScrollSample {
    /// When the event arrived
    pub at: Instant,
    /// Absolute scroll delta or derived swipe velocity
    pub magnitude: f64,
    /// Time since the previous event, in milliseconds.
    /// `f64::INFINITY` for the first event, which can therefore never
    /// be time-fast.
    pub interval_ms: f64,
}

/// Speed tier assigned to a single navigation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Normal,
    Fast,
    UltraFast,
}

/// Result of classifying one scroll event.
#[derive(Debug, Clone, Copy)]
pub struct Verdict {
    pub is_fast: bool,
    pub intensity: Intensity,
}

impl Verdict {
    const NORMAL: Self = Self {
        is_fast: false,
        intensity: Intensity::Normal,
    };
}

/// Rolling-window scroll intensity classifier.
///
/// Holds the bounded event history and the consecutive-fast streak counter.
/// The idle reset is modeled as a deadline that is rescheduled on every
/// recorded event (cancel-and-reschedule) and fired from the caller's tick
/// via [`maybe_idle_reset`](Self::maybe_idle_reset).
#[derive(Debug, Clone)]
pub struct IntensityClassifier {
    motion: MotionConfig,
    history: VecDeque<ScrollSample>,
    last_event: Option<Instant>,
    consecutive_fast: u32,
    idle_deadline: Option<Instant>,
}

impl IntensityClassifier {
    pub fn new(motion: MotionConfig) -> Self {
        let capacity = motion.history_len.max(1);
        Self {
            motion,
            history: VecDeque::with_capacity(capacity),
            last_event: None,
            consecutive_fast: 0,
            idle_deadline: None,
        }
    }

    /// Record one scroll event and classify it.
    ///
    /// Appends the sample to the history (evicting the oldest past capacity),
    /// analyzes the last three samples, bumps the fast streak when the verdict
    /// is fast, and reschedules the idle-reset deadline.
    pub fn record(&mut self, magnitude: f64, now: Instant) -> Verdict {
        let interval_ms = self
            .last_event
            .map(|prev| now.saturating_duration_since(prev).as_secs_f64() * 1000.0)
            .unwrap_or(f64::INFINITY);

        self.history.push_back(ScrollSample {
            at: now,
            magnitude,
            interval_ms,
        });
        while self.history.len() > self.motion.history_len.max(1) {
            self.history.pop_front();
        }

        // Analyze before bumping the streak: escalation to ultra-fast keys
        // off the streak value as it stood when this event arrived.
        let verdict = self.analyze();

        self.last_event = Some(now);
        if verdict.is_fast {
            self.consecutive_fast += 1;
        }
        self.idle_deadline = Some(now + self.motion.idle_reset());

        verdict
    }

    /// Classify the current history without mutating any state.
    fn analyze(&self) -> Verdict {
        if self.history.len() < 2 {
            return Verdict::NORMAL;
        }

        let recent: Vec<&ScrollSample> = self.history.iter().rev().take(3).collect();
        let n = recent.len() as f64;
        let avg_interval = recent.iter().map(|s| s.interval_ms).sum::<f64>() / n;
        let avg_magnitude = recent.iter().map(|s| s.magnitude).sum::<f64>() / n;

        let time_fast = avg_interval < self.motion.fast_interval_ms as f64;
        let magnitude_high = avg_magnitude > self.motion.high_magnitude;
        let has_streak = self.consecutive_fast >= 1;

        let is_fast = time_fast || magnitude_high || has_streak;

        let intensity = if self.consecutive_fast > 3 && time_fast && magnitude_high {
            Intensity::UltraFast
        } else if is_fast {
            Intensity::Fast
        } else {
            Intensity::Normal
        };

        Verdict { is_fast, intensity }
    }

    /// Fire the idle reset if the quiet period has elapsed.
    ///
    /// Returns true when the streak and history were cleared. Recording a new
    /// event pushes the deadline out again, so this only fires after a real
    /// gap in input.
    pub fn maybe_idle_reset(&mut self, now: Instant) -> bool {
        match self.idle_deadline {
            Some(deadline) if now >= deadline => {
                debug!(streak = self.consecutive_fast, "scroll streak reset after idle");
                self.consecutive_fast = 0;
                self.history.clear();
                self.idle_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Current consecutive-fast streak.
    #[inline]
    pub fn consecutive_fast(&self) -> u32 {
        self.consecutive_fast
    }

    /// Number of samples currently held.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Two-threshold swipe test for drag gestures.
///
/// A drag counts as a fast trigger when it both finished quickly and covered
/// at least one and a half times the base swipe distance. Independent of the
/// rolling-history classifier.
#[inline]
pub fn swipe_is_fast(
    elapsed: Duration,
    delta_rows: f64,
    threshold_rows: f64,
    window: Duration,
) -> bool {
    elapsed < window && delta_rows.abs() > threshold_rows * 1.5
}
