//! Section navigation state machine
//!
//! Owns the current section index and enforces one transition at a time.
//! Requests arriving while a transition is in flight are dropped, not queued:
//! the most recent gesture during a transition is deliberately lost. Out of
//! range and same-index requests fail silently. Both are product behavior,
//! not error conditions.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::classify::{IntensityClassifier, Verdict};
use crate::config::MotionConfig;

/// Transition speed tier, resolved from the fast-scroll flag and the
/// classifier's consecutive-fast streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedClass {
    Normal,
    Fast,
    UltraFast,
}

impl SpeedClass {
    /// Animation duration for this tier.
    pub fn duration(self, motion: &MotionConfig) -> Duration {
        let ms = match self {
            SpeedClass::Normal => motion.normal_ms,
            SpeedClass::Fast => motion.fast_ms,
            SpeedClass::UltraFast => motion.ultra_fast_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedClass::Normal => "normal",
            SpeedClass::Fast => "fast",
            SpeedClass::UltraFast => "ultra-fast",
        }
    }
}

/// Resolved output of an accepted navigation request.
#[derive(Debug, Clone, Copy)]
pub struct TransitionIntent {
    pub target: usize,
    pub speed: SpeedClass,
}

/// An in-flight section transition.
#[derive(Debug, Clone)]
pub struct Transition {
    from: usize,
    to: usize,
    speed: SpeedClass,
    started: Instant,
    duration: Duration,
}

impl Transition {
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline]
    pub fn speed(&self) -> SpeedClass {
        self.speed
    }

    #[inline]
    pub fn started(&self) -> Instant {
        self.started
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Elapsed fraction of the transition, clamped to [0, 1].
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Fullpage section navigator.
///
/// `Idle` and `Transitioning` states are the two arms of the inner
/// `Option<Transition>`. The navigator owns its [`IntensityClassifier`] so
/// the streak counter that drives the duration table has a single home.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    current: usize,
    total: usize,
    transition: Option<Transition>,
    classifier: IntensityClassifier,
    motion: MotionConfig,
}

impl SectionNavigator {
    /// Create a navigator over `total` sections, starting at index 0.
    pub fn new(total: usize, motion: MotionConfig) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            transition: None,
            classifier: IntensityClassifier::new(motion.clone()),
            motion,
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total_sections(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[inline]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    #[inline]
    pub fn classifier(&self) -> &IntensityClassifier {
        &self.classifier
    }

    /// Feed one normalized scroll event through the owned classifier.
    pub fn record_scroll(&mut self, magnitude: f64, now: Instant) -> Verdict {
        self.classifier.record(magnitude, now)
    }

    /// Resolve the speed tier for a request given the current streak.
    ///
    /// Checked in order: a streak above 3 wins outright, then the fast flag
    /// or a streak above 1, then normal.
    pub fn speed_class(&self, is_fast: bool) -> SpeedClass {
        let streak = self.classifier.consecutive_fast();
        if streak > 3 {
            SpeedClass::UltraFast
        } else if is_fast || streak > 1 {
            SpeedClass::Fast
        } else {
            SpeedClass::Normal
        }
    }

    /// Request a transition to an absolute section index.
    ///
    /// Returns `None` without changing any state when the index is current,
    /// out of range, or a transition is already in flight.
    pub fn request_go_to(
        &mut self,
        index: usize,
        is_fast: bool,
        now: Instant,
    ) -> Option<TransitionIntent> {
        if index == self.current || self.transition.is_some() || index >= self.total {
            return None;
        }

        let speed = self.speed_class(is_fast);
        let from = self.current;
        self.current = index;
        self.transition = Some(Transition {
            from,
            to: index,
            speed,
            started: now,
            duration: speed.duration(&self.motion),
        });

        debug!(from, to = index, speed = speed.label(), "section transition");

        Some(TransitionIntent {
            target: index,
            speed,
        })
    }

    /// Go to the next section; silent no-op at the last one.
    pub fn request_next(&mut self, is_fast: bool, now: Instant) -> Option<TransitionIntent> {
        if self.current + 1 < self.total {
            self.request_go_to(self.current + 1, is_fast, now)
        } else {
            None
        }
    }

    /// Go to the previous section; silent no-op at the first one.
    pub fn request_prev(&mut self, is_fast: bool, now: Instant) -> Option<TransitionIntent> {
        if self.current > 0 {
            self.request_go_to(self.current - 1, is_fast, now)
        } else {
            None
        }
    }

    /// Jump to the first section.
    pub fn go_to_first(&mut self, now: Instant) -> Option<TransitionIntent> {
        self.request_go_to(0, false, now)
    }

    /// Jump to the last section.
    pub fn go_to_last(&mut self, now: Instant) -> Option<TransitionIntent> {
        self.request_go_to(self.total - 1, false, now)
    }

    /// Advance the transition lifecycle and the classifier's idle timer.
    ///
    /// Returns true when a transition completed on this tick and the
    /// navigator returned to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.classifier.maybe_idle_reset(now);

        if let Some(t) = &self.transition {
            if now.saturating_duration_since(t.started) >= t.duration {
                self.transition = None;
                return true;
            }
        }
        false
    }

    /// Index the active indicator should show right now.
    ///
    /// The swap to the target lags the transition start by the prepare delay
    /// so the incoming section can settle visually before it is marked
    /// active.
    pub fn indicator_index(&self, now: Instant) -> usize {
        match &self.transition {
            Some(t)
                if now.saturating_duration_since(t.started) < self.motion.prepare_delay() =>
            {
                t.from
            }
            _ => self.current,
        }
    }

    /// Section being prepared, for the whole transition window.
    pub fn preparing_index(&self) -> Option<usize> {
        self.transition.as_ref().map(|t| t.to)
    }

    #[inline]
    pub fn at_last(&self) -> bool {
        self.current + 1 == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(total: usize) -> SectionNavigator {
        SectionNavigator::new(total, MotionConfig::default())
    }

    #[test]
    fn test_fresh_request_is_normal_speed() {
        let mut nav = navigator(3);
        let now = Instant::now();
        let intent = nav.request_next(false, now).expect("transition starts");
        assert_eq!(intent.target, 1);
        assert_eq!(intent.speed, SpeedClass::Normal);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(
            nav.transition().map(|t| t.duration()),
            Some(Duration::from_millis(1200))
        );
    }

    #[test]
    fn test_fast_flag_picks_fast_duration() {
        let mut nav = navigator(3);
        let now = Instant::now();
        let intent = nav.request_next(true, now).expect("transition starts");
        assert_eq!(intent.speed, SpeedClass::Fast);
        assert_eq!(
            nav.transition().map(|t| t.duration()),
            Some(Duration::from_millis(700))
        );
    }

    #[test]
    fn test_streak_above_three_is_ultra_fast_regardless_of_flag() {
        let mut nav = navigator(3);
        let t0 = Instant::now();
        // Drive the streak past 3 through the owned classifier.
        for i in 0..6 {
            nav.record_scroll(80.0, t0 + Duration::from_millis(50 * i));
        }
        assert!(nav.classifier().consecutive_fast() > 3);
        let intent = nav
            .request_next(false, t0 + Duration::from_millis(300))
            .expect("transition starts");
        assert_eq!(intent.speed, SpeedClass::UltraFast);
        assert_eq!(
            nav.transition().map(|t| t.duration()),
            Some(Duration::from_millis(400))
        );
    }

    #[test]
    fn test_requests_dropped_while_transitioning() {
        let mut nav = navigator(3);
        let now = Instant::now();
        nav.request_next(false, now).expect("transition starts");
        let started = nav.transition().map(|t| t.started());

        // During the 1200 ms window every request is a no-op: no state
        // change, no new timer.
        let mid = now + Duration::from_millis(600);
        assert!(nav.request_next(false, mid).is_none());
        assert!(nav.request_prev(true, mid).is_none());
        assert!(nav.request_go_to(2, true, mid).is_none());
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.transition().map(|t| t.started()), started);
    }

    #[test]
    fn test_same_index_request_is_noop() {
        let mut nav = navigator(3);
        let now = Instant::now();
        assert!(nav.request_go_to(0, true, now).is_none());
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_out_of_range_request_is_noop() {
        let mut nav = navigator(3);
        let now = Instant::now();
        assert!(nav.request_go_to(3, false, now).is_none());
        assert!(nav.request_go_to(99, true, now).is_none());
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_edges_are_noops() {
        let mut nav = navigator(2);
        let now = Instant::now();
        assert!(nav.request_prev(false, now).is_none());
        nav.request_next(false, now).expect("transition starts");
        nav.tick(now + Duration::from_millis(1300));
        assert!(nav.request_next(false, now + Duration::from_millis(1400)).is_none());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_first_then_last_lands_on_last() {
        let mut nav = navigator(3);
        let now = Instant::now();
        // Already at 0: go_to_first is a silent no-op, so go_to_last is not
        // gated by a transition.
        assert!(nav.go_to_first(now).is_none());
        nav.go_to_last(now).expect("transition starts");
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_index_stays_in_bounds_for_arbitrary_requests() {
        let mut nav = navigator(4);
        let mut now = Instant::now();
        let requests = [0usize, 7, 3, 3, 1, 99, 2, 0, 5, 1];
        for &idx in &requests {
            nav.request_go_to(idx, idx % 2 == 0, now);
            assert!(nav.current_index() < nav.total_sections());
            // Let each transition finish so the next request is accepted.
            now += Duration::from_millis(1300);
            nav.tick(now);
        }
    }

    #[test]
    fn test_tick_returns_to_idle_after_duration() {
        let mut nav = navigator(3);
        let now = Instant::now();
        nav.request_next(false, now).expect("transition starts");

        assert!(!nav.tick(now + Duration::from_millis(1199)));
        assert!(nav.is_transitioning());

        assert!(nav.tick(now + Duration::from_millis(1200)));
        assert!(!nav.is_transitioning());

        // Idle again: the next request is accepted.
        assert!(nav
            .request_next(false, now + Duration::from_millis(1250))
            .is_some());
    }

    #[test]
    fn test_indicator_swaps_after_prepare_delay() {
        let mut nav = navigator(3);
        let now = Instant::now();
        nav.request_next(false, now).expect("transition starts");

        assert_eq!(nav.indicator_index(now + Duration::from_millis(10)), 0);
        assert_eq!(nav.indicator_index(now + Duration::from_millis(31)), 1);
        assert_eq!(nav.preparing_index(), Some(1));

        nav.tick(now + Duration::from_millis(1200));
        assert_eq!(nav.preparing_index(), None);
        assert_eq!(nav.indicator_index(now + Duration::from_millis(1200)), 1);
    }

    #[test]
    fn test_transition_progress() {
        let mut nav = navigator(2);
        let now = Instant::now();
        nav.request_next(false, now).expect("transition starts");
        let t = nav.transition().expect("in flight");
        assert_eq!(t.progress(now), 0.0);
        let half = t.progress(now + Duration::from_millis(600));
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(t.progress(now + Duration::from_millis(2000)), 1.0);
    }

    #[test]
    fn test_single_section_navigator_never_moves() {
        let mut nav = navigator(1);
        let now = Instant::now();
        assert!(nav.request_next(true, now).is_none());
        assert!(nav.request_prev(true, now).is_none());
        assert!(nav.go_to_last(now).is_none());
        assert_eq!(nav.current_index(), 0);
    }
}
