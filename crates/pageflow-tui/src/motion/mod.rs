//! Section transition motion
//!
//! Pure interpolation for the fullpage transition: easing curves per speed
//! tier and the translate-offset computation the section stack renders with.
//! The navigator owns the state machine; this module only turns an in-flight
//! transition plus a clock reading into a row offset.

pub mod easing;
pub mod timing;

use std::time::Instant;

use pageflow_core::Transition;

pub use easing::EasingType;
pub use timing::lerp;

/// Vertical offset of the section stack, in rows from the top of section 0.
///
/// While a transition is in flight the offset is eased between the source
/// and target sections; otherwise it sits exactly on the current section.
/// Recomputed from the viewport height every frame, so a resize needs no
/// bookkeeping.
pub fn section_offset(
    transition: Option<&Transition>,
    current_index: usize,
    viewport_rows: u16,
    now: Instant,
) -> f64 {
    let rows = viewport_rows as f64;
    match transition {
        Some(t) => {
            let eased = EasingType::for_speed(t.speed()).apply(t.progress(now));
            lerp(t.from() as f64 * rows, t.to() as f64 * rows, eased)
        }
        None => current_index as f64 * rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pageflow_core::{MotionConfig, SectionNavigator};

    #[test]
    fn test_offset_idle_sits_on_current_section() {
        let now = Instant::now();
        assert_eq!(section_offset(None, 0, 40, now), 0.0);
        assert_eq!(section_offset(None, 2, 40, now), 80.0);
    }

    #[test]
    fn test_offset_moves_monotonically_during_transition() {
        let mut nav = SectionNavigator::new(3, MotionConfig::default());
        let now = Instant::now();
        nav.request_next(false, now).expect("transition starts");
        let t = nav.transition().expect("in flight");

        let mut prev = section_offset(Some(t), 1, 40, now);
        assert_eq!(prev, 0.0);
        for ms in [100u64, 300, 600, 900, 1200] {
            let offset = section_offset(Some(t), 1, 40, now + Duration::from_millis(ms));
            assert!(offset >= prev);
            prev = offset;
        }
        assert!((prev - 40.0).abs() < 0.001);
    }
}
