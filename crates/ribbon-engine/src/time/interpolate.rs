use std::time::{Duration, Instant};

/// Transition progress in `[0, 1]` from a start time and duration.
///
/// A zero duration is complete immediately.
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f32() / duration.as_secs_f32();
    ratio.clamp(0.0, 1.0)
}

/// Whether a transition that began at `start` has run for `duration`.
#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two values, `t` in `[0, 1]`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn zero_duration_is_instantly_complete() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO), 1.0);
        assert!(is_complete(start, Duration::ZERO));
    }

    #[test]
    fn long_duration_is_not_complete_yet() {
        let start = Instant::now();
        assert!(!is_complete(start, Duration::from_secs(3600)));
        assert!(progress(start, Duration::from_secs(3600)) < 1.0);
    }
}
