//! Frame-driven camera-move runner with explicit cancellation.
//!
//! At most one move is in flight. Starting a move preempts (cancels) the
//! current one, so two moves can never write the camera pose on the same
//! frame. Callers keep the returned [`MoveHandle`] to ask whether *their*
//! move is still the one running, or to cancel it specifically.

use web_time::{Duration, Instant};

use super::moves::{CameraMove, CameraPose, MoveCurve};
use crate::util::easing::EasingFunction;

/// Identifies one started camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveHandle(u64);

impl MoveHandle {
    /// Monotonic id of the move (first move is 1).
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// The move currently being played.
#[derive(Debug, Clone)]
struct ActiveMove {
    handle: MoveHandle,
    name: &'static str,
    curve: MoveCurve,
    easing: EasingFunction,
    start_time: Instant,
    duration: Duration,
}

impl ActiveMove {
    /// Raw (un-eased) progress in `[0, 1]`.
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

/// Plays camera moves over time. Owns no scene state: [`tick`](Self::tick)
/// returns the pose to apply and the caller writes it through the store.
#[derive(Debug, Default)]
pub struct CameraAnimator {
    active: Option<ActiveMove>,
    next_id: u64,
}

impl CameraAnimator {
    /// Animator with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `camera_move` from pose `from` at time `now`.
    ///
    /// Any move already in flight is cancelled first.
    pub fn start(
        &mut self,
        camera_move: &CameraMove,
        from: CameraPose,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> MoveHandle {
        if let Some(prev) = self.cancel() {
            log::debug!("camera move #{} preempted", prev.id());
        }

        self.next_id += 1;
        let handle = MoveHandle(self.next_id);
        log::debug!(
            "camera move #{} ({}) started from d={:.2} fov={:.1} over {:?}",
            handle.id(),
            camera_move.name(),
            from.distance,
            from.fov,
            duration,
        );

        self.active = Some(ActiveMove {
            handle,
            name: camera_move.name(),
            curve: camera_move.curve(from),
            easing,
            start_time: now,
            duration,
        });
        handle
    }

    /// Cancel whatever move is in flight. Returns its handle, if any.
    pub fn cancel(&mut self) -> Option<MoveHandle> {
        let prev = self.active.take()?;
        Some(prev.handle)
    }

    /// Whether `handle` is still the move being played.
    #[must_use]
    pub fn is_active(&self, handle: MoveHandle) -> bool {
        self.active.as_ref().is_some_and(|a| a.handle == handle)
    }

    /// Whether any move is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Handle of the move in flight.
    #[must_use]
    pub fn current(&self) -> Option<MoveHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    /// Advance to `now` and return the pose to apply this frame.
    ///
    /// Returns `None` when nothing is animating. The frame on which progress
    /// reaches 1 returns the exact end pose and retires the move.
    pub fn tick(&mut self, now: Instant) -> Option<CameraPose> {
        let active = self.active.as_ref()?;
        let p = active.progress(now);
        let pose = active.curve.sample(active.easing.evaluate(p));

        if p >= 1.0 {
            log::debug!(
                "camera move #{} ({}) finished at d={:.2} fov={:.1}",
                active.handle.id(),
                active.name,
                pose.distance,
                pose.fov,
            );
            self.active = None;
        }
        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::dolly_zoom::framing_constant;

    const START: CameraPose = CameraPose::new(6.0, 45.0);
    const DOLLY_ZOOM: CameraMove = CameraMove::DollyZoom {
        target_distance: 2.0,
    };

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn plays_to_completion_and_retires() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let h = anim.start(&DOLLY_ZOOM, START, t0, ms(2000), EasingFunction::Linear);
        assert!(anim.is_active(h));

        let first = anim.tick(t0).unwrap();
        assert_eq!(first, START);

        let mid = anim.tick(t0 + ms(1000)).unwrap();
        assert!((mid.distance - 4.0).abs() < 1e-9);
        assert!(anim.is_animating());

        let last = anim.tick(t0 + ms(2000)).unwrap();
        assert_eq!(last.distance, 2.0);
        assert!(
            (framing_constant(last.distance, last.fov)
                - framing_constant(6.0, 45.0))
            .abs()
                < 1e-9
        );
        assert!(!anim.is_animating());
        assert!(!anim.is_active(h));
        assert_eq!(anim.tick(t0 + ms(2100)), None);
    }

    #[test]
    fn late_frame_lands_on_end_pose() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let _ = anim.start(&DOLLY_ZOOM, START, t0, ms(2000), EasingFunction::Linear);
        let pose = anim.tick(t0 + ms(10_000)).unwrap();
        assert_eq!(pose.distance, 2.0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn restart_cancels_in_flight_move() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let first =
            anim.start(&DOLLY_ZOOM, START, t0, ms(2000), EasingFunction::Linear);
        let _ = anim.tick(t0 + ms(500));

        let second = anim.start(
            &CameraMove::Zoom { target_fov: 20.0 },
            CameraPose::new(5.0, 50.0),
            t0 + ms(500),
            ms(1000),
            EasingFunction::Linear,
        );
        assert_ne!(first, second);
        assert!(!anim.is_active(first));
        assert!(anim.is_active(second));

        // Only the second move drives the pose: distance stays put.
        let pose = anim.tick(t0 + ms(1000)).unwrap();
        assert_eq!(pose.distance, 5.0);
        assert!((pose.fov - 35.0).abs() < 1e-9);
    }

    #[test]
    fn cancel_returns_the_move_in_flight() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let _ =
            anim.start(&DOLLY_ZOOM, START, t0, ms(2000), EasingFunction::Linear);
        let second =
            anim.start(&DOLLY_ZOOM, START, t0, ms(2000), EasingFunction::Linear);

        assert_eq!(anim.cancel(), Some(second));
        assert_eq!(anim.current(), None);
        assert_eq!(anim.cancel(), None);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let _ = anim.start(&DOLLY_ZOOM, START, t0, Duration::ZERO, EasingFunction::Linear);
        assert_eq!(anim.tick(t0).unwrap().distance, 2.0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn easing_changes_timing_not_endpoints() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let _ = anim.start(
            &CameraMove::Dolly {
                target_distance: 2.0,
            },
            START,
            t0,
            ms(1000),
            EasingFunction::QuadraticIn,
        );
        let quarter = anim.tick(t0 + ms(500)).unwrap();
        // p = 0.5 eased to 0.25 → 6 - 4 · 0.25
        assert!((quarter.distance - 5.0).abs() < 1e-9);
        assert_eq!(anim.tick(t0 + ms(1000)).unwrap().distance, 2.0);
    }

    #[test]
    fn handles_are_monotonic() {
        let mut anim = CameraAnimator::new();
        let t0 = Instant::now();
        let a = anim.start(&DOLLY_ZOOM, START, t0, ms(10), EasingFunction::Linear);
        let b = anim.start(&DOLLY_ZOOM, START, t0, ms(10), EasingFunction::Linear);
        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
    }
}
