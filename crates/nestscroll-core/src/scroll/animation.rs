//! L3 Molecular Layer: Eased scroll animation for one container
//!
//! Combines easing and timing into a per-container state machine. The
//! frame scheduler calls [`ScrollAnimation::step`] once per frame with the
//! frame timestamp; the animation writes the container's offset until the
//! timeout elapses or its session is aborted.

use tracing::trace;

use super::easing::Easing;
use super::session::ScrollSession;
use super::timing::{direction, eased_distance, elapsed_fraction, is_complete};
use crate::geometry::ScrollOffset;
use crate::host::ScrollHost;
use crate::plan::ScrollTask;
use crate::Result;

/// Lifecycle of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Waiting for its first frame
    Pending,
    /// Running since `start` (ms)
    Animating { start: f64 },
    /// Final offset written
    Done,
    /// Session aborted or a write was rejected; nothing more is written
    Cancelled,
}

impl AnimationState {
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, AnimationState::Done | AnimationState::Cancelled)
    }
}

/// Eased scroll of a single container
#[derive(Debug, Clone)]
pub struct ScrollAnimation<N> {
    container: N,
    session: ScrollSession,
    easing: Easing,
    timeout_ms: f64,
    /// Offset when the task was dispatched
    source: ScrollOffset,
    sign_x: f64,
    sign_y: f64,
    magnitude_x: f64,
    magnitude_y: f64,
    state: AnimationState,
}

impl<N> ScrollAnimation<N> {
    /// Create an animation for `task`. Direction per axis is fixed here from
    /// the requested delta; only the magnitude animates.
    pub fn new(
        task: ScrollTask<N>,
        session: ScrollSession,
        easing: Easing,
        timeout_ms: f64,
        source: ScrollOffset,
    ) -> Self {
        Self {
            container: task.container,
            session,
            easing,
            timeout_ms,
            source,
            sign_x: direction(task.delta_x),
            sign_y: direction(task.delta_y),
            magnitude_x: task.delta_x.abs(),
            magnitude_y: task.delta_y.abs(),
            state: AnimationState::Pending,
        }
    }

    pub fn container(&self) -> &N {
        &self.container
    }

    pub fn session(&self) -> &ScrollSession {
        &self.session
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Offset the animation converges to
    pub fn target(&self) -> ScrollOffset {
        self.source.offset_by(
            self.sign_x * self.magnitude_x,
            self.sign_y * self.magnitude_y,
        )
    }

    /// Advance the animation to the frame at `timestamp` (ms)
    pub fn step<H>(&mut self, host: &mut H, timestamp: f64) -> Result<AnimationState>
    where
        H: ScrollHost<Node = N>,
    {
        let state = self.state;
        let start = match state {
            AnimationState::Done | AnimationState::Cancelled => return Ok(state),
            _ if self.session.is_aborted() => {
                trace!(session = self.session.id(), "Animation aborted");
                self.state = AnimationState::Cancelled;
                return Ok(self.state);
            }
            AnimationState::Pending => {
                self.state = AnimationState::Animating { start: timestamp };
                timestamp
            }
            AnimationState::Animating { start } => start,
        };

        let elapsed = timestamp - start;
        let (offset, next) = if is_complete(elapsed, self.timeout_ms) {
            (self.target(), AnimationState::Done)
        } else {
            let pos = self.easing.apply(elapsed_fraction(elapsed, self.timeout_ms));
            let dx = eased_distance(self.magnitude_x, pos);
            let dy = eased_distance(self.magnitude_y, pos);
            (
                self.source.offset_by(self.sign_x * dx, self.sign_y * dy),
                self.state,
            )
        };

        trace!(
            session = self.session.id(),
            elapsed_ms = elapsed,
            left = offset.left,
            top = offset.top,
            "Animation frame"
        );

        if let Err(e) = host.set_scroll_offset(&self.container, offset) {
            self.state = AnimationState::Cancelled;
            return Err(e);
        }
        self.state = next;
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, SceneNode};
    use crate::scroll::easing::EasingCurve;
    use crate::scroll::options::ScrollOptions;

    fn scene() -> Scene {
        Scene::from_toml(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }
            scroll_size = { width = 1600.0, height = 3000.0 }
            scroll = { left = 400.0, top = 100.0 }
            "#,
        )
        .unwrap()
    }

    fn animation(
        scene: &Scene,
        session: &ScrollSession,
        dx: f64,
        dy: f64,
    ) -> ScrollAnimation<SceneNode> {
        let html = scene.node("html").unwrap();
        let source = scene.scroll_offset(&html);
        ScrollAnimation::new(
            ScrollTask::new(html, dx, dy),
            session.clone(),
            Easing::Curve(EasingCurve::Linear),
            100.0,
            source,
        )
    }

    #[test]
    fn test_reaches_exact_target_at_timeout() {
        let mut scene = scene();
        let session = ScrollSession::new(1, ScrollOptions::default());
        let mut anim = animation(&scene, &session, -133.0, 777.0);
        let html = scene.node("html").unwrap();

        assert_eq!(anim.step(&mut scene, 1000.0).unwrap(), AnimationState::Animating { start: 1000.0 });
        assert_eq!(scene.scroll_offset(&html), ScrollOffset::new(400.0, 100.0));

        anim.step(&mut scene, 1050.0).unwrap();
        // round(133 * 0.5) = 67, round(777 * 0.5) = 389
        assert_eq!(scene.scroll_offset(&html), ScrollOffset::new(333.0, 489.0));

        assert_eq!(anim.step(&mut scene, 1100.0).unwrap(), AnimationState::Done);
        assert_eq!(scene.scroll_offset(&html), ScrollOffset::new(267.0, 877.0));
    }

    #[test]
    fn test_late_frame_snaps_to_target() {
        let mut scene = scene();
        let session = ScrollSession::new(1, ScrollOptions::default());
        let mut anim = animation(&scene, &session, 10.5, -20.25);
        let html = scene.node("html").unwrap();

        anim.step(&mut scene, 0.0).unwrap();
        anim.step(&mut scene, 250.0).unwrap();
        assert!(anim.is_finished());
        assert_eq!(scene.scroll_offset(&html), ScrollOffset::new(410.5, 79.75));
    }

    #[test]
    fn test_aborted_session_writes_nothing() {
        let mut scene = scene();
        let session = ScrollSession::new(1, ScrollOptions::default());
        let mut anim = animation(&scene, &session, 200.0, 200.0);
        let html = scene.node("html").unwrap();

        anim.step(&mut scene, 0.0).unwrap();
        anim.step(&mut scene, 50.0).unwrap();
        let midway = scene.scroll_offset(&html);

        session.abort();
        assert_eq!(anim.step(&mut scene, 100.0).unwrap(), AnimationState::Cancelled);
        assert_eq!(scene.scroll_offset(&html), midway);
        assert_ne!(midway, anim.target());
    }

    #[test]
    fn test_axes_keep_independent_direction() {
        let mut scene = scene();
        let session = ScrollSession::new(1, ScrollOptions::default());
        let mut anim = animation(&scene, &session, 100.0, -100.0);
        let html = scene.node("html").unwrap();

        anim.step(&mut scene, 0.0).unwrap();
        anim.step(&mut scene, 25.0).unwrap();
        assert_eq!(scene.scroll_offset(&html), ScrollOffset::new(425.0, 75.0));
    }
}
