//! L2 Organism Layer: Scroll execution engine
//!
//! Entry point for scrolling an element into view. Owns the current
//! [`ScrollSession`] and every animation still in flight. Starting a new
//! scroll aborts the previous session; its animations notice on their next
//! frame and drop out.

use std::fmt;

use tracing::{debug, info};

use super::animation::ScrollAnimation;
use super::options::{ScrollOptions, ScrollOverrides};
use super::session::ScrollSession;
use crate::host::ScrollHost;
use crate::plan::{plan_scroll, ScrollTask};
use crate::Result;

#[derive(Debug)]
pub struct ScrollEngine<N> {
    defaults: ScrollOptions,
    current: Option<ScrollSession>,
    animations: Vec<ScrollAnimation<N>>,
    next_session_id: u64,
}

impl<N> Default for ScrollEngine<N> {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

impl<N> ScrollEngine<N> {
    /// Create an engine whose requests start from `defaults`
    pub fn new(defaults: ScrollOptions) -> Self {
        Self {
            defaults,
            current: None,
            animations: Vec::new(),
            next_session_id: 1,
        }
    }

    pub fn defaults(&self) -> &ScrollOptions {
        &self.defaults
    }

    pub fn set_defaults(&mut self, defaults: ScrollOptions) {
        self.defaults = defaults;
    }

    /// Session of the most recent request
    pub fn current_session(&self) -> Option<&ScrollSession> {
        self.current.as_ref()
    }

    /// Number of animations that still expect frames
    #[inline]
    pub fn active_animations(&self) -> usize {
        self.animations.len()
    }

    /// Whether the frame scheduler should keep calling [`Self::on_frame`]
    #[inline]
    pub fn needs_frame(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Abort the current session; its animations stop on the next frame
    pub fn cancel(&mut self) {
        if let Some(session) = &self.current {
            session.abort();
        }
    }
}

impl<N> ScrollEngine<N>
where
    N: Clone + PartialEq + fmt::Debug,
{
    /// Scroll `element` into view through every scrollable ancestor.
    ///
    /// Without a usable easing the offsets are written before this returns;
    /// otherwise one animation per container is queued for
    /// [`Self::on_frame`]. Returns the new session.
    pub fn scroll_into_viewport<H>(
        &mut self,
        host: &mut H,
        element: &N,
        overrides: &ScrollOverrides,
    ) -> Result<ScrollSession>
    where
        H: ScrollHost<Node = N>,
    {
        let options = self.defaults.merge(overrides);

        self.cancel();
        let session = ScrollSession::new(self.next_session_id, options);
        self.next_session_id += 1;
        self.current = Some(session.clone());

        let tasks = plan_scroll(host, element, session.options().align, session.options().force);
        info!(
            session = session.id(),
            element = ?element,
            containers = tasks.len(),
            "Scrolling into viewport"
        );

        for task in tasks {
            self.dispatch(host, &session, task)?;
        }

        Ok(session)
    }

    fn dispatch<H>(&mut self, host: &mut H, session: &ScrollSession, task: ScrollTask<N>) -> Result<()>
    where
        H: ScrollHost<Node = N>,
    {
        let source = host.scroll_offset(&task.container);

        match session.options().animation() {
            Some((easing, timeout_ms)) => {
                debug!(
                    session = session.id(),
                    container = ?task.container,
                    timeout_ms,
                    "Queued scroll animation"
                );
                self.animations.push(ScrollAnimation::new(
                    task,
                    session.clone(),
                    easing,
                    timeout_ms,
                    source,
                ));
            }
            None if session.is_aborted() => {
                debug!(session = session.id(), "Session aborted, skipping scroll");
            }
            None => {
                host.set_scroll_offset(&task.container, source.offset_by(task.delta_x, task.delta_y))?;
            }
        }

        Ok(())
    }

    /// Advance every in-flight animation to the frame at `timestamp` (ms).
    ///
    /// Finished and cancelled animations are dropped. A rejected write ends
    /// the failing animation and is returned as is.
    pub fn on_frame<H>(&mut self, host: &mut H, timestamp: f64) -> Result<()>
    where
        H: ScrollHost<Node = N>,
    {
        let outcome = self
            .animations
            .iter_mut()
            .try_for_each(|animation| animation.step(host, timestamp).map(|_| ()));

        self.animations.retain(|animation| !animation.is_finished());
        outcome
    }
}
