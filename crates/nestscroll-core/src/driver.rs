//! Async frame driver.
//!
//! Stands in for a display's per-repaint callback: ticks on a tokio
//! interval and feeds the engine timestamps until no animation is left.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::config::AnimationConfig;
use crate::host::ScrollHost;
use crate::scroll::ScrollEngine;
use crate::Result;

#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    tick: Duration,
}

impl FrameDriver {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.tick_duration())
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Run frames until the engine has no animation left. Timestamps are
    /// milliseconds since this call started. Returns the number of frames.
    pub async fn run<H>(&self, engine: &mut ScrollEngine<H::Node>, host: &mut H) -> Result<u64>
    where
        H: ScrollHost,
    {
        let started = Instant::now();
        let mut interval = time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = 0;
        while engine.needs_frame() {
            interval.tick().await;
            let timestamp = started.elapsed().as_secs_f64() * 1000.0;
            engine.on_frame(host, timestamp)?;
            frames += 1;
        }

        debug!(frames, "Frame driver idle");
        Ok(frames)
    }
}
