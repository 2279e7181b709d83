//! L4 Atomic Layer: Scroll options and per-call overrides

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::easing::{Easing, EasingMethod};
use super::timing::is_valid_timeout;
use crate::align::Alignment;

/// Options for one scroll request, normally the engine defaults merged with
/// the caller's [`ScrollOverrides`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollOptions {
    /// Easing curve name or custom function; `None` scrolls immediately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing_method: Option<EasingMethod>,
    /// Animation duration in milliseconds
    #[serde(default = "default_easing_timeout")]
    pub easing_timeout_ms: f64,
    /// Scroll even when the target is already fully visible
    #[serde(default)]
    pub force: bool,
    /// Alignment tokens, e.g. "left bottom"
    #[serde(default)]
    pub align: Alignment,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            easing_method: None,
            easing_timeout_ms: default_easing_timeout(),
            force: false,
            align: Alignment::default(),
        }
    }
}

fn default_easing_timeout() -> f64 {
    500.0
}

impl ScrollOptions {
    /// Easing and duration to animate with, or `None` for an immediate
    /// scroll. Unknown curve names and non-positive timeouts fall back to
    /// immediate scrolling.
    pub fn animation(&self) -> Option<(Easing, f64)> {
        let method = self.easing_method.as_ref()?;
        let Some(easing) = method.resolve() else {
            debug!(method = ?method, "Unknown easing method, scrolling immediately");
            return None;
        };
        if !is_valid_timeout(self.easing_timeout_ms) {
            debug!(timeout_ms = self.easing_timeout_ms, "Invalid easing timeout, scrolling immediately");
            return None;
        }
        Some((easing, self.easing_timeout_ms))
    }

    /// Apply overrides on top of these options, set fields win
    pub fn merge(&self, overrides: &ScrollOverrides) -> ScrollOptions {
        ScrollOptions {
            easing_method: overrides
                .easing_method
                .clone()
                .or_else(|| self.easing_method.clone()),
            easing_timeout_ms: overrides.easing_timeout_ms.unwrap_or(self.easing_timeout_ms),
            force: overrides.force.unwrap_or(self.force),
            align: overrides.align.unwrap_or(self.align),
        }
    }
}

/// Per-call option overrides; unset fields keep the defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollOverrides {
    #[serde(default)]
    pub easing_method: Option<EasingMethod>,
    #[serde(default)]
    pub easing_timeout_ms: Option<f64>,
    #[serde(default)]
    pub force: Option<bool>,
    #[serde(default)]
    pub align: Option<Alignment>,
}

impl ScrollOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn easing(mut self, method: impl Into<EasingMethod>) -> Self {
        self.easing_method = Some(method.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: f64) -> Self {
        self.easing_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    pub fn align(mut self, tokens: &str) -> Self {
        self.align = Some(Alignment::parse(tokens));
        self
    }
}
