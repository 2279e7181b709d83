//! Alignment policies: how far a container must scroll on one axis so the
//! target satisfies the requested alignment.
//!
//! All policies return a signed delta to add to the container's current
//! scroll offset. The resulting offset always lies in `[0, max]`, where
//! `max = scroll_extent - client_extent`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{Axis, Rect, ScrollOffset, Size};
use crate::host::ScrollHost;

/// Alignment mode for a single axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AxisAlign {
    /// Align the leading edge (left / top)
    Start,
    /// Align the trailing edge (right / bottom)
    End,
    /// Whichever of `Start` and `End` moves the least
    #[default]
    Auto,
}

/// Requested alignment on both axes, parsed from a token list such as
/// `"left bottom"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub x: AxisAlign,
    pub y: AxisAlign,
}

impl Alignment {
    pub fn new(x: AxisAlign, y: AxisAlign) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> AxisAlign {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Parse whitespace separated tokens. `left` beats `right` and `top`
    /// beats `bottom`; unknown tokens are ignored.
    pub fn parse(tokens: &str) -> Self {
        let mut has = [false; 4];
        for token in tokens.split_whitespace() {
            match token {
                "left" => has[0] = true,
                "right" => has[1] = true,
                "top" => has[2] = true,
                "bottom" => has[3] = true,
                other => debug!(token = other, "Ignoring unknown align token"),
            }
        }

        let pick = |start: bool, end: bool| {
            if start {
                AxisAlign::Start
            } else if end {
                AxisAlign::End
            } else {
                AxisAlign::Auto
            }
        };

        Self::new(pick(has[0], has[1]), pick(has[2], has[3]))
    }
}

impl FromStr for Alignment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self.x {
            AxisAlign::Start => Some("left"),
            AxisAlign::End => Some("right"),
            AxisAlign::Auto => None,
        };
        let y = match self.y {
            AxisAlign::Start => Some("top"),
            AxisAlign::End => Some("bottom"),
            AxisAlign::Auto => None,
        };
        let tokens: Vec<&str> = [x, y].into_iter().flatten().collect();
        f.write_str(&tokens.join(" "))
    }
}

impl Serialize for Alignment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tokens = String::deserialize(deserializer)?;
        Ok(Self::parse(&tokens))
    }
}

/// Scroll metrics of one container, snapshotted from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    pub scroll_offset: ScrollOffset,
    pub scroll_extent: Size,
    pub client_extent: Size,
}

impl ContainerMetrics {
    pub fn from_host<H: ScrollHost>(host: &H, container: &H::Node) -> Self {
        Self {
            scroll_offset: host.scroll_offset(container),
            scroll_extent: host.scroll_extent(container),
            client_extent: host.client_extent(container),
        }
    }

    /// Largest valid scroll offset on `axis`
    #[inline]
    pub fn max_scroll(&self, axis: Axis) -> f64 {
        (self.scroll_extent.along(axis) - self.client_extent.along(axis)).max(0.0)
    }

    /// Delta that moves the scroll offset to `desired`, clamped to the
    /// container's scroll range
    fn delta_to(&self, axis: Axis, desired: f64) -> f64 {
        let current = self.scroll_offset.along(axis);
        desired.clamp(0.0, self.max_scroll(axis)) - current
    }

    /// Rect already lies inside the visible extent on `axis`
    #[inline]
    fn fully_visible(&self, rect: &Rect, axis: Axis) -> bool {
        rect.start(axis) >= 0.0 && rect.end(axis) <= self.client_extent.along(axis)
    }
}

/// Align the rect's leading edge with the container's visible start
pub fn align_start(rect: &Rect, metrics: &ContainerMetrics, axis: Axis, force: bool) -> f64 {
    if !force && metrics.fully_visible(rect, axis) {
        return 0.0;
    }
    let current = metrics.scroll_offset.along(axis);
    metrics.delta_to(axis, current + rect.start(axis))
}

/// Align the rect's trailing edge with the container's visible end
pub fn align_end(rect: &Rect, metrics: &ContainerMetrics, axis: Axis, force: bool) -> f64 {
    if !force && metrics.fully_visible(rect, axis) {
        return 0.0;
    }
    let current = metrics.scroll_offset.along(axis);
    let client = metrics.client_extent.along(axis);
    metrics.delta_to(axis, current + rect.end(axis) - client)
}

/// Least-movement choice between start and end alignment, ties go to start
pub fn align_auto(rect: &Rect, metrics: &ContainerMetrics, axis: Axis, force: bool) -> f64 {
    let start = align_start(rect, metrics, axis, force);
    let end = align_end(rect, metrics, axis, force);
    if start.abs() <= end.abs() {
        start
    } else {
        end
    }
}

/// Dispatch to the policy selected by `mode`
pub fn align_axis(
    mode: AxisAlign,
    rect: &Rect,
    metrics: &ContainerMetrics,
    axis: Axis,
    force: bool,
) -> f64 {
    match mode {
        AxisAlign::Start => align_start(rect, metrics, axis, force),
        AxisAlign::End => align_end(rect, metrics, axis, force),
        AxisAlign::Auto => align_auto(rect, metrics, axis, force),
    }
}
