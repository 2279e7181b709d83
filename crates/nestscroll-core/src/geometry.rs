//! Axis-aligned geometry shared by chain discovery, alignment and the scene host.

use serde::{Deserialize, Serialize};

use crate::host::ScrollHost;

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Axis-aligned rectangle with precomputed far edges.
///
/// `right == left + width` and `bottom == top + height` always hold; every
/// constructor and transform goes through [`Rect::new`] so all four edges
/// move together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectSpec", into = "RectSpec")]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Serialized form, the derived edges are never read from input
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RectSpec {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

impl From<RectSpec> for Rect {
    fn from(spec: RectSpec) -> Self {
        Rect::new(spec.x, spec.y, spec.width, spec.height)
    }
}

impl From<Rect> for RectSpec {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.left,
            y: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            top: y,
            width,
            height,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Build from edge coordinates
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Shifted copy of this rectangle
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Leading edge along `axis`
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Trailing edge along `axis`
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.right,
            Axis::Y => self.bottom,
        }
    }
}

/// Width/height pair (scroll extents, client extents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Scroll position of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
}

impl ScrollOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Offset moved by a per-axis delta
    pub fn offset_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy)
    }
}

/// Bounding rectangle of `target` in the local frame of `container`.
///
/// The scrolling root's frame is the viewport: origin `(0, 0)` and the
/// root's client extent, regardless of the root's own bounding box.
pub fn relative_rect<H: ScrollHost>(host: &H, target: &H::Node, container: &H::Node) -> Rect {
    let target_rect = host.bounding_rect(target);
    let frame = if *container == host.scrolling_root() {
        let client = host.client_extent(container);
        Rect::new(0.0, 0.0, client.width, client.height)
    } else {
        host.bounding_rect(container)
    };

    target_rect.translate(-frame.left, -frame.top)
}
