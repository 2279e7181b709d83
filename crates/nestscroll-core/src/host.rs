//! Boundary to the visual environment that owns the element tree.
//!
//! Everything the nested-scroll algorithm needs to know about layout, style
//! and scroll state is read through [`ScrollHost`]. The only write is
//! [`ScrollHost::set_scroll_offset`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Rect, ScrollOffset, Size};
use crate::Result;

/// Computed `overflow` value for one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowStyle {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl OverflowStyle {
    /// `auto` or `scroll`: the axis scrolls whenever content overflows
    #[inline]
    pub fn is_scrolling(self) -> bool {
        matches!(self, OverflowStyle::Auto | OverflowStyle::Scroll)
    }
}

/// Computed overflow for both axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overflow {
    #[serde(default)]
    pub x: OverflowStyle,
    #[serde(default)]
    pub y: OverflowStyle,
}

impl Overflow {
    pub fn new(x: OverflowStyle, y: OverflowStyle) -> Self {
        Self { x, y }
    }

    /// Same style on both axes (the `overflow` shorthand)
    pub fn both(style: OverflowStyle) -> Self {
        Self::new(style, style)
    }

    #[inline]
    pub fn along(&self, axis: Axis) -> OverflowStyle {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Computed `position`, only `fixed` matters for chain discovery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Sticky,
    Fixed,
}

/// Layout, style and scroll access for an element tree.
///
/// `bounding_rect` is in screen coordinates and must reflect the current
/// scroll offsets of all ancestors.
pub trait ScrollHost {
    /// Element handle; compared by identity
    type Node: Clone + PartialEq + fmt::Debug;

    /// Parent element, `None` above the top of the tree
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The document-level scrolling element
    fn scrolling_root(&self) -> Self::Node;

    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    fn overflow(&self, node: &Self::Node) -> Overflow;

    fn position(&self, node: &Self::Node) -> Position;

    /// Full size of the scrollable content
    fn scroll_extent(&self, node: &Self::Node) -> Size;

    /// Visible size of the container
    fn client_extent(&self, node: &Self::Node) -> Size;

    fn scroll_offset(&self, node: &Self::Node) -> ScrollOffset;

    /// Write a container's scroll position. Errors are contract violations
    /// and are handed back to the caller unchanged.
    fn set_scroll_offset(&mut self, node: &Self::Node, offset: ScrollOffset) -> Result<()>;
}
