//! Chain offset accumulator.
//!
//! Walks the scrollable chain innermost-first and decides, per container,
//! how far it has to scroll. Each outer container sees the target where it
//! will be once the inner containers have scrolled: the running total of
//! inner deltas is subtracted from the target's relative rect before the
//! outer container's policy runs.

use serde::Serialize;
use tracing::debug;

use crate::align::{align_axis, Alignment, ContainerMetrics};
use crate::chain::find_scrollable_parent;
use crate::geometry::{relative_rect, Axis};
use crate::host::ScrollHost;

/// A scroll delta scheduled for one container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollTask<N> {
    pub container: N,
    pub delta_x: f64,
    pub delta_y: f64,
}

impl<N> ScrollTask<N> {
    pub fn new(container: N, delta_x: f64, delta_y: f64) -> Self {
        Self {
            container,
            delta_x,
            delta_y,
        }
    }

    /// Task that leaves its container where it is
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.delta_x == 0.0 && self.delta_y == 0.0
    }
}

/// Compute the scroll tasks that bring `target` into view, innermost
/// container first. Empty when the target has no scrollable ancestor.
pub fn plan_scroll<H: ScrollHost>(
    host: &H,
    target: &H::Node,
    alignment: Alignment,
    force: bool,
) -> Vec<ScrollTask<H::Node>> {
    let mut tasks = Vec::new();
    let mut total_x = 0.0;
    let mut total_y = 0.0;

    let mut scrollable = find_scrollable_parent(host, target);
    while let Some(container) = scrollable {
        let rect = relative_rect(host, target, &container).translate(-total_x, -total_y);
        let metrics = ContainerMetrics::from_host(host, &container);

        let delta_x = align_axis(alignment.x, &rect, &metrics, Axis::X, force);
        let delta_y = align_axis(alignment.y, &rect, &metrics, Axis::Y, force);

        total_x += delta_x;
        total_y += delta_y;

        debug!(
            container = ?container,
            delta_x,
            delta_y,
            "Planned scroll task"
        );

        scrollable = find_scrollable_parent(host, &container);
        tasks.push(ScrollTask::new(container, delta_x, delta_y));
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::AxisAlign;
    use crate::geometry::Rect;
    use crate::scene::Scene;

    const TWO_LEVEL: &str = r#"
        root = "html"

        [[nodes]]
        id = "html"
        rect = { width = 800.0, height = 600.0 }
        scroll_size = { width = 800.0, height = 3000.0 }

        [[nodes]]
        id = "panel"
        parent = "html"
        rect = { y = 1000.0, width = 400.0, height = 300.0 }
        scroll_size = { width = 400.0, height = 2000.0 }
        overflow = { x = "hidden", y = "auto" }

        [[nodes]]
        id = "target"
        parent = "panel"
        rect = { y = 900.0, width = 100.0, height = 50.0 }
    "#;

    #[test]
    fn test_no_scrollable_ancestor_yields_no_tasks() {
        let scene = Scene::from_toml(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }

            [[nodes]]
            id = "target"
            parent = "html"
            rect = { y = 10.0, width = 10.0, height = 10.0 }
            "#,
        )
        .unwrap();
        let target = scene.node("target").unwrap();
        assert!(plan_scroll(&scene, &target, Alignment::default(), false).is_empty());
    }

    #[test]
    fn test_outer_sees_post_inner_scroll_position() {
        let scene = Scene::from_toml(TWO_LEVEL).unwrap();
        let target = scene.node("target").unwrap();
        let panel = scene.node("panel").unwrap();
        let html = scene.node("html").unwrap();

        let tasks = plan_scroll(&scene, &target, Alignment::default(), false);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].container, panel);
        assert_eq!(tasks[1].container, html);

        // Inner: target sits 900..950 in a 300px panel, end alignment wins
        assert_eq!(tasks[0].delta_y, 650.0);
        assert_eq!(tasks[0].delta_x, 0.0);

        // Outer: the raw rect is shifted up by the inner delta before alignment
        let raw = relative_rect(&scene, &target, &html);
        let corrected = raw.translate(-tasks[0].delta_x, -tasks[0].delta_y);
        assert_eq!(corrected, Rect::new(0.0, 1250.0, 100.0, 50.0));
        let metrics = ContainerMetrics::from_host(&scene, &html);
        let expected = align_axis(AxisAlign::Auto, &corrected, &metrics, Axis::Y, false);
        assert_eq!(tasks[1].delta_y, expected);
        assert_eq!(tasks[1].delta_y, 700.0);
    }

    #[test]
    fn test_forced_start_alignment_across_chain() {
        let scene = Scene::from_toml(TWO_LEVEL).unwrap();
        let target = scene.node("target").unwrap();
        let tasks = plan_scroll(&scene, &target, Alignment::parse("top"), true);

        // Panel scrolls its content so the target starts at the top edge
        assert_eq!(tasks[0].delta_y, 900.0);
        // Page then brings the panel top (target top) to the viewport top
        assert_eq!(tasks[1].delta_y, 1000.0);
    }

    #[test]
    fn test_visible_target_plans_noop_tasks() {
        let scene = Scene::from_toml(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }
            scroll_size = { width = 800.0, height = 3000.0 }

            [[nodes]]
            id = "target"
            parent = "html"
            rect = { y = 100.0, width = 10.0, height = 10.0 }
            "#,
        )
        .unwrap();
        let target = scene.node("target").unwrap();
        let tasks = plan_scroll(&scene, &target, Alignment::default(), false);
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].is_noop());
    }
}
