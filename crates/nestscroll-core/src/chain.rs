//! Discovery of the scrollable ancestor chain of an element.

use tracing::{debug, trace};

use crate::geometry::Axis;
use crate::host::{OverflowStyle, Position, ScrollHost};

/// Check whether `node` can scroll in at least one axis.
///
/// An axis qualifies when its content overflows and its overflow style
/// allows scrolling. The scrolling root scrolls on any style but `hidden`.
pub fn is_scrollable<H: ScrollHost>(host: &H, node: &H::Node) -> bool {
    let is_root = *node == host.scrolling_root();
    let overflow = host.overflow(node);
    let scroll = host.scroll_extent(node);
    let client = host.client_extent(node);

    [Axis::X, Axis::Y].into_iter().any(|axis| {
        let overflowing = scroll.along(axis) > client.along(axis);
        let style = overflow.along(axis);
        overflowing && (style.is_scrolling() || (is_root && style != OverflowStyle::Hidden))
    })
}

/// Locate the nearest scrollable ancestor of `element`.
///
/// Returns `None` when `element` is the scrolling root, when the walk has to
/// leave a `position: fixed` element (a fixed element itself may still be
/// returned, nothing above it is), when the root is reached without
/// qualifying, or when the tree runs out of ancestors.
pub fn find_scrollable_parent<H: ScrollHost>(host: &H, element: &H::Node) -> Option<H::Node> {
    let root = host.scrolling_root();
    if *element == root {
        return None;
    }

    let mut current = element.clone();
    while host.position(&current) != Position::Fixed {
        let parent = host.parent(&current)?;
        if is_scrollable(host, &parent) {
            trace!(container = ?parent, "Found scrollable ancestor");
            return Some(parent);
        }
        if parent == root {
            debug!(element = ?element, "Reached non-scrollable root, chain ends");
            return None;
        }
        current = parent;
    }

    debug!(element = ?element, fixed = ?current, "Chain blocked by fixed position");
    None
}

/// All scrollable ancestors of `element`, innermost first
pub fn scrollable_chain<H: ScrollHost>(host: &H, element: &H::Node) -> Vec<H::Node> {
    let mut chain = Vec::new();
    let mut next = find_scrollable_parent(host, element);
    while let Some(container) = next {
        next = find_scrollable_parent(host, &container);
        chain.push(container);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn scene(body: &str) -> Scene {
        Scene::from_toml(body).unwrap()
    }

    const NESTED: &str = r#"
        root = "html"

        [[nodes]]
        id = "html"
        rect = { width = 800.0, height = 600.0 }
        scroll_size = { width = 800.0, height = 2000.0 }

        [[nodes]]
        id = "panel"
        parent = "html"
        rect = { y = 100.0, width = 400.0, height = 300.0 }
        scroll_size = { width = 400.0, height = 1200.0 }
        overflow = { x = "hidden", y = "auto" }

        [[nodes]]
        id = "wrapper"
        parent = "panel"
        rect = { y = 500.0, width = 400.0, height = 400.0 }

        [[nodes]]
        id = "target"
        parent = "wrapper"
        rect = { y = 50.0, width = 100.0, height = 20.0 }
    "#;

    #[test]
    fn test_chain_walks_innermost_first() {
        let scene = scene(NESTED);
        let target = scene.node("target").unwrap();
        let chain = scrollable_chain(&scene, &target);
        let ids: Vec<_> = chain.iter().map(|n| scene.id_of(n)).collect();
        assert_eq!(ids, vec!["panel", "html"]);
    }

    #[test]
    fn test_root_has_no_scrollable_parent() {
        let scene = scene(NESTED);
        let root = scene.scrolling_root();
        assert_eq!(find_scrollable_parent(&scene, &root), None);
    }

    #[test]
    fn test_hidden_overflow_is_skipped() {
        let scene = scene(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }

            [[nodes]]
            id = "clip"
            parent = "html"
            rect = { width = 100.0, height = 100.0 }
            scroll_size = { width = 100.0, height = 500.0 }
            overflow = { x = "hidden", y = "hidden" }

            [[nodes]]
            id = "target"
            parent = "clip"
            rect = { y = 300.0, width = 10.0, height = 10.0 }
            "#,
        );
        let target = scene.node("target").unwrap();
        assert!(scrollable_chain(&scene, &target).is_empty());
    }

    #[test]
    fn test_overflow_without_scrolling_style_is_skipped() {
        let scene = scene(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }
            scroll_size = { width = 800.0, height = 900.0 }

            [[nodes]]
            id = "visible"
            parent = "html"
            rect = { width = 100.0, height = 100.0 }
            scroll_size = { width = 100.0, height = 500.0 }

            [[nodes]]
            id = "target"
            parent = "visible"
            rect = { y = 300.0, width = 10.0, height = 10.0 }
            "#,
        );
        let target = scene.node("target").unwrap();
        let chain = scrollable_chain(&scene, &target);
        assert_eq!(chain, vec![scene.node("html").unwrap()]);
    }

    #[test]
    fn test_fixed_ancestor_blocks_chain() {
        let scene = scene(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }
            scroll_size = { width = 800.0, height = 3000.0 }

            [[nodes]]
            id = "dialog"
            parent = "html"
            position = "fixed"
            rect = { x = 100.0, y = 100.0, width = 300.0, height = 200.0 }
            scroll_size = { width = 300.0, height = 900.0 }
            overflow = { x = "auto", y = "auto" }

            [[nodes]]
            id = "target"
            parent = "dialog"
            rect = { y = 600.0, width = 10.0, height = 10.0 }
            "#,
        );
        let target = scene.node("target").unwrap();
        let chain = scrollable_chain(&scene, &target);
        assert_eq!(chain, vec![scene.node("dialog").unwrap()]);
    }

    #[test]
    fn test_fixed_element_itself_has_no_chain() {
        let scene = scene(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }
            scroll_size = { width = 800.0, height = 3000.0 }

            [[nodes]]
            id = "toolbar"
            parent = "html"
            position = "fixed"
            rect = { width = 800.0, height = 40.0 }
            "#,
        );
        let toolbar = scene.node("toolbar").unwrap();
        assert_eq!(find_scrollable_parent(&scene, &toolbar), None);
    }

    #[test]
    fn test_hidden_root_does_not_qualify() {
        let scene = scene(
            r#"
            root = "html"

            [[nodes]]
            id = "html"
            rect = { width = 800.0, height = 600.0 }
            scroll_size = { width = 800.0, height = 3000.0 }
            overflow = { x = "hidden", y = "hidden" }

            [[nodes]]
            id = "target"
            parent = "html"
            rect = { y = 2000.0, width = 10.0, height = 10.0 }
            "#,
        );
        let target = scene.node("target").unwrap();
        assert_eq!(find_scrollable_parent(&scene, &target), None);
    }
}
