//! In-memory element tree implementing [`ScrollHost`].
//!
//! A scene is described in TOML: a designated scrolling root plus a flat
//! list of nodes, each placed relative to its parent's content box.
//!
//! ```toml
//! root = "html"
//!
//! [[nodes]]
//! id = "html"
//! rect = { width = 800.0, height = 600.0 }
//! scroll_size = { width = 800.0, height = 2000.0 }
//!
//! [[nodes]]
//! id = "list"
//! parent = "html"
//! rect = { y = 100.0, width = 300.0, height = 200.0 }
//! scroll_size = { width = 300.0, height = 900.0 }
//! overflow = { y = "auto" }
//! ```
//!
//! Screen rects follow the ancestors' scroll offsets; `position = "fixed"`
//! nodes are placed against the viewport. Offset writes clamp to the
//! container's scroll range, the way browsers treat `scrollTop`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::{Rect, ScrollOffset, Size};
use crate::host::{Overflow, Position, ScrollHost};
use crate::{Error, Result};

/// Handle of a node inside a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SceneNode(usize);

#[derive(Debug, Deserialize)]
struct SceneSpec {
    root: String,
    #[serde(default)]
    nodes: Vec<NodeSpec>,
}

#[derive(Debug, Deserialize)]
struct NodeSpec {
    id: String,
    #[serde(default)]
    parent: Option<String>,
    /// Border box relative to the parent's content origin
    #[serde(default)]
    rect: Rect,
    /// Visible size, defaults to the rect size
    #[serde(default)]
    client_size: Option<Size>,
    /// Content size, defaults to the client size
    #[serde(default)]
    scroll_size: Option<Size>,
    #[serde(default)]
    overflow: Overflow,
    #[serde(default)]
    position: Position,
    /// Initial scroll offset
    #[serde(default)]
    scroll: ScrollOffset,
    /// Reject offset writes
    #[serde(default)]
    locked: bool,
}

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    parent: Option<usize>,
    layout: Rect,
    client: Size,
    extent: Size,
    overflow: Overflow,
    position: Position,
    scroll: ScrollOffset,
    locked: bool,
}

#[derive(Debug, Clone)]
pub struct Scene {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    root: usize,
    writes: usize,
}

impl Scene {
    /// Parse a scene description
    pub fn from_toml(text: &str) -> Result<Self> {
        let spec: SceneSpec = toml::from_str(text)?;
        Self::from_spec(spec)
    }

    /// Load a scene description from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    fn from_spec(spec: SceneSpec) -> Result<Self> {
        let mut entries = Vec::with_capacity(spec.nodes.len());
        let mut index = HashMap::new();

        for node in spec.nodes {
            if index.contains_key(&node.id) {
                return Err(Error::Scene(format!("duplicate node id '{}'", node.id)));
            }

            // Parents must be declared first, which also rules out cycles
            let parent = match &node.parent {
                Some(parent) => Some(*index.get(parent).ok_or_else(|| {
                    Error::Scene(format!(
                        "node '{}' references undeclared parent '{}'",
                        node.id, parent
                    ))
                })?),
                None => None,
            };

            let client = node
                .client_size
                .unwrap_or(Size::new(node.rect.width, node.rect.height));
            let extent = node.scroll_size.unwrap_or(client);
            if extent.width < client.width || extent.height < client.height {
                warn!(node = %node.id, "Scroll size smaller than client size");
            }

            index.insert(node.id.clone(), entries.len());
            entries.push(Entry {
                id: node.id,
                parent,
                layout: node.rect,
                client,
                extent,
                overflow: node.overflow,
                position: node.position,
                scroll: node.scroll,
                locked: node.locked,
            });
        }

        let root = *index
            .get(&spec.root)
            .ok_or_else(|| Error::Scene(format!("scrolling root '{}' is not a node", spec.root)))?;

        Ok(Self {
            entries,
            index,
            root,
            writes: 0,
        })
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Result<SceneNode> {
        self.index
            .get(id)
            .map(|&i| SceneNode(i))
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    /// Id of a node
    pub fn id_of(&self, node: &SceneNode) -> &str {
        self.entries
            .get(node.0)
            .map(|e| e.id.as_str())
            .unwrap_or("<unknown>")
    }

    /// All nodes in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = SceneNode> + '_ {
        (0..self.entries.len()).map(SceneNode)
    }

    /// Number of accepted offset writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn entry(&self, node: &SceneNode) -> Option<&Entry> {
        self.entries.get(node.0)
    }

    /// Screen position of a node's content origin (its top-left minus its
    /// scroll offset)
    fn content_origin(&self, idx: usize) -> (f64, f64) {
        let rect = self.screen_rect(idx);
        let scroll = self.entries[idx].scroll;
        (rect.left - scroll.left, rect.top - scroll.top)
    }

    fn screen_rect(&self, idx: usize) -> Rect {
        let entry = &self.entries[idx];
        match entry.parent {
            Some(parent) if entry.position != Position::Fixed => {
                let (x, y) = self.content_origin(parent);
                entry.layout.translate(x, y)
            }
            _ => entry.layout,
        }
    }
}

impl ScrollHost for Scene {
    type Node = SceneNode;

    fn parent(&self, node: &SceneNode) -> Option<SceneNode> {
        self.entry(node)?.parent.map(SceneNode)
    }

    fn scrolling_root(&self) -> SceneNode {
        SceneNode(self.root)
    }

    fn bounding_rect(&self, node: &SceneNode) -> Rect {
        if node.0 < self.entries.len() {
            self.screen_rect(node.0)
        } else {
            Rect::default()
        }
    }

    fn overflow(&self, node: &SceneNode) -> Overflow {
        self.entry(node).map(|e| e.overflow).unwrap_or_default()
    }

    fn position(&self, node: &SceneNode) -> Position {
        self.entry(node).map(|e| e.position).unwrap_or_default()
    }

    fn scroll_extent(&self, node: &SceneNode) -> Size {
        self.entry(node).map(|e| e.extent).unwrap_or_default()
    }

    fn client_extent(&self, node: &SceneNode) -> Size {
        self.entry(node).map(|e| e.client).unwrap_or_default()
    }

    fn scroll_offset(&self, node: &SceneNode) -> ScrollOffset {
        self.entry(node).map(|e| e.scroll).unwrap_or_default()
    }

    fn set_scroll_offset(&mut self, node: &SceneNode, offset: ScrollOffset) -> Result<()> {
        let entry = self
            .entries
            .get_mut(node.0)
            .ok_or_else(|| Error::UnknownNode(format!("#{}", node.0)))?;
        if entry.locked {
            return Err(Error::Host(format!("'{}' does not accept scroll writes", entry.id)));
        }

        let max_left = (entry.extent.width - entry.client.width).max(0.0);
        let max_top = (entry.extent.height - entry.client.height).max(0.0);
        entry.scroll = ScrollOffset::new(
            offset.left.clamp(0.0, max_left),
            offset.top.clamp(0.0, max_top),
        );
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::relative_rect;

    const SCENE: &str = r#"
        root = "html"

        [[nodes]]
        id = "html"
        rect = { width = 800.0, height = 600.0 }
        scroll_size = { width = 800.0, height = 2000.0 }
        scroll = { top = 150.0 }

        [[nodes]]
        id = "list"
        parent = "html"
        rect = { x = 20.0, y = 300.0, width = 300.0, height = 200.0 }
        scroll_size = { width = 300.0, height = 900.0 }
        overflow = { y = "auto" }
        scroll = { top = 40.0 }

        [[nodes]]
        id = "row"
        parent = "list"
        rect = { x = 5.0, y = 100.0, width = 290.0, height = 30.0 }

        [[nodes]]
        id = "banner"
        parent = "html"
        position = "fixed"
        rect = { y = 10.0, width = 800.0, height = 50.0 }
    "#;

    #[test]
    fn test_screen_rects_follow_ancestor_scroll() {
        let scene = Scene::from_toml(SCENE).unwrap();
        let list = scene.node("list").unwrap();
        let row = scene.node("row").unwrap();

        assert_eq!(scene.bounding_rect(&list), Rect::new(20.0, 150.0, 300.0, 200.0));
        assert_eq!(scene.bounding_rect(&row), Rect::new(25.0, 210.0, 290.0, 30.0));
        assert_eq!(
            relative_rect(&scene, &row, &list),
            Rect::new(5.0, 60.0, 290.0, 30.0)
        );
    }

    #[test]
    fn test_root_frame_is_viewport() {
        let scene = Scene::from_toml(SCENE).unwrap();
        let html = scene.scrolling_root();
        let row = scene.node("row").unwrap();
        assert_eq!(relative_rect(&scene, &row, &html), scene.bounding_rect(&row));
    }

    #[test]
    fn test_fixed_node_ignores_scroll() {
        let scene = Scene::from_toml(SCENE).unwrap();
        let banner = scene.node("banner").unwrap();
        assert_eq!(scene.bounding_rect(&banner), Rect::new(0.0, 10.0, 800.0, 50.0));
    }

    #[test]
    fn test_writes_clamp_to_scroll_range() {
        let mut scene = Scene::from_toml(SCENE).unwrap();
        let list = scene.node("list").unwrap();
        scene
            .set_scroll_offset(&list, ScrollOffset::new(30.0, 5000.0))
            .unwrap();
        assert_eq!(scene.scroll_offset(&list), ScrollOffset::new(0.0, 700.0));
        assert_eq!(scene.writes(), 1);
    }

    #[test]
    fn test_rejects_bad_scenes() {
        let undeclared = r#"
            root = "html"

            [[nodes]]
            id = "child"
            parent = "html"

            [[nodes]]
            id = "html"
        "#;
        assert!(matches!(Scene::from_toml(undeclared), Err(Error::Scene(_))));

        let duplicate = r#"
            root = "a"

            [[nodes]]
            id = "a"

            [[nodes]]
            id = "a"
        "#;
        assert!(matches!(Scene::from_toml(duplicate), Err(Error::Scene(_))));

        let missing_root = r#"
            root = "html"

            [[nodes]]
            id = "body"
        "#;
        assert!(matches!(Scene::from_toml(missing_root), Err(Error::Scene(_))));

        assert!(matches!(Scene::from_toml("root = 3"), Err(Error::Toml(_))));
    }

    #[test]
    fn test_unknown_node_lookup() {
        let scene = Scene::from_toml(SCENE).unwrap();
        assert!(matches!(scene.node("nope"), Err(Error::UnknownNode(_))));
        assert_eq!(scene.id_of(&scene.node("row").unwrap()), "row");
        assert_eq!(scene.nodes().count(), 4);
    }
}
