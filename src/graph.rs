//! Scene graphs.
//!
//! A graph is a tree of [`Primitive`]s. Any node may be given a string identifier through the
//! `id` style key, after which it can be looked up or deleted by that name. Identifiers are
//! unique within a graph: inserting a node with an identifier that is already taken replaces
//! the previous node and its subtree.
//!
//! Two exceptions keep the structure a graph was built around intact. Identifiers that have
//! been reserved can't be taken over, and a node can't take the identifier of one of its own
//! ancestors. In both cases the new node is added without an identifier.

use crate::error::GraphError;
use crate::primitive::{ComponentNode, Primitive, Props};
use crate::style::{keys, StyleValue, Styles};
use cgmath::{Point2, Vector2, Zero};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// A unique identifier for a graph node.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32, u16, u16, [u8; 8]);

impl NodeId {
    pub(crate) fn new() -> NodeId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        NodeId(a, b, c, *d)
    }
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub primitive: Primitive,
    pub styles: Styles,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in draw order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    root: NodeId,
    nodes: HashMap<NodeId, Node>,
    /// Node identifiers (the `id` style).
    ids: HashMap<String, NodeId>,
    /// Identifiers that may not be replaced.
    reserved: HashSet<String>,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    /// Creates a graph containing only an empty root group.
    pub fn new() -> Graph {
        let root = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                primitive: Primitive::Group,
                styles: Styles::new(),
                parent: None,
                children: Vec::new(),
            },
        );
        Graph {
            root,
            nodes,
            ids: HashMap::new(),
            reserved: HashSet::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns a builder that appends to the root group.
    pub fn builder(&mut self) -> GroupBuilder<'_> {
        let group = self.root;
        GroupBuilder { graph: self, group }
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A graph always has its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(&node)
    }

    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// Prevents later insertions from taking over an identifier.
    ///
    /// The identifier doesn't need to be in use yet.
    pub fn reserve(&mut self, id: &str) {
        self.reserved.insert(id.to_string());
    }

    pub fn is_reserved(&self, id: &str) -> bool {
        self.reserved.contains(id)
    }

    /// Looks up a node by identifier.
    pub fn get(&self, id: &str) -> Result<&Node, GraphError> {
        self.ids
            .get(id)
            .and_then(|node| self.nodes.get(node))
            .ok_or_else(|| GraphError::NotFound(id.to_string()))
    }

    /// Removes the node with the given identifier and its subtree.
    ///
    /// Returns false if there was no such node. The root cannot be removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.ids.get(id) {
            Some(&node) if node != self.root => {
                self.remove_subtree(node);
                true
            }
            _ => false,
        }
    }

    /// Adds a node as the last child of `parent`.
    ///
    /// # Panics
    /// - if the parent does not exist
    fn add(&mut self, parent: NodeId, primitive: Primitive, mut styles: Styles) -> NodeId {
        assert!(self.nodes.contains_key(&parent), "adding to nonexistent node");

        if let Some(existing) = styles.id().and_then(|id| self.ids.get(id).copied()) {
            let taken = styles.id().map_or(false, |id| self.reserved.contains(id))
                || self.is_ancestor_or_self(existing, parent);
            if taken {
                log::warn!(
                    "identifier {:?} is already taken; adding node without it",
                    styles.id()
                );
                styles.remove(keys::ID);
            } else {
                // last insertion wins
                self.remove_subtree(existing);
            }
        }

        let node = NodeId::new();
        if let Some(id) = styles.id() {
            self.ids.insert(id.to_string(), node);
        }
        self.nodes.insert(
            node,
            Node {
                primitive,
                styles,
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(node);
        }
        node
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.nodes.get(&id).and_then(|node| node.parent);
        }
        false
    }

    /// Removes a node, its subtree and its parent relationship.
    fn remove_subtree(&mut self, node: NodeId) {
        let removed = match self.nodes.remove(&node) {
            Some(removed) => removed,
            None => return,
        };

        if let Some(id) = removed.styles.id() {
            if self.ids.get(id) == Some(&node) {
                self.ids.remove(id);
            }
        }
        if let Some(parent) = removed.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != node);
        }

        for child in removed.children {
            self.remove_subtree(child);
        }
    }

    /// Finds a style value on the node or the closest ancestor that sets it.
    pub fn inherited_style(&self, node: NodeId, key: &str) -> Option<&StyleValue> {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let node = self.nodes.get(&id)?;
            if let Some(value) = node.styles.get(key) {
                return Some(value);
            }
            cursor = node.parent;
        }
        None
    }

    /// Returns the identifier of the topmost primitive under the point, if it has one.
    ///
    /// Children are drawn after (on top of) their parent, in order.
    pub fn hit_test(&self, point: Point2<f64>) -> Option<&str> {
        self.hit_test_node(self.root, point, Vector2::zero())
            .and_then(|node| self.nodes.get(&node))
            .and_then(|node| node.styles.id())
    }

    fn hit_test_node(
        &self,
        id: NodeId,
        point: Point2<f64>,
        offset: Vector2<f64>,
    ) -> Option<NodeId> {
        let node = self.nodes.get(&id)?;
        let offset = offset + node.styles.translate().unwrap_or_else(Vector2::zero);

        for child in node.children.iter().rev() {
            if let Some(hit) = self.hit_test_node(*child, point, offset) {
                return Some(hit);
            }
        }

        match node.primitive.bounds() {
            Some(bounds) if (bounds + offset).contains(point) => Some(id),
            _ => None,
        }
    }
}

/// Appends primitives to a group in a graph under construction.
pub struct GroupBuilder<'a> {
    graph: &'a mut Graph,
    group: NodeId,
}

impl<'a> GroupBuilder<'a> {
    /// The group being built.
    pub fn node(&self) -> NodeId {
        self.group
    }

    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// Style value set on this group or one of its ancestors.
    pub fn inherited_style(&self, key: &str) -> Option<&StyleValue> {
        self.graph.inherited_style(self.group, key)
    }

    /// The `theme` style this group inherits, if it is text.
    pub fn theme(&self) -> Option<&str> {
        match self.inherited_style(keys::THEME)? {
            StyleValue::Text(theme) => Some(theme),
            _ => None,
        }
    }

    pub fn rect(&mut self, size: Vector2<f64>, styles: Styles) -> NodeId {
        self.graph.add(self.group, Primitive::Rect { size }, styles)
    }

    pub fn rounded_rect(&mut self, size: Vector2<f64>, radius: f64, styles: Styles) -> NodeId {
        self.graph
            .add(self.group, Primitive::RoundedRect { size, radius }, styles)
    }

    /// Adds a nested group and builds its contents.
    pub fn group<F>(&mut self, styles: Styles, build: F) -> NodeId
    where
        F: FnOnce(&mut GroupBuilder<'_>),
    {
        let group = self.graph.add(self.group, Primitive::Group, styles);
        build(&mut GroupBuilder {
            graph: &mut *self.graph,
            group,
        });
        group
    }

    /// Adds a component instance node.
    pub fn component(&mut self, name: &str, props: Props, styles: Styles) -> NodeId {
        let node = ComponentNode {
            name: name.to_string(),
            props,
        };
        self.graph.add(self.group, Primitive::Component(node), styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_graph_ids() {
        let mut graph = Graph::new();
        let group = graph.builder().group(Styles::new().with_id("outer"), |g| {
            g.rect(Vector2::new(10., 10.), Styles::new().with_id("inner"));
        });

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.node_id("outer"), Some(group));
        let inner = graph.get("inner").expect("inner should exist");
        assert_eq!(inner.parent(), Some(group));
        assert_eq!(inner.primitive, Primitive::Rect { size: Vector2::new(10., 10.) });

        assert!(graph.delete("outer"));
        assert_eq!(graph.len(), 1, "deleting a group deletes its subtree");
        assert_eq!(graph.get("inner"), Err(GraphError::NotFound("inner".into())));
        assert!(graph.node(graph.root()).unwrap().children().is_empty());
    }

    #[test]
    fn test_last_insertion_wins() {
        let mut graph = Graph::new();
        graph
            .builder()
            .rect(Vector2::new(1., 1.), Styles::new().with_id("a"));
        let second = graph.builder().rounded_rect(
            Vector2::new(2., 2.),
            3.,
            Styles::new().with_id("a").with(keys::FILL, Color::BLACK),
        );

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node_id("a"), Some(second));
        assert_eq!(graph.get("a").unwrap().styles.fill(), Some(Color::BLACK));
    }

    #[test]
    fn test_reserved_ids_are_kept() {
        let mut graph = Graph::new();
        let original = graph
            .builder()
            .rect(Vector2::new(1., 1.), Styles::new().with_id("a"));
        graph.reserve("a");
        assert!(graph.is_reserved("a"));

        let second = graph
            .builder()
            .rect(Vector2::new(2., 2.), Styles::new().with_id("a"));

        assert_eq!(graph.len(), 3, "both nodes stay");
        assert_eq!(graph.node_id("a"), Some(original));
        assert_eq!(graph.node(second).unwrap().styles.id(), None);
    }

    #[test]
    fn test_ancestor_ids_are_kept() {
        let mut graph = Graph::new();
        let mut inner = None;
        let outer = graph.builder().group(Styles::new().with_id("g"), |g| {
            inner = Some(g.rect(Vector2::new(1., 1.), Styles::new().with_id("g")));
        });

        assert_eq!(graph.node_id("g"), Some(outer));
        assert_eq!(graph.get("g").unwrap().primitive, Primitive::Group);
        let inner = inner.expect("inner rect should be added");
        assert_eq!(graph.node(inner).unwrap().parent(), Some(outer));
        assert_eq!(graph.node(inner).unwrap().styles.id(), None);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut graph = Graph::new();
        graph.builder().rect(Vector2::new(1., 1.), Styles::new());
        let before = graph.clone();
        assert!(!graph.delete("nope"));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_hit_test_respects_translate_and_order() {
        let mut graph = Graph::new();
        let mut root = graph.builder();
        root.rect(Vector2::new(100., 100.), Styles::new().with_id("back"));
        root.group(
            Styles::new().with(keys::TRANSLATE, Vector2::new(20., 30.)),
            |g| {
                g.rect(Vector2::new(10., 10.), Styles::new().with_id("front"));
            },
        );

        assert_eq!(graph.hit_test(Point2::new(25., 35.)), Some("front"));
        assert_eq!(graph.hit_test(Point2::new(5., 5.)), Some("back"));
        assert_eq!(graph.hit_test(Point2::new(150., 5.)), None);
    }

    #[test]
    fn test_inherited_style() {
        let mut graph = Graph::new();
        let mut theme = None;
        graph
            .builder()
            .group(Styles::new().with(keys::THEME, "dark"), |g| {
                g.group(Styles::new(), |g| theme = g.theme().map(String::from));
            });
        assert_eq!(theme.as_deref(), Some("dark"));
    }
}
