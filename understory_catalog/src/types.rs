// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the catalog: node handles, screen identifiers, node kinds, and flags.

/// Identifier for a node in a [`Catalog`](crate::Catalog).
///
/// A small, copyable handle into the catalog's node storage.
/// The catalog is immutable once loaded, so a `NodeId` stays valid for as long as
/// the catalog that produced it is alive.
///
/// Ids are allocated in pre-order, so comparing two ids from the same catalog
/// compares their position in a depth-first walk of the source data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Opaque identifier of the screen a leaf opens.
///
/// The catalog never interprets it; the screen factory that receives a selected
/// leaf resolves it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ScreenId(String);

impl ScreenId {
    /// Create a screen identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the source data did not name a screen.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What a node is: a category grouping other nodes, or a leaf naming a screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// A grouping node. `children` is never empty and is in display order.
    Category {
        /// Child nodes in source order.
        children: Vec<NodeId>,
    },
    /// A terminal node that opens a screen.
    Leaf {
        /// Screen opened when the leaf is selected.
        screen: ScreenId,
    },
}

bitflags::bitflags! {
    /// Node kinds accepted by a traversal.
    ///
    /// Used by [`Catalog::iter_kinds`](crate::Catalog::iter_kinds).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeKinds: u8 {
        /// Category nodes.
        const CATEGORY = 0b0000_0001;
        /// Leaf nodes.
        const LEAF     = 0b0000_0010;
    }
}

impl Default for NodeKinds {
    fn default() -> Self {
        Self::CATEGORY | Self::LEAF
    }
}

/// A catalog entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Display name; unique among siblings unless empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description shown when the node is expanded in a list.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category or leaf payload.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Parent node, or `None` for a top-level node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in display order; empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Category { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Screen opened by this node, if it is a leaf.
    pub fn screen(&self) -> Option<&ScreenId> {
        match &self.kind {
            NodeKind::Category { .. } => None,
            NodeKind::Leaf { screen } => Some(screen),
        }
    }

    /// Returns true for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// The single [`NodeKinds`] bit describing this node.
    pub fn kinds(&self) -> NodeKinds {
        match self.kind {
            NodeKind::Category { .. } => NodeKinds::CATEGORY,
            NodeKind::Leaf { .. } => NodeKinds::LEAF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, screen: &str) -> Node {
        Node {
            name: name.into(),
            description: String::new(),
            kind: NodeKind::Leaf {
                screen: ScreenId::new(screen),
            },
            parent: None,
        }
    }

    #[test]
    fn leaf_has_screen_and_no_children() {
        let n = leaf("Create geometries", "CreateGeometries");
        assert!(n.is_leaf());
        assert!(n.children().is_empty());
        assert_eq!(n.screen().map(ScreenId::as_str), Some("CreateGeometries"));
        assert_eq!(n.kinds(), NodeKinds::LEAF);
    }

    #[test]
    fn category_has_children_and_no_screen() {
        let n = Node {
            name: "Maps".into(),
            description: String::new(),
            kind: NodeKind::Category {
                children: vec![NodeId::new(1), NodeId::new(2)],
            },
            parent: None,
        };
        assert!(!n.is_leaf());
        assert_eq!(n.children(), &[NodeId::new(1), NodeId::new(2)]);
        assert!(n.screen().is_none());
        assert_eq!(n.kinds(), NodeKinds::CATEGORY);
    }

    #[test]
    fn default_kinds_accept_everything() {
        assert!(NodeKinds::default().contains(NodeKinds::CATEGORY));
        assert!(NodeKinds::default().contains(NodeKinds::LEAF));
    }

    #[test]
    fn screen_id_display_and_emptiness() {
        assert!(ScreenId::default().is_empty());
        let id = ScreenId::from("RouteAroundBarriers");
        assert!(!id.is_empty());
        assert_eq!(format!("{id}"), "RouteAroundBarriers");
    }
}
