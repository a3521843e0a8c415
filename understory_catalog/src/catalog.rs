// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable node store.

use crate::search::{CandidateNames, SearchDepth, resolve};
use crate::types::{Node, NodeId, NodeKinds};

/// An immutable tree of [`Node`]s.
///
/// Nodes are stored in pre-order: a node's id is smaller than the ids of all of its
/// descendants, and siblings appear in source order. The catalog is built once by
/// the [loader](crate::loader) and never mutated afterwards, so it can be shared
/// between browsers behind an `Arc`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
}

impl core::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self.iter_kinds(NodeKinds::LEAF).count();
        f.debug_struct("Catalog")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Top-level nodes in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the catalog has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Returns `None` for an id that did not come from this catalog.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    /// Walk every node in pre-order (source order).
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "The loader rejects catalogs with more than u32::MAX nodes."
            )]
            let id = NodeId::new(i as u32);
            (id, n)
        })
    }

    /// Walk the nodes whose kind is in `kinds`, in pre-order.
    pub fn iter_kinds(&self, kinds: NodeKinds) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.iter().filter(move |(_, n)| kinds.intersects(n.kinds()))
    }

    /// Children of `parent`, or the top-level nodes when `parent` is `None`.
    pub fn children_of(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.roots,
            Some(id) => self.get(id).map(Node::children).unwrap_or(&[]),
        }
    }

    /// Find the direct child of `parent` named `name`.
    ///
    /// Non-empty display names are unique among siblings, so at most one node matches
    /// them. For an empty `name` the first nameless child is returned.
    pub fn child_by_name(&self, parent: Option<NodeId>, name: &str) -> Option<NodeId> {
        self.children_of(parent)
            .iter()
            .copied()
            .find(|id| self.get(*id).is_some_and(|n| n.name() == name))
    }

    /// Path from the top level to `id` (inclusive).
    ///
    /// Returns an empty path for an id that did not come from this catalog.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(n) = cur {
            let Some(node) = self.get(n) else {
                return Vec::new();
            };
            path.push(n);
            cur = node.parent();
        }
        path.reverse();
        path
    }

    /// Display names along [`Catalog::path_to`], joined with `" / "`.
    pub fn breadcrumb(&self, id: NodeId) -> String {
        let names: Vec<&str> = self
            .path_to(id)
            .into_iter()
            .filter_map(|n| self.get(n).map(Node::name))
            .collect();
        names.join(" / ")
    }

    /// Resolve candidate names against `scope`. See [`resolve`].
    pub fn resolve(
        &self,
        candidates: &CandidateNames,
        scope: &[NodeId],
        depth: SearchDepth,
    ) -> Vec<NodeId> {
        resolve(self, candidates, scope, depth)
    }
}

impl core::ops::Index<NodeId> for Catalog {
    type Output = Node;

    /// Panics if `id` did not come from this catalog.
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CatalogRecord;

    fn sample() -> Catalog {
        let records = vec![
            CatalogRecord::category(
                "Maps",
                vec![
                    CatalogRecord::leaf("Mobile map (search and route)", "MobileMap"),
                    CatalogRecord::leaf("Display a map", "DisplayMap"),
                ],
            ),
            CatalogRecord::category(
                "Route & Navigation",
                vec![CatalogRecord::leaf(
                    "Route around barriers",
                    "RouteAroundBarriers",
                )],
            ),
        ];
        Catalog::from_records(records).unwrap()
    }

    #[test]
    fn ids_follow_pre_order() {
        let c = sample();
        let names: Vec<&str> = c.iter().map(|(_, n)| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "Maps",
                "Mobile map (search and route)",
                "Display a map",
                "Route & Navigation",
                "Route around barriers",
            ]
        );
        assert_eq!(c.len(), 5);
        assert_eq!(c.roots().len(), 2);
    }

    #[test]
    fn iter_kinds_filters_leaves() {
        let c = sample();
        let leaves: Vec<&str> = c
            .iter_kinds(NodeKinds::LEAF)
            .map(|(_, n)| n.name())
            .collect();
        assert_eq!(
            leaves,
            vec![
                "Mobile map (search and route)",
                "Display a map",
                "Route around barriers",
            ]
        );
        assert_eq!(c.iter_kinds(NodeKinds::CATEGORY).count(), 2);
        assert_eq!(c.iter_kinds(NodeKinds::empty()).count(), 0);
    }

    #[test]
    fn child_by_name_is_scoped_to_one_level() {
        let c = sample();
        let maps = c.child_by_name(None, "Maps").unwrap();
        assert!(c.child_by_name(Some(maps), "Display a map").is_some());
        // Grandchildren are not direct children of the top level.
        assert!(c.child_by_name(None, "Display a map").is_none());
        assert!(c.child_by_name(Some(maps), "Route around barriers").is_none());
    }

    #[test]
    fn path_and_breadcrumb() {
        let c = sample();
        let route = c.child_by_name(None, "Route & Navigation").unwrap();
        let leaf = c.child_by_name(Some(route), "Route around barriers").unwrap();
        assert_eq!(c.path_to(leaf), vec![route, leaf]);
        assert_eq!(c.breadcrumb(leaf), "Route & Navigation / Route around barriers");
        assert_eq!(c[leaf].parent(), Some(route));
    }

    #[test]
    fn foreign_ids_are_tolerated() {
        let c = sample();
        let foreign = NodeId::new(99);
        assert!(c.get(foreign).is_none());
        assert!(c.path_to(foreign).is_empty());
        assert!(c.children_of(Some(foreign)).is_empty());
    }

    #[test]
    fn debug_summarizes() {
        let s = format!("{:?}", sample());
        assert!(s.contains("nodes: 5"));
        assert!(s.contains("leaves: 3"));
    }
}
