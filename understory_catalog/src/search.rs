// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-based lookup of nodes.
//!
//! An external fuzzy-search collaborator turns what the user typed into a set of
//! [`CandidateNames`]. [`resolve`] maps those names back to nodes within a scope.
//!
//! ## Depth
//!
//! Lookup never walks the whole tree. It inspects exactly one level:
//!
//! - [`SearchDepth::Children`] checks the scope nodes themselves. A list of samples
//!   searches what it shows.
//! - [`SearchDepth::Grandchildren`] checks the children of each scope node. The
//!   top-level grid shows categories but searches the samples inside them.
//!
//! ## Ordering
//!
//! Results follow the traversal order of the scope (and, for grandchildren, each
//! node's children), never the order in which the candidates were produced.
//! An empty result means "no match"; it is not an error.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::types::NodeId;

/// Display names proposed by a search collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateNames(HashSet<String>);

impl CandidateNames {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Returns true if `name` is a candidate.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for CandidateNames {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Which level below a scope is matched against the candidates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchDepth {
    /// Match the scope nodes themselves.
    Children,
    /// Match the children of each scope node.
    Grandchildren,
}

/// Resolve `candidates` to nodes at the given `depth` below `scope`.
///
/// Ids that did not come from `catalog` are skipped.
pub fn resolve(
    catalog: &Catalog,
    candidates: &CandidateNames,
    scope: &[NodeId],
    depth: SearchDepth,
) -> Vec<NodeId> {
    if candidates.is_empty() {
        return Vec::new();
    }
    let matches = |id: &NodeId| {
        catalog
            .get(*id)
            .is_some_and(|n| candidates.contains(n.name()))
    };
    let found: Vec<NodeId> = match depth {
        SearchDepth::Children => scope.iter().copied().filter(matches).collect(),
        SearchDepth::Grandchildren => scope
            .iter()
            .flat_map(|id| catalog.children_of(Some(*id)))
            .copied()
            .filter(matches)
            .collect(),
    };
    tracing::debug!(
        candidates = candidates.len(),
        scope = scope.len(),
        ?depth,
        found = found.len(),
        "resolved candidate names"
    );
    found
}
