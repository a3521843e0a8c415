// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list browser.
//!
//! ## Overview
//!
//! Shows a flat scope of nodes, one per row. At most one row is expanded at a time;
//! an expanded row also shows the node's description.
//!
//! ## Expansion
//!
//! [`ListBrowser::toggle_expand`] is driven from two places:
//!
//! - the row's info affordance, which passes `collapse_if_expanded = true` and
//!   therefore toggles;
//! - primary selection ([`ListBrowser::select_row`]), which passes `false`, so
//!   selecting the expanded row again leaves it expanded.
//!
//! Either way only the previously expanded row and the newly expanded row change;
//! the returned [`RowRefresh`] names them.
//!
//! ## Navigation
//!
//! Selecting a leaf hands its screen and name to [`Navigator::open_screen`]. Selecting
//! a category (search results can sit above the leaf level) pushes a nested list.
//!
//! ## Search
//!
//! A list searches its own scope ([`SearchDepth::Children`]). Lists showing search
//! results have no search header and ignore search events.

use core::ops::Range;
use std::sync::Arc;

use understory_catalog::{CandidateNames, Catalog, NodeId, NodeKind, SearchDepth, resolve};

use crate::entrance::{EntranceAnimation, EntranceLatch, RowAnimation};
use crate::header::{HeaderMetrics, SearchHeader, SearchHeaderDelegate, SuggestionsState};
use crate::navigator::{ListRequest, Navigator, SearchOutcome, deliver_search};
use crate::types::{Row, RowRefresh};

/// Flat list of catalog nodes with single-row expansion.
pub struct ListBrowser<N> {
    catalog: Arc<Catalog>,
    navigator: N,
    title: String,
    scope: Vec<NodeId>,
    // `None` for search results.
    header: Option<SearchHeader>,
    expanded: Option<usize>,
    entrance: EntranceLatch,
    animation: EntranceAnimation,
}

impl<N> core::fmt::Debug for ListBrowser<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListBrowser")
            .field("title", &self.title)
            .field("rows", &self.scope.len())
            .field("expanded", &self.expanded)
            .field("header", &self.header)
            .field("entrance", &self.entrance)
            .finish_non_exhaustive()
    }
}

impl<N: Navigator> ListBrowser<N> {
    /// Create a browser for `request`.
    pub fn new(catalog: Arc<Catalog>, request: ListRequest, navigator: N) -> Self {
        let header = (!request.contains_search_results)
            .then(|| SearchHeader::new(HeaderMetrics::default()));
        Self {
            catalog,
            navigator,
            title: request.title,
            scope: request.scope,
            header,
            expanded: None,
            entrance: EntranceLatch::new(),
            animation: EntranceAnimation::default(),
        }
    }

    /// Replace the entrance animation timing.
    #[must_use]
    pub fn with_animation(mut self, animation: EntranceAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Replace the search header metrics. Has no effect on a results list.
    #[must_use]
    pub fn with_header(mut self, metrics: HeaderMetrics) -> Self {
        if let Some(h) = &mut self.header {
            *h = SearchHeader::new(metrics);
        }
        self
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The injected navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The injected navigator, mutably.
    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Consume the browser, returning its navigator.
    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Navigation title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Nodes listed, in display order.
    pub fn scope(&self) -> &[NodeId] {
        &self.scope
    }

    /// Returns true for a list of search results.
    pub fn contains_search_results(&self) -> bool {
        self.header.is_none()
    }

    /// Suggestions state of the search header; `None` for a results list.
    pub fn suggestions(&self) -> Option<SuggestionsState> {
        self.header.as_ref().map(SearchHeader::state)
    }

    /// Current header height; `0.0` for a results list.
    pub fn header_height(&self) -> f64 {
        self.header.as_ref().map_or(0.0, SearchHeader::height)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.scope.len()
    }

    /// Expanded row, if any.
    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    /// Presentation of row `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        let id = *self.scope.get(index)?;
        let node = self.catalog.get(id)?;
        Some(Row {
            node: id,
            title: node.name(),
            detail: (self.expanded == Some(index)).then(|| node.description()),
        })
    }

    /// Expand row `index`, or collapse it if it is already expanded and
    /// `collapse_if_expanded` is set.
    pub fn toggle_expand(&mut self, index: usize, collapse_if_expanded: bool) -> RowRefresh {
        if index >= self.scope.len() {
            tracing::warn!(index, rows = self.scope.len(), "row index out of range");
            return RowRefresh::Unchanged;
        }
        let refresh = if self.expanded == Some(index) {
            if !collapse_if_expanded {
                return RowRefresh::Unchanged;
            }
            self.expanded = None;
            RowRefresh::Collapsed(index)
        } else {
            let previous = self.expanded.replace(index);
            RowRefresh::Expanded {
                previous,
                current: index,
            }
        };
        tracing::debug!(list = %self.title, ?refresh, "row expansion changed");
        refresh
    }

    /// Select row `index`: expand it (never collapse) and navigate to it.
    ///
    /// Returns the selected node.
    pub fn select_row(&mut self, index: usize) -> Option<NodeId> {
        let Some(&id) = self.scope.get(index) else {
            tracing::warn!(index, rows = self.scope.len(), "row index out of range");
            return None;
        };
        self.toggle_expand(index, false);

        let node = self.catalog.get(id)?;
        tracing::debug!(index, name = node.name(), "row selected");
        match node.kind() {
            NodeKind::Leaf { screen } => {
                if screen.is_empty() {
                    tracing::warn!(name = node.name(), "opening a leaf without a screen");
                }
                self.navigator.open_screen(screen, node.name());
            }
            NodeKind::Category { children } => {
                self.navigator
                    .push_list(ListRequest::new(node.name(), children.clone()));
            }
        }
        Some(id)
    }

    /// Handle results from the search collaborator, matching this list's rows.
    ///
    /// `None` (no search performed) and an empty match set both report
    /// [`Status::NoMatchFound`](crate::Status::NoMatchFound).
    pub fn on_search_results(&mut self, candidates: Option<&CandidateNames>) -> SearchOutcome {
        let found = candidates
            .map(|c| resolve(&self.catalog, c, &self.scope, SearchDepth::Children))
            .unwrap_or_default();
        deliver_search(&mut self.navigator, found)
    }

    /// The list is about to become visible.
    ///
    /// The first call returns the entrance animation for `visible_rows` (clamped to
    /// the row count) in a container of `width`. Every later call returns `None`.
    pub fn will_appear(
        &mut self,
        visible_rows: Range<usize>,
        width: f64,
    ) -> Option<Vec<RowAnimation>> {
        if !self.entrance.fire() {
            return None;
        }
        let end = visible_rows.end.min(self.scope.len());
        let start = visible_rows.start.min(end);
        tracing::debug!(list = %self.title, start, end, "playing entrance animation");
        Some(self.animation.plan(start..end, width))
    }

    /// Returns true once the entrance animation has been produced.
    pub fn has_appeared(&self) -> bool {
        self.entrance.has_fired()
    }
}

impl<N: Navigator> SearchHeaderDelegate for ListBrowser<N> {
    fn on_will_show_suggestions(&mut self) {
        if let Some(h) = &mut self.header {
            h.show_suggestions();
        }
    }

    fn on_will_hide_suggestions(&mut self) {
        if let Some(h) = &mut self.header {
            h.hide_suggestions();
        }
    }

    fn on_results(&mut self, candidates: Option<CandidateNames>) {
        if self.header.is_none() {
            tracing::debug!(list = %self.title, "results list has no search header; ignoring");
            return;
        }
        self.on_search_results(candidates.as_ref());
    }
}
