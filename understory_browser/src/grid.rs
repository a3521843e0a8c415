// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The top-level grid browser.
//!
//! ## Overview
//!
//! Shows the catalog's top-level nodes as square tiles below a search header.
//!
//! - Tile size follows [`TileLayout`]; call [`GridBrowser::set_container_size`] on
//!   every container size change.
//! - Selecting a tile pushes a list of that node's children, titled with its name.
//! - Search results are resolved one level *below* the tiles
//!   ([`SearchDepth::Grandchildren`]): the grid shows categories but finds samples.
//!   A list browser, by contrast, searches the nodes it shows.

use std::sync::Arc;

use kurbo::{Rect, Size};
use understory_catalog::{CandidateNames, Catalog, NodeId, SearchDepth, resolve};

use crate::header::{HeaderMetrics, SearchHeader, SearchHeaderDelegate, SuggestionsState};
use crate::layout::TileLayout;
use crate::navigator::{ListRequest, Navigator, SearchOutcome, deliver_search};
use crate::types::{AssetLookup, Tile, TileImages};

/// Grid of top-level catalog nodes.
pub struct GridBrowser<N> {
    catalog: Arc<Catalog>,
    navigator: N,
    layout: TileLayout,
    header: SearchHeader,
    container: Size,
}

impl<N> core::fmt::Debug for GridBrowser<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridBrowser")
            .field("catalog", &self.catalog)
            .field("header", &self.header)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

impl<N: Navigator> GridBrowser<N> {
    /// Create a browser with default layout and header metrics.
    pub fn new(catalog: Arc<Catalog>, navigator: N) -> Self {
        Self::with_config(
            catalog,
            navigator,
            TileLayout::default(),
            HeaderMetrics::default(),
        )
    }

    /// Create a browser with explicit layout and header metrics.
    pub fn with_config(
        catalog: Arc<Catalog>,
        navigator: N,
        layout: TileLayout,
        header: HeaderMetrics,
    ) -> Self {
        Self {
            catalog,
            navigator,
            layout,
            header: SearchHeader::new(header),
            container: Size::ZERO,
        }
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

    /// Number of tiles: the top-level node count.
    pub fn item_count(&self) -> usize {
        self.catalog.roots().len()
    }

    /// Square tile size for `container`.
    pub fn item_size(&self, container: Size) -> Size {
        self.layout.item_size(container)
    }

    /// Record a new container size and return the recomputed tile size.
    pub fn set_container_size(&mut self, container: Size) -> Size {
        self.container = container;
        let size = self.item_size(container);
        tracing::debug!(
            width = container.width,
            columns = self.layout.columns(container.width),
            tile = size.width,
            "grid container resized"
        );
        size
    }

    /// Last container size passed to [`GridBrowser::set_container_size`].
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Tile size for the current container.
    pub fn current_item_size(&self) -> Size {
        self.item_size(self.container)
    }

    /// Suggestions state of the search header.
    pub fn suggestions(&self) -> SuggestionsState {
        self.header.state()
    }

    /// Header size for the current container and suggestions state.
    pub fn header_size(&self) -> Size {
        self.header.size(self.container.width)
    }

    /// Rectangle of tile `index` in the current container.
    pub fn tile_rect(&self, index: usize) -> Option<Rect> {
        (index < self.item_count())
            .then(|| self.layout.tile_rect(index, self.container, self.header.height()))
    }

    /// Tiles intersecting `viewport`, in index order.
    pub fn visible_tiles(&self, viewport: Rect) -> Vec<usize> {
        (0..self.item_count())
            .filter(|i| {
                let r = self.layout.tile_rect(*i, self.container, self.header.height());
                r.intersect(viewport).area() > 0.0
            })
            .collect()
    }

    /// Height of the header and every tile, insets included.
    pub fn content_height(&self) -> f64 {
        self.layout
            .content_height(self.item_count(), self.container, self.header.height())
    }

    /// Presentation of tile `index`.
    pub fn tile(&self, index: usize) -> Option<Tile> {
        let id = *self.catalog.roots().get(index)?;
        Some(Tile::new(id, self.catalog[id].name()))
    }

    /// Images for tile `index`; missing assets are `None`.
    pub fn tile_images<A: AssetLookup>(
        &self,
        index: usize,
        assets: &A,
    ) -> Option<TileImages<A::Image>> {
        self.tile(index).map(|t| t.images(assets))
    }

    /// Select tile `index`.
    ///
    /// A category pushes a list of its children titled with its name. A top-level
    /// leaf opens its screen directly. Returns the selected node.
    pub fn select_item(&mut self, index: usize) -> Option<NodeId> {
        let Some(&id) = self.catalog.roots().get(index) else {
            tracing::warn!(index, count = self.item_count(), "tile index out of range");
            return None;
        };
        let node = &self.catalog[id];
        tracing::debug!(index, name = node.name(), "tile selected");
        match node.screen() {
            Some(screen) => self.navigator.open_screen(screen, node.name()),
            None => self
                .navigator
                .push_list(ListRequest::new(node.name(), node.children().to_vec())),
        }
        Some(id)
    }

    /// Handle results from the search collaborator.
    ///
    /// Matches are looked up among the children of the top-level nodes. `None`
    /// (no search performed) and an empty match set both report
    /// [`Status::NoMatchFound`](crate::Status::NoMatchFound).
    pub fn on_search_results(&mut self, candidates: Option<&CandidateNames>) -> SearchOutcome {
        let found = candidates
            .map(|c| {
                resolve(
                    &self.catalog,
                    c,
                    self.catalog.roots(),
                    SearchDepth::Grandchildren,
                )
            })
            .unwrap_or_default();
        deliver_search(&mut self.navigator, found)
    }
}

impl<N: Navigator> SearchHeaderDelegate for GridBrowser<N> {
    fn on_will_show_suggestions(&mut self) {
        self.header.show_suggestions();
    }

    fn on_will_hide_suggestions(&mut self) {
        self.header.hide_suggestions();
    }

    fn on_results(&mut self, candidates: Option<CandidateNames>) {
        self.on_search_results(candidates.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::Status;
    use crate::testing::{FakeAssets, NavEvent, RecordingNavigator, abxyz, samples};

    fn grid(catalog: Arc<Catalog>) -> GridBrowser<RecordingNavigator> {
        GridBrowser::new(catalog, RecordingNavigator::default())
    }

    #[test]
    fn item_count_is_top_level_count() {
        assert_eq!(grid(samples()).item_count(), 4);
        assert_eq!(grid(abxyz()).item_count(), 2);
    }

    #[test]
    fn item_size_columns_and_idempotence() {
        let g = grid(samples());
        let wide = g.item_size(Size::new(640.0, 400.0));
        assert_eq!(wide, Size::new(200.0, 200.0));
        assert_eq!(g.item_size(Size::new(640.0, 400.0)), wide);
        assert_eq!(g.item_size(Size::new(300.0, 400.0)), Size::new(135.0, 135.0));
    }

    #[test]
    fn resize_recomputes_tiles() {
        let mut g = grid(samples());
        assert_eq!(g.set_container_size(Size::new(640.0, 400.0)).width, 200.0);
        assert_eq!(g.tile_rect(3), Some(Rect::new(10.0, 275.0, 210.0, 475.0)));
        // Rotate to a narrow container.
        assert_eq!(g.set_container_size(Size::new(300.0, 700.0)).width, 135.0);
        assert_eq!(g.container_size(), Size::new(300.0, 700.0));
        assert_eq!(g.current_item_size(), Size::new(135.0, 135.0));
        assert_eq!(g.tile_rect(1), Some(Rect::new(155.0, 65.0, 290.0, 200.0)));
        assert_eq!(g.tile_rect(4), None);
    }

    #[test]
    fn suggestions_state_machine_drives_header() {
        let mut g = grid(samples());
        g.set_container_size(Size::new(640.0, 400.0));
        assert_eq!(g.suggestions(), SuggestionsState::Idle);
        assert_eq!(g.header_size(), Size::new(640.0, 60.0));
        g.on_will_show_suggestions();
        assert_eq!(g.suggestions(), SuggestionsState::SuggestionsVisible);
        assert_eq!(g.header_size(), Size::new(640.0, 260.0));
        // Tiles move down with the expanded header.
        assert_eq!(g.tile_rect(0).map(|r| r.y0), Some(265.0));
        g.on_will_hide_suggestions();
        assert_eq!(g.suggestions(), SuggestionsState::Idle);
        assert_eq!(g.tile_rect(0).map(|r| r.y0), Some(65.0));
    }

    #[test]
    fn visible_tiles_follow_viewport() {
        let mut g = grid(samples());
        g.set_container_size(Size::new(640.0, 400.0));
        assert_eq!(g.visible_tiles(Rect::new(0.0, 0.0, 640.0, 270.0)), vec![0, 1, 2]);
        assert_eq!(g.visible_tiles(Rect::new(0.0, 300.0, 640.0, 400.0)), vec![3]);
        assert_eq!(g.content_height(), 60.0 + 5.0 + 410.0 + 10.0);
    }

    #[test]
    fn tiles_and_images() {
        let g = grid(samples());
        let t = g.tile(2).unwrap();
        assert_eq!(t.title, "GEOMETRY");
        assert_eq!(t.icon, "Geometry_icon");
        let assets = FakeAssets::with(&["Geometry_icon", "Geometry_bg"]);
        let images = g.tile_images(2, &assets).unwrap();
        assert_eq!(images.background.as_deref(), Some("Geometry_bg"));
        let none = g.tile_images(0, &assets).unwrap();
        assert_eq!(none, TileImages::default());
        assert!(g.tile(9).is_none());
    }

    #[test]
    fn select_pushes_children_list() {
        let catalog = samples();
        let mut g = grid(catalog.clone());
        let id = g.select_item(2).unwrap();
        assert_eq!(catalog[id].name(), "Geometry");
        assert_eq!(
            g.navigator().last(),
            Some(&NavEvent::PushList(ListRequest::new(
                "Geometry",
                catalog[id].children().to_vec()
            )))
        );
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut g = grid(samples());
        assert!(g.select_item(4).is_none());
        assert!(g.navigator().events.is_empty());
    }

    #[test]
    fn top_level_leaf_opens_its_screen() {
        let catalog = Arc::new(
            Catalog::from_json_str(r#"[{ "displayName": "About", "screenIdentifier": "About" }]"#)
                .unwrap(),
        );
        let mut g = grid(catalog);
        g.select_item(0);
        assert!(matches!(
            g.navigator().last(),
            Some(NavEvent::OpenScreen { title, .. }) if title == "About"
        ));
    }

    #[test]
    fn search_matches_grandchildren_in_traversal_order() {
        let catalog = abxyz();
        let mut g = grid(catalog.clone());
        let cands: CandidateNames = ["Z", "Y"].into_iter().collect();
        let SearchOutcome::Matches(found) = g.on_search_results(Some(&cands)) else {
            panic!("expected matches");
        };
        let names: Vec<&str> = found.iter().map(|id| catalog[*id].name()).collect();
        assert_eq!(names, vec!["Y", "Z"]);
        assert_eq!(
            g.navigator().last(),
            Some(&NavEvent::PushList(ListRequest::search_results(found)))
        );
    }

    #[test]
    fn search_does_not_match_tiles_themselves() {
        let mut g = grid(abxyz());
        let cands: CandidateNames = ["A"].into_iter().collect();
        assert_eq!(g.on_search_results(Some(&cands)), SearchOutcome::NoMatch);
        assert_eq!(g.navigator().statuses(), 1);
    }

    #[test]
    fn no_match_signals_exactly_once() {
        let mut g = grid(samples());
        g.on_results(Some(["Nothing like this"].into_iter().collect()));
        assert_eq!(
            g.navigator().events,
            vec![NavEvent::Status(Status::NoMatchFound)]
        );
    }

    #[test]
    fn no_search_performed_reports_no_match() {
        let mut g = grid(samples());
        g.on_results(None);
        assert_eq!(g.navigator().statuses(), 1);
        let nav = g.into_navigator();
        assert_eq!(nav.events.len(), 1);
    }
}
