// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Browser: grid and list browsers over an Understory catalog.
//!
//! ## Overview
//!
//! This crate holds the presentation state of a two-level sample browser. It
//! renders nothing and owns no widgets; a host UI reads the state, feeds in events,
//! and performs navigation through a [`Navigator`] it supplies.
//!
//! - [`GridBrowser`]: top-level nodes as responsive square tiles under a search header.
//! - [`ListBrowser`]: a flat scope of nodes with single-row expansion and a one-time
//!   entrance animation.
//! - [`SearchHeaderDelegate`]: how a search header reports suggestions visibility and
//!   search results to either browser.
//! - [`TileLayout`], [`HeaderMetrics`], [`EntranceAnimation`]: tunable policy values
//!   with sensible defaults.
//!
//! ## Flow
//!
//! 1) Load a [`Catalog`](understory_catalog::Catalog) once and share it in an `Arc`.
//! 2) Build a [`GridBrowser`]; selecting a tile asks the navigator to push a list of
//!    that node's children as a [`ListRequest`].
//! 3) Build a [`ListBrowser`] from that request; selecting a leaf row hands its
//!    [`ScreenId`](understory_catalog::ScreenId) to [`Navigator::open_screen`].
//! 4) Search results arrive through [`SearchHeaderDelegate::on_results`]. Matches push
//!    a results list; no matches show [`Status::NoMatchFound`].
//!
//! ## Search depth
//!
//! The grid matches candidates against the *children* of its tiles, while a list
//! matches against its own rows.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use kurbo::Size;
//! use understory_browser::{GridBrowser, ListBrowser, ListRequest, Navigator, Status};
//! use understory_catalog::{Catalog, ScreenId};
//!
//! #[derive(Default)]
//! struct Host {
//!     pushed: Vec<ListRequest>,
//!     opened: Vec<String>,
//! }
//!
//! impl Navigator for Host {
//!     fn push_list(&mut self, request: ListRequest) {
//!         self.pushed.push(request);
//!     }
//!     fn open_screen(&mut self, screen: &ScreenId, _title: &str) {
//!         self.opened.push(screen.to_string());
//!     }
//!     fn show_status(&mut self, _status: Status) {}
//! }
//!
//! let catalog = Arc::new(Catalog::from_json_str(r#"[
//!     { "displayName": "Maps", "children": [
//!         { "displayName": "Display a map", "screenIdentifier": "DisplayMap" }
//!     ] }
//! ]"#).unwrap());
//!
//! let mut grid = GridBrowser::new(catalog.clone(), Host::default());
//! assert_eq!(grid.set_container_size(Size::new(640.0, 480.0)), Size::new(200.0, 200.0));
//! grid.select_item(0);
//!
//! let request = grid.navigator_mut().pushed.pop().unwrap();
//! let mut list = ListBrowser::new(catalog, request, Host::default());
//! assert_eq!(list.title(), "Maps");
//! list.select_row(0);
//! assert_eq!(list.expanded_index(), Some(0));
//! assert_eq!(list.navigator().opened, ["DisplayMap"]);
//! ```

pub mod entrance;
pub mod grid;
pub mod header;
pub mod layout;
pub mod list;
pub mod navigator;
pub mod types;

#[cfg(test)]
mod testing;

pub use entrance::{EntranceAnimation, EntranceLatch, RowAnimation};
pub use grid::GridBrowser;
pub use header::{HeaderMetrics, SearchHeader, SearchHeaderDelegate, SuggestionsState};
pub use layout::TileLayout;
pub use list::ListBrowser;
pub use navigator::{ListRequest, Navigator, SEARCH_RESULTS_TITLE, SearchOutcome, Status};
pub use types::{AssetLookup, Row, RowRefresh, Tile, TileImages};
