// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Catalog: an immutable content tree with name-based lookup.
//!
//! ## Overview
//!
//! A catalog is the table of contents of a sample browser: categories holding
//! samples, each sample naming the screen that demonstrates it. The tree is loaded
//! once from a static nested list of records and never changes afterwards.
//!
//! - [`Catalog`]: pre-order node store, addressed by [`NodeId`].
//! - [`Node`]: display name, description, and a [`NodeKind`] that is either a
//!   category (with children) or a leaf (with a [`ScreenId`]).
//! - [`loader`]: JSON records in, validated catalog out, or a [`CatalogLoadError`].
//! - [`search`]: resolve externally produced [`CandidateNames`] to nodes one level
//!   below a scope.
//!
//! This crate does no presentation. See `understory_browser` for the grid and list
//! browsers built on top of it.
//!
//! ## Example
//!
//! ```
//! use understory_catalog::{CandidateNames, Catalog, SearchDepth};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     { "displayName": "Maps", "children": [
//!         { "displayName": "Display a map", "screenIdentifier": "DisplayMap" },
//!         { "displayName": "Mobile map (search and route)", "screenIdentifier": "MobileMap" }
//!     ] },
//!     { "displayName": "Geometry", "children": [
//!         { "displayName": "Create geometries", "screenIdentifier": "CreateGeometries" }
//!     ] }
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.len(), 5);
//!
//! // The top level searches one level down: the samples inside each category.
//! let candidates: CandidateNames = ["Create geometries", "Display a map"].into_iter().collect();
//! let found = catalog.resolve(&candidates, catalog.roots(), SearchDepth::Grandchildren);
//! let names: Vec<_> = found.iter().map(|id| catalog[*id].name()).collect();
//! assert_eq!(names, ["Display a map", "Create geometries"]);
//! ```

pub mod catalog;
pub mod loader;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use loader::{CatalogLoadError, CatalogRecord, load_catalog};
pub use search::{CandidateNames, SearchDepth, resolve};
pub use types::{Node, NodeId, NodeKind, NodeKinds, ScreenId};
