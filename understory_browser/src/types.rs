// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation types shared by the browsers: tiles, rows, refresh sets, and assets.

use understory_catalog::NodeId;

/// Resolve image assets by name.
///
/// The grid expects two images per top-level node, `"<name>_icon"` and
/// `"<name>_bg"`. A missing image is `None`, never an error.
pub trait AssetLookup {
    /// Host image type.
    type Image;
    /// Returns the image named `name`, if the host has it.
    fn image(&self, name: &str) -> Option<Self::Image>;
}

/// What a grid tile shows for a top-level node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// The node behind the tile.
    pub node: NodeId,
    /// Display name, upper-cased.
    pub title: String,
    /// Icon asset name, `"<name>_icon"`.
    pub icon: String,
    /// Background asset name, `"<name>_bg"`.
    pub background: String,
}

impl Tile {
    pub(crate) fn new(node: NodeId, name: &str) -> Self {
        Self {
            node,
            title: name.to_uppercase(),
            icon: format!("{name}_icon"),
            background: format!("{name}_bg"),
        }
    }

    /// Resolve both images; either may be missing.
    pub fn images<A: AssetLookup>(&self, assets: &A) -> TileImages<A::Image> {
        TileImages {
            icon: assets.image(&self.icon),
            background: assets.image(&self.background),
        }
    }
}

/// Resolved tile images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileImages<I> {
    /// Icon, if present.
    pub icon: Option<I>,
    /// Background, if present.
    pub background: Option<I>,
}

/// What a list row shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    /// The node behind the row.
    pub node: NodeId,
    /// Display name.
    pub title: &'a str,
    /// Description; present only while the row is expanded.
    pub detail: Option<&'a str>,
}

/// Rows whose presentation changed after [`ListBrowser::toggle_expand`](crate::ListBrowser::toggle_expand).
///
/// Only these rows need to be refreshed; all others are untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowRefresh {
    /// Nothing changed.
    Unchanged,
    /// The given row collapsed; no row is expanded now.
    Collapsed(usize),
    /// `current` expanded, collapsing `previous` if there was one.
    Expanded {
        /// Previously expanded row.
        previous: Option<usize>,
        /// Newly expanded row.
        current: usize,
    },
}

impl RowRefresh {
    /// Rows to refresh, in ascending order.
    pub fn rows(&self) -> Vec<usize> {
        match *self {
            Self::Unchanged => Vec::new(),
            Self::Collapsed(row) => vec![row],
            Self::Expanded {
                previous: None,
                current,
            } => vec![current],
            Self::Expanded {
                previous: Some(previous),
                current,
            } => {
                let mut rows = vec![previous, current];
                rows.sort_unstable();
                rows
            }
        }
    }
}
