// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive square tiling for the grid browser.
//!
//! ## Policy
//!
//! Try [`TileLayout::preferred_columns`] columns. If the resulting tile is narrower
//! than [`TileLayout::min_tile_width`], fall back to [`TileLayout::fallback_columns`].
//! There are no other breakpoints. Tiles are always square.
//!
//! The tile side for `n` columns in a container of width `w` is
//!
//! ```text
//! (w - insets.left - insets.right - (n - 1) * gutter) / n
//! ```
//!
//! which, with the default insets and gutter of 10, is `(w - (n + 1) * 10) / n`.
//!
//! Sizing is a pure function of the container width; callers recompute it on every
//! container size change (for example on rotation).

use kurbo::{Insets, Point, Rect, Size};

/// Tiling parameters for the grid browser.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileLayout {
    /// Columns attempted first.
    pub preferred_columns: usize,
    /// Columns used when the preferred tile would be too narrow.
    pub fallback_columns: usize,
    /// Space between adjacent tiles, horizontally and vertically.
    pub gutter: f64,
    /// Narrowest acceptable tile for the preferred column count.
    pub min_tile_width: f64,
    /// Space around the tile section. `x0`/`x1` are left/right, `y0`/`y1` top/bottom.
    pub section_insets: Insets,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            preferred_columns: 3,
            fallback_columns: 2,
            gutter: 10.0,
            min_tile_width: 150.0,
            section_insets: Insets::new(10.0, 5.0, 10.0, 10.0),
        }
    }
}

impl TileLayout {
    fn side_for(&self, width: f64, columns: usize) -> f64 {
        let columns = columns.max(1);
        #[allow(clippy::cast_precision_loss, reason = "Column counts are tiny.")]
        let n = columns as f64;
        let spare =
            width - self.section_insets.x0 - self.section_insets.x1 - (n - 1.0) * self.gutter;
        (spare / n).max(0.0)
    }

    /// Number of columns used for a container `width`.
    pub fn columns(&self, width: f64) -> usize {
        if self.side_for(width, self.preferred_columns) < self.min_tile_width {
            self.fallback_columns.max(1)
        } else {
            self.preferred_columns.max(1)
        }
    }

    /// Square tile size for a container.
    pub fn item_size(&self, container: Size) -> Size {
        let side = self.side_for(container.width, self.columns(container.width));
        Size::new(side, side)
    }

    /// Rectangle of tile `index`, laid out row-major below a header of `header_height`.
    pub fn tile_rect(&self, index: usize, container: Size, header_height: f64) -> Rect {
        let columns = self.columns(container.width);
        let side = self.item_size(container).width;
        #[allow(
            clippy::cast_precision_loss,
            reason = "Tile indices are far below 2^52."
        )]
        let (col, row) = ((index % columns) as f64, (index / columns) as f64);
        let origin = Point::new(
            self.section_insets.x0 + col * (side + self.gutter),
            header_height + self.section_insets.y0 + row * (side + self.gutter),
        );
        Rect::from_origin_size(origin, Size::new(side, side))
    }

    /// Total height of `count` tiles below a header of `header_height`, insets included.
    pub fn content_height(&self, count: usize, container: Size, header_height: f64) -> f64 {
        if count == 0 {
            return header_height;
        }
        let columns = self.columns(container.width);
        let side = self.item_size(container).width;
        let rows = count.div_ceil(columns);
        #[allow(
            clippy::cast_precision_loss,
            reason = "Row counts are far below 2^52."
        )]
        let rows = rows as f64;
        header_height
            + self.section_insets.y0
            + rows * side
            + (rows - 1.0) * self.gutter
            + self.section_insets.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_container_uses_three_columns() {
        let l = TileLayout::default();
        assert_eq!(l.columns(640.0), 3);
        assert_eq!(l.item_size(Size::new(640.0, 480.0)), Size::new(200.0, 200.0));
    }

    #[test]
    fn narrow_container_falls_back_to_two_columns() {
        let l = TileLayout::default();
        assert_eq!(l.columns(300.0), 2);
        assert_eq!(l.item_size(Size::new(300.0, 800.0)), Size::new(135.0, 135.0));
    }

    #[test]
    fn threshold_is_inclusive() {
        let l = TileLayout::default();
        // (490 - 40) / 3 == 150 exactly.
        assert_eq!(l.columns(490.0), 3);
        assert_eq!(l.columns(489.0), 2);
    }

    #[test]
    fn sizing_is_idempotent_and_square() {
        let l = TileLayout::default();
        for w in [120.0, 300.0, 414.0, 640.0, 1024.0] {
            let a = l.item_size(Size::new(w, 100.0));
            let b = l.item_size(Size::new(w, 900.0));
            assert_eq!(a, b);
            assert_eq!(a.width, a.height);
        }
    }

    #[test]
    fn degenerate_width_clamps_to_zero() {
        let l = TileLayout::default();
        assert_eq!(l.item_size(Size::new(10.0, 10.0)), Size::ZERO);
    }

    #[test]
    fn tile_rects_are_row_major_below_header() {
        let l = TileLayout::default();
        let c = Size::new(640.0, 480.0);
        assert_eq!(l.tile_rect(0, c, 60.0), Rect::new(10.0, 65.0, 210.0, 265.0));
        assert_eq!(l.tile_rect(2, c, 60.0), Rect::new(430.0, 65.0, 630.0, 265.0));
        assert_eq!(l.tile_rect(3, c, 60.0), Rect::new(10.0, 275.0, 210.0, 475.0));
    }

    #[test]
    fn content_height_counts_rows() {
        let l = TileLayout::default();
        let c = Size::new(640.0, 480.0);
        assert_eq!(l.content_height(0, c, 60.0), 60.0);
        // One row: header + top inset + tile + bottom inset.
        assert_eq!(l.content_height(3, c, 60.0), 60.0 + 5.0 + 200.0 + 10.0);
        // Two rows add a tile and a gutter.
        assert_eq!(l.content_height(4, c, 60.0), 60.0 + 5.0 + 410.0 + 10.0);
    }
}
