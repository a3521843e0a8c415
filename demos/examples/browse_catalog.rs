// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browse a catalog.
//!
//! Loads a catalog, lays out the grid at the given width and at a narrow width,
//! drills into a tile, plays the list entrance once, and selects a sample.
//!
//! Run:
//! - `cargo run -p understory_demos --example browse_catalog`
//! - `cargo run -p understory_demos --example browse_catalog -- path/to/catalog.json --tile 2`

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_browser::{GridBrowser, ListBrowser, ListRequest, Navigator, Status};
use understory_catalog::{Catalog, ScreenId};

const BUNDLED_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/catalog.json");

#[derive(Parser, Debug)]
struct Args {
    /// Catalog JSON; defaults to the bundled sample catalog.
    catalog: Option<PathBuf>,
    /// Container width in points.
    #[arg(long, default_value_t = 640.0)]
    width: f64,
    /// Tile to open.
    #[arg(long, default_value_t = 0)]
    tile: usize,
}

#[derive(Debug, Default)]
struct PrintNavigator {
    pending: Vec<ListRequest>,
}

impl Navigator for PrintNavigator {
    fn push_list(&mut self, request: ListRequest) {
        println!("  -> push list {:?} ({} rows)", request.title, request.scope.len());
        self.pending.push(request);
    }

    fn open_screen(&mut self, screen: &ScreenId, title: &str) {
        println!("  -> open screen {screen} titled {title:?}");
    }

    fn show_status(&mut self, status: Status) {
        println!("  -> status: {status}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let path = args.catalog.unwrap_or_else(|| PathBuf::from(BUNDLED_CATALOG));
    let catalog = Arc::new(Catalog::open(&path)?);
    println!("Loaded {:?} from {}", catalog, path.display());

    let mut grid = GridBrowser::new(catalog.clone(), PrintNavigator::default());
    for width in [args.width, 300.0] {
        let tile = grid.set_container_size(Size::new(width, 800.0));
        println!("== Grid at width {width}: tile {}x{} ==", tile.width, tile.height);
        for i in 0..grid.item_count() {
            if let (Some(t), Some(r)) = (grid.tile(i), grid.tile_rect(i)) {
                println!("  [{i}] {:<20} {:?} icon={} bg={}", t.title, r, t.icon, t.background);
            }
        }
    }

    println!("== Select tile {} ==", args.tile);
    grid.select_item(args.tile);
    let Some(request) = grid.navigator_mut().pending.pop() else {
        println!("nothing to list");
        return Ok(());
    };

    let mut list = ListBrowser::new(catalog, request, PrintNavigator::default());
    println!("== List {:?} ==", list.title());
    for appearance in 0..2 {
        match list.will_appear(0..list.row_count(), args.width) {
            Some(plan) => {
                for a in plan {
                    println!("  animate row {} after {:?}", a.row, a.delay);
                }
            }
            None => println!("  appearance {appearance}: no animation"),
        }
    }

    let refresh = list.toggle_expand(0, true);
    println!("  info on row 0 refreshes rows {:?}", refresh.rows());
    for i in 0..list.row_count() {
        if let Some(row) = list.row(i) {
            println!("  {:<32} {}", row.title, row.detail.unwrap_or(""));
        }
    }
    list.select_row(0);
    Ok(())
}
