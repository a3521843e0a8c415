// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search a catalog from the grid and from a list.
//!
//! A toy suggestion engine stands in for the real search collaborator: it proposes
//! every sample (leaf) whose name contains all query words, case-insensitively. The grid
//! then resolves the proposals against the samples inside its tiles, while a list
//! resolves them against its own rows.
//!
//! Run:
//! - `cargo run -p understory_demos --example search_catalog -- route`
//! - `cargo run -p understory_demos --example search_catalog -- --catalog my.json map`

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use understory_browser::{
    GridBrowser, ListBrowser, ListRequest, Navigator, SearchHeaderDelegate, Status,
};
use understory_catalog::{CandidateNames, Catalog, NodeKinds, ScreenId};

const BUNDLED_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/catalog.json");

#[derive(Parser, Debug)]
struct Args {
    /// Catalog JSON; defaults to the bundled sample catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Query words.
    #[arg(required = true)]
    query: Vec<String>,
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

fn suggest(catalog: &Catalog, query: &[String]) -> CandidateNames {
    let words: Vec<String> = query.iter().map(|w| w.to_lowercase()).collect();
    catalog
        .iter_kinds(NodeKinds::LEAF)
        .map(|(_, n)| n.name())
        .filter(|name| {
            let name = name.to_lowercase();
            words.iter().all(|w| name.contains(w.as_str()))
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let path = args.catalog.unwrap_or_else(|| PathBuf::from(BUNDLED_CATALOG));
    let catalog = Arc::new(Catalog::open(&path)?);
    let candidates = suggest(&catalog, &args.query);
    println!("Query {:?} proposes {} names", args.query.join(" "), candidates.len());

    println!("== Grid search ==");
    let mut grid = GridBrowser::new(catalog.clone(), PrintNavigator::default());
    grid.on_will_show_suggestions();
    grid.on_will_hide_suggestions();
    grid.on_results(Some(candidates.clone()));
    if let Some(request) = grid.navigator_mut().pending.pop() {
        let results = ListBrowser::new(catalog.clone(), request, PrintNavigator::default());
        for id in results.scope() {
            println!("  {}", catalog.breadcrumb(*id));
        }
    }

    println!("== List search in each category ==");
    for (i, root) in catalog.roots().iter().enumerate() {
        grid.select_item(i);
        let Some(request) = grid.navigator_mut().pending.pop() else {
            continue;
        };
        let mut list = ListBrowser::new(catalog.clone(), request, PrintNavigator::default());
        println!("  in {:?}:", catalog[*root].name());
        list.on_results(Some(candidates.clone()));
    }
    Ok(())
}
