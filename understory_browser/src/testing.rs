// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixtures and recording fakes for unit tests.

use std::collections::HashSet;
use std::sync::Arc;

use understory_catalog::{Catalog, CatalogRecord, ScreenId};

use crate::navigator::{ListRequest, Navigator, Status};
use crate::types::AssetLookup;

/// One call observed by [`RecordingNavigator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NavEvent {
    PushList(ListRequest),
    OpenScreen { screen: ScreenId, title: String },
    Status(Status),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) events: Vec<NavEvent>,
}

impl RecordingNavigator {
    pub(crate) fn statuses(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, NavEvent::Status(_)))
            .count()
    }

    pub(crate) fn last(&self) -> Option<&NavEvent> {
        self.events.last()
    }
}

impl Navigator for RecordingNavigator {
    fn push_list(&mut self, request: ListRequest) {
        self.events.push(NavEvent::PushList(request));
    }

    fn open_screen(&mut self, screen: &ScreenId, title: &str) {
        self.events.push(NavEvent::OpenScreen {
            screen: screen.clone(),
            title: title.to_owned(),
        });
    }

    fn show_status(&mut self, status: Status) {
        self.events.push(NavEvent::Status(status));
    }
}

/// Assets keyed by name; the image is the name itself.
#[derive(Debug, Default)]
pub(crate) struct FakeAssets(HashSet<String>);

impl FakeAssets {
    pub(crate) fn with(names: &[&str]) -> Self {
        Self(names.iter().map(|n| (*n).to_owned()).collect())
    }
}

impl AssetLookup for FakeAssets {
    type Image = String;

    fn image(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// `[A(children=[X,Y]), B(children=[Z])]`.
pub(crate) fn abxyz() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_records(vec![
            CatalogRecord::category(
                "A",
                vec![
                    CatalogRecord::leaf("X", "ScreenX").with_description("About X"),
                    CatalogRecord::leaf("Y", "ScreenY").with_description("About Y"),
                ],
            ),
            CatalogRecord::category("B", vec![CatalogRecord::leaf("Z", "ScreenZ")]),
        ])
        .unwrap(),
    )
}

/// Four categories of samples, the deepest with a nested category.
pub(crate) fn samples() -> Arc<Catalog> {
    Arc::new(
        Catalog::from_records(vec![
            CatalogRecord::category(
                "Maps",
                vec![
                    CatalogRecord::leaf("Display a map", "DisplayMap")
                        .with_description("Show a basemap"),
                    CatalogRecord::leaf("Mobile map (search and route)", "MobileMap")
                        .with_description("Search and route in an offline map"),
                    CatalogRecord::leaf("Change basemap", "ChangeBasemap"),
                    CatalogRecord::leaf("Set initial viewpoint", "InitialViewpoint"),
                ],
            ),
            CatalogRecord::category(
                "Edit data",
                vec![
                    CatalogRecord::leaf("Edit features (connected)", "EditFeaturesOnline"),
                    CatalogRecord::category(
                        "Offline editing",
                        vec![CatalogRecord::leaf("Sync edits", "SyncEdits")],
                    ),
                ],
            ),
            CatalogRecord::category(
                "Geometry",
                vec![CatalogRecord::leaf("Create geometries", "CreateGeometries")],
            ),
            CatalogRecord::category(
                "Route & Navigation",
                vec![CatalogRecord::leaf(
                    "Route around barriers",
                    "RouteAroundBarriers",
                )],
            ),
        ])
        .unwrap(),
    )
}
