// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation boundary between browsers and the host UI.
//!
//! Browsers decide *what* to show next; a [`Navigator`] supplied by the host decides
//! *how*. Three things can happen:
//!
//! - a new list browser is requested ([`Navigator::push_list`]),
//! - a leaf's screen is handed to the host's screen factory ([`Navigator::open_screen`]),
//! - a transient status message is shown ([`Navigator::show_status`]).

use understory_catalog::{NodeId, ScreenId};

/// Title of the list pushed for search results.
pub const SEARCH_RESULTS_TITLE: &str = "Search results";

/// Host-side navigation, injected into each browser at construction.
pub trait Navigator {
    /// Push a list browser described by `request`.
    fn push_list(&mut self, request: ListRequest);
    /// Instantiate the screen named `screen` and show it titled `title`.
    ///
    /// `title` is the leaf's display name, which also names the sample's source
    /// folder for a host that attaches a source or readme affordance.
    fn open_screen(&mut self, screen: &ScreenId, title: &str);
    /// Show a transient status message.
    fn show_status(&mut self, status: Status);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn push_list(&mut self, request: ListRequest) {
        (**self).push_list(request);
    }

    fn open_screen(&mut self, screen: &ScreenId, title: &str) {
        (**self).open_screen(screen, title);
    }

    fn show_status(&mut self, status: Status) {
        (**self).show_status(status);
    }
}

/// Everything needed to build a [`ListBrowser`](crate::ListBrowser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    /// Navigation title.
    pub title: String,
    /// Nodes to list, in display order.
    pub scope: Vec<NodeId>,
    /// Set for search results; such lists have no search header.
    pub contains_search_results: bool,
}

impl ListRequest {
    /// A list of `scope` titled `title`.
    pub fn new(title: impl Into<String>, scope: Vec<NodeId>) -> Self {
        Self {
            title: title.into(),
            scope,
            contains_search_results: false,
        }
    }

    /// A list of search results.
    pub fn search_results(scope: Vec<NodeId>) -> Self {
        Self {
            title: SEARCH_RESULTS_TITLE.into(),
            scope,
            contains_search_results: true,
        }
    }
}

/// Transient, user-visible status.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// A search produced no nodes.
    NoMatchFound,
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoMatchFound => f.write_str("No match found"),
        }
    }
}

/// What a browser did with search results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results were found and a results list was pushed.
    Matches(Vec<NodeId>),
    /// Nothing matched and [`Status::NoMatchFound`] was shown.
    NoMatch,
}

/// Push a results list for `found`, or report [`Status::NoMatchFound`] once.
pub(crate) fn deliver_search(navigator: &mut impl Navigator, found: Vec<NodeId>) -> SearchOutcome {
    if found.is_empty() {
        tracing::debug!("search produced no matches");
        navigator.show_status(Status::NoMatchFound);
        return SearchOutcome::NoMatch;
    }
    tracing::debug!(matches = found.len(), "showing search results");
    navigator.push_list(ListRequest::search_results(found.clone()));
    SearchOutcome::Matches(found)
}
