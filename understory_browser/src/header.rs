// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The search header and its observer interface.
//!
//! ## Overview
//!
//! A search header sits above a browser's content. While the user types it shows a
//! table of suggestions and grows to [`HeaderMetrics::expanded_height`]; otherwise it
//! shrinks back to [`HeaderMetrics::shrunk_height`]. When the user commits a search,
//! an external fuzzy-search collaborator produces [`CandidateNames`] and reports them.
//!
//! The header reports to its browser through [`SearchHeaderDelegate`]. Both browsers
//! implement it; the header widget is handed the browser at construction and calls
//! the delegate directly, with no global notification broadcast.
//!
//! ## States
//!
//! ```text
//! Idle --will show--> SuggestionsVisible --will hide--> Idle
//! ```
//!
//! Repeated show or hide notifications are idempotent.

use kurbo::Size;
use understory_catalog::CandidateNames;

/// Observer of a search header.
pub trait SearchHeaderDelegate {
    /// The header is about to show its suggestions.
    fn on_will_show_suggestions(&mut self);
    /// The header is about to hide its suggestions.
    fn on_will_hide_suggestions(&mut self);
    /// The search collaborator finished. `None` means no search was performed.
    ///
    /// May arrive at any later time; a browser that is no longer on screen can
    /// simply be dropped instead of being notified.
    fn on_results(&mut self, candidates: Option<CandidateNames>);
}

/// Whether the suggestions table is showing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SuggestionsState {
    /// Suggestions hidden; header shrunk.
    #[default]
    Idle,
    /// Suggestions visible; header expanded.
    SuggestionsVisible,
}

/// Header heights for both states.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeaderMetrics {
    /// Height with suggestions hidden.
    pub shrunk_height: f64,
    /// Height with suggestions visible.
    pub expanded_height: f64,
}

impl Default for HeaderMetrics {
    fn default() -> Self {
        Self {
            shrunk_height: 60.0,
            expanded_height: 260.0,
        }
    }
}

/// Presentation state of a search header.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SearchHeader {
    metrics: HeaderMetrics,
    state: SuggestionsState,
}

impl SearchHeader {
    /// Create an idle header.
    pub fn new(metrics: HeaderMetrics) -> Self {
        Self {
            metrics,
            state: SuggestionsState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> SuggestionsState {
        self.state
    }

    /// Returns true while suggestions are visible.
    pub fn is_showing_suggestions(&self) -> bool {
        self.state == SuggestionsState::SuggestionsVisible
    }

    /// Move to [`SuggestionsState::SuggestionsVisible`]. Returns true if the state changed.
    pub fn show_suggestions(&mut self) -> bool {
        self.transition(SuggestionsState::SuggestionsVisible)
    }

    /// Move to [`SuggestionsState::Idle`]. Returns true if the state changed.
    pub fn hide_suggestions(&mut self) -> bool {
        self.transition(SuggestionsState::Idle)
    }

    fn transition(&mut self, to: SuggestionsState) -> bool {
        if self.state == to {
            return false;
        }
        tracing::debug!(from = ?self.state, ?to, "search header transition");
        self.state = to;
        true
    }

    /// Height for the current state.
    pub fn height(&self) -> f64 {
        match self.state {
            SuggestionsState::Idle => self.metrics.shrunk_height,
            SuggestionsState::SuggestionsVisible => self.metrics.expanded_height,
        }
    }

    /// Header size in a container of `width`; the header always spans the container.
    pub fn size(&self, width: f64) -> Size {
        Size::new(width, self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_shrunk() {
        let h = SearchHeader::new(HeaderMetrics::default());
        assert_eq!(h.state(), SuggestionsState::Idle);
        assert!(!h.is_showing_suggestions());
        assert_eq!(h.size(320.0), Size::new(320.0, 60.0));
    }

    #[test]
    fn show_and_hide_round_trip() {
        let mut h = SearchHeader::new(HeaderMetrics {
            shrunk_height: 44.0,
            expanded_height: 200.0,
        });
        assert!(h.show_suggestions());
        assert!(h.is_showing_suggestions());
        assert_eq!(h.height(), 200.0);
        assert!(h.hide_suggestions());
        assert_eq!(h.state(), SuggestionsState::Idle);
        assert_eq!(h.height(), 44.0);
    }

    #[test]
    fn repeated_notifications_are_idempotent() {
        let mut h = SearchHeader::default();
        assert!(!h.hide_suggestions());
        assert!(h.show_suggestions());
        assert!(!h.show_suggestions());
        assert_eq!(h.state(), SuggestionsState::SuggestionsVisible);
    }
}
