// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tr-timeline: Rendering-side engines for the trellis roadmap.
//!
//! Everything here is a pure function of (document, view-state, viewport,
//! today): the layout engine projects dates to pixels, the filter engine
//! computes cascading row visibility, and the arrow router produces bezier
//! geometry for dependency edges between visible rows. No call in this
//! crate can fail — malformed geometry is clamped and unknown categories
//! fall back to a default appearance.

pub mod arrows;
pub mod filter;
pub mod layout;
pub mod view;

pub use arrows::{route_arrows, Arrow, Point};
pub use filter::{compute_visibility, Visibility};
pub use layout::{
    compute_layout, segments, Bar, MonthTick, Row, RowKind, Segment, TimelineLayout, Viewport,
};
pub use view::{ScopeFilter, ViewState};
