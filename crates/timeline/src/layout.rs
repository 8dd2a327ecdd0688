// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The timeline layout engine.
//!
//! Converts a roadmap document into pixel geometry for a scrollable,
//! navigable timeline. [`compute_layout`] is a pure function of
//! (document, view-state, viewport, today) and is recomputed on
//! structural changes — data load, viewport resize, filter or expand
//! changes — not on every scroll frame. Scroll and paging mutate only
//! the scroll offset; every recompute is an idempotent, absolute
//! overwrite, so a stale in-flight result is safely superseded by the
//! next one.

use chrono::NaiveDate;

use tr_core::dates::{add_months, month_floor};
use tr_core::{Epic, Initiative, RoadmapDocument, StatusCategory};

use crate::filter::compute_visibility;
use crate::view::ViewState;

/// Months shown in the initial viewport window.
pub const DEFAULT_VISIBLE_MONTHS: u32 = 13;

/// Minimum rendered bar width, so zero/near-zero spans stay visible and
/// clickable.
pub const MIN_BAR_WIDTH: f64 = 6.0;

/// Row heights for the two hierarchy levels.
pub const INITIATIVE_ROW_HEIGHT: f64 = 40.0;
pub const EPIC_ROW_HEIGHT: f64 = 28.0;

const SCROLL_EPSILON: f64 = 0.5;

/// Viewport geometry the layout is computed against.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Available width in pixels.
    pub width: f64,
    /// How many months the window should span at the computed scale.
    pub visible_months: u32,
}

impl Viewport {
    pub fn new(width: f64) -> Viewport {
        Viewport {
            width,
            visible_months: DEFAULT_VISIBLE_MONTHS,
        }
    }
}

/// One calendar month on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTick {
    /// First day of the month.
    pub date: NaiveDate,
    /// Pixel offset of the month's left edge.
    pub offset: f64,
    /// Display label, e.g. "Jan 2026".
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Initiative,
    Epic,
}

/// One slice of a bar's segmented fill, as cumulative percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub category: StatusCategory,
    pub from_pct: u32,
    pub to_pct: u32,
}

/// Pixel geometry of one rendered bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub left: f64,
    pub width: f64,
    /// The start edge is an anchor, not a real date: render a fade.
    pub fade_start: bool,
    /// The end edge is an anchor, not a real date: render a fade.
    pub fade_end: bool,
    pub segments: Vec<Segment>,
}

impl Bar {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// One visible row. A row without a bar is a no-data placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub kind: RowKind,
    pub y: f64,
    pub height: f64,
    pub bar: Option<Bar>,
}

impl Row {
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Complete pixel geometry for the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub months: Vec<MonthTick>,
    pub px_per_day: f64,
    pub total_width: f64,
    pub viewport_width: f64,
    pub rows: Vec<Row>,
    scroll: f64,
    max_scroll: f64,
}

impl TimelineLayout {
    /// The empty state: no grid, no rows, nothing to page. Produced for a
    /// document with zero initiatives without attempting any computation.
    pub fn empty() -> TimelineLayout {
        TimelineLayout {
            months: Vec::new(),
            px_per_day: 0.0,
            total_width: 0.0,
            viewport_width: 0.0,
            rows: Vec::new(),
            scroll: 0.0,
            max_scroll: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current horizontal scroll offset in pixels.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// First visible row for a key of the given kind. An epic shared by
    /// several initiatives anchors lookups at its first visible row.
    pub fn row_of(&self, key: &str, kind: RowKind) -> Option<&Row> {
        self.rows.iter().find(|r| r.kind == kind && r.key == key)
    }

    pub fn can_page_back(&self) -> bool {
        self.scroll > SCROLL_EPSILON
    }

    pub fn can_page_forward(&self) -> bool {
        self.scroll < self.max_scroll - SCROLL_EPSILON
    }

    /// Snap back to the previous month boundary, clamped to the data
    /// bounds.
    pub fn page_back(&mut self) {
        let target = self
            .months
            .iter()
            .map(|m| m.offset)
            .filter(|o| *o < self.scroll - SCROLL_EPSILON)
            .fold(0.0_f64, f64::max);
        self.scroll = clamp(target, 0.0, self.max_scroll);
    }

    /// Snap forward to the next month boundary, clamped to the data
    /// bounds.
    pub fn page_forward(&mut self) {
        let target = self
            .months
            .iter()
            .map(|m| m.offset)
            .find(|o| *o > self.scroll + SCROLL_EPSILON)
            .unwrap_or(self.max_scroll);
        self.scroll = clamp(target, 0.0, self.max_scroll);
    }

    /// Free horizontal drag, with the same clamping as paging.
    pub fn drag_by(&mut self, dx: f64) {
        self.scroll = clamp(self.scroll + dx, 0.0, self.max_scroll);
    }
}

fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Cumulative segment boundaries for a bar's story fill, in the fixed
/// order done, cancelled, in-progress, to-do.
///
/// Each boundary is the running cumulative count as a percentage of the
/// total, rounded half-away-from-zero; the final boundary is the exact
/// total, so it lands on 100 without accumulation error. Rounding the
/// running total (never each segment independently) keeps the boundaries
/// non-decreasing.
pub fn segments(done: u32, cancelled: u32, inprogress: u32, todo: u32) -> Vec<Segment> {
    let total = done + cancelled + inprogress + todo;
    if total == 0 {
        return Vec::new();
    }
    let counts = [
        (StatusCategory::Done, done),
        (StatusCategory::Cancelled, cancelled),
        (StatusCategory::Indeterminate, inprogress),
        (StatusCategory::New, todo),
    ];
    let mut out = Vec::with_capacity(counts.len());
    let mut cumulative = 0u32;
    let mut previous_pct = 0u32;
    for (category, count) in counts {
        cumulative += count;
        let pct = if cumulative == total {
            100
        } else {
            (f64::from(cumulative) * 100.0 / f64::from(total)).round() as u32
        };
        out.push(Segment {
            category,
            from_pct: previous_pct,
            to_pct: pct,
        });
        previous_pct = pct;
    }
    out
}

/// Compute the full timeline geometry.
///
/// Pure: identical inputs produce identical geometry. A document with
/// zero initiatives yields [`TimelineLayout::empty`] with no arithmetic
/// performed at all.
pub fn compute_layout(
    doc: &RoadmapDocument,
    view: &ViewState,
    viewport: Viewport,
    today: NaiveDate,
) -> TimelineLayout {
    if doc.initiatives.is_empty() {
        return TimelineLayout::empty();
    }

    let start = doc.timeline_start;
    let end = doc.timeline_end;

    // Scale: the visible window's worth of months fills the viewport.
    let window_end = add_months(start, viewport.visible_months.max(1) as i32);
    let window_days = days_between(start, window_end).max(1);
    let px_per_day = (viewport.width / window_days as f64).max(0.0);
    let offset = |date: NaiveDate| days_between(start, date) as f64 * px_per_day;

    let mut months = Vec::new();
    let mut month = month_floor(start);
    while month < end {
        months.push(MonthTick {
            date: month,
            offset: offset(month),
            label: month.format("%b %Y").to_string(),
        });
        month = add_months(month, 1);
    }

    let total_width = offset(end);

    // Layout-wide anchor for bars missing their start date: the lesser of
    // the earliest known start and one month before today, kept inside
    // the timeline.
    let earliest_start = doc.epics().filter_map(|e| e.start_date).min();
    let month_before_today = add_months(today, -1);
    let open_start_anchor = clamp_date(
        earliest_start.map_or(month_before_today, |d| d.min(month_before_today)),
        start,
        end,
    );

    let visibility = compute_visibility(doc, view);

    let mut rows: Vec<Row> = Vec::new();
    let mut y = 0.0;
    for (index, initiative) in doc.initiatives.iter().enumerate() {
        if !visibility.initiative(index) {
            continue;
        }
        rows.push(initiative_row(
            initiative,
            y,
            &offset,
            open_start_anchor,
            end,
            total_width,
        ));
        y += INITIATIVE_ROW_HEIGHT;
        for (epic_index, epic) in initiative.epics.iter().enumerate() {
            if !visibility.epic(index, epic_index) {
                continue;
            }
            rows.push(epic_row(epic, y, &offset, open_start_anchor, end, total_width));
            y += EPIC_ROW_HEIGHT;
        }
    }

    let max_scroll = (total_width - viewport.width).max(0.0);
    // Initial window: one month before today, never before the timeline.
    let anchor = clamp_date(month_before_today, start, end);
    let scroll = clamp(offset(anchor), 0.0, max_scroll);

    TimelineLayout {
        months,
        px_per_day,
        total_width,
        viewport_width: viewport.width,
        rows,
        scroll,
        max_scroll,
    }
}

fn clamp_date(date: NaiveDate, lo: NaiveDate, hi: NaiveDate) -> NaiveDate {
    date.max(lo).min(hi)
}

fn initiative_row<F>(
    initiative: &Initiative,
    y: f64,
    offset: &F,
    open_start_anchor: NaiveDate,
    timeline_end: NaiveDate,
    total_width: f64,
) -> Row
where
    F: Fn(NaiveDate) -> f64,
{
    let bar = bar_geometry(
        initiative.start_date,
        initiative.end_date,
        initiative.status_category,
        Vec::new(),
        offset,
        open_start_anchor,
        timeline_end,
        total_width,
    );
    Row {
        key: initiative.key.clone(),
        kind: RowKind::Initiative,
        y,
        height: INITIATIVE_ROW_HEIGHT,
        bar,
    }
}

fn epic_row<F>(
    epic: &Epic,
    y: f64,
    offset: &F,
    open_start_anchor: NaiveDate,
    timeline_end: NaiveDate,
    total_width: f64,
) -> Row
where
    F: Fn(NaiveDate) -> f64,
{
    let fill = segments(
        epic.done_stories,
        epic.cancelled_stories,
        epic.inprogress_stories,
        epic.todo_stories(),
    );
    let bar = bar_geometry(
        epic.start_date,
        epic.end_date,
        epic.status_category,
        fill,
        offset,
        open_start_anchor,
        timeline_end,
        total_width,
    );
    Row {
        key: epic.key.clone(),
        kind: RowKind::Epic,
        y,
        height: EPIC_ROW_HEIGHT,
        bar,
    }
}

/// Project one item's dates into bar geometry.
///
/// Returns None — a placeholder row — only for an item with no dates at
/// all whose category is not in-progress. All degenerate spans are
/// clamped, never rejected.
#[allow(clippy::too_many_arguments)]
fn bar_geometry<F>(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    category: StatusCategory,
    fill: Vec<Segment>,
    offset: &F,
    open_start_anchor: NaiveDate,
    timeline_end: NaiveDate,
    total_width: f64,
) -> Option<Bar>
where
    F: Fn(NaiveDate) -> f64,
{
    let (start, end, fade_start, fade_end) = match (start_date, end_date) {
        (Some(s), Some(e)) => (s, e, false, false),
        (Some(s), None) => (s, timeline_end, false, true),
        (None, Some(e)) => (open_start_anchor, e, true, false),
        (None, None) => {
            if category != StatusCategory::Indeterminate {
                return None;
            }
            (open_start_anchor, timeline_end, true, true)
        }
    };

    let left = clamp(offset(start), 0.0, total_width);
    // An end before the anchor is malformed input: clamp, never throw.
    let right = clamp(offset(end), left, total_width);
    let width = (right - left).max(MIN_BAR_WIDTH);

    Some(Bar {
        left,
        width,
        fade_start,
        fade_end,
        segments: fill,
    })
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
