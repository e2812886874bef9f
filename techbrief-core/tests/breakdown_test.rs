//! Behavioural tests for the expandable breakdown item.
//!
//! Time is simulated with `ManualClock`; no test sleeps.

use techbrief_core::breakdown::{
    BadgeKind, BreakdownItem, CopyFeedback, DetailBody, DetailTab, FeedbackExpired, Indicator,
};
use techbrief_core::clipboard::{ClipboardError, MemoryClipboard};
use techbrief_core::clock::{Clock, ManualClock};
use techbrief_core::content::{BreakdownEntry, RelatedLink, DEFAULT_ADDITIONAL_INFO};
use techbrief_core::timer::TimerQueue;
use techbrief_core::BreakdownList;

// ── Helpers ──────────────────────────────────────────────────────────

fn fire_due(item: &mut BreakdownItem, timers: &mut TimerQueue<FeedbackExpired>, clock: &ManualClock) {
    for event in timers.drain_due(clock.now()) {
        assert_eq!(event.position, item.position());
        item.on_feedback_expired();
    }
}

fn link_titles<'a>(body: &'a DetailBody<'a>) -> Vec<&'a str> {
    match body {
        DetailBody::Links { links, .. } => links.iter().map(|l| l.title.as_str()).collect(),
        other => panic!("expected Links view, got {other:?}"),
    }
}

// ── Initial render ───────────────────────────────────────────────────

#[test]
fn initial_render_is_collapsed() {
    let item = BreakdownItem::new(0, BreakdownEntry::new("X"));
    let view = item.view();
    assert!(!item.is_expanded());
    assert_eq!(view.summary.point, "X");
    assert_eq!(view.summary.indicator, Indicator::Collapsed);
    assert_eq!(view.summary.indicator.glyph(), "▸");
    assert_eq!(view.summary.copy, CopyFeedback::Idle);
    assert!(view.detail.is_none());
}

// ── Toggle parity ────────────────────────────────────────────────────

#[test]
fn toggle_parity() {
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
    item.toggle_expand();
    assert!(item.is_expanded());
    assert_eq!(item.view().summary.indicator.glyph(), "▾");
    item.toggle_expand();
    assert!(!item.is_expanded());
    for _ in 0..5 {
        item.toggle_expand();
    }
    assert!(item.is_expanded());
}

// ── Tab survives collapse ────────────────────────────────────────────

#[test]
fn tab_survives_collapse_expand_cycle() {
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
    item.toggle_expand();
    item.select_tab(DetailTab::Metadata);
    item.toggle_expand();
    assert!(item.view().detail.is_none());
    item.toggle_expand();
    assert_eq!(item.active_tab(), DetailTab::Metadata);
    assert_eq!(item.view().detail.unwrap().active, DetailTab::Metadata);
}

// ── Copy feedback window ─────────────────────────────────────────────

#[test]
fn copy_feedback_clears_after_exactly_2000ms() {
    let clock = ManualClock::new();
    let mut timers = TimerQueue::new();
    let mut clipboard = MemoryClipboard::new();
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));

    item.copy_point_text(&mut clipboard, &mut timers, clock.now()).unwrap();
    assert!(item.copy_feedback_active());
    assert_eq!(item.view().summary.copy.glyph(), "✓");
    assert_eq!(clipboard.contents(), Some("X"));

    clock.advance_ms(1999);
    fire_due(&mut item, &mut timers, &clock);
    assert!(item.copy_feedback_active());

    clock.advance_ms(1);
    fire_due(&mut item, &mut timers, &clock);
    assert!(!item.copy_feedback_active());
    assert_eq!(item.view().summary.copy, CopyFeedback::Idle);
}

#[test]
fn copy_never_toggles_expanded() {
    let clock = ManualClock::new();
    let mut timers = TimerQueue::new();
    let mut clipboard = MemoryClipboard::new();
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));

    item.copy_point_text(&mut clipboard, &mut timers, clock.now()).unwrap();
    assert!(!item.is_expanded());

    item.toggle_expand();
    item.copy_point_text(&mut clipboard, &mut timers, clock.now()).unwrap();
    assert!(item.is_expanded());
}

#[test]
fn rejected_copy_is_surfaced() {
    let clock = ManualClock::new();
    let mut timers = TimerQueue::new();
    let mut clipboard = MemoryClipboard::rejecting(ClipboardError::Rejected("denied".into()));
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));

    let result = item.copy_point_text(&mut clipboard, &mut timers, clock.now());
    assert!(result.is_err());
    assert!(!item.copy_feedback_active());
    assert_eq!(item.copy_feedback(), CopyFeedback::Failed);
}

#[test]
fn unmount_before_expiry_leaves_nothing_scheduled() {
    let clock = ManualClock::new();
    let mut clipboard = MemoryClipboard::new();
    let mut list = BreakdownList::new(vec![BreakdownEntry::new("a"), BreakdownEntry::new("b")]);

    list.copy_point(0, &mut clipboard, clock.now()).unwrap();
    list.copy_point(1, &mut clipboard, clock.now()).unwrap();
    assert_eq!(list.pending_timers(), 2);

    list.teardown();
    assert_eq!(list.pending_timers(), 0);
    clock.advance_ms(5000);
    assert_eq!(list.tick(clock.now()), 0);
}

// ── Rendering order ──────────────────────────────────────────────────

#[test]
fn metadata_rows_in_fixed_order() {
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
    item.toggle_expand();
    item.select_tab(DetailTab::Metadata);
    let view = item.view();
    match view.detail.unwrap().body {
        DetailBody::Metadata { rows } => {
            let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
            assert_eq!(labels, vec!["date Updated", "source", "confidence", "category"]);
        }
        other => panic!("expected Metadata view, got {other:?}"),
    }
}

#[test]
fn links_keep_input_order() {
    let mut entry = BreakdownEntry::new("X");
    entry.metadata.related_links = vec![RelatedLink::new("A", "#a"), RelatedLink::new("B", "#b")];
    let mut item = BreakdownItem::new(0, entry);
    item.toggle_expand();
    item.select_tab(DetailTab::Links);
    let view = item.view();
    let detail = view.detail.unwrap();
    assert_eq!(link_titles(&detail.body), vec!["A", "B"]);
}

// ── End to end ───────────────────────────────────────────────────────

#[test]
fn default_entry_end_to_end() {
    let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));

    item.toggle_expand();
    let view = item.view();
    let detail = view.detail.expect("expanded item shows detail");
    assert_eq!(detail.active, DetailTab::Details);
    match &detail.body {
        DetailBody::Details { info, badges } => {
            assert_eq!(*info, DEFAULT_ADDITIONAL_INFO);
            assert_eq!(badges[0].kind, BadgeKind::Category);
            assert_eq!(badges[0].text, "Infrastructure");
            assert_eq!(badges[1].text, "High Confidence");
        }
        other => panic!("expected Details view, got {other:?}"),
    }

    item.select_tab(DetailTab::Links);
    let view = item.view();
    let detail = view.detail.unwrap();
    assert_eq!(link_titles(&detail.body), vec!["Related Article 1", "Industry Report"]);
}
