//! Tests for the shared-interval reduction.

use chrono::{DateTime, TimeZone, Utc};
use sync_core::{parse_local, shared_window, SharedWindow, SyncError, Timeframe, UtcOffset};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn frame(offset: &str, date: &str, start: &str, end: &str) -> Timeframe {
    let offset: UtcOffset = offset.parse().unwrap();
    Timeframe::new(
        offset,
        parse_local(date, start).unwrap(),
        parse_local(date, end).unwrap(),
    )
    .unwrap()
}

fn utc(h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, h, min, 0).unwrap()
}

// ── Worked examples ─────────────────────────────────────────────────────────

#[test]
fn two_offset_frames_share_the_expected_window() {
    // 09:00–17:00 at UTC+00:00 and 12:00–20:00 at UTC+02:00 (= 10:00–18:00
    // UTC) share exactly UTC 10:00–17:00.
    let a = frame("+00:00", "16-03-26", "09:00", "17:00");
    let b = frame("+02:00", "16-03-26", "12:00", "20:00");

    let window = shared_window(&[a, b]).unwrap().expect("windows overlap");
    assert_eq!(window.start, utc(10, 0));
    assert_eq!(window.end, utc(17, 0));
    assert_eq!(window.duration_minutes, 420);
}

#[test]
fn disjoint_frames_share_nothing() {
    let a = frame("+00:00", "16-03-26", "00:00", "04:00");
    let b = frame("+00:00", "16-03-26", "05:00", "09:00");

    assert_eq!(shared_window(&[a, b]).unwrap(), None);
}

#[test]
fn touching_boundary_counts_as_no_window() {
    // Latest start equals earliest end: a zero-length "window" is no window.
    let a = frame("+00:00", "16-03-26", "00:00", "04:00");
    let b = frame("+00:00", "16-03-26", "04:00", "09:00");

    assert_eq!(shared_window(&[a, b]).unwrap(), None);
}

#[test]
fn identical_frames_share_their_own_bounds() {
    let a = frame("+05:30", "16-03-26", "09:00", "17:00");
    let frames = vec![a.clone(), a.clone(), a.clone()];

    let window = shared_window(&frames).unwrap().expect("identical frames overlap");
    assert_eq!(window, SharedWindow::from_frame(&a));
}

#[test]
fn three_frames_reduce_to_the_tightest_bounds() {
    let a = frame("+00:00", "16-03-26", "08:00", "16:00");
    let b = frame("+00:00", "16-03-26", "10:00", "18:00");
    let c = frame("+00:00", "16-03-26", "09:00", "12:00");

    let window = shared_window(&[a, b, c]).unwrap().expect("windows overlap");
    assert_eq!(window.start, utc(10, 0));
    assert_eq!(window.end, utc(12, 0));
}

#[test]
fn overnight_frame_participates_via_utc_bounds() {
    // 22:00–06:00 at UTC-05:00 is 03:00–11:00 UTC on 02-03; a plain
    // 08:00–14:00 UTC frame on the same day overlaps it 08:00–11:00.
    let night = frame("-05:00", "01-03-26", "22:00", "06:00");
    let day = frame("+00:00", "02-03-26", "08:00", "14:00");

    let window = shared_window(&[night, day]).unwrap().expect("windows overlap");
    assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap());
    assert_eq!(window.end, Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).unwrap());
}

// ── Preconditions and ordering ──────────────────────────────────────────────

#[test]
fn fewer_than_two_frames_is_a_precondition_violation() {
    assert_eq!(
        shared_window(&[]).unwrap_err(),
        SyncError::InsufficientTimeframes(0)
    );
    let a = frame("+00:00", "16-03-26", "09:00", "17:00");
    assert_eq!(
        shared_window(&[a]).unwrap_err(),
        SyncError::InsufficientTimeframes(1)
    );
}

#[test]
fn insertion_order_does_not_matter() {
    let a = frame("+00:00", "16-03-26", "08:00", "16:00");
    let b = frame("+02:00", "16-03-26", "12:00", "20:00");
    let c = frame("-01:00", "16-03-26", "10:00", "13:00");

    let orderings = [
        vec![a.clone(), b.clone(), c.clone()],
        vec![c.clone(), a.clone(), b.clone()],
        vec![b.clone(), c.clone(), a.clone()],
        vec![c.clone(), b.clone(), a.clone()],
    ];
    let expected = shared_window(&orderings[0]).unwrap();
    for ordering in &orderings[1..] {
        assert_eq!(shared_window(ordering).unwrap(), expected);
    }
}

// ── Pairwise intersection ───────────────────────────────────────────────────

#[test]
fn pairwise_intersect_matches_the_full_reduction() {
    let a = frame("+00:00", "16-03-26", "08:00", "16:00");
    let b = frame("+02:00", "16-03-26", "12:00", "20:00");
    let c = frame("-01:00", "16-03-26", "10:00", "13:00");

    let full = shared_window(&[a.clone(), b.clone(), c.clone()]).unwrap();
    let folded = SharedWindow::from_frame(&a)
        .intersect(&SharedWindow::from_frame(&b))
        .and_then(|w| w.intersect(&SharedWindow::from_frame(&c)));
    assert_eq!(folded, full);
}

#[test]
fn intersect_applies_the_exclusive_boundary_rule() {
    let a = SharedWindow::from_frame(&frame("+00:00", "16-03-26", "00:00", "04:00"));
    let b = SharedWindow::from_frame(&frame("+00:00", "16-03-26", "04:00", "09:00"));
    assert_eq!(a.intersect(&b), None);
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn shared_window_serializes_with_utc_timestamps() {
    let a = frame("+00:00", "16-03-26", "09:00", "17:00");
    let b = frame("+02:00", "16-03-26", "12:00", "20:00");
    let window = shared_window(&[a, b]).unwrap().unwrap();

    let json = serde_json::to_string(&window).unwrap();
    assert!(json.contains("2026-03-16T10:00:00Z"), "{json}");
    assert!(json.contains("\"duration_minutes\":420"), "{json}");

    let back: SharedWindow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, window);
}
