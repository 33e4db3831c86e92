use crate::*;

use alloc::vec::Vec;
use alloc::{format, vec};
use swipefeed::{FeedItem, FeedOptions, ListCommands, ScrollRequest, ViewToken};

const PAGE: u32 = 1_000;

fn items(n: usize) -> Vec<FeedItem> {
    (0..n)
        .map(|i| FeedItem::new(format!("https://cdn.example.com/clip-{i}.mp4")))
        .collect()
}

#[test]
fn viewability_applies_the_coverage_threshold() {
    let v = Viewability::new(PAGE, PAGE, 70);
    let mut out = Vec::new();

    v.compute(5, 0, &mut out);
    assert_eq!(out, vec![0]);

    // 70% of page 0 and 30% of page 1 are on screen.
    v.compute(5, 300, &mut out);
    assert_eq!(out, vec![0]);

    // Mid-swipe: neither page reaches the threshold.
    v.compute(5, 500, &mut out);
    assert!(out.is_empty());

    v.compute(5, 700, &mut out);
    assert_eq!(out, vec![1]);

    v.compute(0, 0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn viewability_reports_only_changes() {
    let mut v = Viewability::new(PAGE, PAGE, 70);
    assert_eq!(v.update(3, 0), Some(vec![ViewToken::new(0)]));
    assert_eq!(v.update(3, 100), None);
    assert_eq!(v.update(3, 500), Some(Vec::new()));
    assert_eq!(v.update(3, 1_000), Some(vec![ViewToken::new(1)]));
    assert_eq!(v.viewable(), &[1]);
}

#[test]
fn tween_lands_on_target() {
    let t = Tween::new(0, 1_000, 100, 200, Easing::EaseOutCubic);
    assert_eq!(t.sample(100), 0);
    assert_eq!(t.sample(300), 1_000);
    assert!(t.sample(200) > 500);
    assert!(t.is_done(300));
    assert!(!t.is_done(299));

    let linear = Tween::new(1_000, 0, 0, 100, Easing::Linear);
    assert_eq!(linear.sample(50), 500);
}

#[test]
fn pager_snaps_to_the_nearest_page() {
    let mut pager = Pager::new(4, PAGE, 70);
    assert_eq!(pager.take_viewable_changes(), vec![vec![ViewToken::new(0)]]);

    pager.on_drag(400, 0);
    assert_eq!(pager.take_viewable_changes(), vec![Vec::new()]);
    assert_eq!(pager.on_release(10), 0);

    let mut now = 10;
    while pager.is_animating() {
        now += 16;
        pager.tick(now);
    }
    assert_eq!(pager.offset(), 0);
    assert_eq!(pager.take_viewable_changes(), vec![vec![ViewToken::new(0)]]);

    pager.on_drag(2_600, now);
    assert_eq!(pager.on_release(now), 3);
    pager.tick(now + 1_000);
    assert_eq!(pager.offset(), 3_000);
    assert_eq!(pager.viewable(), &[3]);
}

#[test]
fn pager_scroll_commands() {
    let mut pager = Pager::new(3, PAGE, 70);
    pager.scroll_to_index(2, false);
    assert_eq!(pager.offset(), 2_000);

    pager.scroll_to_index(7, false);
    assert_eq!(pager.offset(), 2_000);

    pager.scroll_to_index(0, true);
    assert!(pager.is_animating());
    assert_eq!(pager.offset(), 2_000);
    pager.tick(0);
    pager.tick(DEFAULT_SCROLL_DURATION_MS);
    assert_eq!(pager.offset(), 0);
    assert!(!pager.is_animating());
}

#[test]
fn pager_keeps_page_on_resize() {
    let mut pager = Pager::new(5, PAGE, 70);
    pager.scroll_to_index(3, false);
    pager.set_page_size(800);
    assert_eq!(pager.offset(), 2_400);
    assert_eq!(pager.nearest_index(), 3);

    pager.set_count(2);
    assert_eq!(pager.offset(), 800);
}

#[test]
fn driver_starts_on_the_first_page() {
    let driver = Driver::new(items(3), FeedOptions::new(), PAGE, 0);
    assert_eq!(driver.feed().current_index(), Some(0));
    assert!(!driver.feed().playback_state(0).unwrap().is_paused);
    assert!(driver.feed().overlay_visible());
}

#[test]
fn driver_auto_advances_after_video_end() {
    let mut driver = Driver::new(items(3), FeedOptions::new().with_go_to_next(true), PAGE, 0);
    assert_eq!(
        driver.video_ended(0),
        Some(ScrollRequest {
            index: 1,
            animated: true
        })
    );
    assert_eq!(driver.feed().current_index(), Some(0));

    let mut now = 1_000;
    while driver.pager().is_animating() {
        driver.tick(now);
        now += 16;
    }
    assert_eq!(driver.pager().offset(), 1_000);
    assert_eq!(driver.feed().current_index(), Some(1));
    assert!(driver.feed().playback_state(0).unwrap().is_paused);
    assert!(!driver.feed().playback_state(1).unwrap().is_paused);
}

#[test]
fn driver_mid_swipe_keeps_current_index() {
    let mut driver = Driver::new(items(3), FeedOptions::new(), PAGE, 0);
    driver.on_drag(500, 10);
    assert_eq!(driver.feed().current_index(), Some(0));

    driver.on_drag(800, 20);
    assert_eq!(driver.feed().current_index(), Some(1));
    assert_eq!(driver.on_release(30), 1);
    driver.tick(30 + DEFAULT_SCROLL_DURATION_MS);
    assert_eq!(driver.pager().offset(), 1_000);
    assert!(!driver.feed().playback_state(1).unwrap().is_paused);
}

#[test]
fn driver_classifies_taps_and_long_presses() {
    let mut driver = Driver::new(items(2), FeedOptions::new(), PAGE, 0);
    driver.tick(500);
    assert!(!driver.feed().overlay_visible());

    driver.press_in(1_000);
    driver.tick(1_100);
    assert_eq!(driver.press_release(1_150), Some(true));
    assert!(driver.feed().muted());
    assert!(driver.feed().overlay_visible());
    assert!(!driver.feed().playback_state(0).unwrap().is_paused);

    driver.press_in(2_000);
    driver.tick(2_499);
    assert!(!driver.feed().playback_state(0).unwrap().is_paused);
    driver.tick(2_500);
    assert!(driver.feed().playback_state(0).unwrap().is_paused);
    assert_eq!(driver.press_release(3_000), None);
    assert!(!driver.feed().playback_state(0).unwrap().is_paused);
    assert!(driver.feed().muted());
}

#[test]
fn driver_drag_cancels_a_held_press() {
    let mut driver = Driver::new(items(3), FeedOptions::new(), PAGE, 0);
    driver.press_in(0);
    driver.tick(600);
    assert!(driver.feed().playback_state(0).unwrap().is_paused);

    driver.on_drag(900, 700);
    assert_eq!(driver.press_release(800), None);
    assert_eq!(driver.feed().current_index(), Some(1));
    assert!(driver.feed().playback_state(0).unwrap().is_paused);
    assert!(!driver.feed().playback_state(1).unwrap().is_paused);
}

#[test]
fn driver_set_items_resyncs_pager() {
    let mut driver = Driver::new(items(5), FeedOptions::new(), PAGE, 0);
    driver.on_drag(4_000, 10);
    assert_eq!(driver.feed().current_index(), Some(4));

    driver.set_items(items(2));
    assert_eq!(driver.pager().offset(), 1_000);
    assert_eq!(driver.feed().current_index(), Some(1));
}
