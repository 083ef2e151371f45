use crate::*;

use std::sync::{Arc, Mutex};
use std::vec::Vec;

use tabview::{Element, Phase, TabViewOptions};

fn controller_with(options: TabViewOptions) -> TabController<&'static str> {
    TabController::new(
        [
            Element::tab("Home", "home pane"),
            Element::tab("Feed", "feed pane"),
            Element::tab("Profile", "profile pane"),
        ],
        options,
    )
    .unwrap()
}

fn mount(c: &mut TabController<&'static str>, widths: &[u32], now_ms: u64) {
    for (i, &w) in widths.iter().enumerate() {
        c.measure_title(i, w, now_ms);
    }
    assert!(c.view().is_mounted());
}

#[test]
fn tween_samples_monotonically_and_ends_on_target() {
    let tween = Tween::new(0, 200, 0, 100, Easing::SmoothStep);
    let mut last = 0u64;
    for now_ms in (0..=120).step_by(10) {
        let off = tween.sample(now_ms);
        assert!(off >= last);
        last = off;
    }
    assert_eq!(tween.sample(100), 200);
    assert!(tween.is_done(100));
    assert!(!tween.is_done(99));
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut tween = Tween::new(0, 200, 0, 100, Easing::Linear);
    let mid = tween.sample(50);
    tween.retarget(50, 400, 100);
    assert_eq!(tween.from, mid);
    assert_eq!(tween.to, 400);
    assert_eq!(tween.sample(150), 400);
}

#[test]
fn zero_duration_tween_is_clamped_to_one_ms() {
    let tween = Tween::new(0, 50, 10, 0, Easing::Linear);
    assert!(!tween.is_done(10));
    assert_eq!(tween.sample(11), 50);
}

#[test]
fn mount_jumps_content_pane_without_animation() {
    let mut c = controller_with(TabViewOptions::new(100).with_index(2));
    mount(&mut c, &[50, 60, 70], 0);

    // The initial scroll is a jump: no tween on the content pane, offset already in place.
    assert_eq!(c.content_offset(), 200);
    // The echoed scroll event re-centers the title strip (animated).
    assert!(c.is_animating());

    let mut now = 0u64;
    while c.tick(now) {
        now += 16;
    }
    assert_eq!(c.title_offset(), 95);
    assert_eq!(c.content_offset(), 200);
}

#[test]
fn select_settles_both_panes_and_reports_each_crossed_index_once() {
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let mut c = controller_with(TabViewOptions::new(100).with_on_index_change(Some({
        let seen = Arc::clone(&seen);
        move |i| seen.lock().unwrap().push(i)
    })));
    mount(&mut c, &[50, 60, 70], 0);

    c.select(2, 0);
    assert!(c.is_animating());

    let mut now = 0u64;
    while c.tick(now) {
        now += 16;
    }

    // Content pane on page 2, title strip centered on title 2:
    // offset_of(2) == 110, inset == (100 - 70) / 2 == 15.
    assert_eq!(c.content_offset(), 200);
    assert_eq!(c.title_offset(), 95);
    assert_eq!(c.view().active_index(), 2);
    // The animated page sweep crosses page 1 on the way to 2; each index is reported exactly
    // once, and the target index exactly once at settle.
    assert_eq!(&*seen.lock().unwrap(), &[1, 2]);
}

#[test]
fn select_scroll_settles_back_to_mounted_phase() {
    let mut c = controller_with(TabViewOptions::new(100).with_scroll_settle_delay_ms(150));
    mount(&mut c, &[50, 60, 70], 0);

    c.select(1, 0);
    let mut now = 0u64;
    while c.tick(now) {
        now += 16;
    }
    assert_eq!(c.view().phase(), Phase::Active);

    // Once the animation is over, ticks without scroll events debounce back to Mounted.
    for _ in 0..20 {
        now += 16;
        c.tick(now);
    }
    assert_eq!(c.view().phase(), Phase::Mounted);
}

#[test]
fn user_drag_cancels_content_animation() {
    let mut c = controller_with(TabViewOptions::new(100));
    mount(&mut c, &[50, 60, 70], 0);

    c.select(2, 0);
    c.tick(16);
    let mid = c.content_offset();
    assert!(mid < 200);

    // The user grabs the pane mid-animation and drags back toward page 0.
    c.on_user_scroll(40, 32);
    assert_eq!(c.content_offset(), 40);

    let mut now = 32u64;
    while c.tick(now) {
        now += 16;
    }
    // The drag's offsets won: the content pane never resumed toward page 2.
    assert_eq!(c.content_offset(), 40);
    assert_eq!(c.view().active_index(), 0);
}

#[test]
fn redundant_select_retargets_instead_of_stacking() {
    let mut c = controller_with(TabViewOptions::new(100));
    mount(&mut c, &[50, 60, 70], 0);

    c.select(2, 0);
    c.tick(16);
    c.select(1, 32);

    let mut now = 32u64;
    while c.tick(now) {
        now += 16;
    }
    // The later command won; targets are absolute, so nothing accumulated.
    assert_eq!(c.content_offset(), 100);
    assert_eq!(c.title_offset(), 30);
    assert_eq!(c.view().active_index(), 1);
}

#[test]
fn drag_recenters_title_strip_continuously() {
    let mut c = controller_with(TabViewOptions::new(100));
    mount(&mut c, &[50, 60, 70], 0);
    let mut now = 0u64;
    while c.tick(now) {
        now += 16;
    }

    for x in [20u64, 60, 90, 110, 160, 200] {
        now += 16;
        c.on_user_scroll(x, now);
        c.tick(now);
    }
    let mut last = c.title_offset();
    while c.tick(now) {
        now += 16;
        assert!(c.title_offset() >= last);
        last = c.title_offset();
    }
    assert_eq!(c.title_offset(), 95);
    assert_eq!(c.view().active_index(), 2);
}
