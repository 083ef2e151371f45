// Example: drive a TabController through a mount, a tap, and an interrupting drag.
use tabview::{Element, TabViewOptions};
use tabview_adapter::TabController;

fn main() {
    let mut c = TabController::new(
        (0..4).map(|i| Element::tab(format!("Tab {i}"), i)),
        TabViewOptions::new(320).with_on_index_change(Some(|i| println!("  index -> {i}"))),
    )
    .unwrap();

    let mut now = 0u64;
    for (i, w) in [120u32, 90, 150, 110].into_iter().enumerate() {
        c.measure_title(i, w, now);
    }
    println!(
        "mounted: content={} title={}",
        c.content_offset(),
        c.title_offset()
    );

    // Tap the last tab and let the animation run.
    c.select(3, now);
    while c.tick(now) {
        now += 16;
    }
    println!(
        "after tap: content={} title={}",
        c.content_offset(),
        c.title_offset()
    );

    // Drag back toward page 1; the gesture cancels any in-flight animation.
    for x in [900u64, 700, 500, 340, 320] {
        now += 16;
        c.on_user_scroll(x, now);
        c.tick(now);
    }
    while c.tick(now) {
        now += 16;
    }
    println!(
        "after drag: content={} title={} index={}",
        c.content_offset(),
        c.title_offset(),
        c.view().active_index()
    );
}
