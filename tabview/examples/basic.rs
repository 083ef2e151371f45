// Example: minimal usage — measure titles, mount, tap, swipe.
use tabview::{Element, TabView, TabViewOptions};

fn main() {
    let mut view = TabView::new(
        [
            Element::tab("Home", "home pane"),
            Element::tab("Feed", "feed pane"),
            Element::tab("Profile", "profile pane"),
        ],
        TabViewOptions::new(100).with_index(1),
    )
    .unwrap();

    // Layout measurements arrive from the host, in any order. The mount scroll fires only
    // once the last width lands.
    assert!(view.measure_title(2, 70).is_none());
    assert!(view.measure_title(0, 50).is_none());
    let mount_cmd = view.measure_title(1, 60);
    println!("mount scroll: {mount_cmd:?}");
    println!("phase={:?} visible={}", view.phase(), view.content_visible());

    // Tapping a title pages the content pane and centers the title.
    let selection = view.select(2);
    println!("tap 2: {selection:?}");

    // A swipe delivers content offsets; the view answers with strip re-centering commands.
    for x in [40u64, 90, 140, 200] {
        let cmd = view.on_content_scroll(x, 0);
        println!("scroll x={x}: index={} strip={cmd:?}", view.active_index());
    }
}
