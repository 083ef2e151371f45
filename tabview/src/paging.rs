//! Fixed-width paged scrolling: every content page is exactly one viewport wide.

/// Maps a content-pane scroll offset to the nearest page index, clamped to `[0, count - 1]`.
///
/// Rounding rule: round-half-up via integer arithmetic (`(x + page_width / 2) / page_width`).
/// Offsets are non-negative, so this equals round-half-away-from-zero and behaves identically
/// in both scroll directions: an exact half-page offset snaps to the higher index.
///
/// `page_width == 0` (viewport not yet laid out) and `count == 0` both map to index 0.
pub fn index_from_scroll_x(x: u64, page_width: u32, count: usize) -> usize {
    if page_width == 0 || count == 0 {
        return 0;
    }
    let page = page_width as u64;
    let nearest = x.saturating_add(page / 2) / page;
    // Clamp before narrowing: the cast must not wrap on 32-bit targets.
    nearest.min((count - 1) as u64) as usize
}

/// Returns the content-pane scroll offset of page `index`.
pub fn page_offset(index: usize, page_width: u32) -> u64 {
    (index as u64).saturating_mul(page_width as u64)
}
