//! Pure offset math over measured title widths.
//!
//! Both event sources (content-pane scroll, title taps) go through these functions, so the two
//! panes stay coordinated without any bidirectional binding between them.

use alloc::vec::Vec;

/// Fills `out` with the cumulative offset table for `widths` (clears `out` first).
///
/// `out[0] == 0` and `out[i] == out[i - 1] + widths[i - 1]`: element *i* is the sum of all
/// preceding widths, i.e. where title *i* starts inside the strip.
pub fn cumulative_offsets(widths: &[u32], out: &mut Vec<u64>) {
    out.clear();
    out.reserve_exact(widths.len());
    let mut sum = 0u64;
    for &w in widths {
        out.push(sum);
        sum = sum.saturating_add(w as u64);
    }
}

/// Returns the start offset of title `index` inside the strip (sum of all preceding widths).
///
/// Out-of-range indexes return the total width of the strip.
pub fn offset_of(widths: &[u32], index: usize) -> u64 {
    widths
        .iter()
        .take(index)
        .fold(0u64, |sum, &w| sum.saturating_add(w as u64))
}

/// Returns the strip scroll offset that centers title `index` in a viewport of
/// `viewport_width` pixels: `offset_of(index) - (viewport_width - width[index]) / 2`.
///
/// The inset is signed: a title wider than the viewport scrolls *past* its start offset so
/// that its middle lines up with the viewport's middle. Saturates at zero (a real scroll view
/// clamps negative targets).
///
/// Callers must check that every width is measured before acting on the result; see
/// [`crate::WidthRegistry::is_complete`].
pub fn centered_target(widths: &[u32], index: usize, viewport_width: u32) -> u64 {
    let start = offset_of(widths, index);
    let width = widths.get(index).copied().unwrap_or(0) as u64;
    let viewport = viewport_width as u64;
    if width >= viewport {
        start.saturating_add((width - viewport) / 2)
    } else {
        start.saturating_sub((viewport - width) / 2)
    }
}
