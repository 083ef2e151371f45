use alloc::vec::Vec;

use crate::offset;

/// Measured pixel widths of the rendered tab titles, stored positionally.
///
/// Layout measurements arrive asynchronously and in no particular order (tab 3 may report
/// before tab 1). Each entry defaults to unmeasured and is overwritten whenever the host
/// reports a new layout for that index. There is no removal: the tab order is fixed for the
/// registry's lifetime.
#[derive(Clone, Debug, Default)]
pub struct WidthRegistry {
    widths: Vec<u32>,
    measured: Vec<bool>,
    measured_count: usize,
}

impl WidthRegistry {
    pub fn new(count: usize) -> Self {
        Self {
            widths: alloc::vec![0; count],
            measured: alloc::vec![false; count],
            measured_count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.widths.len()
    }

    /// Sets entry `index` to `width` and returns the full width sequence.
    ///
    /// Out-of-range indexes are ignored. Recording the same `(index, width)` twice leaves the
    /// registry unchanged after the second call.
    pub fn record(&mut self, index: usize, width: u32) -> &[u32] {
        if index < self.widths.len() {
            ttrace!(index, width, "WidthRegistry::record");
            self.widths[index] = width;
            if !self.measured[index] {
                self.measured[index] = true;
                self.measured_count += 1;
            }
        }
        &self.widths
    }

    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Returns the measured width of title `index`, or `None` while it is still unmeasured.
    pub fn width(&self, index: usize) -> Option<u32> {
        (self.is_measured(index)).then(|| self.widths[index])
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    /// True once every entry has been measured ("layout calculated").
    ///
    /// Offset computation is only valid from that point on. Vacuously true for zero tabs.
    pub fn is_complete(&self) -> bool {
        self.measured_count == self.widths.len()
    }

    /// Fills `out` with the cumulative offset table (clears `out` first).
    pub fn cumulative_offsets(&self, out: &mut Vec<u64>) {
        offset::cumulative_offsets(&self.widths, out);
    }

    /// Start offset of title `index` inside the strip.
    pub fn offset_of(&self, index: usize) -> u64 {
        offset::offset_of(&self.widths, index)
    }

    /// Strip offset that centers title `index` in a viewport of `viewport_width` pixels.
    ///
    /// Returns `None` while the registry is incomplete: without every width the cumulative
    /// offsets are meaningless and no scroll command may be issued.
    pub fn centered_target(&self, index: usize, viewport_width: u32) -> Option<u64> {
        self.is_complete()
            .then(|| offset::centered_target(&self.widths, index, viewport_width))
    }
}
