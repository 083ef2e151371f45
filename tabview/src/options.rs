use alloc::string::String;
use alloc::sync::Arc;

/// A callback fired whenever the derived active tab index changes due to scrolling or tapping.
pub type OnIndexChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Customizes title rendering.
///
/// Receives the raw title text and whether the tab is currently active; returns the text the
/// UI layer should display. The default renders the title unchanged.
pub type RenderTitleCallback = Arc<dyn Fn(&str, bool) -> String + Send + Sync>;

/// Configuration for [`crate::TabView`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct TabViewOptions {
    /// Controlled active-tab index at mount time. The view never mutates the caller's copy; it
    /// only reports derived changes through `on_index_change`.
    pub index: usize,

    /// Fired whenever the derived active index changes.
    pub on_index_change: Option<OnIndexChangeCallback>,

    /// Optional custom title rendering hook.
    pub render_title: Option<RenderTitleCallback>,

    /// Width of the content pane viewport, which is also the page width (every page is exactly
    /// one viewport wide) and the title strip's viewport for centering.
    pub viewport_width: u32,

    /// Debounce window after the last scroll event before the view leaves the `Active` phase.
    pub scroll_settle_delay_ms: u64,
}

impl TabViewOptions {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            index: 0,
            on_index_change: None,
            render_title: None,
            viewport_width,
            scroll_settle_delay_ms: 150,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_render_title(
        mut self,
        render_title: Option<impl Fn(&str, bool) -> String + Send + Sync + 'static>,
    ) -> Self {
        self.render_title = render_title.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: u32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_scroll_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_settle_delay_ms = delay_ms;
        self
    }
}

impl Clone for TabViewOptions {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            on_index_change: self.on_index_change.clone(),
            render_title: self.render_title.clone(),
            viewport_width: self.viewport_width,
            scroll_settle_delay_ms: self.scroll_settle_delay_ms,
        }
    }
}

impl core::fmt::Debug for TabViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TabViewOptions")
            .field("index", &self.index)
            .field("viewport_width", &self.viewport_width)
            .field("scroll_settle_delay_ms", &self.scroll_settle_delay_ms)
            .finish_non_exhaustive()
    }
}
