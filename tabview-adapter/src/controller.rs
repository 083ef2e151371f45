use tabview::{Element, Pane, ScrollCommand, TabView, TabViewError, TabViewOptions};

use crate::{Easing, Tween};

/// A framework-neutral controller that wraps a `tabview::TabView` and executes its scroll
/// commands against two real pane offsets.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `measure_title` when the host reports a title layout
/// - `select` on title taps, `on_user_scroll` on content-pane drags
/// - `tick(now_ms)` each frame/timer tick (for animated scrolls and scroll settling)
///
/// After each call, read [`Self::title_offset`] / [`Self::content_offset`] and apply them to
/// the real scroll positions. Animated commands become [`Tween`]s; non-animated commands jump.
/// Content-pane movement is echoed back into the view the way a real scroll view re-fires its
/// scroll handler, which is what drives index-change notifications and title re-centering.
#[derive(Clone, Debug)]
pub struct TabController<C> {
    view: TabView<C>,
    title_offset: u64,
    content_offset: u64,
    title_tween: Option<Tween>,
    content_tween: Option<Tween>,
    /// Duration of animated scrolls started by this controller.
    pub scroll_duration_ms: u64,
    pub easing: Easing,
}

impl<C> TabController<C> {
    pub fn new(
        children: impl IntoIterator<Item = Element<C>>,
        options: TabViewOptions,
    ) -> Result<Self, TabViewError> {
        Ok(Self::from_view(TabView::new(children, options)?))
    }

    pub fn from_view(view: TabView<C>) -> Self {
        Self {
            view,
            title_offset: 0,
            content_offset: 0,
            title_tween: None,
            content_tween: None,
            scroll_duration_ms: 240,
            easing: Easing::SmoothStep,
        }
    }

    pub fn view(&self) -> &TabView<C> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TabView<C> {
        &mut self.view
    }

    pub fn into_view(self) -> TabView<C> {
        self.view
    }

    /// Current title strip scroll offset to apply to the UI.
    pub fn title_offset(&self) -> u64 {
        self.title_offset
    }

    /// Current content pane scroll offset to apply to the UI.
    pub fn content_offset(&self) -> u64 {
        self.content_offset
    }

    pub fn is_animating(&self) -> bool {
        self.title_tween.is_some() || self.content_tween.is_some()
    }

    /// Forwards a title layout measurement; executes the initial mount scroll when it fires.
    pub fn measure_title(&mut self, index: usize, width: u32, now_ms: u64) {
        if let Some(cmd) = self.view.measure_title(index, width) {
            self.apply_command(cmd, now_ms);
        }
    }

    /// Handles a tap on title `index`: pages the content pane and centers the title, animated.
    pub fn select(&mut self, index: usize, now_ms: u64) {
        let selection = self.view.select(index);
        if let Some(cmd) = selection.title_strip {
            self.apply_command(cmd, now_ms);
        }
        if let Some(cmd) = selection.content_pane {
            self.apply_command(cmd, now_ms);
        }
    }

    /// Call this when the user drags the content pane.
    ///
    /// This cancels any in-flight content animation: the gesture's offsets win.
    pub fn on_user_scroll(&mut self, x: u64, now_ms: u64) {
        self.content_tween = None;
        self.content_offset = x;
        self.echo_content_scroll(now_ms);
    }

    /// Advances animations and scroll settling. Returns whether an animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if let Some(tween) = self.content_tween {
            self.content_offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.content_tween = None;
            }
            self.echo_content_scroll(now_ms);
        } else {
            self.view.update_scrolling(now_ms);
        }

        if let Some(tween) = self.title_tween {
            self.title_offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.title_tween = None;
            }
        }

        self.is_animating()
    }

    /// Executes one scroll command from the view.
    ///
    /// Animated commands start (or retarget) a tween on the addressed pane; non-animated
    /// commands jump. A content-pane jump is echoed immediately, matching a scroll view whose
    /// programmatic `scrollTo` still fires the scroll handler.
    pub fn apply_command(&mut self, cmd: ScrollCommand, now_ms: u64) {
        match cmd.pane {
            Pane::TitleStrip => {
                if cmd.animated {
                    Self::animate(
                        &mut self.title_tween,
                        self.title_offset,
                        cmd.x,
                        now_ms,
                        self.scroll_duration_ms,
                        self.easing,
                    );
                } else {
                    self.title_tween = None;
                    self.title_offset = cmd.x;
                }
            }
            Pane::ContentPane => {
                if cmd.animated {
                    Self::animate(
                        &mut self.content_tween,
                        self.content_offset,
                        cmd.x,
                        now_ms,
                        self.scroll_duration_ms,
                        self.easing,
                    );
                } else {
                    self.content_tween = None;
                    self.content_offset = cmd.x;
                    self.echo_content_scroll(now_ms);
                }
            }
        }
    }

    fn animate(
        slot: &mut Option<Tween>,
        from: u64,
        to: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) {
        match slot {
            Some(tween) => tween.retarget(now_ms, to, duration_ms),
            None => *slot = Some(Tween::new(from, to, now_ms, duration_ms, easing)),
        }
    }

    fn echo_content_scroll(&mut self, now_ms: u64) {
        if let Some(cmd) = self.view.on_content_scroll(self.content_offset, now_ms) {
            self.apply_command(cmd, now_ms);
        }
    }
}
