use alloc::string::String;
use alloc::vec::Vec;

use crate::registry::WidthRegistry;
use crate::{Element, Pane, Phase, ScrollCommand, TabItem, TabViewError, TabViewOptions, paging};

/// The scroll commands produced by a title tap.
///
/// The content pane pages to the tapped index while the title strip centers the tapped title,
/// both animated. The strip command is withheld while title layout is incomplete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub title_strip: Option<ScrollCommand>,
    pub content_pane: Option<ScrollCommand>,
}

/// A headless tab view container.
///
/// This type composes the width registry, offset calculator, and page mapper into one state
/// machine that keeps the title strip and the content pane mutually synchronized. It holds no
/// UI objects: events flow in through [`Self::measure_title`], [`Self::on_content_scroll`],
/// and [`Self::select`], and scroll instructions flow back out as [`ScrollCommand`]s.
///
/// Lifecycle: `Mounting` until every title width is measured, then exactly one non-animated
/// initial scroll is issued and the view is `Mounted` for the rest of its lifetime; scroll
/// activity toggles `Active`. All state lives for one mount and is rebuilt from scratch by
/// constructing a new view.
#[derive(Clone, Debug)]
pub struct TabView<C> {
    options: TabViewOptions,
    items: Vec<TabItem<C>>,
    registry: WidthRegistry,
    mounted: bool,
    active_index: usize,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,
}

impl<C> TabView<C> {
    /// Creates a tab view from an ordered child sequence.
    ///
    /// Fails fast on the first child that is not a tab item; misconfiguration is fatal rather
    /// than rendering a broken tab strip. An empty child list mounts immediately (there is
    /// nothing to measure).
    pub fn new(
        children: impl IntoIterator<Item = Element<C>>,
        options: TabViewOptions,
    ) -> Result<Self, TabViewError> {
        let mut items = Vec::new();
        for (index, child) in children.into_iter().enumerate() {
            match child {
                Element::Tab(item) => items.push(item),
                Element::Foreign(found) => {
                    return Err(TabViewError::NotATabItem { index, found });
                }
            }
        }

        let count = items.len();
        tdebug!(
            count,
            index = options.index,
            viewport_width = options.viewport_width,
            "TabView::new"
        );
        let active_index = options.index.min(count.saturating_sub(1));
        Ok(Self {
            options,
            registry: WidthRegistry::new(count),
            mounted: count == 0,
            active_index,
            is_scrolling: false,
            last_scroll_event_ms: None,
            items,
        })
    }

    pub fn options(&self) -> &TabViewOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn registry(&self) -> &WidthRegistry {
        &self.registry
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn viewport_width(&self) -> u32 {
        self.options.viewport_width
    }

    pub fn set_viewport_width(&mut self, viewport_width: u32) {
        self.options.viewport_width = viewport_width;
    }

    /// True once every title width has been measured.
    pub fn is_layout_complete(&self) -> bool {
        self.registry.is_complete()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// False until the initial scroll has been applied: callers should render the whole view
    /// at opacity 0 until then, so an unscrolled layout never flashes on screen.
    pub fn content_visible(&self) -> bool {
        self.mounted
    }

    pub fn phase(&self) -> Phase {
        if !self.mounted {
            Phase::Mounting
        } else if self.is_scrolling {
            Phase::Active
        } else {
            Phase::Mounted
        }
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| item.title.as_str())
    }

    /// Returns the display text for title `index`, passed through the `render_title` hook with
    /// the tab's current active state. The default renders the title unchanged.
    pub fn rendered_title(&self, index: usize) -> Option<String> {
        let item = self.items.get(index)?;
        let is_active = index == self.active_index;
        Some(match &self.options.render_title {
            Some(render) => render(&item.title, is_active),
            None => item.title.clone(),
        })
    }

    pub fn content(&self, index: usize) -> Option<&C> {
        self.items.get(index).map(|item| &item.content)
    }

    /// Records a title layout measurement reported by the host.
    ///
    /// Measurements may arrive in any order and may overwrite earlier values. On the single
    /// `Mounting -> Mounted` transition (the registry just became complete), this returns the
    /// one non-animated content-pane scroll that puts the initially selected page in view; the
    /// mounted flag then stays latched, so every later call returns `None`.
    #[must_use = "the mount transition emits a scroll command that must be applied"]
    pub fn measure_title(&mut self, index: usize, width: u32) -> Option<ScrollCommand> {
        self.registry.record(index, width);

        if self.mounted || !self.registry.is_complete() {
            return None;
        }
        self.mounted = true;
        let x = paging::page_offset(self.active_index, self.options.viewport_width);
        tdebug!(index = self.active_index, x, "TabView mounted");
        Some(ScrollCommand {
            pane: Pane::ContentPane,
            x,
            animated: false,
        })
    }

    /// Handles a tap on title `index`.
    ///
    /// Does not change the active index by itself: the content pane's scroll toward the target
    /// page re-enters [`Self::on_content_scroll`], which derives the new index and notifies.
    /// Re-deriving the same target there is a no-op, so the settle event causes no visible jump.
    pub fn select(&self, index: usize) -> Selection {
        if self.items.is_empty() {
            return Selection {
                title_strip: None,
                content_pane: None,
            };
        }
        let index = index.min(self.items.len() - 1);
        ttrace!(index, "TabView::select");

        Selection {
            title_strip: self.title_strip_command(index),
            content_pane: Some(ScrollCommand {
                pane: Pane::ContentPane,
                x: paging::page_offset(index, self.options.viewport_width),
                animated: true,
            }),
        }
    }

    /// Handles a content-pane scroll update (continuous during a swipe, and the settling
    /// events after a programmatic scroll).
    ///
    /// Recomputes the nearest page index, fires `on_index_change` when (and only when) the
    /// derived index actually changed, and returns the title-strip command that re-centers the
    /// active title. The command target is always computed absolutely from the offset table,
    /// so high-frequency redundant events accumulate no error.
    pub fn on_content_scroll(&mut self, x: u64, now_ms: u64) -> Option<ScrollCommand> {
        if self.items.is_empty() {
            return None;
        }
        self.is_scrolling = true;
        self.last_scroll_event_ms = Some(now_ms);

        let index = paging::index_from_scroll_x(x, self.options.viewport_width, self.items.len());
        ttrace!(x, index, "TabView::on_content_scroll");
        if index != self.active_index {
            self.active_index = index;
            if let Some(cb) = &self.options.on_index_change {
                cb(index);
            }
        }

        self.title_strip_command(index)
    }

    /// Debounced `Active -> Mounted` transition: call periodically (or on a scroll-end event)
    /// with the current time to settle the scrolling state.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.scroll_settle_delay_ms {
            self.is_scrolling = false;
            self.last_scroll_event_ms = None;
        }
    }

    fn title_strip_command(&self, index: usize) -> Option<ScrollCommand> {
        let x = self
            .registry
            .centered_target(index, self.options.viewport_width)?;
        Some(ScrollCommand {
            pane: Pane::TitleStrip,
            x,
            animated: true,
        })
    }
}
