use alloc::string::String;

/// One of the two scrollable regions the view keeps in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pane {
    /// The horizontally scrollable row of tab titles.
    TitleStrip,
    /// The horizontally paged scroll view holding each tab's body content.
    ContentPane,
}

/// An absolute scroll instruction for the UI layer.
///
/// Targets are always computed from scratch (never incrementally), so issuing the same command
/// repeatedly is safe: a redundant command re-applies the position it already has, and a newer
/// command simply overtakes an older one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub pane: Pane,
    /// Absolute horizontal scroll offset, in pixels.
    pub x: u64,
    pub animated: bool,
}

/// Lifecycle phase of a [`crate::TabView`].
///
/// `Unmounted` has no variant: it is the state before construction and after drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Title layout is incomplete; content should render invisibly.
    Mounting,
    /// Layout is complete and the initial scroll has been issued.
    Mounted,
    /// A scroll gesture or animation is in flight.
    Active,
}

/// One tab: a title and an opaque content payload.
///
/// Identity is positional. The sequence order passed to [`crate::TabView::new`] is the swipe
/// order and must not change while the view is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem<C> {
    pub title: String,
    pub content: C,
}

impl<C> TabItem<C> {
    pub fn new(title: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// A child handed to the container by the host layer.
///
/// Host element trees are dynamically tagged; only the tab-item capability is recognized here.
/// Anything else is a configuration error surfaced at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element<C> {
    Tab(TabItem<C>),
    /// Any other host node, identified by its type tag.
    Foreign(&'static str),
}

impl<C> Element<C> {
    pub fn tab(title: impl Into<String>, content: C) -> Self {
        Self::Tab(TabItem::new(title, content))
    }
}

impl<C> From<TabItem<C>> for Element<C> {
    fn from(item: TabItem<C>) -> Self {
        Self::Tab(item)
    }
}

/// Construction-time configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TabViewError {
    /// A child element is not a recognized tab item. Fatal and immediate: the view refuses to
    /// construct rather than render a broken tab strip.
    #[error("child at position {index} is not a tab item (found `{found}`)")]
    NotATabItem { index: usize, found: &'static str },
}
