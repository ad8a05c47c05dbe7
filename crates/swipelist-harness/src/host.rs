#![forbid(unsafe_code)]

//! In-memory list host.
//!
//! `SimHost` lays out a shared item vector as a column of fixed-height rows,
//! optionally preceded by header rows, and records every visual change,
//! popup call, forwarded pointer event and scheduled callback. Geometry is
//! derived from the item vector on every query, so removals made by a dismiss
//! callback are visible immediately.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use swipelist_core::animation::Tween;
use swipelist_core::direction::LayoutDirection;
use swipelist_core::event::PointerEvent;
use swipelist_core::geometry::Rect;
use swipelist_runtime::adapters::{ChildSlot, HeaderedList, RecyclerList};
use swipelist_runtime::{
    AnimationDriver, AnimationId, DelayedScheduler, HideToken, RowGeometry, RowVisuals,
    SwipeTargetId, TouchPassthrough, UndoPopup,
};
use web_time::Duration;

/// Stable identity of a simulated item.
pub type ItemId = u64;

/// One item of the simulated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimItem {
    /// Stable id.
    pub id: ItemId,
    /// Display label.
    pub label: String,
}

/// The collection, shared between the host and the dismiss callback.
pub type SharedItems = Rc<RefCell<Vec<SimItem>>>;

/// A simulated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimView {
    /// Header row at a list position.
    Header(usize),
    /// Whole row of an item.
    Row(ItemId),
    /// Swipeable sub-view of an item's row.
    Part(ItemId, SwipeTargetId),
}

/// Which adapter lays out the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Plain list with `headers` header rows.
    List { headers: usize },
    /// Recycling list.
    Recycler,
}

/// Host call of interest to tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// `show_popup(text, button)`.
    ShowPopup { text: String, button: String },
    /// `hide_popup()`.
    HidePopup,
    /// `schedule_delayed(delay, token)` at virtual time `at`.
    Schedule { at: Duration, delay: Duration },
    /// `run_animation(id, tween)`.
    Animate { id: AnimationId, tween: Tween },
}

/// An animation the host is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningAnimation {
    /// Engine id.
    pub id: AnimationId,
    /// Values to report.
    pub tween: Tween,
    /// Virtual time the animation started.
    pub started: Duration,
}

/// A scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    /// Virtual time the token is due.
    pub due: Duration,
    /// Token to deliver.
    pub token: HideToken,
}

/// In-memory [`ListHost`](swipelist_runtime::ListHost).
#[derive(Debug)]
pub struct SimHost {
    items: SharedItems,
    kind: ListKind,
    width: f32,
    row_height: f32,
    layout: LayoutDirection,
    first_visible: usize,
    viewport_rows: usize,
    parts: Option<SwipeTargetId>,
    offsets: HashMap<SimView, f32>,
    opacities: HashMap<SimView, f32>,
    heights: HashMap<SimView, f32>,
    popup: Option<(String, String)>,
    pub(crate) animations: Vec<RunningAnimation>,
    pub(crate) timers: Vec<PendingTimer>,
    pub(crate) now: Duration,
    forwarded: Vec<PointerEvent>,
    claims: usize,
    calls: Vec<HostCall>,
}

impl SimHost {
    /// A host over `items`, 320px wide with 48px rows, all rows laid out.
    #[must_use]
    pub fn new(items: SharedItems, kind: ListKind) -> Self {
        Self {
            items,
            kind,
            width: 320.0,
            row_height: 48.0,
            layout: LayoutDirection::Ltr,
            first_visible: 0,
            viewport_rows: usize::MAX,
            parts: None,
            offsets: HashMap::new(),
            opacities: HashMap::new(),
            heights: HashMap::new(),
            popup: None,
            animations: Vec::new(),
            timers: Vec::new(),
            now: Duration::ZERO,
            forwarded: Vec::new(),
            claims: 0,
            calls: Vec::new(),
        }
    }

    // --- Setup ---

    /// Set the list width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Set the natural row height.
    pub fn set_row_height(&mut self, height: f32) {
        self.row_height = height;
    }

    /// Set the layout direction.
    pub fn set_layout(&mut self, layout: LayoutDirection) {
        self.layout = layout;
    }

    /// Scroll so that list position `first` (headers counted) is at the top,
    /// with `rows` children laid out.
    pub fn scroll_to(&mut self, first: usize, rows: usize) {
        self.first_visible = first;
        self.viewport_rows = rows;
    }

    /// Give every item row a swipeable sub-view under `target`.
    pub fn set_parts(&mut self, target: Option<SwipeTargetId>) {
        self.parts = target;
    }

    // --- Layout ---

    fn headers(&self) -> usize {
        match self.kind {
            ListKind::List { headers } => headers,
            ListKind::Recycler => 0,
        }
    }

    fn children(&self) -> Vec<ChildSlot<SimView>> {
        let items = self.items.borrow();
        let headers = self.headers();
        let total = headers + items.len();
        let end = self.first_visible.saturating_add(self.viewport_rows).min(total);
        let mut y = 0.0;
        (self.first_visible..end)
            .map(|position| {
                let view = match position.checked_sub(headers) {
                    None => SimView::Header(position),
                    Some(index) => SimView::Row(items[index].id),
                };
                let height = self.height_of(view);
                let mut slot = ChildSlot::new(view, Rect::new(0.0, y, self.width, height));
                if let (SimView::Row(id), Some(target)) = (view, self.parts) {
                    slot = slot.with_swipe_view(target, SimView::Part(id, target));
                }
                y += height;
                slot
            })
            .collect()
    }

    fn with_geometry<T>(&self, f: impl FnOnce(&dyn RowGeometry<Row = SimView>) -> T) -> T {
        let count = self.items.borrow().len();
        let children = self.children();
        match self.kind {
            ListKind::List { headers } => {
                let mut list = HeaderedList::new(self.width)
                    .with_headers(headers)
                    .with_layout(self.layout);
                list.set_item_count(count);
                list.layout_children(self.first_visible, children);
                f(&list)
            }
            ListKind::Recycler => {
                let mut list = RecyclerList::new(self.width).with_layout(self.layout);
                list.set_item_count(count);
                list.layout_children(self.first_visible, children);
                f(&list)
            }
        }
    }

    /// Bounds of the row showing item `position`, if laid out.
    #[must_use]
    pub fn row_bounds(&self, position: usize) -> Option<Rect> {
        let row = self.row_at(position)?;
        self.children()
            .into_iter()
            .find(|child| child.row == row)
            .map(|child| child.bounds)
    }

    fn height_of(&self, view: SimView) -> f32 {
        self.heights.get(&view).copied().unwrap_or(self.row_height)
    }

    // --- Inspection ---

    /// The shared item collection.
    #[must_use]
    pub fn items(&self) -> &SharedItems {
        &self.items
    }

    /// Item labels in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.items.borrow().iter().map(|i| i.label.clone()).collect()
    }

    /// Id of the item at `position`.
    #[must_use]
    pub fn item_id(&self, position: usize) -> Option<ItemId> {
        self.items.borrow().get(position).map(|i| i.id)
    }

    /// Horizontal offset of a view (0 when never set).
    #[must_use]
    pub fn offset(&self, view: SimView) -> f32 {
        self.offsets.get(&view).copied().unwrap_or(0.0)
    }

    /// Opacity of a view (1 when never set).
    #[must_use]
    pub fn opacity(&self, view: SimView) -> f32 {
        self.opacities.get(&view).copied().unwrap_or(1.0)
    }

    /// Whether `view` is at rest (no offset, opaque, natural height).
    #[must_use]
    pub fn is_at_rest(&self, view: SimView) -> bool {
        self.offset(view) == 0.0
            && self.opacity(view) == 1.0
            && self.height_of(view) == self.row_height
    }

    /// Popup text and button label, if visible.
    #[must_use]
    pub fn popup(&self) -> Option<(&str, &str)> {
        self.popup
            .as_ref()
            .map(|(text, button)| (text.as_str(), button.as_str()))
    }

    /// Events the list received.
    #[must_use]
    pub fn forwarded(&self) -> &[PointerEvent] {
        &self.forwarded
    }

    /// How often the pointer was claimed from ancestors.
    #[must_use]
    pub fn claims(&self) -> usize {
        self.claims
    }

    /// Host calls in order.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Running animations.
    #[must_use]
    pub fn animations(&self) -> &[RunningAnimation] {
        &self.animations
    }

    /// Scheduled hides not yet delivered.
    #[must_use]
    pub fn timers(&self) -> &[PendingTimer] {
        &self.timers
    }

    /// Virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl RowGeometry for SimHost {
    type Row = SimView;

    fn hit_test(&self, x: f32, y: f32) -> Option<SimView> {
        self.with_geometry(|g| g.hit_test(x, y))
    }

    fn row_count(&self) -> usize {
        self.items.borrow().len()
    }

    fn row_at(&self, position: usize) -> Option<SimView> {
        self.with_geometry(|g| g.row_at(position))
    }

    fn position_of(&self, row: SimView) -> Option<usize> {
        self.with_geometry(|g| g.position_of(row))
    }

    fn swipe_view(&self, row: SimView, target: SwipeTargetId) -> Option<SimView> {
        self.with_geometry(|g| g.swipe_view(row, target))
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.layout
    }
}

impl RowVisuals for SimHost {
    fn set_visual_offset(&mut self, view: SimView, dx: f32) {
        self.offsets.insert(view, dx);
    }

    fn set_opacity(&mut self, view: SimView, alpha: f32) {
        self.opacities.insert(view, alpha);
    }

    fn set_height(&mut self, row: SimView, height: f32) {
        self.heights.insert(row, height);
    }

    fn height(&self, row: SimView) -> f32 {
        self.height_of(row)
    }

    fn restore_height(&mut self, row: SimView, _original: f32) {
        // Rows are content-sized: dropping the override restores them.
        self.heights.remove(&row);
    }
}

impl AnimationDriver for SimHost {
    fn run_animation(&mut self, id: AnimationId, tween: Tween) {
        self.calls.push(HostCall::Animate { id, tween });
        self.animations.push(RunningAnimation {
            id,
            tween,
            started: self.now,
        });
    }
}

impl DelayedScheduler for SimHost {
    fn schedule_delayed(&mut self, delay: Duration, token: HideToken) {
        self.calls.push(HostCall::Schedule {
            at: self.now,
            delay,
        });
        self.timers.push(PendingTimer {
            due: self.now + delay,
            token,
        });
    }
}

impl UndoPopup for SimHost {
    fn show_popup(&mut self, text: &str, button: &str) {
        self.calls.push(HostCall::ShowPopup {
            text: text.to_owned(),
            button: button.to_owned(),
        });
        self.popup = Some((text.to_owned(), button.to_owned()));
    }

    fn hide_popup(&mut self) {
        self.calls.push(HostCall::HidePopup);
        self.popup = None;
    }

    fn is_popup_visible(&self) -> bool {
        self.popup.is_some()
    }
}

impl TouchPassthrough for SimHost {
    fn forward_to_list(&mut self, event: &PointerEvent) -> bool {
        self.forwarded.push(*event);
        true
    }

    fn claim_pointer(&mut self) {
        self.claims += 1;
    }
}
