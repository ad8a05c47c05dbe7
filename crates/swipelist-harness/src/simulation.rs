#![forbid(unsafe_code)]

//! Frame-stepped driver for a [`SwipeList`] over a [`SimHost`].
//!
//! Animations advance in [`FRAME`] steps; each step reports the current tween
//! value to the engine and ends animations whose duration has elapsed.
//! Hide tokens are delivered in due order when the clock passes them.

use std::cell::RefCell;
use std::rc::Rc;

use swipelist_core::direction::LayoutDirection;
use swipelist_core::event::PointerEvent;
use swipelist_runtime::{SwipeList, SwipeListConfig, SwipeTargetId, UndoAction};
use web_time::{Duration, Instant};

use crate::host::{ListKind, SharedItems, SimHost, SimItem};
use crate::probe::{UndoEvent, UndoProbe};

/// One simulated frame.
pub const FRAME: Duration = Duration::from_millis(16);

/// Upper bound on frames [`Simulation::settle`] will step.
const MAX_SETTLE_FRAMES: usize = 10_000;

/// Builder for a [`Simulation`].
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    items: usize,
    kind: ListKind,
    config: SwipeListConfig,
    width: f32,
    layout: LayoutDirection,
    parts: Option<SwipeTargetId>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            items: 10,
            kind: ListKind::List { headers: 0 },
            config: SwipeListConfig::default(),
            width: 320.0,
            layout: LayoutDirection::Ltr,
            parts: None,
        }
    }
}

impl SimulationBuilder {
    /// Number of items, labelled `Item 0`, `Item 1`, ...
    #[must_use]
    pub fn items(mut self, n: usize) -> Self {
        self.items = n;
        self
    }

    /// Adapter flavor.
    #[must_use]
    pub fn kind(mut self, kind: ListKind) -> Self {
        self.kind = kind;
        self
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(mut self, config: SwipeListConfig) -> Self {
        self.config = config;
        self
    }

    /// List width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Layout direction.
    #[must_use]
    pub fn layout(mut self, layout: LayoutDirection) -> Self {
        self.layout = layout;
        self
    }

    /// Give every row a swipeable sub-view under `target`.
    #[must_use]
    pub fn parts(mut self, target: SwipeTargetId) -> Self {
        self.parts = Some(target);
        self
    }

    /// Build the simulation. No dismiss callback is installed.
    #[must_use]
    pub fn build(self) -> Simulation {
        let items: SharedItems = Rc::new(RefCell::new(
            (0..self.items as u64)
                .map(|id| SimItem {
                    id,
                    label: format!("Item {id}"),
                })
                .collect(),
        ));
        let mut host = SimHost::new(Rc::clone(&items), self.kind);
        host.set_width(self.width);
        host.set_layout(self.layout);
        host.set_parts(self.parts);
        Simulation {
            list: SwipeList::new(host, self.config),
            items,
            probe: UndoProbe::new(),
            epoch: Instant::now(),
        }
    }
}

/// A swipe list wired to a simulated host.
pub struct Simulation {
    list: SwipeList<SimHost>,
    items: SharedItems,
    probe: UndoProbe,
    epoch: Instant,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Start building a simulation.
    #[must_use]
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    // ========================================================================
    // Dismiss callbacks
    // ========================================================================

    /// Remove dismissed items and return an undoable re-inserting them.
    pub fn install_undoable_removal(&mut self) {
        let items = Rc::clone(&self.items);
        let probe = self.probe.clone();
        self.list.set_dismiss_callback(move |position| {
            let item = items.borrow_mut().remove(position);
            probe.push(UndoEvent::Dismissed {
                position,
                label: item.label.clone(),
            });
            let label = item.label.clone();
            let items = Rc::clone(&items);
            Some(probe.action_with(&label, move || {
                let mut items = items.borrow_mut();
                let at = position.min(items.len());
                items.insert(at, item);
            }))
        });
    }

    /// Remove dismissed items without offering undo.
    pub fn install_permanent_removal(&mut self) {
        let items = Rc::clone(&self.items);
        let probe = self.probe.clone();
        self.list.set_dismiss_callback(move |position| {
            let item = items.borrow_mut().remove(position);
            probe.push(UndoEvent::Dismissed {
                position,
                label: item.label,
            });
            None
        });
    }

    /// Remove dismissed items; the undoables carry no title.
    pub fn install_untitled_removal(&mut self) {
        let items = Rc::clone(&self.items);
        let probe = self.probe.clone();
        self.list.set_dismiss_callback(move |position| {
            let item = items.borrow_mut().remove(position);
            let label = item.label.clone();
            probe.push(UndoEvent::Dismissed {
                position,
                label: label.clone(),
            });
            let probe = probe.clone();
            Some(
                UndoAction::new(move || probe.push(UndoEvent::Undone { label }))
                    .boxed(),
            )
        });
    }

    // ========================================================================
    // Clock
    // ========================================================================

    /// Advance the clock by `dt`, one frame at a time.
    pub fn advance(&mut self, dt: Duration) {
        let mut left = dt;
        while !left.is_zero() {
            let step = left.min(FRAME);
            left -= step;
            self.step(step);
        }
    }

    /// Advance until no animation is running.
    ///
    /// # Panics
    ///
    /// Panics if animations are still running after a very long time.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.host().animations.is_empty() {
                return;
            }
            self.step(FRAME);
        }
        panic!("animations did not settle");
    }

    fn step(&mut self, dt: Duration) {
        let now = {
            let host = self.list.host_mut();
            host.now += dt;
            host.now
        };

        let running = self.list.host().animations.clone();
        for anim in running {
            let elapsed = now.saturating_sub(anim.started);
            self.list
                .on_animation_frame(anim.id, anim.tween.value_at(elapsed));
            if anim.tween.is_complete(elapsed) {
                self.list.host_mut().animations.retain(|a| a.id != anim.id);
                self.list.on_animation_end(anim.id);
            }
        }

        loop {
            let due = {
                let timers = &mut self.list.host_mut().timers;
                let next = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= now)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                next.map(|i| timers.remove(i))
            };
            match due {
                Some(timer) => self.list.on_hide_timer(timer.token),
                None => break,
            }
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.host().now
    }

    fn instant(&self) -> Instant {
        self.epoch + self.now()
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    /// Press at `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        let event = PointerEvent::down(x, y, self.instant());
        self.list.handle_pointer(event)
    }

    /// Move the pointer to `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        let event = PointerEvent::moved(x, y, self.instant());
        self.list.handle_pointer(event)
    }

    /// Release at `(x, y)`.
    pub fn release(&mut self, x: f32, y: f32) -> bool {
        let event = PointerEvent::up(x, y, self.instant());
        self.list.handle_pointer(event)
    }

    /// Cancel at `(x, y)`.
    pub fn cancel(&mut self, x: f32, y: f32) -> bool {
        let event = PointerEvent::cancel(x, y, self.instant());
        self.list.handle_pointer(event)
    }

    /// Start point for gestures on item `position`: the row's vertical
    /// center, a quarter of the width in from the left.
    ///
    /// # Panics
    ///
    /// Panics if the row is not laid out.
    #[must_use]
    pub fn row_point(&self, position: usize) -> (f32, f32) {
        let bounds = self
            .host()
            .row_bounds(position)
            .unwrap_or_else(|| panic!("row {position} is not laid out"));
        (bounds.x + bounds.width / 4.0, bounds.y + bounds.height / 2.0)
    }

    /// Drag item `position` horizontally by `dx` in `steps` moves spread over
    /// `duration`, without releasing. Returns the final pointer position.
    pub fn drag(&mut self, position: usize, dx: f32, steps: u32, duration: Duration) -> (f32, f32) {
        let (x0, y) = self.row_point(position);
        self.press(x0, y);
        let steps = steps.max(1);
        let per_step = duration / steps;
        for i in 1..=steps {
            self.advance(per_step);
            self.move_to(x0 + dx * i as f32 / steps as f32, y);
        }
        (x0 + dx, y)
    }

    /// Slow drag by `dx` and release: a distance swipe.
    pub fn swipe(&mut self, position: usize, dx: f32) {
        let (x, y) = self.drag(position, dx, 20, Duration::from_millis(800));
        // Hold still so the release carries no fling velocity.
        self.advance(Duration::from_millis(200));
        self.move_to(x, y);
        self.release(x, y);
    }

    /// Quick drag by `dx` over 60ms and release: a fling.
    pub fn fling(&mut self, position: usize, dx: f32) {
        let (x, y) = self.drag(position, dx, 6, Duration::from_millis(60));
        self.release(x, y);
    }

    // ========================================================================
    // Engine shortcuts
    // ========================================================================

    /// The engine.
    #[must_use]
    pub fn list(&self) -> &SwipeList<SimHost> {
        &self.list
    }

    /// The engine, mutably.
    pub fn list_mut(&mut self) -> &mut SwipeList<SimHost> {
        &mut self.list
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &SimHost {
        self.list.host()
    }

    /// The undo probe shared with installed callbacks.
    #[must_use]
    pub fn probe(&self) -> &UndoProbe {
        &self.probe
    }

    /// Item labels in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.host().labels()
    }

    /// Popup text and button, if visible.
    #[must_use]
    pub fn popup(&self) -> Option<(String, String)> {
        self.host()
            .popup()
            .map(|(text, button)| (text.to_owned(), button.to_owned()))
    }

    /// Touch the popup, then click its undo button.
    pub fn click_undo(&mut self) {
        self.list.on_popup_touch();
        self.list.on_undo_clicked();
    }
}
