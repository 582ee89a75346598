use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use hand_ledger_core::{
    FlipCommand, FlipOutcome, JournalEngine, JournalInput, JournalState, SettleTicket,
    SwipeConfig, SwipeGestureState, PAGE_TURN_MS,
};

use crate::timer::TimeoutScheduler;

pub(crate) type JournalSubscriber = Rc<dyn Fn()>;

/// Shared journal state for every view. Views read snapshots and feed input
/// back through [`JournalCore::apply`].
pub(crate) struct JournalCore {
    engine: RefCell<JournalEngine<TimeoutScheduler>>,
    cover_open: Cell<bool>,
    last_outcome: Cell<Option<FlipOutcome>>,
    subscribers: Rc<RefCell<Vec<JournalSubscriber>>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct JournalSnapshot {
    pub(crate) state: JournalState,
    pub(crate) total_pages: usize,
    pub(crate) gesture: SwipeGestureState,
    pub(crate) cover_open: bool,
    pub(crate) last_outcome: Option<FlipOutcome>,
}

impl JournalCore {
    pub(crate) fn new(total_pages: usize) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<JournalCore>| {
            let weak = weak.clone();
            let scheduler = TimeoutScheduler::new(Rc::new(move |ticket| {
                if let Some(core) = weak.upgrade() {
                    core.settle(ticket);
                }
            }));
            Self {
                engine: RefCell::new(JournalEngine::new(
                    total_pages,
                    PAGE_TURN_MS,
                    scheduler,
                    SwipeConfig::default(),
                )),
                cover_open: Cell::new(false),
                last_outcome: Cell::new(None),
                subscribers: Rc::new(RefCell::new(Vec::new())),
            }
        })
    }

    pub(crate) fn subscribe(&self, subscriber: JournalSubscriber) -> JournalSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        JournalSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> JournalSnapshot {
        let engine = self.engine.borrow();
        JournalSnapshot {
            state: engine.state(),
            total_pages: engine.total_pages(),
            gesture: engine.gesture(),
            cover_open: self.cover_open.get(),
            last_outcome: self.last_outcome.get(),
        }
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.engine.borrow().gesture().is_dragging
    }

    /// Routes one input. Returns whether the DOM event should have its
    /// default action prevented.
    pub(crate) fn apply(&self, input: JournalInput) -> bool {
        let was_dragging = self.is_dragging();
        let dispatch = self.engine.borrow_mut().apply(input);
        if let Some(outcome) = dispatch.outcome {
            self.record(input.label(), outcome);
        }
        if dispatch.outcome.is_some() || was_dragging || self.is_dragging() {
            self.notify();
        }
        dispatch.prevent_default
    }

    pub(crate) fn execute(&self, command: FlipCommand) -> FlipOutcome {
        let outcome = self.engine.borrow_mut().execute(command);
        self.record("command", outcome);
        self.notify();
        outcome
    }

    fn record(&self, source: &str, outcome: FlipOutcome) {
        self.last_outcome.set(Some(outcome));
        match outcome {
            FlipOutcome::Flipped {
                from,
                to,
                direction,
            } => {
                gloo::console::log!("flip", source, direction.label(), format!("{from} -> {to}"));
            }
            FlipOutcome::Jumped { from, to } => {
                gloo::console::log!("jump", source, format!("{from} -> {to}"));
            }
            FlipOutcome::Unchanged | FlipOutcome::Busy | FlipOutcome::OutOfBounds => {}
        }
    }

    fn settle(&self, ticket: SettleTicket) {
        let settled = self.engine.borrow_mut().settle(ticket);
        if settled {
            self.notify();
        }
    }

    pub(crate) fn set_cover_open(&self, open: bool) {
        if self.cover_open.replace(open) == open {
            return;
        }
        if !open {
            self.engine.borrow_mut().apply(JournalInput::DragCancel);
        }
        gloo::console::log!("cover", if open { "open" } else { "closed" });
        self.notify();
    }

    pub(crate) fn toggle_cover(&self) {
        self.set_cover_open(!self.cover_open.get());
    }
}

pub(crate) struct JournalSubscription {
    subscriber: JournalSubscriber,
    subscribers: Rc<RefCell<Vec<JournalSubscriber>>>,
}

impl Drop for JournalSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
