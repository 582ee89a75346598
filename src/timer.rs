use std::rc::Rc;

use gloo::timers::callback::Timeout;
use hand_ledger_core::{SettleScheduler, SettleTicket};

pub(crate) type SettleCallback = Rc<dyn Fn(SettleTicket)>;

/// Settle scheduler backed by `setTimeout`.
pub(crate) struct TimeoutScheduler {
    on_fire: SettleCallback,
}

impl TimeoutScheduler {
    pub(crate) fn new(on_fire: SettleCallback) -> Self {
        Self { on_fire }
    }
}

impl SettleScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, ticket: SettleTicket, delay_ms: u32) -> Timeout {
        let on_fire = Rc::clone(&self.on_fire);
        Timeout::new(delay_ms, move || on_fire(ticket))
    }

    fn cancel(&mut self, handle: Timeout) {
        let _ = handle.cancel();
    }
}
