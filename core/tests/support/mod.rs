#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use hand_ledger_core::{PageFlip, SettleScheduler, SettleTicket};

/// Virtual clock: scheduled settle tasks fire only when the test advances time.
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<Task>,
}

struct Task {
    id: u64,
    due_ms: u64,
    ticket: SettleTicket,
}

impl ManualClock {
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    pub fn advance(&self, ms: u64) -> Vec<SettleTicket> {
        let mut inner = self.inner.borrow_mut();
        inner.now_ms += ms;
        let now = inner.now_ms;
        let mut fired: Vec<(u64, SettleTicket)> = Vec::new();
        inner.tasks.retain(|task| {
            if task.due_ms <= now {
                fired.push((task.due_ms, task.ticket));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(due, _)| *due);
        fired.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

impl SettleScheduler for ManualClock {
    type Handle = u64;

    fn schedule(&mut self, ticket: SettleTicket, delay_ms: u32) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        let due_ms = inner.now_ms + u64::from(delay_ms);
        inner.tasks.push(Task { id, due_ms, ticket });
        id
    }

    fn cancel(&mut self, handle: u64) {
        self.inner.borrow_mut().tasks.retain(|task| task.id != handle);
    }
}

pub fn advance(flip: &mut PageFlip<ManualClock>, clock: &ManualClock, ms: u64) {
    for ticket in clock.advance(ms) {
        flip.settle(ticket);
    }
}
