/// Length of one page turn. Drives both the settle timer and the CSS transition.
pub const PAGE_TURN_MS: u32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    Forward,
    Backward,
}

impl FlipDirection {
    pub fn step(self, page: usize) -> Option<usize> {
        match self {
            FlipDirection::Forward => page.checked_add(1),
            FlipDirection::Backward => page.checked_sub(1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlipDirection::Forward => "forward",
            FlipDirection::Backward => "backward",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JournalState {
    pub current_page: usize,
    pub is_flipping: bool,
    pub flip_direction: Option<FlipDirection>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettleTicket(pub u64);

/// Deferred-callback source for the settle step of a flip.
///
/// `schedule` must not call back synchronously; the owner delivers the ticket
/// to [`PageFlip::settle`] once the delay has elapsed.
pub trait SettleScheduler {
    type Handle;

    fn schedule(&mut self, ticket: SettleTicket, delay_ms: u32) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Flipped {
        from: usize,
        to: usize,
        direction: FlipDirection,
    },
    Jumped {
        from: usize,
        to: usize,
    },
    Unchanged,
    Busy,
    OutOfBounds,
}

impl FlipOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, FlipOutcome::Flipped { .. } | FlipOutcome::Jumped { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlipOutcome::Flipped { .. } => "flipped",
            FlipOutcome::Jumped { .. } => "jumped",
            FlipOutcome::Unchanged => "unchanged",
            FlipOutcome::Busy => "busy",
            FlipOutcome::OutOfBounds => "out of bounds",
        }
    }
}

struct PendingSettle<H> {
    ticket: SettleTicket,
    handle: H,
}

/// Page flip state machine.
///
/// `current_page` ranges over `0..=total_pages`. The last value is the
/// closed-at-the-back state where every page has been turned.
pub struct PageFlip<S: SettleScheduler> {
    state: JournalState,
    total_pages: usize,
    settle_ms: u32,
    scheduler: S,
    pending: Option<PendingSettle<S::Handle>>,
    next_ticket: u64,
}

impl<S: SettleScheduler> PageFlip<S> {
    pub fn new(total_pages: usize, settle_ms: u32, scheduler: S) -> Self {
        Self {
            state: JournalState::default(),
            total_pages,
            settle_ms,
            scheduler,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> JournalState {
        self.state
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn last_page(&self) -> usize {
        self.total_pages
    }

    pub fn pending_ticket(&self) -> Option<SettleTicket> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }

    pub fn contains_page(&self, page: usize) -> bool {
        page <= self.last_page()
    }

    pub fn flip_page(&mut self, direction: FlipDirection) -> FlipOutcome {
        if self.state.is_flipping {
            return FlipOutcome::Busy;
        }
        let from = self.state.current_page;
        let Some(to) = direction.step(from).filter(|page| self.contains_page(*page)) else {
            return FlipOutcome::OutOfBounds;
        };
        self.state.is_flipping = true;
        self.state.flip_direction = Some(direction);
        self.state.current_page = to;
        self.reschedule_settle();
        FlipOutcome::Flipped {
            from,
            to,
            direction,
        }
    }

    pub fn go_to_page(&mut self, index: usize) -> FlipOutcome {
        if self.state.is_flipping {
            return FlipOutcome::Busy;
        }
        if !self.contains_page(index) {
            return FlipOutcome::OutOfBounds;
        }
        let from = self.state.current_page;
        if index == from {
            return FlipOutcome::Unchanged;
        }
        self.state.current_page = index;
        FlipOutcome::Jumped { from, to: index }
    }

    /// Ends the transition started by the flip that issued `ticket`.
    /// Returns false for stale tickets.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => return false,
        }
        self.pending = None;
        self.state.is_flipping = false;
        self.state.flip_direction = None;
        true
    }

    fn reschedule_settle(&mut self) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous.handle);
        }
        let ticket = SettleTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let handle = self.scheduler.schedule(ticket, self.settle_ms);
        self.pending = Some(PendingSettle { ticket, handle });
    }
}

impl<S: SettleScheduler> Drop for PageFlip<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending.handle);
        }
    }
}
