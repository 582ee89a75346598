use crate::flip::{FlipOutcome, JournalState, PageFlip, SettleScheduler, SettleTicket};
use crate::gesture::{SwipeConfig, SwipeGestureState};
use crate::router::{FlipCommand, InputRouter, JournalInput};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub outcome: Option<FlipOutcome>,
    pub prevent_default: bool,
}

impl Dispatch {
    pub fn moved(&self) -> bool {
        self.outcome.map(|outcome| outcome.moved()).unwrap_or(false)
    }
}

/// Input router and flip state machine behind a single entry point.
pub struct JournalEngine<S: SettleScheduler> {
    flip: PageFlip<S>,
    router: InputRouter,
}

impl<S: SettleScheduler> JournalEngine<S> {
    pub fn new(total_pages: usize, settle_ms: u32, scheduler: S, swipe: SwipeConfig) -> Self {
        Self {
            flip: PageFlip::new(total_pages, settle_ms, scheduler),
            router: InputRouter::new(swipe),
        }
    }

    pub fn state(&self) -> JournalState {
        self.flip.state()
    }

    pub fn total_pages(&self) -> usize {
        self.flip.total_pages()
    }

    pub fn gesture(&self) -> SwipeGestureState {
        self.router.gesture()
    }

    pub fn flip(&self) -> &PageFlip<S> {
        &self.flip
    }

    pub fn apply(&mut self, input: JournalInput) -> Dispatch {
        let state = self.flip.state();
        let routed = self.router.route(input, &state);
        Dispatch {
            outcome: routed.command.map(|command| self.execute(command)),
            prevent_default: routed.prevent_default,
        }
    }

    pub fn execute(&mut self, command: FlipCommand) -> FlipOutcome {
        match command {
            FlipCommand::Flip(direction) => self.flip.flip_page(direction),
            FlipCommand::GoTo(index) => self.flip.go_to_page(index),
        }
    }

    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        self.flip.settle(ticket)
    }
}
