pub mod config;
pub mod content;
pub mod flip;
pub mod gesture;
pub mod interaction;
pub mod journal;
pub mod keepsake;
pub mod layout;
pub mod nav;
pub mod router;
pub mod visual;

pub use config::{JournalOptions, OptionError};
pub use content::{validate_page_ids, ContentError, PaperTexture};
pub use flip::{
    FlipDirection, FlipOutcome, JournalState, PageFlip, SettleScheduler, SettleTicket,
    PAGE_TURN_MS,
};
pub use gesture::{
    classify_swipe, DragRelease, SwipeConfig, SwipeDetector, SwipeGestureState, SwipeIntent,
};
pub use interaction::{
    describe_node, interactive_target_selector, is_interactive_target, is_text_entry_target,
    InteractiveNode,
};
pub use journal::{Dispatch, JournalEngine};
pub use keepsake::{
    next_fold, BellyBandState, BellyBandView, DragKeepsake, FoldEdge, PullDirection,
    PullTabState, PullTabView,
};
pub use nav::{page_indicator, PageIndicator};
pub use router::{FlipCommand, InputRouter, JournalInput, KeyPress, NavKey};
pub use visual::{page_visual, stack_visuals, PageFace, PagePhase, PageVisual};
