use crate::flip::{FlipDirection, JournalState};
use crate::gesture::{SwipeConfig, SwipeDetector, SwipeGestureState};
use crate::visual::click_direction;

/// A click this soon after a drag that moved is the tail of that drag.
pub const CLICK_SUPPRESS_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | " " | "Spacebar" => Some(NavKey::Next),
            "ArrowLeft" => Some(NavKey::Previous),
            _ => None,
        }
    }

    pub fn direction(self) -> FlipDirection {
        match self {
            NavKey::Next => FlipDirection::Forward,
            NavKey::Previous => FlipDirection::Backward,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Option<NavKey>,
    pub modified: bool,
    pub text_entry: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JournalInput {
    Key(KeyPress),
    PageClick {
        page_index: usize,
        interactive: bool,
        time_ms: f64,
    },
    DragStart {
        x: f32,
        y: f32,
        time_ms: f64,
        interactive: bool,
    },
    DragMove {
        x: f32,
        y: f32,
        time_ms: f64,
    },
    DragEnd {
        x: f32,
        y: f32,
        time_ms: f64,
    },
    DragCancel,
    Step(FlipDirection),
    Jump(usize),
}

impl JournalInput {
    pub fn label(&self) -> &'static str {
        match self {
            JournalInput::Key(_) => "key",
            JournalInput::PageClick { .. } => "page click",
            JournalInput::DragStart { .. } => "drag start",
            JournalInput::DragMove { .. } => "drag move",
            JournalInput::DragEnd { .. } => "drag end",
            JournalInput::DragCancel => "drag cancel",
            JournalInput::Step(_) => "step",
            JournalInput::Jump(_) => "jump",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipCommand {
    Flip(FlipDirection),
    GoTo(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Routed {
    pub command: Option<FlipCommand>,
    pub prevent_default: bool,
}

impl Routed {
    fn command(command: FlipCommand) -> Self {
        Self {
            command: Some(command),
            prevent_default: false,
        }
    }
}

pub struct InputRouter {
    swipe: SwipeDetector,
    suppress_click_until: Option<f64>,
}

impl InputRouter {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            swipe: SwipeDetector::new(config),
            suppress_click_until: None,
        }
    }

    pub fn gesture(&self) -> SwipeGestureState {
        self.swipe.state()
    }

    pub fn route(&mut self, input: JournalInput, state: &JournalState) -> Routed {
        match input {
            JournalInput::Key(press) => route_key(press),
            JournalInput::PageClick {
                page_index,
                interactive,
                time_ms,
            } => {
                if self.take_click_suppression(time_ms) || interactive {
                    return Routed::default();
                }
                click_direction(page_index, state.current_page)
                    .map(|direction| Routed::command(FlipCommand::Flip(direction)))
                    .unwrap_or_default()
            }
            JournalInput::DragStart {
                x,
                y,
                time_ms,
                interactive,
            } => {
                self.suppress_click_until = None;
                self.swipe.begin(x, y, time_ms, interactive);
                Routed::default()
            }
            JournalInput::DragMove { x, y, time_ms } => {
                self.swipe.update(x, y, time_ms);
                Routed::default()
            }
            JournalInput::DragEnd { x, y, time_ms } => {
                let end = self.swipe.end(x, y, time_ms);
                if end.moved {
                    self.suppress_click_until = Some(time_ms + CLICK_SUPPRESS_MS);
                }
                end.intent
                    .map(|intent| Routed::command(FlipCommand::Flip(intent.flip_direction())))
                    .unwrap_or_default()
            }
            JournalInput::DragCancel => {
                self.swipe.cancel();
                Routed::default()
            }
            JournalInput::Step(direction) => Routed::command(FlipCommand::Flip(direction)),
            JournalInput::Jump(index) => Routed::command(FlipCommand::GoTo(index)),
        }
    }

    fn take_click_suppression(&mut self, time_ms: f64) -> bool {
        match self.suppress_click_until.take() {
            Some(until) => time_ms <= until,
            None => false,
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

fn route_key(press: KeyPress) -> Routed {
    if press.modified || press.text_entry {
        return Routed::default();
    }
    match press.key {
        Some(key) => Routed {
            command: Some(FlipCommand::Flip(key.direction())),
            prevent_default: true,
        },
        None => Routed::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str) -> JournalInput {
        JournalInput::Key(KeyPress {
            key: NavKey::from_key(key),
            ..KeyPress::default()
        })
    }

    #[test]
    fn arrows_and_space_map_to_flips() {
        let mut router = InputRouter::default();
        let state = JournalState::default();
        let right = router.route(key("ArrowRight"), &state);
        assert_eq!(right.command, Some(FlipCommand::Flip(FlipDirection::Forward)));
        assert!(right.prevent_default);
        let space = router.route(key(" "), &state);
        assert_eq!(space.command, Some(FlipCommand::Flip(FlipDirection::Forward)));
        let left = router.route(key("ArrowLeft"), &state);
        assert_eq!(left.command, Some(FlipCommand::Flip(FlipDirection::Backward)));
        assert_eq!(router.route(key("Enter"), &state), Routed::default());
    }

    #[test]
    fn shortcuts_and_typing_pass_through() {
        let mut router = InputRouter::default();
        let state = JournalState::default();
        let alt_left = JournalInput::Key(KeyPress {
            key: Some(NavKey::Previous),
            modified: true,
            text_entry: false,
        });
        let typed_space = JournalInput::Key(KeyPress {
            key: Some(NavKey::Next),
            modified: false,
            text_entry: true,
        });
        assert_eq!(router.route(alt_left, &state), Routed::default());
        assert_eq!(router.route(typed_space, &state), Routed::default());
    }

    #[test]
    fn click_after_moving_drag_is_swallowed_once() {
        let mut router = InputRouter::default();
        let state = JournalState::default();
        router.route(
            JournalInput::DragStart {
                x: 100.0,
                y: 0.0,
                time_ms: 0.0,
                interactive: false,
            },
            &state,
        );
        let end = router.route(
            JournalInput::DragEnd {
                x: 90.0,
                y: 0.0,
                time_ms: 400.0,
            },
            &state,
        );
        assert_eq!(end.command, None);
        let click = |time_ms| JournalInput::PageClick {
            page_index: 0,
            interactive: false,
            time_ms,
        };
        assert_eq!(router.route(click(402.0), &state).command, None);
        assert_eq!(
            router.route(click(900.0), &state).command,
            Some(FlipCommand::Flip(FlipDirection::Forward))
        );
    }

    #[test]
    fn stationary_press_leaves_click_alone() {
        let mut router = InputRouter::default();
        let state = JournalState::default();
        router.route(
            JournalInput::DragStart {
                x: 10.0,
                y: 10.0,
                time_ms: 0.0,
                interactive: false,
            },
            &state,
        );
        router.route(
            JournalInput::DragEnd {
                x: 11.0,
                y: 10.0,
                time_ms: 80.0,
            },
            &state,
        );
        let routed = router.route(
            JournalInput::PageClick {
                page_index: 0,
                interactive: false,
                time_ms: 81.0,
            },
            &state,
        );
        assert_eq!(routed.command, Some(FlipCommand::Flip(FlipDirection::Forward)));
    }
}
