use std::collections::VecDeque;

use crate::flip::FlipDirection;

pub const SWIPE_THRESHOLD_PX: f32 = 80.0;
pub const SWIPE_VELOCITY_PX_S: f32 = 500.0;
pub const VELOCITY_WINDOW_MS: f64 = 100.0;
pub const CLICK_SLOP_PX: f32 = 4.0;
const MAX_SAMPLES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeIntent {
    Left,
    Right,
}

impl SwipeIntent {
    /// Dragging the page leftward turns it forward, like a paper page.
    pub fn flip_direction(self) -> FlipDirection {
        match self {
            SwipeIntent::Left => FlipDirection::Forward,
            SwipeIntent::Right => FlipDirection::Backward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub threshold_px: f32,
    pub velocity_px_s: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: SWIPE_THRESHOLD_PX,
            velocity_px_s: SWIPE_VELOCITY_PX_S,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub offset_x: f32,
    pub velocity_x: f32,
}

pub fn classify_swipe(release: DragRelease, config: &SwipeConfig) -> Option<SwipeIntent> {
    let fast = release.velocity_x.abs() > config.velocity_px_s;
    let far = release.offset_x.abs() > config.threshold_px;
    if !fast && !far {
        return None;
    }
    if release.offset_x < 0.0 || release.velocity_x < -config.velocity_px_s {
        Some(SwipeIntent::Left)
    } else if release.offset_x > 0.0 || release.velocity_x > config.velocity_px_s {
        Some(SwipeIntent::Right)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DragSlopGate {
    start: [f32; 2],
    slop: f32,
    moved: bool,
}

impl DragSlopGate {
    pub fn new(start_x: f32, start_y: f32, slop: f32) -> Self {
        Self {
            start: [start_x, start_y],
            slop,
            moved: false,
        }
    }

    pub fn update(&mut self, x: f32, y: f32) -> bool {
        if self.moved {
            return true;
        }
        let dx = x - self.start[0];
        let dy = y - self.start[1];
        if dx * dx + dy * dy > self.slop * self.slop {
            self.moved = true;
        }
        self.moved
    }

    pub fn moved(&self) -> bool {
        self.moved
    }
}

/// Horizontal drag telemetry: offset from the press point and a velocity
/// estimated over the trailing [`VELOCITY_WINDOW_MS`].
#[derive(Clone, Debug)]
pub struct DragTracker {
    start_x: f32,
    last_x: f32,
    samples: VecDeque<(f64, f32)>,
    slop: DragSlopGate,
}

impl DragTracker {
    pub fn new(x: f32, y: f32, time_ms: f64) -> Self {
        let mut samples = VecDeque::with_capacity(MAX_SAMPLES);
        samples.push_back((time_ms, x));
        Self {
            start_x: x,
            last_x: x,
            samples,
            slop: DragSlopGate::new(x, y, CLICK_SLOP_PX),
        }
    }

    pub fn update(&mut self, x: f32, y: f32, time_ms: f64) {
        self.last_x = x;
        self.slop.update(x, y);
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((time_ms, x));
        self.prune(time_ms);
    }

    pub fn offset_x(&self) -> f32 {
        self.last_x - self.start_x
    }

    pub fn moved(&self) -> bool {
        self.slop.moved()
    }

    pub fn velocity_x(&self) -> f32 {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let dt_ms = last.0 - first.0;
        if dt_ms <= 0.0 {
            return 0.0;
        }
        ((last.1 - first.1) as f64 * 1000.0 / dt_ms) as f32
    }

    pub fn release(mut self, x: f32, y: f32, time_ms: f64) -> (DragRelease, bool) {
        self.update(x, y, time_ms);
        let release = DragRelease {
            offset_x: self.offset_x(),
            velocity_x: self.velocity_x(),
        };
        (release, self.moved())
    }

    fn prune(&mut self, now_ms: f64) {
        let cutoff = now_ms - VELOCITY_WINDOW_MS;
        while self.samples.len() > 1 {
            match self.samples.front() {
                Some((time, _)) if *time < cutoff => {
                    self.samples.pop_front();
                }
                _ => break,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeGestureState {
    pub is_dragging: bool,
    pub drag_x: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragEnd {
    pub intent: Option<SwipeIntent>,
    pub moved: bool,
}

pub struct SwipeDetector {
    config: SwipeConfig,
    drag: Option<DragTracker>,
}

impl SwipeDetector {
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, drag: None }
    }

    /// A drag that starts on an interactive control is ignored until release.
    pub fn begin(&mut self, x: f32, y: f32, time_ms: f64, interactive: bool) {
        self.drag = if interactive {
            None
        } else {
            Some(DragTracker::new(x, y, time_ms))
        };
    }

    pub fn update(&mut self, x: f32, y: f32, time_ms: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.update(x, y, time_ms);
        }
    }

    pub fn end(&mut self, x: f32, y: f32, time_ms: f64) -> DragEnd {
        let Some(drag) = self.drag.take() else {
            return DragEnd::default();
        };
        let (release, moved) = drag.release(x, y, time_ms);
        DragEnd {
            intent: classify_swipe(release, &self.config),
            moved,
        }
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    pub fn state(&self) -> SwipeGestureState {
        match self.drag.as_ref() {
            Some(drag) => SwipeGestureState {
                is_dragging: true,
                drag_x: drag.offset_x(),
            },
            None => SwipeGestureState::default(),
        }
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slop_gate_latches_once_moved() {
        let mut gate = DragSlopGate::new(0.0, 0.0, 4.0);
        assert!(!gate.update(2.0, 2.0));
        assert!(gate.update(5.0, 0.0));
        assert!(gate.update(0.0, 0.0));
    }

    #[test]
    fn velocity_uses_trailing_window_only() {
        let mut drag = DragTracker::new(0.0, 0.0, 0.0);
        drag.update(-10.0, 0.0, 200.0);
        drag.update(-60.0, 0.0, 250.0);
        drag.update(-110.0, 0.0, 300.0);
        // samples before t=200 are outside the 100ms window
        assert_eq!(drag.velocity_x(), -1000.0);
        assert_eq!(drag.offset_x(), -110.0);
    }

    #[test]
    fn pause_before_release_kills_velocity() {
        let drag = DragTracker::new(0.0, 0.0, 0.0);
        let (release, moved) = drag.release(-30.0, 0.0, 500.0);
        assert_eq!(release.velocity_x, 0.0);
        assert_eq!(release.offset_x, -30.0);
        assert!(moved);
    }
}
