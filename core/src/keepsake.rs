//! Drag mechanics for the keepsakes that can be pulled around on a page.
//! They sit inside `data-page-interactive` regions, so the page swipe never
//! sees these drags.

use crate::gesture::{DragRelease, DragTracker};

pub const PULL_RELEASE_RATIO: f32 = 0.4;
pub const PULL_FLICK_PX_S: f32 = 300.0;
pub const DEFAULT_MAX_PULL_PX: f32 = 150.0;

pub const BAND_RELEASE_PX: f32 = 100.0;
pub const BAND_FLICK_PX_S: f32 = 500.0;
pub const BAND_TRAVEL_PX: f32 = 300.0;
pub const BAND_EXIT_PX: f32 = 400.0;
const BAND_FADE_PX: f32 = 200.0;
const BAND_MIN_OPACITY: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullDirection {
    Down,
    Up,
    Left,
    Right,
}

impl PullDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, PullDirection::Down | PullDirection::Up)
    }

    /// +1 when pulling grows client coordinates.
    pub fn sign(self) -> f32 {
        match self {
            PullDirection::Down | PullDirection::Right => 1.0,
            PullDirection::Up | PullDirection::Left => -1.0,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            PullDirection::Down => "↓",
            PullDirection::Up => "↑",
            PullDirection::Left => "←",
            PullDirection::Right => "→",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            PullDirection::Down => "pull-down",
            PullDirection::Up => "pull-up",
            PullDirection::Left => "pull-left",
            PullDirection::Right => "pull-right",
        }
    }

    pub fn translate(self, offset_px: f32) -> String {
        if self.is_vertical() {
            format!("translateY({offset_px:.1}px)")
        } else {
            format!("translateX({offset_px:.1}px)")
        }
    }
}

/// A [`DragTracker`] fed with one axis of the pointer.
#[derive(Clone, Debug)]
pub struct AxisDrag {
    vertical: bool,
    tracker: DragTracker,
}

impl AxisDrag {
    pub fn new(vertical: bool, x: f32, y: f32, time_ms: f64) -> Self {
        let (along, across) = along_axis(vertical, x, y);
        Self {
            vertical,
            tracker: DragTracker::new(along, across, time_ms),
        }
    }

    pub fn update(&mut self, x: f32, y: f32, time_ms: f64) -> f32 {
        let (along, across) = along_axis(self.vertical, x, y);
        self.tracker.update(along, across, time_ms);
        self.tracker.offset_x()
    }

    pub fn release(self, x: f32, y: f32, time_ms: f64) -> (DragRelease, bool) {
        let (along, across) = along_axis(self.vertical, x, y);
        self.tracker.release(along, across, time_ms)
    }
}

fn along_axis(vertical: bool, x: f32, y: f32) -> (f32, f32) {
    if vertical {
        (y, x)
    } else {
        (x, y)
    }
}

/// Pointer drag on a keepsake, fed from pointer events in client pixels.
pub trait DragKeepsake {
    type View: Copy + Default + PartialEq;

    fn begin(&mut self, x: f32, y: f32, time_ms: f64);
    fn update(&mut self, x: f32, y: f32, time_ms: f64);
    /// Returns whether the keepsake ends up open.
    fn end(&mut self, x: f32, y: f32, time_ms: f64) -> bool;
    fn cancel(&mut self);
    fn is_dragging(&self) -> bool;
    fn view(&self) -> Self::View;
}

pub fn pull_released(direction: PullDirection, max_pull: f32, release: DragRelease) -> bool {
    let threshold = max_pull * PULL_RELEASE_RATIO;
    let sign = direction.sign();
    release.offset_x * sign > threshold || release.velocity_x * sign > PULL_FLICK_PX_S
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PullTabView {
    pub position: f32,
    pub progress: f32,
    pub pulled: bool,
    pub dragging: bool,
}

#[derive(Clone, Debug)]
pub struct PullTabState {
    direction: PullDirection,
    max_pull: f32,
    pulled: bool,
    offset: f32,
    drag: Option<AxisDrag>,
}

impl PullTabState {
    pub fn new(direction: PullDirection, max_pull: f32) -> Self {
        Self {
            direction,
            max_pull: max_pull.max(1.0),
            pulled: false,
            offset: 0.0,
            drag: None,
        }
    }

    /// Keyboard path: slides the tab fully out or back in.
    pub fn toggle(&mut self) {
        self.cancel();
        self.pulled = !self.pulled;
    }

    /// Tab displacement, held between rest and `max_pull`.
    pub fn position(&self) -> f32 {
        let sign = self.direction.sign();
        let rest = if self.pulled { self.max_pull } else { 0.0 };
        let along = (rest + self.offset * sign).clamp(0.0, self.max_pull);
        along * sign
    }
}

impl DragKeepsake for PullTabState {
    type View = PullTabView;

    fn begin(&mut self, x: f32, y: f32, time_ms: f64) {
        self.offset = 0.0;
        self.drag = Some(AxisDrag::new(self.direction.is_vertical(), x, y, time_ms));
    }

    fn update(&mut self, x: f32, y: f32, time_ms: f64) {
        if let Some(drag) = self.drag.as_mut() {
            self.offset = drag.update(x, y, time_ms);
        }
    }

    /// A pulled tab closes again unless it is pulled further out.
    fn end(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        if let Some(drag) = self.drag.take() {
            let (release, _moved) = drag.release(x, y, time_ms);
            self.pulled = pull_released(self.direction, self.max_pull, release);
        }
        self.offset = 0.0;
        self.pulled
    }

    fn cancel(&mut self) {
        self.drag = None;
        self.offset = 0.0;
    }

    fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn view(&self) -> PullTabView {
        let position = self.position();
        PullTabView {
            position,
            progress: position.abs() / self.max_pull,
            pulled: self.pulled,
            dragging: self.is_dragging(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BellyBandView {
    pub position: f32,
    pub opacity: f32,
    pub removed: bool,
    pub dragging: bool,
}

/// Paper band wrapped around a keepsake. Tapping it or dragging it far or
/// fast enough slides it off for good.
#[derive(Clone, Debug)]
pub struct BellyBandState {
    exit_right: bool,
    removed: bool,
    offset: f32,
    drag: Option<AxisDrag>,
}

impl BellyBandState {
    pub fn new(exit_right: bool) -> Self {
        Self {
            exit_right,
            removed: false,
            offset: 0.0,
            drag: None,
        }
    }

    pub fn slide_off(&mut self) {
        self.drag = None;
        self.offset = 0.0;
        self.removed = true;
    }

    pub fn position(&self) -> f32 {
        if self.removed {
            return if self.exit_right {
                BAND_EXIT_PX
            } else {
                -BAND_EXIT_PX
            };
        }
        self.offset.clamp(-BAND_TRAVEL_PX, BAND_TRAVEL_PX)
    }
}

impl DragKeepsake for BellyBandState {
    type View = BellyBandView;

    fn begin(&mut self, x: f32, y: f32, time_ms: f64) {
        if self.removed {
            return;
        }
        self.offset = 0.0;
        self.drag = Some(AxisDrag::new(false, x, y, time_ms));
    }

    fn update(&mut self, x: f32, y: f32, time_ms: f64) {
        if let Some(drag) = self.drag.as_mut() {
            self.offset = drag.update(x, y, time_ms);
        }
    }

    /// A tap counts as well as a long or fast drag.
    fn end(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        if let Some(drag) = self.drag.take() {
            let (release, moved) = drag.release(x, y, time_ms);
            if !moved || band_released(release) {
                self.removed = true;
            }
        }
        self.offset = 0.0;
        self.removed
    }

    fn cancel(&mut self) {
        self.drag = None;
        self.offset = 0.0;
    }

    fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn view(&self) -> BellyBandView {
        let position = self.position();
        let fade = (position.abs() / BAND_FADE_PX).min(1.0);
        BellyBandView {
            position,
            opacity: 1.0 - fade * (1.0 - BAND_MIN_OPACITY),
            removed: self.removed,
            dragging: self.is_dragging(),
        }
    }
}

pub fn band_released(release: DragRelease) -> bool {
    release.offset_x.abs() > BAND_RELEASE_PX || release.velocity_x.abs() > BAND_FLICK_PX_S
}

/// Edge a flip-out panel is hinged on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl FoldEdge {
    pub fn is_horizontal(self) -> bool {
        matches!(self, FoldEdge::Left | FoldEdge::Right)
    }

    /// Side the hidden content is revealed on.
    pub fn side(self) -> &'static str {
        match self {
            FoldEdge::Left => "left",
            FoldEdge::Right => "right",
            FoldEdge::Top => "top",
            FoldEdge::Bottom => "bottom",
        }
    }

    pub fn transform_origin(self) -> &'static str {
        match self {
            FoldEdge::Left => "right center",
            FoldEdge::Right => "left center",
            FoldEdge::Top => "center bottom",
            FoldEdge::Bottom => "center top",
        }
    }

    pub fn unfolded_rotation(self) -> &'static str {
        match self {
            FoldEdge::Left => "rotateY(180deg)",
            FoldEdge::Right => "rotateY(-180deg)",
            FoldEdge::Top => "rotateX(180deg)",
            FoldEdge::Bottom => "rotateX(-180deg)",
        }
    }

    /// CSS side the folding panel is pinned to, and how far it moves once open.
    pub fn panel_anchor(self, width: f32, height: f32) -> (&'static str, f32) {
        match self {
            FoldEdge::Left => ("right", width),
            FoldEdge::Right => ("left", width),
            FoldEdge::Top => ("bottom", height),
            FoldEdge::Bottom => ("top", height),
        }
    }

    /// The open footprint doubles along the fold axis.
    pub fn footprint(self, width: f32, height: f32, unfolded: bool) -> (f32, f32) {
        match (unfolded, self.is_horizontal()) {
            (false, _) => (width, height),
            (true, true) => (width * 2.0, height),
            (true, false) => (width, height * 2.0),
        }
    }
}

/// Unfolds one more accordion panel per tap, folding back up after the last.
pub fn next_fold(expanded: usize, panels: usize) -> usize {
    if expanded + 1 >= panels {
        0
    } else {
        expanded + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_drag_reads_the_y_axis() {
        let mut drag = AxisDrag::new(true, 10.0, 10.0, 0.0);
        assert_eq!(drag.update(90.0, 40.0, 16.0), 30.0);
    }

    #[test]
    fn accordion_wraps_after_the_last_panel() {
        assert_eq!(next_fold(0, 3), 1);
        assert_eq!(next_fold(1, 3), 2);
        assert_eq!(next_fold(2, 3), 0);
        assert_eq!(next_fold(0, 1), 0);
        assert_eq!(next_fold(0, 0), 0);
    }
}
