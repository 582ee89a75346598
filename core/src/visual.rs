use crate::flip::{FlipDirection, JournalState};

pub const FLIPPED_ROTATION_DEG: f32 = -180.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePhase {
    Upcoming,
    Active,
    Flipped,
}

impl PagePhase {
    pub fn label(self) -> &'static str {
        match self {
            PagePhase::Upcoming => "upcoming",
            PagePhase::Active => "active",
            PagePhase::Flipped => "flipped",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFace {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageVisual {
    pub index: usize,
    pub phase: PagePhase,
    pub z_index: i32,
    pub rotation_deg: f32,
    pub visible_face: PageFace,
    pub click_direction: Option<FlipDirection>,
}

impl PageVisual {
    pub fn is_flipped(&self) -> bool {
        self.phase == PagePhase::Flipped
    }

    pub fn is_active(&self) -> bool {
        self.phase == PagePhase::Active
    }

    pub fn is_clickable(&self) -> bool {
        self.click_direction.is_some()
    }

    /// Older turned pages stack above the last turned one, so they must let
    /// the pointer through to it.
    pub fn catches_pointer(&self) -> bool {
        !self.is_flipped() || self.is_clickable()
    }
}

pub fn page_phase(index: usize, current_page: usize) -> PagePhase {
    if index < current_page {
        PagePhase::Flipped
    } else if index == current_page {
        PagePhase::Active
    } else {
        PagePhase::Upcoming
    }
}

/// Turned pages are lifted by a full `total_pages` so that every flipped page
/// sits above every unturned one while the 3D rotation is in progress.
pub fn page_z_index(index: usize, current_page: usize, total_pages: usize) -> i32 {
    let total = clamp_i32(total_pages);
    let base = total - clamp_i32(index);
    if index < current_page {
        base + total
    } else {
        base
    }
}

/// The active page turns forward; the most recently turned page turns back.
pub fn click_direction(index: usize, current_page: usize) -> Option<FlipDirection> {
    if index == current_page {
        Some(FlipDirection::Forward)
    } else if index.checked_add(1) == Some(current_page) {
        Some(FlipDirection::Backward)
    } else {
        None
    }
}

pub fn page_visual(index: usize, state: &JournalState, total_pages: usize) -> PageVisual {
    let phase = page_phase(index, state.current_page);
    let (rotation_deg, visible_face) = match phase {
        PagePhase::Flipped => (FLIPPED_ROTATION_DEG, PageFace::Back),
        PagePhase::Active | PagePhase::Upcoming => (0.0, PageFace::Front),
    };
    PageVisual {
        index,
        phase,
        z_index: page_z_index(index, state.current_page, total_pages),
        rotation_deg,
        visible_face,
        click_direction: click_direction(index, state.current_page),
    }
}

pub fn stack_visuals(state: &JournalState, total_pages: usize) -> Vec<PageVisual> {
    (0..total_pages)
        .map(|index| page_visual(index, state, total_pages))
        .collect()
}

fn clamp_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_split_around_current_page() {
        assert_eq!(page_phase(0, 2), PagePhase::Flipped);
        assert_eq!(page_phase(2, 2), PagePhase::Active);
        assert_eq!(page_phase(3, 2), PagePhase::Upcoming);
    }

    #[test]
    fn only_active_and_last_turned_pages_are_clickable() {
        assert_eq!(click_direction(2, 2), Some(FlipDirection::Forward));
        assert_eq!(click_direction(1, 2), Some(FlipDirection::Backward));
        assert_eq!(click_direction(0, 2), None);
        assert_eq!(click_direction(3, 2), None);
        assert_eq!(click_direction(0, 0), Some(FlipDirection::Forward));
    }

    #[test]
    fn flipped_pages_show_their_back() {
        let state = JournalState {
            current_page: 1,
            ..JournalState::default()
        };
        let visual = page_visual(0, &state, 3);
        assert_eq!(visual.visible_face, PageFace::Back);
        assert_eq!(visual.rotation_deg, FLIPPED_ROTATION_DEG);
        assert_eq!(visual.z_index, 6);
        let active = page_visual(1, &state, 3);
        assert_eq!(active.visible_face, PageFace::Front);
        assert_eq!(active.z_index, 2);
    }
}
