use crate::flip::JournalState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageIndicator {
    pub label: String,
    pub can_previous: bool,
    pub can_next: bool,
}

pub fn page_indicator(state: &JournalState, total_pages: usize) -> PageIndicator {
    let current = state.current_page;
    let label = if current < total_pages {
        format!("{} / {}", current + 1, total_pages)
    } else {
        "end".to_string()
    };
    PageIndicator {
        label,
        can_previous: current > 0,
        can_next: current < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(page: usize) -> JournalState {
        JournalState {
            current_page: page,
            ..JournalState::default()
        }
    }

    #[test]
    fn labels_are_one_based() {
        let indicator = page_indicator(&at(0), 3);
        assert_eq!(indicator.label, "1 / 3");
        assert!(!indicator.can_previous);
        assert!(indicator.can_next);
    }

    #[test]
    fn closed_at_back_reads_end() {
        let indicator = page_indicator(&at(3), 3);
        assert_eq!(indicator.label, "end");
        assert!(indicator.can_previous);
        assert!(!indicator.can_next);
    }
}
