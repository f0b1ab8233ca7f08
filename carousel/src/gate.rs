use crate::Controls;

/// Enables/disables navigation at the true ends of a non-looping carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationGate {
    looping: bool,
    first: usize,
    last: usize,
}

impl NavigationGate {
    pub fn new(looping: bool, first_original: usize, last_original: usize) -> Self {
        Self {
            looping,
            first: first_original,
            last: last_original,
        }
    }

    /// Control state for a carousel resting at `index`.
    pub fn controls_at(&self, index: usize) -> Controls {
        if self.looping {
            return Controls::ENABLED;
        }
        Controls {
            prev_enabled: index != self.first,
            next_enabled: index != self.last,
        }
    }
}
