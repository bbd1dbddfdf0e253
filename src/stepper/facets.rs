//! Per-position view facets derived from the active index.

use serde::Serialize;

/// The four derived booleans for one step position.
///
/// Never stored on the stepper: recomputed from `(index, active, all_completed, step_count)`
/// every time they are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepFacets {
    pub is_first: bool,
    pub is_last: bool,
    pub is_active: bool,
    pub is_completed: bool,
}

impl StepFacets {
    /// Whether neither active nor completed (rendered with the "disabled" look)
    pub fn is_pending(&self) -> bool {
        !self.is_active && !self.is_completed
    }
}

/// Compute the facets of step `index`.
///
/// `all_completed` forces every step to completed and none to active.
pub fn facets(index: usize, active: usize, all_completed: bool, step_count: usize) -> StepFacets {
    StepFacets {
        is_first: index == 0,
        is_last: index + 1 == step_count,
        is_active: !all_completed && index == active,
        is_completed: all_completed || index < active,
    }
}

/// Facets for every position, in order.
pub fn facet_row(active: usize, all_completed: bool, step_count: usize) -> Vec<StepFacets> {
    (0..step_count)
        .map(|i| facets(i, active, all_completed, step_count))
        .collect()
}
