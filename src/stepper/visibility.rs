//! Direct-mutation path for the button row.
//!
//! `show_buttons` / `hide_buttons` flip the row through a [`VisibilityPort`] instead of
//! going through the stepper's own state, so the very next draw reflects the change.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Transient directive layered on top of `show_buttons`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisibilityOverride {
    #[default]
    Unset,
    Hidden,
    Shown,
}

/// Capability to toggle a mounted container's visibility immediately
pub trait VisibilityPort: Send + Sync {
    fn set_visible(&self, visible: bool);
}

#[derive(Debug)]
struct ButtonRowInner {
    visible: AtomicBool,
    toggles: AtomicU64,
}

/// Stable handle to the rendered button-row container.
///
/// Cloned between the stepper (writer) and the view (reader); clones share state.
#[derive(Debug, Clone)]
pub struct ButtonRow {
    inner: Arc<ButtonRowInner>,
}

impl ButtonRow {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ButtonRowInner {
                visible: AtomicBool::new(true),
                toggles: AtomicU64::new(0),
            }),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.visible.load(Ordering::SeqCst)
    }

    /// Number of times visibility actually changed
    pub fn toggle_count(&self) -> u64 {
        self.inner.toggles.load(Ordering::SeqCst)
    }
}

impl Default for ButtonRow {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityPort for ButtonRow {
    fn set_visible(&self, visible: bool) {
        if self.inner.visible.swap(visible, Ordering::SeqCst) != visible {
            self.inner.toggles.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_row_starts_visible() {
        let row = ButtonRow::new();
        assert!(row.is_visible());
        assert_eq!(row.toggle_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let row = ButtonRow::new();
        let view_side = row.clone();
        row.set_visible(false);
        assert!(!view_side.is_visible());
        assert_eq!(view_side.toggle_count(), 1);
    }

    #[test]
    fn test_repeated_value_is_not_a_toggle() {
        let row = ButtonRow::new();
        row.set_visible(true);
        row.set_visible(false);
        row.set_visible(false);
        row.set_visible(true);
        assert_eq!(row.toggle_count(), 2);
    }
}
