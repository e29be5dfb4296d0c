use std::cell::Cell;
use std::rc::Rc;

/// Shared open/closed flag fed by the page-visibility signal.
///
/// Clones share the same flag: the listener writes it, the frame loop
/// reads it.
#[derive(Clone, Debug)]
pub struct VisibilityGate {
    open: Rc<Cell<bool>>,
}

impl VisibilityGate {
    pub fn new(visible: bool) -> Self {
        Self {
            open: Rc::new(Cell::new(visible)),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Record a visibility change. Returns true when the state flipped.
    pub fn set_visible(&self, visible: bool) -> bool {
        let changed = self.open.replace(visible) != visible;
        if changed {
            log::debug!("[gate] page {}", if visible { "visible" } else { "hidden" });
        }
        changed
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let gate = VisibilityGate::default();
        let reader = gate.clone();
        assert!(reader.is_open());
        assert!(gate.set_visible(false));
        assert!(!reader.is_open());
        assert!(!gate.set_visible(false));
        assert!(gate.set_visible(true));
        assert!(reader.is_open());
    }
}
