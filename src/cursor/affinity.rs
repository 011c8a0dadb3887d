use std::cell::Cell;
use std::rc::Rc;

/// The pointer's current intent, read by the cursor indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffinityMode {
    /// No interactive element under the pointer.
    #[default]
    Default,
    /// The pointer is over an interactive element.
    Hover,
}

/// Shared pointer-affinity state, injected once at the render-tree root.
///
/// Cloning yields another handle over the same cell, so any interactive element
/// can hold one and write on pointer-enter/pointer-leave. Writes are plain
/// overwrites: last write wins, no queuing, no merge policy. Single-threaded by
/// construction (`Rc`), matching the host's one UI thread.
#[derive(Clone, Debug, Default)]
pub struct PointerAffinity {
    shared: Rc<Cell<AffinityMode>>,
}

impl PointerAffinity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current mode.
    pub fn get(&self) -> AffinityMode {
        self.shared.get()
    }

    /// Overwrite the current mode.
    pub fn set(&self, mode: AffinityMode) {
        self.shared.set(mode);
    }

    /// Pointer entered an interactive element.
    pub fn pointer_enter(&self) {
        self.set(AffinityMode::Hover);
    }

    /// Pointer left an interactive element.
    pub fn pointer_leave(&self) {
        self.set(AffinityMode::Default);
    }

    /// `true` when `other` is a handle over the same underlying cell.
    pub fn same_cell(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}
