//! The visual root and the markers reflected onto it

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Top-level node of the rendered UI carrying class-like markers.
pub trait VisualRoot {
    fn add_marker(&mut self, marker: &str);
    fn remove_marker(&mut self, marker: &str);
}

/// Shared set of markers on the root frame of the terminal UI.
///
/// Clones are handles onto the same set: the theme controller writes
/// through one, the renderer reads through another.
#[derive(Debug, Default, Clone)]
pub struct ClassList(Rc<RefCell<BTreeSet<String>>>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.0.borrow().contains(marker)
    }

    /// Markers currently present, in sorted order.
    pub fn markers(&self) -> Vec<String> {
        self.0.borrow().iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl VisualRoot for ClassList {
    fn add_marker(&mut self, marker: &str) {
        self.0.borrow_mut().insert(marker.to_string());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.0.borrow_mut().remove(marker);
    }
}
