//! Expand/collapse flags for a list of headers.

/// Independent open/closed flag per item. Every item starts collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    expanded: Vec<bool>,
}

impl Accordion {
    /// Create an accordion of `len` collapsed items.
    pub fn new(len: usize) -> Self {
        Self {
            expanded: vec![false; len],
        }
    }

    /// Flip item `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(open) = self.expanded.get_mut(index) {
            *open = !*open;
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Number of items currently expanded.
    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().filter(|open| **open).count()
    }
}
