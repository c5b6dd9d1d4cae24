//! Cyclic pointer into a fixed list.

/// Rotates through a fixed, ordered list one entry at a time.
///
/// The index always stays below the list length and wraps to the first entry
/// after the last. An empty list never advances.
#[derive(Debug, Clone, Copy)]
pub struct Carousel<T: 'static> {
    items: &'static [T],
    index: usize,
}

impl<T> Carousel<T> {
    /// Create a carousel starting at the first entry.
    pub fn new(items: &'static [T]) -> Self {
        Self { items, index: 0 }
    }

    /// Move to the next entry, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    /// Index of the entry currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The entry currently shown, if the list is non-empty.
    pub fn current(&self) -> Option<&'static T> {
        self.items.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static THREE: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn cycles_and_wraps() {
        let mut carousel = Carousel::new(&THREE);
        let mut seen = vec![carousel.index()];
        for _ in 0..4 {
            carousel.advance();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
        assert_eq!(carousel.current(), Some(&"b"));
    }

    #[test]
    fn empty_list_stays_put() {
        let mut carousel: Carousel<&str> = Carousel::new(&[]);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.current().is_none());
    }
}
