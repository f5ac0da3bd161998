//! Page navigation state machine
//!
//! The navigator owns the current page index and nothing else. Moving past
//! either end is clamped: the call is a no-op rather than an error. Whoever
//! draws the pages subscribes through [`PageObserver`] and is told which page
//! to show each time the index actually changes.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("a wizard needs at least one page")]
    NoPages,
}

/// Receives "show page N" instructions from the navigator.
pub trait PageObserver {
    fn show_page(&mut self, index: usize);
}

impl<F: FnMut(usize)> PageObserver for F {
    fn show_page(&mut self, index: usize) {
        self(index)
    }
}

/// Observer that ignores every notification.
pub struct Detached;

impl PageObserver for Detached {
    fn show_page(&mut self, _index: usize) {}
}

pub struct PageNavigator<O: PageObserver = Detached> {
    page_count: usize,
    current_index: usize,
    observer: O,
}

impl PageNavigator<Detached> {
    pub fn new(page_count: usize) -> Result<Self, NavigatorError> {
        Self::with_observer(page_count, Detached)
    }
}

impl<O: PageObserver> PageNavigator<O> {
    /// Create a navigator positioned on the first page.
    ///
    /// The observer is not notified of the initial page; the caller draws
    /// page 0 itself.
    pub fn with_observer(page_count: usize, observer: O) -> Result<Self, NavigatorError> {
        if page_count == 0 {
            return Err(NavigatorError::NoPages);
        }
        Ok(Self {
            page_count,
            current_index: 0,
            observer,
        })
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.page_count {
            self.current_index += 1;
            self.observer.show_page(self.current_index);
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.observer.show_page(self.current_index);
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_zero_pages_rejected() {
        assert_eq!(PageNavigator::new(0).err(), Some(NavigatorError::NoPages));
    }

    #[test]
    fn test_starts_on_first_page() {
        let nav = PageNavigator::new(3).unwrap();
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.page_count(), 3);
        assert!(nav.is_first());
        assert!(!nav.is_last());
    }

    #[test]
    fn test_previous_clamps_at_first_page() {
        let mut nav = PageNavigator::new(3).unwrap();
        assert!(!nav.previous());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut nav = PageNavigator::new(3).unwrap();
        nav.next();
        nav.next();
        assert!(nav.is_last());
        for _ in 0..5 {
            assert!(!nav.next());
            assert_eq!(nav.current_index(), 2);
        }
    }

    #[test]
    fn test_three_page_walkthrough() {
        let mut nav = PageNavigator::new(3).unwrap();
        let mut visited = Vec::new();
        for step in ["next", "next", "next", "prev", "prev", "prev"] {
            match step {
                "next" => nav.next(),
                _ => nav.previous(),
            };
            visited.push(nav.current_index());
        }
        assert_eq!(visited, vec![1, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn test_single_page_never_moves() {
        let mut nav = PageNavigator::new(1).unwrap();
        assert!(nav.is_first() && nav.is_last());
        assert!(!nav.next());
        assert!(!nav.previous());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_observer_notified_only_on_moves() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let mut nav =
            PageNavigator::with_observer(3, move |i: usize| sink.borrow_mut().push(i)).unwrap();

        nav.previous();
        nav.next();
        nav.next();
        nav.next();
        nav.previous();

        assert_eq!(*shown.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_sequences() {
        // Deterministic pseudo-random walk over several page counts
        let mut seed: u32 = 0x5eed;
        for page_count in 1..=6 {
            let mut nav = PageNavigator::new(page_count).unwrap();
            for _ in 0..200 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if (seed >> 16) & 1 == 0 {
                    nav.next();
                } else {
                    nav.previous();
                }
                assert!(nav.current_index() < page_count);
            }
        }
    }
}
