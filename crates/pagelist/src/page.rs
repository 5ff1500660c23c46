//! Fixed-size pages of slots.
//!
//! A [`Page`] is a boxed slice of [`Slot`]s allocated in one go. The slice
//! length is fixed at creation: a page is never resized, reallocated, or
//! freed while its list lives. Free slots hold the handle of the next free
//! slot, so the free list needs no storage of its own.

use crate::handle::SlotHandle;

/// One storage cell of a page.
///
/// The occupied/free distinction lives in the variant tag, so no user value
/// can ever be mistaken for free-list linkage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// Holds a live user value.
    Occupied(T),
    /// Unoccupied; links to the next free slot in the chain.
    Free {
        /// Next free slot, or `None` at the end of the chain.
        next: Option<SlotHandle>,
    },
}

impl<T> Slot<T> {
    /// Whether the slot currently holds a value.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// The held value, if occupied.
    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }
}

/// A fixed-length run of slots.
pub(crate) struct Page<T> {
    slots: Box<[Slot<T>]>,
}

impl<T> Page<T> {
    /// Allocate page number `index` with `size` free slots.
    ///
    /// Slot `i` links to slot `i + 1`; the last slot links to `tail`, which
    /// is the free-list head from before this page existed. The caller sets
    /// the new head to slot 0 of this page.
    pub(crate) fn new(index: usize, size: usize, tail: Option<SlotHandle>) -> Self {
        debug_assert!(size > 0, "pages must hold at least one slot");
        let slots = (0..size)
            .map(|i| Slot::Free {
                next: if i + 1 < size {
                    Some(SlotHandle::new(index, i + 1))
                } else {
                    tail
                },
            })
            .collect();
        Self { slots }
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&Slot<T>> {
        self.slots.get(slot)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut Slot<T>> {
        self.slots.get_mut(slot)
    }

    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_of(page: &Page<u32>, slot: usize) -> Option<SlotHandle> {
        match page.get(slot) {
            Some(Slot::Free { next }) => *next,
            other => panic!("slot {slot} not free: {other:?}"),
        }
    }

    #[test]
    fn new_page_is_all_free() {
        let page: Page<u32> = Page::new(0, 8, None);
        assert_eq!(page.slots().len(), 8);
        assert!(page.slots().iter().all(|s| !s.is_occupied()));
    }

    #[test]
    fn slots_chain_forward_within_page() {
        let page: Page<u32> = Page::new(2, 4, None);
        assert_eq!(next_of(&page, 0), Some(SlotHandle::new(2, 1)));
        assert_eq!(next_of(&page, 1), Some(SlotHandle::new(2, 2)));
        assert_eq!(next_of(&page, 2), Some(SlotHandle::new(2, 3)));
        assert_eq!(next_of(&page, 3), None);
    }

    #[test]
    fn last_slot_splices_previous_chain() {
        let tail = SlotHandle::new(0, 5);
        let page: Page<u32> = Page::new(1, 3, Some(tail));
        assert_eq!(next_of(&page, 2), Some(tail));
    }

    #[test]
    fn single_slot_page_links_straight_to_tail() {
        let tail = SlotHandle::new(4, 0);
        let page: Page<u32> = Page::new(5, 1, Some(tail));
        assert_eq!(next_of(&page, 0), Some(tail));
    }

    #[test]
    fn out_of_range_slot_is_none() {
        let page: Page<u32> = Page::new(0, 2, None);
        assert!(page.get(2).is_none());
    }

    #[test]
    fn slot_value_accessors() {
        let mut occupied = Slot::Occupied(7u32);
        assert!(occupied.is_occupied());
        assert_eq!(occupied.value(), Some(&7));
        *occupied.value_mut().unwrap() = 8;
        assert_eq!(occupied.value(), Some(&8));

        let free: Slot<u32> = Slot::Free { next: None };
        assert!(!free.is_occupied());
        assert_eq!(free.value(), None);
    }
}
