//! Slot handles.
//!
//! A [`SlotHandle`] names one slot by its page index and its position
//! within that page. Pages are append-only and never resized, so a handle
//! keeps pointing at the same storage for the whole life of the list.

use std::fmt;

/// Stable reference to one slot of a [`PagedFreeList`](crate::PagedFreeList).
///
/// Returned by [`push`](crate::PagedFreeList::push) and consumed by
/// [`remove`](crate::PagedFreeList::remove). After removal the slot may be
/// handed out again by a later push, so a removed handle must be discarded.
///
/// Handles order by page, then slot: the same order that traversal uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Index into the list's page table.
    pub(crate) page: usize,
    /// Index within the page.
    pub(crate) slot: usize,
}

impl SlotHandle {
    pub(crate) fn new(page: usize, slot: usize) -> Self {
        Self { page, slot }
    }

    /// Index of the page holding this slot, in allocation order.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Position of the slot within its page.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(page={}, slot={})", self.page, self.slot)
    }
}
