//! Traversal of occupied slots in page/slot order.
//!
//! All iterators here walk pages in allocation order and slots in index
//! order, skipping free slots. This is physical layout order, not free-list
//! order, and not insertion order once slots have been reused. Each
//! iterator stops as soon as it has yielded every live value, so trailing
//! free capacity is never scanned.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::handle::SlotHandle;
use crate::list::PagedFreeList;
use crate::page::{Page, Slot};

/// Iterator over `(handle, &value)` pairs. See [`PagedFreeList::entries`].
pub struct Entries<'a, T> {
    pages: Enumerate<slice::Iter<'a, Page<T>>>,
    page: usize,
    slots: Enumerate<slice::Iter<'a, Slot<T>>>,
    remaining: usize,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(pages: &'a [Page<T>], len: usize) -> Self {
        Self {
            pages: pages.iter().enumerate(),
            page: 0,
            slots: Default::default(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (SlotHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return None;
            }
            if let Some((index, slot)) = self.slots.next() {
                if let Slot::Occupied(value) = slot {
                    self.remaining -= 1;
                    return Some((SlotHandle::new(self.page, index), value));
                }
                continue;
            }
            let (page_index, page) = self.pages.next()?;
            self.page = page_index;
            self.slots = page.slots().iter().enumerate();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
impl<T> FusedIterator for Entries<'_, T> {}

/// Iterator over `&value`. See [`PagedFreeList::iter`].
pub struct Iter<'a, T> {
    entries: Entries<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(pages: &'a [Page<T>], len: usize) -> Self {
        Self {
            entries: Entries::new(pages, len),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `&mut value`. See [`PagedFreeList::iter_mut`].
pub struct IterMut<'a, T> {
    pages: slice::IterMut<'a, Page<T>>,
    slots: slice::IterMut<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(pages: &'a mut [Page<T>], len: usize) -> Self {
        Self {
            pages: pages.iter_mut(),
            slots: Default::default(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return None;
            }
            if let Some(slot) = self.slots.next() {
                if let Some(value) = slot.value_mut() {
                    self.remaining -= 1;
                    return Some(value);
                }
                continue;
            }
            self.slots = self.pages.next()?.slots_mut().iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Walks the free-list chain from its head. See [`PagedFreeList::free_handles`].
pub struct FreeHandles<'a, T> {
    list: &'a PagedFreeList<T>,
    next: Option<SlotHandle>,
}

impl<'a, T> FreeHandles<'a, T> {
    pub(crate) fn new(list: &'a PagedFreeList<T>) -> Self {
        Self {
            list,
            next: list.free_head(),
        }
    }
}

impl<T> Iterator for FreeHandles<'_, T> {
    type Item = SlotHandle;

    fn next(&mut self) -> Option<SlotHandle> {
        let current = self.next?;
        self.next = match self.list.slot(current) {
            Some(Slot::Free { next }) => *next,
            // A broken chain ends the walk; the invariant checker reports it.
            _ => None,
        };
        Some(current)
    }
}

impl<T> FusedIterator for FreeHandles<'_, T> {}

impl<'a, T> IntoIterator for &'a PagedFreeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut PagedFreeList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
