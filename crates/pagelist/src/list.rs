//! The paged free list.
//!
//! [`PagedFreeList`] stores values in fixed-size pages and threads a
//! singly-linked free list through the unoccupied slots themselves. Push
//! pops the free-list head, remove pushes the slot back on, and a new page
//! is appended only when the chain runs dry.
//!
//! ```text
//! PagedFreeList
//! ├── pages: Vec<Page>           append-only, each a Box<[Slot]>
//! │   ├── page 0: [Occupied(a)] [Free → 0:3] [Occupied(c)] [Free → None]
//! │   └── page 1: [Free → 0:1]  [Occupied(e)] ...
//! └── free_head ─► 1:0 ─► 0:1 ─► 0:3 ─► None
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::PageListConfig;
use crate::error::PageListError;
use crate::handle::SlotHandle;
use crate::iter::{Entries, FreeHandles, Iter, IterMut};
use crate::page::{Page, Slot};

/// A paged slot arena with intrusive free-list reuse.
///
/// Values are addressed by [`SlotHandle`]s that stay valid until the value
/// is removed. Push and remove are O(1); traversal visits occupied slots in
/// page/slot order.
///
/// The list is not internally synchronised. Sharing it between threads
/// requires external locking, which `&mut self` on every mutator enforces.
///
/// # Handle contract
///
/// A handle must be passed to [`remove`](Self::remove) at most once. A
/// second removal of the same handle is detected (the slot is free) and
/// panics rather than corrupting the free list; use
/// [`try_remove`](Self::try_remove) for a non-panicking check. A handle from
/// a *different* list that happens to be in range is not detected.
pub struct PagedFreeList<T> {
    /// Every page ever allocated, in allocation order. Never shrinks.
    pages: Vec<Page<T>>,
    /// First free slot, or `None` when every slot is occupied.
    free_head: Option<SlotHandle>,
    /// Slots per page, fixed at construction.
    page_size: usize,
    /// Number of occupied slots.
    len: usize,
}

impl<T> PagedFreeList<T> {
    /// Default number of slots per page.
    pub const DEFAULT_PAGE_SIZE: usize = PageListConfig::DEFAULT_PAGE_SIZE;

    /// Create an empty list with `page_size` slots per page.
    ///
    /// A `page_size` of zero selects [`DEFAULT_PAGE_SIZE`](Self::DEFAULT_PAGE_SIZE).
    /// No page is allocated until the first push.
    pub fn new(page_size: usize) -> Self {
        Self::with_config(PageListConfig::new(page_size))
    }

    /// Create an empty list from a config.
    pub fn with_config(config: PageListConfig) -> Self {
        Self {
            pages: Vec::new(),
            free_head: None,
            page_size: config.page_size(),
            len: 0,
        }
    }

    /// Store `value` and return a handle to its slot.
    ///
    /// Reuses the most recently freed slot if there is one, otherwise
    /// appends a fresh page.
    pub fn push(&mut self, value: T) -> SlotHandle {
        let handle = match self.free_head {
            Some(head) => head,
            None => self.append_page(),
        };
        let slot = self.pages[handle.page]
            .get_mut(handle.slot)
            .expect("free-list head lies within its page");
        let next = match std::mem::replace(slot, Slot::Occupied(value)) {
            Slot::Free { next } => next,
            Slot::Occupied(_) => unreachable!("free-list head {handle} was occupied"),
        };
        self.free_head = next;
        self.len += 1;
        tracing::trace!(%handle, len = self.len, "push");
        handle
    }

    /// Remove the value at `handle` and return it.
    ///
    /// The slot becomes the new free-list head, so the next push reuses it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not live in this list (already removed, or out
    /// of range). See [`try_remove`](Self::try_remove).
    pub fn remove(&mut self, handle: SlotHandle) -> T {
        match self.try_remove(handle) {
            Ok(value) => value,
            Err(err) => panic!("PagedFreeList::remove: {err}"),
        }
    }

    /// Remove the value at `handle`, or report why the handle is not live.
    ///
    /// On error the list is left untouched.
    pub fn try_remove(&mut self, handle: SlotHandle) -> Result<T, PageListError> {
        let page_count = self.pages.len();
        let free_head = self.free_head;
        let slot = self
            .pages
            .get_mut(handle.page)
            .and_then(|page| page.get_mut(handle.slot))
            .ok_or(PageListError::UnknownHandle { handle, page_count })?;
        if !slot.is_occupied() {
            return Err(PageListError::VacantSlot { handle });
        }
        let value = match std::mem::replace(slot, Slot::Free { next: free_head }) {
            Slot::Occupied(value) => value,
            Slot::Free { .. } => unreachable!("occupancy checked above"),
        };
        self.free_head = Some(handle);
        self.len -= 1;
        tracing::trace!(%handle, len = self.len, "remove");
        Ok(value)
    }

    /// Visit every value in page/slot order until `visit` returns `true`.
    ///
    /// Returning `true` stops the traversal immediately; the remaining
    /// values are not visited.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        for value in self.iter() {
            if visit(value) {
                return;
            }
        }
    }

    /// Number of live values. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shared reference to the value at `handle`, if it is live.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        self.slot(handle)?.value()
    }

    /// Mutable reference to the value at `handle`, if it is live.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        self.pages
            .get_mut(handle.page)?
            .get_mut(handle.slot)?
            .value_mut()
    }

    /// Whether `handle` currently names an occupied slot.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Iterate over values in page/slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.pages, self.len)
    }

    /// Iterate mutably over values in page/slot order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.pages, self.len)
    }

    /// Iterate over `(handle, value)` pairs in page/slot order.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(&self.pages, self.len)
    }

    /// Ensure at least `additional` pushes can happen without allocating.
    ///
    /// New pages are spliced in front of the existing free chain, so slots
    /// that were already free stay reachable.
    pub fn reserve(&mut self, additional: usize) {
        let before = self.pages.len();
        while self.free_count() < additional {
            let _ = self.append_page();
        }
        let added = self.pages.len() - before;
        if added > 0 {
            tracing::debug!(
                additional,
                pages_added = added,
                capacity = self.capacity(),
                "reserved pages"
            );
        }
    }

    /// Slots per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages allocated so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total slots across all pages, occupied or free.
    pub fn capacity(&self) -> usize {
        self.pages.len() * self.page_size
    }

    /// Number of free slots. Every slot not occupied is on the free list.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.len
    }

    /// The slot the next push will fill, if no page needs allocating.
    pub fn free_head(&self) -> Option<SlotHandle> {
        self.free_head
    }

    /// Walk the free list from its head, yielding each free slot's handle
    /// in the order pushes will consume them.
    pub fn free_handles(&self) -> FreeHandles<'_, T> {
        FreeHandles::new(self)
    }

    /// Raw view of the slot at `handle`, occupied or free.
    pub fn slot(&self, handle: SlotHandle) -> Option<&Slot<T>> {
        self.pages.get(handle.page)?.get(handle.slot)
    }

    /// Every slot with its handle, in page/slot order, including free ones.
    pub fn slots(&self) -> impl Iterator<Item = (SlotHandle, &Slot<T>)> + '_ {
        self.pages.iter().enumerate().flat_map(|(page_index, page)| {
            page.slots()
                .iter()
                .enumerate()
                .map(move |(slot_index, slot)| (SlotHandle::new(page_index, slot_index), slot))
        })
    }

    /// Append a page, splice it in front of the current free chain, and
    /// return its first slot (the new free-list head).
    fn append_page(&mut self) -> SlotHandle {
        let index = self.pages.len();
        self.pages
            .push(Page::new(index, self.page_size, self.free_head));
        let head = SlotHandle::new(index, 0);
        self.free_head = Some(head);
        tracing::debug!(
            page = index,
            page_size = self.page_size,
            capacity = self.capacity(),
            "allocated page"
        );
        head
    }
}

impl<T> Default for PagedFreeList<T> {
    fn default() -> Self {
        Self::with_config(PageListConfig::default())
    }
}

impl<T> Extend<T> for PagedFreeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.push(value);
        }
    }
}

impl<T> Index<SlotHandle> for PagedFreeList<T> {
    type Output = T;

    fn index(&self, handle: SlotHandle) -> &T {
        match self.get(handle) {
            Some(value) => value,
            None => panic!("PagedFreeList: no live value at {handle}"),
        }
    }
}

impl<T> IndexMut<SlotHandle> for PagedFreeList<T> {
    fn index_mut(&mut self, handle: SlotHandle) -> &mut T {
        match self.get_mut(handle) {
            Some(value) => value,
            None => panic!("PagedFreeList: no live value at {handle}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PagedFreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedFreeList")
            .field("len", &self.len)
            .field("page_size", &self.page_size)
            .field("page_count", &self.pages.len())
            .field("free_head", &self.free_head)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
