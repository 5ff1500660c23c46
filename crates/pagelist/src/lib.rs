//! Paged slot arena with intrusive free-list reuse.
//!
//! A [`PagedFreeList`] behaves like a singly-linked list whose nodes live in
//! bulk-allocated, fixed-size pages instead of individual heap boxes. Each
//! push hands back a [`SlotHandle`] that stays valid until the value is
//! removed, removal is O(1) through that handle, and traversal walks the
//! pages in allocation order.
//!
//! # Architecture
//!
//! ```text
//! PagedFreeList<T>
//! ├── Vec<Page<T>>            append-only page table
//! │   └── Box<[Slot<T>]>      fixed length, never resized
//! │       ├── Slot::Occupied(T)
//! │       └── Slot::Free { next: Option<SlotHandle> }
//! └── free_head: Option<SlotHandle>
//! ```
//!
//! Free slots store the link to the next free slot in place, so the free
//! list costs no memory beyond the slots themselves. Pages are never freed
//! or moved while the list lives.
//!
//! # Example
//!
//! ```
//! use pagelist::PagedFreeList;
//!
//! let mut list = PagedFreeList::new(4);
//! let a = list.push("a");
//! let b = list.push("b");
//! let _c = list.push("c");
//!
//! assert_eq!(list.remove(b), "b");
//! assert_eq!(list[a], "a");
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "c"]);
//!
//! // The freed slot is reused by the next push.
//! assert_eq!(list.push("d"), b);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod iter;
pub mod list;
pub mod page;

// Public re-exports for the primary API surface.
pub use config::PageListConfig;
pub use error::PageListError;
pub use handle::SlotHandle;
pub use list::PagedFreeList;
pub use page::Slot;
