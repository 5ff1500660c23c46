//! Paged free list error types.

use std::error::Error;
use std::fmt;

use crate::handle::SlotHandle;

/// Errors reported by the checked operations of a
/// [`PagedFreeList`](crate::PagedFreeList).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageListError {
    /// The handle names a page or slot that this list never allocated.
    UnknownHandle {
        /// The offending handle.
        handle: SlotHandle,
        /// Number of pages the list currently owns.
        page_count: usize,
    },
    /// The handle names a slot that is currently free (already removed).
    VacantSlot {
        /// The offending handle.
        handle: SlotHandle,
    },
}

impl fmt::Display for PageListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHandle { handle, page_count } => {
                write!(f, "unknown handle: {handle} (list owns {page_count} pages)")
            }
            Self::VacantSlot { handle } => {
                write!(f, "vacant slot: {handle} is not occupied")
            }
        }
    }
}

impl Error for PageListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_handle() {
        let err = PageListError::UnknownHandle {
            handle: SlotHandle::new(7, 1),
            page_count: 2,
        };
        assert_eq!(
            err.to_string(),
            "unknown handle: SlotHandle(page=7, slot=1) (list owns 2 pages)"
        );
    }

    #[test]
    fn display_vacant_slot() {
        let err = PageListError::VacantSlot {
            handle: SlotHandle::new(0, 3),
        };
        assert!(err.to_string().contains("not occupied"));
    }
}
