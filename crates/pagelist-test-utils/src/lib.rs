//! Test utilities and reference models for pagelist development.
//!
//! Provides an invariant checker for [`PagedFreeList`], a [`ModelList`]
//! reference model whose ordering mirrors the list's physical layout, a
//! [`dump`] routine for eyeballing slot state, and [`init_tracing`] for
//! seeing the list's `tracing` events in test output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use pagelist::{PagedFreeList, Slot, SlotHandle};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness.
///
/// Reads `RUST_LOG`, falling back to `PAGELIST_LOG`, defaulting to `warn`.
/// Safe to call from every test: only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PAGELIST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Assert every structural invariant of `list`.
///
/// - every slot is either occupied or on the free chain, never both;
/// - the chain is acyclic and ends in `None`;
/// - `len()` equals the number of occupied slots.
///
/// # Panics
///
/// Panics with a description of the first violated invariant.
pub fn assert_invariants<T>(list: &PagedFreeList<T>) {
    let mut occupied = 0usize;
    let mut free = HashSet::new();
    let mut total = 0usize;
    for (handle, slot) in list.slots() {
        total += 1;
        match slot {
            Slot::Occupied(_) => occupied += 1,
            Slot::Free { .. } => {
                free.insert(handle);
            }
        }
    }

    assert_eq!(total, list.capacity(), "slot count disagrees with capacity");
    assert_eq!(occupied, list.len(), "len() disagrees with occupied slots");
    assert_eq!(
        free.len(),
        list.free_count(),
        "free_count() disagrees with free slots"
    );

    let mut seen = HashSet::new();
    let mut cursor = list.free_head();
    while let Some(handle) = cursor {
        assert!(
            free.contains(&handle),
            "free chain reaches {handle}, which is not a free slot"
        );
        assert!(seen.insert(handle), "free chain revisits {handle}");
        cursor = match list.slot(handle) {
            Some(Slot::Free { next }) => *next,
            _ => unreachable!("membership in `free` checked above"),
        };
    }
    assert_eq!(
        seen.len(),
        free.len(),
        "{} free slots are unreachable from the free-list head",
        free.len() - seen.len()
    );
}

/// Reference model of a [`PagedFreeList`]'s live contents.
///
/// Keys are handles, and handles order by page then slot, so in-order
/// values are exactly what a full traversal of the real list must yield.
#[derive(Clone, Debug)]
pub struct ModelList<T> {
    live: BTreeMap<SlotHandle, T>,
    pushes: usize,
    removes: usize,
}

impl<T: Clone + PartialEq + fmt::Debug> ModelList<T> {
    pub fn new() -> Self {
        Self {
            live: BTreeMap::new(),
            pushes: 0,
            removes: 0,
        }
    }

    /// Push into both the real list and the model.
    ///
    /// # Panics
    ///
    /// Panics if the real list hands out a handle that is already live.
    pub fn push(&mut self, list: &mut PagedFreeList<T>, value: T) -> SlotHandle {
        let handle = list.push(value.clone());
        let previous = self.live.insert(handle, value);
        assert!(previous.is_none(), "{handle} handed out while still live");
        self.pushes += 1;
        handle
    }

    /// Remove from both the real list and the model, returning the value
    /// the real list gave back.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is not live in the model, or if the real list
    /// returns a different value than the model holds.
    pub fn remove(&mut self, list: &mut PagedFreeList<T>, handle: SlotHandle) -> T {
        let expected = self
            .live
            .remove(&handle)
            .unwrap_or_else(|| panic!("{handle} is not live in the model"));
        self.removes += 1;
        let actual = list.remove(handle);
        assert_eq!(actual, expected, "{handle} removed the wrong value");
        actual
    }

    /// The `n`th live handle in layout order, wrapping around.
    pub fn nth_handle(&self, n: usize) -> Option<SlotHandle> {
        if self.live.is_empty() {
            return None;
        }
        self.live.keys().nth(n % self.live.len()).copied()
    }

    /// Live values in the order a traversal must produce them.
    pub fn values(&self) -> Vec<T> {
        self.live.values().cloned().collect()
    }

    /// Live `(handle, value)` pairs in layout order.
    pub fn entries(&self) -> impl Iterator<Item = (SlotHandle, &T)> + '_ {
        self.live.iter().map(|(&handle, value)| (handle, value))
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Pushes minus removes; must always equal [`len`](Self::len).
    pub fn net_pushes(&self) -> usize {
        self.pushes - self.removes
    }
}

impl<T: Clone + PartialEq + fmt::Debug> Default for ModelList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the free-list head and every slot of `list`, one per line.
///
/// ```text
/// free_head = SlotHandle(page=0, slot=1)
/// page[0][0] occupied 7
/// page[0][1] free -> SlotHandle(page=0, slot=2)
/// page[0][2] free -> end
/// ```
pub fn dump<T: fmt::Debug>(list: &PagedFreeList<T>) -> String {
    let mut out = match list.free_head() {
        Some(head) => format!("free_head = {head}\n"),
        None => "free_head = end\n".to_string(),
    };
    for (handle, slot) in list.slots() {
        let state = match slot {
            Slot::Occupied(value) => format!("occupied {value:?}"),
            Slot::Free { next: Some(next) } => format!("free -> {next}"),
            Slot::Free { next: None } => "free -> end".to_string(),
        };
        out.push_str(&format!(
            "page[{}][{}] {state}\n",
            handle.page(),
            handle.slot()
        ));
    }
    out
}
