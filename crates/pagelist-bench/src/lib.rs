//! Workload builders shared by the pagelist benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use pagelist::{PagedFreeList, SlotHandle};

/// A list holding `0..count` plus the handle of every value.
pub fn filled_list(page_size: usize, count: u64) -> (PagedFreeList<u64>, Vec<SlotHandle>) {
    let mut list = PagedFreeList::new(page_size);
    let handles = (0..count).map(|i| list.push(i)).collect();
    (list, handles)
}

/// Remove and re-push every `stride`th handle, updating `handles` in place.
///
/// Returns the sum of removed values so the work cannot be optimised away.
pub fn churn(list: &mut PagedFreeList<u64>, handles: &mut [SlotHandle], stride: usize) -> u64 {
    let mut sum = 0;
    for h in handles.iter_mut().step_by(stride.max(1)) {
        let value = list.remove(*h);
        sum += value;
        *h = list.push(value + 1);
    }
    sum
}

/// Sum every value through `for_each`.
pub fn sum_values(list: &PagedFreeList<u64>) -> u64 {
    let mut sum = 0;
    list.for_each(|&v| {
        sum += v;
        false
    });
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn churn_keeps_len_and_pages() {
        let (mut list, mut handles) = filled_list(64, 1000);
        let pages = list.page_count();
        let removed = churn(&mut list, &mut handles, 10);
        assert_eq!(removed, (0..1000).step_by(10).sum::<u64>());
        assert_eq!(list.len(), 1000);
        assert_eq!(list.page_count(), pages);
        assert_eq!(sum_values(&list), (0..1000).sum::<u64>() + 100);
    }
}
