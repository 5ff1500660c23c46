//! Paged free list configuration parameters.

/// Configuration for a [`PagedFreeList`](crate::PagedFreeList).
///
/// Controls page sizing. Normalised at construction; immutable once the
/// list has been created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageListConfig {
    /// Number of slots in every page.
    ///
    /// Default: 1024. A requested size of zero is replaced by the default.
    page_size: usize,
}

impl PageListConfig {
    /// Default number of slots per page.
    pub const DEFAULT_PAGE_SIZE: usize = 1024;

    /// Create a config with the given page size.
    ///
    /// A `page_size` of zero selects [`DEFAULT_PAGE_SIZE`](Self::DEFAULT_PAGE_SIZE);
    /// any other value is used verbatim.
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            Self::DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { page_size }
    }

    /// Number of slots in every page. Always non-zero.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for PageListConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_falls_back_to_default() {
        let config = PageListConfig::new(0);
        assert_eq!(config.page_size(), 1024);
    }

    #[test]
    fn explicit_page_size_preserved() {
        assert_eq!(PageListConfig::new(1).page_size(), 1);
        assert_eq!(PageListConfig::new(5).page_size(), 5);
        assert_eq!(PageListConfig::new(4096).page_size(), 4096);
    }

    #[test]
    fn default_matches_constant() {
        assert_eq!(
            PageListConfig::default().page_size(),
            PageListConfig::DEFAULT_PAGE_SIZE
        );
    }
}
