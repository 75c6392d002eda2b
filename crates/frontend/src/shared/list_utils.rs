//! Pagination helpers shared by the mock list screens. Pages are 1-based.

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}

/// Keep the current page inside the valid range after inserts/deletes.
pub fn clamp_page(page: usize, total: usize, per_page: usize) -> usize {
    page.clamp(1, page_count(total, per_page))
}

pub fn page_slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    if per_page == 0 {
        return Vec::new();
    }
    let start = (page.max(1) - 1) * per_page;
    items.iter().skip(start).take(per_page).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(100, 10), 10);
    }

    #[test]
    fn test_clamp_page_after_deletes() {
        // Page 3 of 21 items; deleting down to 9 items leaves one page.
        assert_eq!(clamp_page(3, 21, 10), 3);
        assert_eq!(clamp_page(3, 9, 10), 1);
        assert_eq!(clamp_page(0, 9, 10), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 3, 10), (21..=25).collect::<Vec<_>>());
        assert!(page_slice(&items, 4, 10).is_empty());
    }
}
