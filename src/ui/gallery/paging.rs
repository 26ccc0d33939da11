// SPDX-License-Identifier: MPL-2.0
//! Page arithmetic for the photo gallery.

use std::ops::Range;

/// Number of pages needed for `len` items. Zero items means zero pages.
#[must_use]
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Clamps `page` into the valid range for `len` items.
#[must_use]
pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.min(page_count(len, per_page).saturating_sub(1))
}

/// Indices of the items shown on `page`. Out-of-range pages are clamped.
#[must_use]
pub fn page_range(page: usize, len: usize, per_page: usize) -> Range<usize> {
    if len == 0 || per_page == 0 {
        return 0..0;
    }
    let start = clamp_page(page, len, per_page) * per_page;
    start..(start + per_page).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_photos_fit_on_one_page() {
        assert_eq!(page_count(2, 4), 1);
        assert_eq!(page_range(0, 2, 4), 0..2);
    }

    #[test]
    fn partial_last_page() {
        assert_eq!(page_count(9, 4), 3);
        assert_eq!(page_range(2, 9, 4), 8..9);
    }

    #[test]
    fn empty_list_has_no_pages() {
        assert_eq!(page_count(0, 4), 0);
        assert_eq!(page_range(0, 0, 4), 0..0);
        assert_eq!(clamp_page(3, 0, 4), 0);
    }

    #[test]
    fn page_past_the_end_shows_last_page() {
        assert_eq!(clamp_page(7, 8, 4), 1);
        assert_eq!(page_range(7, 8, 4), 4..8);
    }

    #[test]
    fn zero_per_page_is_degenerate() {
        assert_eq!(page_count(5, 0), 0);
        assert_eq!(page_range(0, 5, 0), 0..0);
    }
}
