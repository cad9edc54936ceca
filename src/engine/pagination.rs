//! # Pagination
//!
//! Fixed-size, 1-indexed pages over an id-ordered question list.
//!
//! Two checks are involved. The slice itself is half-open
//! `[(page-1)*size, page*size)` and simply yields fewer rows past the end.
//! The up-front boundary check is coarser and depends on [`PageBoundary`].

use serde::{Deserialize, Serialize};

/// Number of questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Which page numbers are accepted before slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageBoundary {
    /// Reject `page > floor(total / size)`.
    ///
    /// A trailing partial page is never served, and a table with fewer than
    /// `size` questions has no servable page at all. Kept as the default for
    /// compatibility with existing clients.
    #[default]
    FullPagesOnly,

    /// Reject only pages that start past the last question.
    AnyNonEmptyPage,
}

impl PageBoundary {
    /// Whether `page` passes the boundary check for a table of `total` rows.
    /// Non-positive pages always pass and slice to nothing.
    pub fn admits(self, page: i64, total: usize) -> bool {
        if page < 1 {
            return true;
        }
        let total = total as u128;
        let size = QUESTIONS_PER_PAGE as u128;
        let page = page as u128;
        match self {
            PageBoundary::FullPagesOnly => page * size <= total,
            PageBoundary::AnyNonEmptyPage => (page - 1) * size < total,
        }
    }
}

/// Clone out the rows of a 1-indexed page
pub fn slice_page<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            items[start..end].to_vec()
        }
        _ => Vec::new(),
    }
}
