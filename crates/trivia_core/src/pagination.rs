//! Page slicing over ordered result sets.
//!
//! # Invariants
//! - Pages are 1-based and relative to the slice passed in, never to the
//!   whole table.
//! - A page past the end is empty; callers decide whether that is an error.

/// Default number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parses a raw `page` parameter.
///
/// Absent or non-numeric input falls back to page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(1)
}

/// Returns `items[(page-1)*page_size .. page*page_size]`, clamped to the end.
///
/// `page == 0` and `page_size == 0` both yield an empty slice.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
