//! Page slicing over ordered result lists

use std::num::IntErrorKind;

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number
///
/// Construction normalizes anything below 1 to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(page: usize) -> Self {
        Self(page.max(1))
    }

    /// Interpret a raw `page` query value.
    ///
    /// Absent, non-numeric, zero and negative values all select page 1.
    /// Positive values too large to represent saturate, so they select a
    /// page past the end rather than the first one.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::FIRST;
        };
        match raw.parse::<i64>() {
            Ok(n) if n < 1 => Self::FIRST,
            Ok(n) => Self::new(usize::try_from(n).unwrap_or(usize::MAX)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Self(usize::MAX),
            Err(_) => Self::FIRST,
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open `[start, end)` bounds of a page, before clamping to a length
pub fn page_bounds(page: usize, page_size: usize) -> (usize, usize) {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    (start, start.saturating_add(page_size))
}

/// Slice one page out of `items`
///
/// Out-of-range pages yield an empty slice and a trailing partial page
/// yields fewer than `page_size` items. Page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let (start, end) = page_bounds(page, page_size);
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}
