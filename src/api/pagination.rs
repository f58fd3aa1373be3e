//! Page slicing for question lists.

/// Fixed page size for every paginated route.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`: the slice at offset
/// `(page - 1) * QUESTIONS_PER_PAGE`, at most `QUESTIONS_PER_PAGE` long.
///
/// Pages past the end yield an empty vector. Pages below 1 clamp to 1,
/// so a negative `page` query parameter behaves like the default.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let page = page.max(1) as usize;
    // Saturate so an absurdly large page number is an empty slice, not
    // an arithmetic overflow
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
