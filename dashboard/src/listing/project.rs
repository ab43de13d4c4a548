use crate::listing::filter::{matches_filter, FilterConfig, Listed};

/// One visible page of a filtered list, plus the totals the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a, R> {
    /// Records on the effective page, in their original store order
    pub page_records: Vec<&'a R>,
    /// How many records survive the filter
    pub total_filtered: usize,
    /// Page count for the pager; at least 1 even for an empty result
    pub total_pages: usize,
    /// Requested page clamped into `[1, total_pages]`
    pub effective_page: usize,
}

/// Produces the visible page of `records` under `config`.
///
/// The filter is stable: surviving records keep their relative order. The
/// requested 1-based page is clamped rather than rejected, so a pager that
/// points past the end after a deletion still renders the last page. A
/// `page_size` of 0 is treated as 1.
pub fn project<'a, R: Listed>(
    records: &'a [R],
    config: &FilterConfig,
    page: usize,
    page_size: usize,
) -> Projection<'a, R> {
    let page_size = page_size.max(1);

    let filtered: Vec<&R> = records
        .iter()
        .filter(|record| matches_filter(*record, config))
        .collect();

    let total_filtered = filtered.len();
    let total_pages = usize::max(1, total_filtered.div_ceil(page_size));
    let effective_page = page.clamp(1, total_pages);

    let start = (effective_page - 1) * page_size;
    let page_records = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Projection {
        page_records,
        total_filtered,
        total_pages,
        effective_page,
    }
}
