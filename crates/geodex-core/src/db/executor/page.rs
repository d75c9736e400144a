use crate::{
    db::{
        cursor::{TokenBudget, decode_cursor, encode_cursor},
        order::{SortField, sort_value},
    },
    error::InternalError,
    model::{building::Building, rating::RatingScale},
    obs::sink::{MetricsEvent, record},
};

///
/// PageWindow
///
/// One bounded slice of an ordered sequence plus the continuation cursor,
/// present only when the page is full and records remain past it.
///

#[derive(Clone, Debug, PartialEq)]
pub struct PageWindow<'a> {
    pub rows: Vec<&'a Building>,
    pub next_cursor: Option<String>,
    pub start_index: usize,
}

impl PageWindow<'_> {
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Slice one page out of `sorted`, resuming strictly after `cursor`.
///
/// `sorted` must already be ordered by [`crate::db::order::apply_order`] under
/// the same `field` and `scale`. An unusable cursor, or one every record
/// precedes, resumes at the first record. Cursor size limits are sized from
/// `sorted`, so every cursor this returns can be read back against it.
pub fn paginate<'a>(
    sorted: &[&'a Building],
    cursor: Option<&str>,
    page_size: usize,
    field: SortField,
    scale: &RatingScale,
) -> Result<PageWindow<'a>, InternalError> {
    if page_size == 0 {
        return Err(InternalError::executor_invariant(
            "page size must be at least 1",
        ));
    }

    let budget = TokenBudget::for_rows(sorted, field);
    let start_index = cursor.map_or(0, |token| resume_index(sorted, token, field, scale, budget));
    let end_index = start_index.saturating_add(page_size).min(sorted.len());
    let rows = sorted[start_index..end_index].to_vec();

    let next_cursor = match rows.last() {
        Some(last) if rows.len() == page_size && end_index < sorted.len() => {
            Some(encode_cursor(field, &sort_value(last, field), &last.id, budget)?)
        }
        _ => None,
    };

    tracing::trace!(
        start_index,
        rows = rows.len(),
        has_more = next_cursor.is_some(),
        "page sliced"
    );

    Ok(PageWindow {
        rows,
        next_cursor,
        start_index,
    })
}

// Locate the first record strictly after the cursor anchor.
// Linear scan; the input is small enough that a seek index is not needed.
fn resume_index(
    sorted: &[&Building],
    token: &str,
    field: SortField,
    scale: &RatingScale,
    budget: TokenBudget,
) -> usize {
    let Some(anchor) = decode_cursor(token, field, budget) else {
        record(MetricsEvent::CursorFallback);
        return 0;
    };
    let Some(resolved) = anchor.resolve(field, scale) else {
        tracing::debug!(sort = %field, "cursor value does not fit sort field; restarting");
        record(MetricsEvent::CursorFallback);
        return 0;
    };

    sorted
        .iter()
        .position(|building| resolved.is_passed_by(building))
        .unwrap_or(0)
}
