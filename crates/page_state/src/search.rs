/// Minimum number of characters before typed input triggers a resubmission.
/// A cleared field (length zero) always qualifies so the unfiltered list
/// comes back.
pub const MIN_SEARCH_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDisposition {
    /// Schedule a debounced form resubmission.
    Resubmit,
    /// Drop any pending resubmission and schedule nothing.
    CancelPending,
}

pub fn disposition(value: &str) -> SearchDisposition {
    let len = value.chars().count();
    if len == 0 || len >= MIN_SEARCH_LEN {
        SearchDisposition::Resubmit
    } else {
        SearchDisposition::CancelPending
    }
}
