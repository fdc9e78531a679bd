use page_state::{SortDirective, SortOrder};
use url::Url;

pub const SORT_PARAM: &str = "sort";
pub const ORDER_PARAM: &str = "order";

/// Reads the sort directive encoded in the address, if any. Both parameters
/// must be present and `order` must be a recognized spelling; anything else
/// leaves the directive unset. Ordering is never inferred from other
/// parameters.
pub fn read_sort(address: &Url) -> Option<SortDirective> {
    let mut column = None;
    let mut order = None;
    for (name, value) in address.query_pairs() {
        match name.as_ref() {
            SORT_PARAM => column = Some(value.into_owned()),
            ORDER_PARAM => order = value.parse::<SortOrder>().ok(),
            _ => {}
        }
    }
    Some(SortDirective {
        column: column?,
        order: order?,
    })
}

/// Rewrites `sort`/`order` on the address, preserving every other query
/// pair in place and leaving the path untouched. An existing parameter is
/// overwritten where it stands; a missing one is appended.
pub fn write_sort(address: &Url, directive: &SortDirective) -> Url {
    let mut pairs: Vec<(String, String)> = address
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    upsert(&mut pairs, SORT_PARAM, &directive.column);
    upsert(&mut pairs, ORDER_PARAM, directive.order.as_str());

    let mut rewritten = address.clone();
    rewritten
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter());
    rewritten
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match pairs.iter_mut().find(|(existing, _)| existing == name) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((name.to_string(), value.to_string())),
    }
    // Collapse duplicate spellings of the managed parameter down to the
    // first occurrence.
    let mut seen = false;
    pairs.retain(|(existing, _)| {
        if existing == name {
            if seen {
                return false;
            }
            seen = true;
        }
        true
    });
}
