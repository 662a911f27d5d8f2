//! Display plan: sorted, capped sections shared by grouped and flattened rendering

use crate::model::{Publication, PublicationSet, Year};
use std::cmp::Ordering;

/// A year and the items of that year that made it past the cap
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub year: &'a Year,
    pub items: Vec<&'a Publication>,
}

/// Sort groups by descending year and apply the global item cap in display order.
///
/// Groups compare stably, so equal years keep their source order; groups without a
/// numeric year sort last. `limit` of `None` means unlimited. Groups that end up with
/// no items are dropped.
pub fn layout(set: &PublicationSet, limit: Option<usize>) -> Vec<Section<'_>> {
    let mut groups: Vec<_> = set.years.iter().collect();
    groups.sort_by(|a, b| compare_years(&a.year, &b.year));

    let mut remaining = limit.unwrap_or(usize::MAX);
    let mut sections = Vec::new();

    for group in groups {
        if remaining == 0 {
            break;
        }
        let items: Vec<_> = group.items.iter().take(remaining).collect();
        if items.is_empty() {
            continue;
        }
        remaining -= items.len();
        sections.push(Section {
            year: &group.year,
            items,
        });
    }

    sections
}

/// Descending by numeric key, non-numeric years last
fn compare_years(a: &Year, b: &Year) -> Ordering {
    match (a.key(), b.key()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
