//! Logo sorting functionality.
//!
//! All sorts are stable: logos that compare equal keep their relative order.

use crate::Logo;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Enum dispatch for sorting logos by a specific field.
pub enum SortBy {
    /// Missing timestamps compare as the epoch.
    CreatedAt,
}

impl SortBy {
    pub fn compare(&self, a: &Logo, b: &Logo) -> Ordering {
        match self {
            Self::CreatedAt => a.created_at_or_epoch().cmp(&b.created_at_or_epoch()),
        }
    }
}

/// Wrapper that applies sort order (ascending/descending) to a sort field.
pub struct OrderedSorter {
    sorter: SortBy,
    order: SortOrder,
}

impl OrderedSorter {
    pub fn new(sorter: SortBy, order: SortOrder) -> Self {
        Self { sorter, order }
    }

    /// Sort a slice in place. Works with both `&Logo` and `Logo` elements.
    pub fn sort<T: Borrow<Logo>>(&self, logos: &mut [T]) {
        logos.sort_by(|a, b| {
            let cmp = self.sorter.compare(a.borrow(), b.borrow());
            match self.order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_logos;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_created_at_missing_is_earliest() {
        let mut logos = sample_logos();
        logos[3].created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());

        assert_eq!(
            SortBy::CreatedAt.compare(&logos[0], &logos[3]),
            Ordering::Less
        );
        assert_eq!(
            SortBy::CreatedAt.compare(&logos[0], &logos[1]),
            Ordering::Equal
        );
    }

    #[test]
    fn test_descending_is_stable() {
        let mut logos = sample_logos();
        logos[4].created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        logos[7].created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let sorter = OrderedSorter::new(SortBy::CreatedAt, SortOrder::Descending);
        sorter.sort(&mut logos);

        let ids: Vec<&str> = logos.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["5", "8", "1", "2", "3", "4", "6", "7", "9"]);
    }
}
