//! Pure view derivation: title search and column sort.

use std::borrow::Cow;
use std::cmp::Ordering;

use shelf_core::Product;

use crate::state::{SearchTerm, SortConfig, SortKey, SortOrder};

/// Returns the products whose title contains `term`, ignoring case.
///
/// An empty term borrows `full` untouched. Matches keep their order from `full`.
#[must_use]
pub fn filter<'a>(full: &'a [Product], term: &SearchTerm) -> Cow<'a, [Product]> {
    if term.is_empty() {
        return Cow::Borrowed(full);
    }
    let needle = term.as_str();
    Cow::Owned(
        full.iter()
            .filter(|product| product.title.to_lowercase().contains(needle))
            .cloned()
            .collect(),
    )
}

/// Returns `products` ordered by `config`. Ties keep their input order.
///
/// With no sort key the input order is returned unchanged.
#[must_use]
pub fn sort(products: &[Product], config: SortConfig) -> Vec<Product> {
    let mut sorted = products.to_vec();
    let Some(key) = config.key else {
        return sorted;
    };
    // `sort_by` is stable, so equal keys stay in input order.
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match config.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        // Adding 0.0 folds -0.0 into 0.0 so signed zeros tie. NaN sorts last.
        SortKey::Price => (a.price + 0.0).total_cmp(&(b.price + 0.0)),
    }
}
