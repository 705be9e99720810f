//! # Country Catalog Operations
//!
//! Pure functions over the fetched collection: ordering, search filtering,
//! and lookup by common name. None of them mutate the cached data; the
//! filter and lookup borrow from it.

use crate::api::Country;
use crate::core::collate::locale_cmp;

/// Sorts ascending by `name.common` using locale comparison.
///
/// The sort is stable, so records with equal names keep the order the API
/// returned them in.
pub fn sort_by_common_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| locale_cmp(a.common_name(), b.common_name()));
}

/// Returns the countries whose official name, common name, or first capital
/// contains `query`, ignoring case.
///
/// A blank query returns every country.
pub fn filter_countries<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    if query.trim().is_empty() {
        return countries.iter().collect();
    }

    let query = query.to_lowercase();
    countries
        .iter()
        .filter(|country| matches_query(country, &query))
        .collect()
}

/// `query` must already be lowercase.
fn matches_query(country: &Country, query: &str) -> bool {
    let official = country.name.official.to_lowercase();
    let common = country.name.common.to_lowercase();
    let capital = country.first_capital().unwrap_or("").to_lowercase();

    official.contains(query) || common.contains(query) || capital.contains(query)
}

/// Finds the first country whose common name equals `name` exactly.
pub fn find_by_name<'a>(countries: &'a [Country], name: &str) -> Option<&'a Country> {
    countries.iter().find(|country| country.name.common == name)
}
