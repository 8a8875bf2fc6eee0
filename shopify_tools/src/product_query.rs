//! Translates a [`ProductFilter`] into a Shopify product search.
//!
//! All filters are expressed as tag searches (`tag:<value>`), combined with Shopify's search syntax `OR` / `AND`
//! operators.
use ondc_common::ProductFilter;

use crate::helpers::escape_graphql_string;

/// The maximum number of products requested per query.
pub const PRODUCT_PAGE_SIZE: u32 = 10;
/// Products for this location code are tagged with either of [`LEGACY_CITY_TAGS`].
pub const LEGACY_CITY_CODE: &str = "std:080";
pub const LEGACY_CITY_TAGS: [&str; 2] = ["Delhi", "080"];

/// Builds the Shopify search string for the filter, or `None` if the filter has nothing to search for.
pub fn search_query(filter: &ProductFilter) -> Option<String> {
    match filter {
        ProductFilter::City(city) => city_clause(city),
        ProductFilter::CityAndCategory { city, category } => {
            let clauses = [city_clause(city), tag_clause(category)].into_iter().flatten().collect::<Vec<String>>();
            (!clauses.is_empty()).then(|| clauses.join(" AND "))
        },
        ProductFilter::ProductIds(ids) => {
            let clauses = ids.iter().filter_map(|id| tag_clause(id)).collect::<Vec<String>>();
            (!clauses.is_empty()).then(|| clauses.join(" OR "))
        },
    }
}

/// Builds the full GraphQL products query for the filter, or `None` if the filter has nothing to search for.
pub fn products_graphql_query(filter: &ProductFilter) -> Option<String> {
    let search = escape_graphql_string(&search_query(filter)?);
    Some(format!(
        "{{ products(first: {PRODUCT_PAGE_SIZE}, query: \"{search}\") {{ edges {{ node {{ id title variants(first: \
         1) {{ edges {{ node {{ price }} }} }} }} }} }} }}"
    ))
}

fn city_clause(city: &str) -> Option<String> {
    let city = city.trim();
    if city == LEGACY_CITY_CODE {
        let tags = LEGACY_CITY_TAGS.iter().map(|t| format!("tag:{t}")).collect::<Vec<String>>();
        return Some(format!("({})", tags.join(" OR ")));
    }
    tag_clause(city)
}

fn tag_clause(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| format!("tag:{value}"))
}
