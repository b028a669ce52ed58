//! Local search filters
//!
//! Text matching is substring based. Names and identifiers are compared
//! case-insensitively, phone numbers as typed. A missing field never matches.

use shared::models::{Area, Order, Vendor};

/// `haystack` contains `needle`, ignoring case
fn contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle_lower))
}

fn contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.contains(needle))
}

/// Order search over id, customer name, customer phone and area
pub fn matches_order_search(order: &Order, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    contains_ci(order.id.as_deref(), &q)
        || contains_ci(order.customer_name.as_deref(), &q)
        || contains(order.customer_phone.as_deref(), query)
        || contains_ci(order.area.as_deref(), &q)
}

pub fn filter_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| matches_order_search(o, query))
        .collect()
}

/// Vendor search over name and phone
pub fn matches_vendor_search(vendor: &Vendor, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    contains_ci(Some(&vendor.name), &query.to_lowercase())
        || contains(vendor.phone.as_deref(), query)
}

pub fn filter_vendors<'a>(vendors: &'a [Vendor], query: &str) -> Vec<&'a Vendor> {
    vendors
        .iter()
        .filter(|v| matches_vendor_search(v, query))
        .collect()
}

/// Area search over display name and internal name
pub fn matches_area_search(area: &Area, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    contains_ci(Some(&area.display_name), &q) || contains_ci(Some(&area.name), &q)
}

pub fn filter_areas<'a>(areas: &'a [Area], query: &str) -> Vec<&'a Area> {
    areas
        .iter()
        .filter(|a| matches_area_search(a, query))
        .collect()
}

/// Whether a vendor's free-text service area label refers to `area`.
///
/// The label must contain the area's display name or internal name as-is,
/// ignoring case. An empty area name never matches.
pub fn area_label_matches(label: &str, area: &Area) -> bool {
    let label = label.to_lowercase();
    [&area.display_name, &area.name]
        .into_iter()
        .filter(|name| !name.is_empty())
        .any(|name| label.contains(&name.to_lowercase()))
}

/// Vendors with at least one service area entry matching `area`
pub fn vendors_serving_area<'a>(area: &Area, vendors: &'a [Vendor]) -> Vec<&'a Vendor> {
    vendors
        .iter()
        .filter(|v| {
            v.service_areas
                .iter()
                .any(|sa| area_label_matches(&sa.area, area))
        })
        .collect()
}
