//! Render-ready rows
//!
//! Everything here is already formatted for display; the presentation layer
//! only lays the text out.

use shared::format::{NOT_AVAILABLE, format_money, format_timestamp};
use shared::models::{Area, DeliveryStats, Order, OrderItem, TimelineEvent, Vendor};

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// One line of the delivered-orders table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub phone: String,
    pub area: String,
    pub total: String,
    pub delivered_at: String,
    pub driver: String,
    pub status: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: or_na(order.id.as_deref()),
            customer: or_na(order.customer_name.as_deref()),
            phone: or_na(order.customer_phone.as_deref()),
            area: or_na(order.area.as_deref()),
            total: format_money(order.total_amount),
            delivered_at: format_timestamp(order.delivered_at.as_deref()),
            driver: or_na(order.driver_name.as_deref()),
            status: order.status_label().to_string(),
        }
    }
}

/// Summary cards above the orders table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCards {
    pub total_delivered: String,
    pub today_delivered: String,
    pub total_revenue: String,
    pub average_delivery_time: String,
}

impl From<&DeliveryStats> for StatsCards {
    fn from(stats: &DeliveryStats) -> Self {
        Self {
            total_delivered: stats.total_delivered.to_string(),
            today_delivered: stats.today_delivered.to_string(),
            total_revenue: format_money(stats.total_revenue),
            average_delivery_time: or_na(Some(stats.average_delivery_time.as_str())),
        }
    }
}

/// Order detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub summary: OrderRow,
    pub email: String,
    pub address: String,
    pub payment_method: String,
    pub notes: String,
    pub items: Vec<ItemLine>,
    pub timeline: Vec<TimelineLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub product: String,
    pub quantity: u32,
    pub weight: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineLine {
    pub status: String,
    pub at: String,
    pub notes: Option<String>,
}

impl From<&OrderItem> for ItemLine {
    fn from(item: &OrderItem) -> Self {
        Self {
            product: or_na(item.product_name.as_deref()),
            quantity: item.quantity,
            weight: item.weight.clone().unwrap_or_default(),
            total: format_money(item.total),
        }
    }
}

impl From<&TimelineEvent> for TimelineLine {
    fn from(event: &TimelineEvent) -> Self {
        Self {
            status: event.status.clone(),
            at: format_timestamp(event.timestamp.as_deref()),
            notes: event.notes.clone().filter(|n| !n.is_empty()),
        }
    }
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        let address = [&order.delivery_address, &order.area, &order.city]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            summary: OrderRow::from(order),
            email: or_na(order.customer_email.as_deref()),
            address: or_na(Some(address.as_str())),
            payment_method: or_na(order.payment_method.as_deref()),
            notes: order.delivery_notes.clone().unwrap_or_default(),
            items: order.items.iter().map(ItemLine::from).collect(),
            timeline: order.timeline.iter().map(TimelineLine::from).collect(),
        }
    }
}

/// One vendor card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub status: &'static str,
    pub products: usize,
    /// "Area (Rs. 15.00, Same day)" per assignment, inactive ones marked
    pub service_areas: Vec<String>,
}

impl From<&Vendor> for VendorRow {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.clone(),
            name: vendor.name.clone(),
            phone: or_na(vendor.phone.as_deref()),
            status: vendor.status.label(),
            products: vendor.available_products.len(),
            service_areas: vendor
                .service_areas
                .iter()
                .map(|sa| {
                    let line = format!(
                        "{} ({}, {})",
                        sa.area,
                        format_money(sa.delivery_charge),
                        sa.estimated_delivery_time
                    );
                    if sa.is_active {
                        line
                    } else {
                        format!("{line} [inactive]")
                    }
                })
                .collect(),
        }
    }
}

/// Vendors covering one area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSummaryRow {
    pub area_id: String,
    pub area: String,
    pub truck_price: String,
    pub scooter_price: String,
    pub vendors: Vec<String>,
}

impl AreaSummaryRow {
    pub fn new(area: &Area, vendors: &[&Vendor]) -> Self {
        let price = |p: Option<f64>| p.map(format_money).unwrap_or_else(|| NOT_AVAILABLE.into());
        Self {
            area_id: area.id.clone(),
            area: area.display_name.clone(),
            truck_price: price(area.truck_price),
            scooter_price: price(area.scooter_price),
            vendors: vendors.iter().map(|v| v.name.clone()).collect(),
        }
    }
}
