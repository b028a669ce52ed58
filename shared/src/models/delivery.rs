//! Delivered order models

use serde::{Deserialize, Serialize};

use super::lenient::{count, null_default, quantity};

/// Status code of an order that finished delivery
pub const STATUS_ORDER_COMPLETE: &str = "order-complete";
/// Status code of an order that was processed after delivery
pub const STATUS_ORDER_PROCESSED: &str = "order-processed";

/// Status codes the delivered-orders feed asks for
pub const TERMINAL_STATUSES: [&str; 2] = [STATUS_ORDER_COMPLETE, STATUS_ORDER_PROCESSED];

/// Display label for an order status code.
///
/// Known terminal codes map to a short label, anything else is shown as-is.
pub fn status_label(code: &str) -> &str {
    match code {
        STATUS_ORDER_COMPLETE => "Complete",
        STATUS_ORDER_PROCESSED => "Processed",
        other => other,
    }
}

/// Delivered order snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OrderRecord")]
pub struct Order {
    /// Display id: `orderId`, else `id`, else the database `_id`
    pub id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    /// Order total in currency unit
    pub total_amount: f64,
    pub delivered_at: Option<String>,
    pub driver_name: Option<String>,
    pub payment_method: Option<String>,
    pub delivery_notes: Option<String>,
    pub status: Option<String>,
    pub items: Vec<OrderItem>,
    pub timeline: Vec<TimelineEvent>,
}

impl Order {
    /// Display label of the order status, empty when the status is missing
    pub fn status_label(&self) -> &str {
        self.status.as_deref().map(status_label).unwrap_or_default()
    }
}

/// Order as sent by the server, with every id and total spelling kept apart
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OrderRecord {
    order_id: Option<String>,
    id: Option<String>,
    #[serde(rename = "_id")]
    object_id: Option<String>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    customer_email: Option<String>,
    delivery_address: Option<String>,
    area: Option<String>,
    city: Option<String>,
    total_amount: Option<f64>,
    total: Option<f64>,
    delivered_at: Option<String>,
    driver_name: Option<String>,
    payment_method: Option<String>,
    delivery_notes: Option<String>,
    status: Option<String>,
    #[serde(deserialize_with = "null_default")]
    items: Vec<OrderItem>,
    #[serde(deserialize_with = "null_default")]
    timeline: Vec<TimelineEvent>,
}

impl From<OrderRecord> for Order {
    fn from(r: OrderRecord) -> Self {
        Self {
            id: r.order_id.or(r.id).or(r.object_id),
            customer_name: r.customer_name,
            customer_phone: r.customer_phone,
            customer_email: r.customer_email,
            delivery_address: r.delivery_address,
            area: r.area,
            city: r.city,
            total_amount: r.total_amount.or(r.total).unwrap_or_default(),
            delivered_at: r.delivered_at,
            driver_name: r.driver_name,
            payment_method: r.payment_method,
            delivery_notes: r.delivery_notes,
            status: r.status,
            items: r.items,
            timeline: r.timeline,
        }
    }
}

/// Order line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OrderItemRecord")]
pub struct OrderItem {
    pub product_name: Option<String>,
    pub quantity: u32,
    /// Weight descriptor, e.g. "500g"
    pub weight: Option<String>,
    /// Line total in currency unit
    pub total: f64,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OrderItemRecord {
    product_name: Option<String>,
    name: Option<String>,
    #[serde(deserialize_with = "quantity")]
    quantity: u32,
    weight: Option<String>,
    #[serde(deserialize_with = "null_default")]
    total: f64,
}

impl From<OrderItemRecord> for OrderItem {
    fn from(r: OrderItemRecord) -> Self {
        Self {
            product_name: r.product_name.or(r.name),
            quantity: r.quantity,
            weight: r.weight,
            total: r.total,
        }
    }
}

/// Order timeline entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    pub timestamp: Option<String>,
    pub notes: Option<String>,
}

/// Aggregate delivery counters, recomputed by the server on every request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryStats {
    #[serde(deserialize_with = "count")]
    pub total_delivered: u64,
    #[serde(deserialize_with = "count")]
    pub today_delivered: u64,
    /// Revenue in currency unit
    #[serde(deserialize_with = "null_default")]
    pub total_revenue: f64,
    /// Preformatted label, e.g. "42 mins"
    #[serde(deserialize_with = "null_default")]
    pub average_delivery_time: String,
}

/// Date range applied by the server to the delivered-orders list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Yesterday,
    Week,
    Month,
}

impl DateFilter {
    pub const ALL: [DateFilter; 5] = [
        DateFilter::All,
        DateFilter::Today,
        DateFilter::Yesterday,
        DateFilter::Week,
        DateFilter::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Value of the `dateFilter` query parameter; `All` sends nothing
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.as_str()),
        }
    }
}

impl std::str::FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown date filter: {s}"))
    }
}
