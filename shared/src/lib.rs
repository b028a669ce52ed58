//! Shared types for the dispatch console
//!
//! Domain models, wire envelopes and display helpers used by the
//! client crate and the console front end.

pub mod client;
pub mod error;
pub mod format;
pub mod models;

// Re-exports
pub use error::ApiErrorBody;
pub use models::{
    Area, DeliveryStats, EstimatedDeliveryTime, Order, OrderItem, ServiceAreaAssignment,
    TimelineEvent, Vendor, VendorStatus,
};
pub use serde::{Deserialize, Serialize};
