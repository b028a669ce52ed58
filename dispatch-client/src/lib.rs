//! Dispatch Client - delivery dashboard view models
//!
//! HTTP access to the delivery API plus the two dashboard views built on
//! top of it: delivered-orders monitoring and vendor area assignment.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod sync;
pub mod views;

pub use api::DeliveryApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::NetworkHttpClient;
pub use views::{DeliveredOrdersView, VendorAreaView};

// Re-export shared types for convenience
pub use shared::client::{AreaListResponse, AssignAreaRequest, VendorListResponse};
pub use shared::models::{
    Area, DateFilter, DeliveryStats, EstimatedDeliveryTime, Order, Vendor, VendorStatus,
};
