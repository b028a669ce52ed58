//! Wire types shared with the remote delivery API
//!
//! List envelopes and request bodies. Response envelopes default their
//! collections so a malformed payload renders as empty instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::lenient::null_default;
use crate::models::{Area, EstimatedDeliveryTime, Vendor};

/// `GET /api/vendors` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorListResponse {
    #[serde(deserialize_with = "null_default")]
    pub vendors: Vec<Vendor>,
}

/// `GET /api/vendors/available-areas` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaListResponse {
    #[serde(deserialize_with = "null_default")]
    pub areas: Vec<Area>,
}

/// Assign area request (create or update the vendor's entry for the area)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAreaRequest {
    pub area_id: String,
    /// Delivery charge in currency unit
    pub delivery_charge: f64,
    pub estimated_delivery_time: EstimatedDeliveryTime,
}
