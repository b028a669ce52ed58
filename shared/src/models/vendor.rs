//! Vendor and service area models

use serde::{Deserialize, Serialize};

use super::lenient::null_default;

/// Vendor availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VendorStatus {
    Available,
    Offline,
    Busy,
    #[default]
    #[serde(other)]
    Unknown,
}

impl VendorStatus {
    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Offline => "Offline",
            Self::Busy => "Busy",
            Self::Unknown => "Unknown",
        }
    }
}

/// Area served by a vendor, owned by that vendor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAreaAssignment {
    /// Free-text area label as stored on the vendor record
    #[serde(deserialize_with = "null_default")]
    pub area: String,
    /// Canonical area id, when the server recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    /// Delivery charge in currency unit
    #[serde(deserialize_with = "null_default")]
    pub delivery_charge: f64,
    #[serde(deserialize_with = "null_default")]
    pub estimated_delivery_time: String,
    #[serde(deserialize_with = "null_default")]
    pub is_active: bool,
}

impl ServiceAreaAssignment {
    /// Key used to address this assignment on the remote API
    pub fn key(&self) -> &str {
        self.area_id.as_deref().unwrap_or(&self.area)
    }
}

/// Vendor entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "VendorRecord")]
pub struct Vendor {
    /// `id`, else the database `_id`
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub status: VendorStatus,
    pub available_products: Vec<String>,
    pub service_areas: Vec<ServiceAreaAssignment>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VendorRecord {
    id: Option<String>,
    #[serde(rename = "_id")]
    object_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    name: String,
    phone: Option<String>,
    #[serde(deserialize_with = "null_default")]
    status: VendorStatus,
    #[serde(deserialize_with = "null_default")]
    available_products: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    service_areas: Vec<ServiceAreaAssignment>,
}

impl From<VendorRecord> for Vendor {
    fn from(r: VendorRecord) -> Self {
        Self {
            id: r.id.or(r.object_id).unwrap_or_default(),
            name: r.name,
            phone: r.phone,
            status: r.status,
            available_products: r.available_products,
            service_areas: r.service_areas,
        }
    }
}

/// Canonical area record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AreaRecord")]
pub struct Area {
    pub id: String,
    /// Internal name, e.g. "downtown"
    pub name: String,
    pub display_name: String,
    pub truck_price: Option<f64>,
    pub scooter_price: Option<f64>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AreaRecord {
    id: Option<String>,
    #[serde(rename = "_id")]
    object_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    name: String,
    #[serde(deserialize_with = "null_default")]
    display_name: String,
    truck_price: Option<f64>,
    scooter_price: Option<f64>,
}

impl From<AreaRecord> for Area {
    fn from(r: AreaRecord) -> Self {
        Self {
            id: r.id.or(r.object_id).unwrap_or_default(),
            name: r.name,
            display_name: r.display_name,
            truck_price: r.truck_price,
            scooter_price: r.scooter_price,
        }
    }
}

/// Estimated delivery time offered when assigning an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EstimatedDeliveryTime {
    #[default]
    #[serde(rename = "Same day")]
    SameDay,
    #[serde(rename = "1-2 hours")]
    OneToTwoHours,
    #[serde(rename = "2-4 hours")]
    TwoToFourHours,
    #[serde(rename = "4-6 hours")]
    FourToSixHours,
    #[serde(rename = "Next day")]
    NextDay,
}

impl EstimatedDeliveryTime {
    pub const ALL: [EstimatedDeliveryTime; 5] = [
        EstimatedDeliveryTime::SameDay,
        EstimatedDeliveryTime::OneToTwoHours,
        EstimatedDeliveryTime::TwoToFourHours,
        EstimatedDeliveryTime::FourToSixHours,
        EstimatedDeliveryTime::NextDay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SameDay => "Same day",
            Self::OneToTwoHours => "1-2 hours",
            Self::TwoToFourHours => "2-4 hours",
            Self::FourToSixHours => "4-6 hours",
            Self::NextDay => "Next day",
        }
    }
}

impl std::fmt::Display for EstimatedDeliveryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EstimatedDeliveryTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|eta| eta.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown delivery time: {s}"))
    }
}
