//! Delivery API operations
//!
//! [`DeliveryApi`] is the seam between the views and the network: the views
//! only ever talk to this trait, [`NetworkHttpClient`] implements it over HTTP.

use async_trait::async_trait;
use shared::client::{AreaListResponse, AssignAreaRequest, VendorListResponse};
use shared::models::{Area, DateFilter, DeliveryStats, Order, TERMINAL_STATUSES, Vendor};

use crate::{ClientResult, NetworkHttpClient};

/// Remote operations used by the dashboard views
#[async_trait]
pub trait DeliveryApi: Send + Sync + 'static {
    /// Orders in a terminal delivered state, filtered server-side by date
    async fn delivered_orders(&self, date_filter: DateFilter) -> ClientResult<Vec<Order>>;

    /// Aggregate delivery counters
    async fn delivered_stats(&self) -> ClientResult<DeliveryStats>;

    /// Full order including items and timeline
    async fn order_details(&self, order_id: &str) -> ClientResult<Order>;

    async fn vendors(&self) -> ClientResult<Vec<Vendor>>;

    async fn available_areas(&self) -> ClientResult<Vec<Area>>;

    /// Create or update the vendor's service area entry for `req.area_id`
    async fn assign_area(&self, vendor_id: &str, req: &AssignAreaRequest) -> ClientResult<()>;

    /// Remove a service area from a vendor; `area` is the assignment key
    async fn remove_area(&self, vendor_id: &str, area: &str) -> ClientResult<()>;
}

#[async_trait]
impl DeliveryApi for NetworkHttpClient {
    async fn delivered_orders(&self, date_filter: DateFilter) -> ClientResult<Vec<Order>> {
        let statuses = TERMINAL_STATUSES.join(",");
        let mut query = vec![("statuses", statuses.as_str())];
        if let Some(range) = date_filter.query_value() {
            query.push(("dateFilter", range));
        }
        self.get(&["api", "delivery", "delivered-orders"], &query)
            .await
    }

    async fn delivered_stats(&self) -> ClientResult<DeliveryStats> {
        self.get(&["api", "delivery", "delivered-stats"], &[]).await
    }

    async fn order_details(&self, order_id: &str) -> ClientResult<Order> {
        self.get(&["api", "delivery", "orders", order_id, "details"], &[])
            .await
    }

    async fn vendors(&self) -> ClientResult<Vec<Vendor>> {
        let resp: VendorListResponse = self.get(&["api", "vendors"], &[]).await?;
        Ok(resp.vendors)
    }

    async fn available_areas(&self) -> ClientResult<Vec<Area>> {
        let resp: AreaListResponse = self
            .get(&["api", "vendors", "available-areas"], &[])
            .await?;
        Ok(resp.areas)
    }

    async fn assign_area(&self, vendor_id: &str, req: &AssignAreaRequest) -> ClientResult<()> {
        self.post(&["api", "vendors", vendor_id, "service-areas"], req)
            .await
    }

    async fn remove_area(&self, vendor_id: &str, area: &str) -> ClientResult<()> {
        self.delete(&["api", "vendors", vendor_id, "service-areas", area])
            .await
    }
}
