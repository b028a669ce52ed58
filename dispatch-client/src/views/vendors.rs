//! Vendor area management view
//!
//! Loads vendors and areas on mount and on manual refresh (no polling),
//! filters both locally, and assigns service areas through a dialog.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use shared::client::AssignAreaRequest;
use shared::models::{Area, EstimatedDeliveryTime, Vendor};

use super::rows::{AreaSummaryRow, VendorRow};
use crate::api::DeliveryApi;
use crate::{ClientError, ClientResult, filter};

/// Shown when submitting without choosing an area
pub const SELECT_AREA_MESSAGE: &str = "Please select an area";

const SUBMIT_LABEL: &str = "Assign Area";
const SUBMIT_BUSY_LABEL: &str = "Assigning...";

/// Parse the delivery charge input; anything unparsable counts as 0
pub fn parse_delivery_charge(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Submission-in-progress flag, shareable with whoever renders the dialog
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

/// Clears the flag when dropped
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag, `None` if it was already set
    pub fn acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| BusyGuard(self.0.clone()))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Assign-area dialog state for one vendor
#[derive(Debug, Clone)]
pub struct AssignmentDialog {
    vendor_id: String,
    vendor_name: String,
    /// Search text over the area list
    pub area_query: String,
    /// Chosen area id, empty until the user picks one
    pub area_id: String,
    /// Raw delivery charge input
    pub delivery_charge: String,
    pub estimated_delivery_time: EstimatedDeliveryTime,
    busy: BusyFlag,
}

impl AssignmentDialog {
    fn new(vendor: &Vendor) -> Self {
        Self {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            area_query: String::new(),
            area_id: String::new(),
            delivery_charge: String::new(),
            estimated_delivery_time: EstimatedDeliveryTime::default(),
            busy: BusyFlag::default(),
        }
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    /// Submit control is disabled while a submission is in flight
    pub fn can_submit(&self) -> bool {
        !self.busy.is_busy()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy.is_busy() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Build the request, rejecting a missing area
    pub fn request(&self) -> ClientResult<AssignAreaRequest> {
        let area_id = self.area_id.trim();
        if area_id.is_empty() {
            return Err(ClientError::Validation(SELECT_AREA_MESSAGE.into()));
        }
        Ok(AssignAreaRequest {
            area_id: area_id.to_string(),
            delivery_charge: parse_delivery_charge(&self.delivery_charge),
            estimated_delivery_time: self.estimated_delivery_time,
        })
    }
}

/// Vendor area assignment view
pub struct VendorAreaView<A: DeliveryApi> {
    api: Arc<A>,
    vendors: Vec<Vendor>,
    areas: Vec<Area>,
    search: String,
    loading: bool,
    dialog: Option<AssignmentDialog>,
    notice: Option<String>,
}

impl<A: DeliveryApi> VendorAreaView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            vendors: Vec::new(),
            areas: Vec::new(),
            search: String::new(),
            loading: false,
            dialog: None,
            notice: None,
        }
    }

    /// Initial load of vendors and areas
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Reload vendors and areas. A failed fetch keeps what was loaded before.
    pub async fn refresh(&mut self) {
        self.loading = true;
        let (vendors, areas) = tokio::join!(self.api.vendors(), self.api.available_areas());
        self.apply_vendors(vendors);
        match areas {
            Ok(areas) => self.areas = areas,
            Err(e) => tracing::warn!("Failed to load areas: {e}"),
        }
        self.loading = false;
    }

    /// Reload the vendor list only
    pub async fn reload_vendors(&mut self) {
        self.loading = true;
        let vendors = self.api.vendors().await;
        self.apply_vendors(vendors);
        self.loading = false;
    }

    fn apply_vendors(&mut self, vendors: ClientResult<Vec<Vendor>>) {
        match vendors {
            Ok(vendors) => {
                tracing::debug!(count = vendors.len(), "Vendors loaded");
                self.vendors = vendors;
            }
            Err(e) => tracing::warn!("Failed to load vendors: {e}"),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Vendors matching the search query
    pub fn visible_vendors(&self) -> Vec<&Vendor> {
        filter::filter_vendors(&self.vendors, &self.search)
    }

    pub fn vendor_rows(&self) -> Vec<VendorRow> {
        self.visible_vendors().into_iter().map(VendorRow::from).collect()
    }

    /// Every known area with the vendors whose service areas refer to it
    pub fn area_summary(&self) -> Vec<AreaSummaryRow> {
        self.areas
            .iter()
            .map(|area| AreaSummaryRow::new(area, &filter::vendors_serving_area(area, &self.vendors)))
            .collect()
    }

    /// Pending blocking notice (validation or server error)
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Dismiss the notice
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Open the assign dialog for a loaded vendor
    pub fn open_assignment(&mut self, vendor_id: &str) -> bool {
        match self.vendors.iter().find(|v| v.id == vendor_id) {
            Some(vendor) => {
                self.dialog = Some(AssignmentDialog::new(vendor));
                true
            }
            None => {
                tracing::warn!(vendor_id, "Cannot assign area to unknown vendor");
                false
            }
        }
    }

    pub fn close_assignment(&mut self) {
        self.dialog = None;
    }

    pub fn dialog(&self) -> Option<&AssignmentDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut AssignmentDialog> {
        self.dialog.as_mut()
    }

    /// Areas listed in the dialog, filtered by its search text
    pub fn dialog_areas(&self) -> Vec<&Area> {
        let query = self.dialog.as_ref().map(|d| d.area_query.as_str()).unwrap_or("");
        filter::filter_areas(&self.areas, query)
    }

    /// Submit the dialog.
    ///
    /// On success the dialog closes and the vendor list is reloaded from the
    /// server. On failure the dialog stays open with its input and the error
    /// message becomes the pending notice.
    pub async fn submit_assignment(&mut self) -> ClientResult<()> {
        let Some(dialog) = self.dialog.as_ref() else {
            return Err(ClientError::Validation("No vendor selected".into()));
        };

        let req = match dialog.request() {
            Ok(req) => req,
            Err(e) => {
                self.notice = Some(e.user_message());
                return Err(e);
            }
        };
        let Some(_busy) = dialog.busy.acquire() else {
            return Err(ClientError::Validation("Submission already in progress".into()));
        };

        let vendor_id = dialog.vendor_id.clone();
        tracing::info!(vendor_id = %vendor_id, area_id = %req.area_id, "Assigning service area");

        match self.api.assign_area(&vendor_id, &req).await {
            Ok(()) => {
                self.dialog = None;
                self.notice = None;
                self.reload_vendors().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(vendor_id = %vendor_id, "Failed to assign area: {e}");
                self.notice = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Remove a service area from a vendor, then reload vendors.
    ///
    /// `area` is the assignment key (area id if recorded, otherwise the label).
    pub async fn remove_service_area(&mut self, vendor_id: &str, area: &str) -> ClientResult<()> {
        match self.api.remove_area(vendor_id, area).await {
            Ok(()) => {
                tracing::info!(vendor_id, area, "Service area removed");
                self.reload_vendors().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(vendor_id, area, "Failed to remove area: {e}");
                self.notice = Some(e.user_message());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::FakeApi;
    use shared::models::ServiceAreaAssignment;

    fn vendor(id: &str, name: &str, labels: &[&str]) -> Vendor {
        Vendor {
            id: id.into(),
            name: name.into(),
            service_areas: labels
                .iter()
                .map(|l| ServiceAreaAssignment {
                    area: l.to_string(),
                    is_active: true,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn area(id: &str, name: &str, display_name: &str) -> Area {
        Area {
            id: id.into(),
            name: name.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    async fn mounted() -> (Arc<FakeApi>, VendorAreaView<FakeApi>) {
        let api = Arc::new(FakeApi::default());
        api.set_vendors(vec![
            vendor("v1", "Fresh Cuts", &["downtown-central"]),
            vendor("v2", "Sea Catch", &[]),
        ]);
        api.set_areas(vec![
            area("a1", "downtown", "Downtown"),
            area("a2", "harbor", "Harbor Front"),
        ]);
        let mut view = VendorAreaView::new(api.clone());
        view.mount().await;
        (api, view)
    }

    #[test]
    fn test_parse_delivery_charge() {
        assert_eq!(parse_delivery_charge("15.5"), 15.5);
        assert_eq!(parse_delivery_charge(" 20 "), 20.0);
        assert_eq!(parse_delivery_charge(""), 0.0);
        assert_eq!(parse_delivery_charge("abc"), 0.0);
        assert_eq!(parse_delivery_charge("NaN"), 0.0);
    }

    #[test]
    fn test_busy_guard_releases_on_drop() {
        let flag = BusyFlag::default();
        let guard = flag.acquire().unwrap();
        assert!(flag.is_busy());
        assert!(flag.acquire().is_none());
        drop(guard);
        assert!(!flag.is_busy());
    }

    #[tokio::test]
    async fn test_mount_loads_both_lists() {
        let (api, view) = mounted().await;
        assert_eq!(view.vendors().len(), 2);
        assert_eq!(view.areas().len(), 2);
        assert_eq!(api.vendor_calls(), 1);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_area_summary_uses_fuzzy_join() {
        let (_api, view) = mounted().await;
        let summary = view.area_summary();
        assert_eq!(summary[0].area, "Downtown");
        assert_eq!(summary[0].vendors, vec!["Fresh Cuts".to_string()]);
        assert!(summary[1].vendors.is_empty());
    }

    #[tokio::test]
    async fn test_dialog_area_search() {
        let (_api, mut view) = mounted().await;
        assert!(view.open_assignment("v2"));
        view.dialog_mut().unwrap().area_query = "HARBOR".into();
        let areas = view.dialog_areas();
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].id, "a2");
        assert!(!view.open_assignment("nope"));
    }

    #[tokio::test]
    async fn test_submit_without_area_is_blocked() {
        let (api, mut view) = mounted().await;
        view.open_assignment("v2");

        let err = view.submit_assignment().await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(view.notice(), Some(SELECT_AREA_MESSAGE));
        assert!(api.assigned().is_empty());
        assert!(view.dialog().is_some());
    }

    #[tokio::test]
    async fn test_successful_submit_closes_dialog_and_reloads() {
        let (api, mut view) = mounted().await;
        view.open_assignment("v2");
        {
            let dialog = view.dialog_mut().unwrap();
            dialog.area_id = "a1".into();
            dialog.delivery_charge = "15.5".into();
        }

        view.submit_assignment().await.unwrap();

        assert!(view.dialog().is_none());
        assert_eq!(api.vendor_calls(), 2);
        let (vendor_id, req) = &api.assigned()[0];
        assert_eq!(vendor_id, "v2");
        assert_eq!(req.delivery_charge, 15.5);
        assert_eq!(req.estimated_delivery_time, EstimatedDeliveryTime::SameDay);
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_dialog_and_shows_message() {
        let (api, mut view) = mounted().await;
        api.reject_assign(Some("Area already assigned"));
        view.open_assignment("v1");
        view.dialog_mut().unwrap().area_id = "a1".into();

        let err = view.submit_assignment().await.unwrap_err();

        assert_eq!(err.user_message(), "Area already assigned");
        assert_eq!(view.notice(), Some("Area already assigned"));
        let dialog = view.dialog().unwrap();
        assert_eq!(dialog.area_id, "a1");
        assert!(dialog.can_submit());
        assert_eq!(dialog.submit_label(), "Assign Area");
        assert_eq!(api.vendor_calls(), 1);
    }

    #[tokio::test]
    async fn test_remove_reports_success_only_after_server_confirms() {
        let (api, mut view) = mounted().await;

        api.reject_remove(Some("Vendor not found"));
        assert!(view.remove_service_area("v1", "a1").await.is_err());
        assert_eq!(view.take_notice().as_deref(), Some("Vendor not found"));
        assert_eq!(api.vendor_calls(), 1);

        api.reject_remove(None);
        view.remove_service_area("v1", "a1").await.unwrap();
        assert_eq!(api.vendor_calls(), 2);
        assert_eq!(api.removed().len(), 2);
    }

    #[tokio::test]
    async fn test_vendor_search() {
        let (_api, mut view) = mounted().await;
        view.set_search_query("sea");
        let rows = view.vendor_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "v2");
    }
}
