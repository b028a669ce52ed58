// dispatch-client/tests/vendor_areas.rs
// Vendor area management view against a mock HTTP API

mod common;

use dispatch_client::views::vendors::SELECT_AREA_MESSAGE;
use dispatch_client::{DeliveryApi, EstimatedDeliveryTime, VendorAreaView, VendorStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{TestApi, areas_json, vendors_json};

const VENDORS_PATH: &str = "/api/vendors";
const AREAS_PATH: &str = "/api/vendors/available-areas";

async fn mount_lists(api: &TestApi, vendor_loads: u64) {
    Mock::given(method("GET"))
        .and(path(VENDORS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(vendors_json()))
        .expect(vendor_loads)
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path(AREAS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(areas_json()))
        .expect(1)
        .mount(&api.server)
        .await;
}

#[tokio::test]
async fn test_mount_loads_vendors_and_areas() {
    let api = TestApi::start().await;
    mount_lists(&api, 1).await;

    let mut view = VendorAreaView::new(api.client.clone());
    view.mount().await;

    assert_eq!(view.vendors().len(), 2);
    assert_eq!(view.vendors()[1].status, VendorStatus::Offline);
    assert!(view.vendors()[1].service_areas.is_empty());
    assert_eq!(view.areas()[0].truck_price, Some(50.0));

    let summary = view.area_summary();
    assert_eq!(summary[0].vendors, vec!["Fresh Cuts".to_string()]);
    assert!(summary[1].vendors.is_empty());
}

#[tokio::test]
async fn test_valid_assignment_closes_dialog_and_reloads_once() {
    let api = TestApi::start().await;
    mount_lists(&api, 2).await;
    Mock::given(method("POST"))
        .and(path("/api/vendors/v2/service-areas"))
        .and(body_json(json!({
            "areaId": "a1",
            "deliveryCharge": 15.5,
            "estimatedDeliveryTime": "Same day"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&api.server)
        .await;

    let mut view = VendorAreaView::new(api.client.clone());
    view.mount().await;
    assert!(view.open_assignment("v2"));
    {
        let dialog = view.dialog_mut().unwrap();
        dialog.area_id = "a1".into();
        dialog.delivery_charge = "15.5".into();
        dialog.estimated_delivery_time = EstimatedDeliveryTime::SameDay;
    }

    view.submit_assignment().await.unwrap();

    assert!(view.dialog().is_none());
    assert!(view.notice().is_none());
    assert_eq!(api.hits(VENDORS_PATH).await, 2);
}

#[tokio::test]
async fn test_rejected_assignment_keeps_dialog_open_with_server_message() {
    let api = TestApi::start().await;
    mount_lists(&api, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/vendors/v1/service-areas"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "Area already assigned"})),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    let mut view = VendorAreaView::new(api.client.clone());
    view.mount().await;
    view.open_assignment("v1");
    {
        let dialog = view.dialog_mut().unwrap();
        dialog.area_id = "a1".into();
        dialog.delivery_charge = "15.5".into();
    }

    assert!(view.submit_assignment().await.is_err());

    assert_eq!(view.notice(), Some("Area already assigned"));
    let dialog = view.dialog().unwrap();
    assert_eq!(dialog.delivery_charge, "15.5");
    assert_eq!(dialog.submit_label(), "Assign Area");
    assert_eq!(api.hits(VENDORS_PATH).await, 1);
}

#[tokio::test]
async fn test_assignment_without_area_sends_nothing() {
    let api = TestApi::start().await;
    mount_lists(&api, 1).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api.server)
        .await;

    let mut view = VendorAreaView::new(api.client.clone());
    view.mount().await;
    view.open_assignment("v1");
    view.dialog_mut().unwrap().delivery_charge = "abc".into();

    assert!(view.submit_assignment().await.is_err());
    assert_eq!(view.notice(), Some(SELECT_AREA_MESSAGE));
    assert!(view.dialog().is_some());
}

#[tokio::test]
async fn test_remove_service_area_calls_delete_then_reloads() {
    let api = TestApi::start().await;
    mount_lists(&api, 2).await;
    Mock::given(method("DELETE"))
        .and(path("/api/vendors/v1/service-areas/downtown-central"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&api.server)
        .await;

    let mut view = VendorAreaView::new(api.client.clone());
    view.mount().await;
    let key = view.vendors()[0].service_areas[0].key().to_string();
    view.remove_service_area("v1", &key).await.unwrap();
}

#[tokio::test]
async fn test_failed_vendor_reload_keeps_previous_list() {
    let api = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path(VENDORS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(vendors_json()))
        .up_to_n_times(1)
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path(VENDORS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path(AREAS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&api.server)
        .await;

    let mut view = VendorAreaView::new(api.client.clone());
    view.mount().await;
    assert!(view.areas().is_empty());

    view.refresh().await;
    assert_eq!(view.vendors().len(), 2);
    assert!(api.client.vendors().await.is_err());
}
