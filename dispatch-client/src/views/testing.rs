//! In-memory API used by the view tests

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::client::AssignAreaRequest;
use shared::models::{Area, DateFilter, DeliveryStats, Order, Vendor};

use crate::api::DeliveryApi;
use crate::{ClientError, ClientResult};

#[derive(Default)]
struct State {
    orders: Vec<Order>,
    stats: DeliveryStats,
    detail: Order,
    vendors: Vec<Vendor>,
    areas: Vec<Area>,
    fail_orders: bool,
    fail_stats: bool,
    fail_detail: bool,
    assign_error: Option<String>,
    remove_error: Option<String>,
    order_calls: usize,
    stats_calls: usize,
    vendor_calls: usize,
    last_date_filter: Option<DateFilter>,
    assigned: Vec<(String, AssignAreaRequest)>,
    removed: Vec<(String, String)>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

fn unavailable() -> ClientError {
    ClientError::InvalidResponse("service unavailable".into())
}

fn rejected(message: &str) -> ClientError {
    ClientError::Api {
        status: StatusCode::BAD_REQUEST,
        message: message.to_string(),
    }
}

impl FakeApi {
    fn with<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        self.with(|s| s.orders = orders);
    }

    pub fn fail_orders(&self, fail: bool) {
        self.with(|s| s.fail_orders = fail);
    }

    pub fn set_stats(&self, stats: DeliveryStats) {
        self.with(|s| s.stats = stats);
    }

    pub fn fail_stats(&self, fail: bool) {
        self.with(|s| s.fail_stats = fail);
    }

    pub fn set_detail(&self, order: Order) {
        self.with(|s| s.detail = order);
    }

    pub fn fail_detail(&self, fail: bool) {
        self.with(|s| s.fail_detail = fail);
    }

    pub fn set_vendors(&self, vendors: Vec<Vendor>) {
        self.with(|s| s.vendors = vendors);
    }

    pub fn set_areas(&self, areas: Vec<Area>) {
        self.with(|s| s.areas = areas);
    }

    pub fn reject_assign(&self, message: Option<&str>) {
        self.with(|s| s.assign_error = message.map(str::to_string));
    }

    pub fn reject_remove(&self, message: Option<&str>) {
        self.with(|s| s.remove_error = message.map(str::to_string));
    }

    pub fn order_calls(&self) -> usize {
        self.with(|s| s.order_calls)
    }

    pub fn stats_calls(&self) -> usize {
        self.with(|s| s.stats_calls)
    }

    pub fn vendor_calls(&self) -> usize {
        self.with(|s| s.vendor_calls)
    }

    pub fn last_date_filter(&self) -> Option<DateFilter> {
        self.with(|s| s.last_date_filter)
    }

    pub fn assigned(&self) -> Vec<(String, AssignAreaRequest)> {
        self.with(|s| s.assigned.clone())
    }

    pub fn removed(&self) -> Vec<(String, String)> {
        self.with(|s| s.removed.clone())
    }
}

#[async_trait]
impl DeliveryApi for FakeApi {
    async fn delivered_orders(&self, date_filter: DateFilter) -> ClientResult<Vec<Order>> {
        self.with(|s| {
            s.order_calls += 1;
            s.last_date_filter = Some(date_filter);
            if s.fail_orders {
                Err(unavailable())
            } else {
                Ok(s.orders.clone())
            }
        })
    }

    async fn delivered_stats(&self) -> ClientResult<DeliveryStats> {
        self.with(|s| {
            s.stats_calls += 1;
            if s.fail_stats {
                Err(unavailable())
            } else {
                Ok(s.stats.clone())
            }
        })
    }

    async fn order_details(&self, _order_id: &str) -> ClientResult<Order> {
        self.with(|s| {
            if s.fail_detail {
                Err(unavailable())
            } else {
                Ok(s.detail.clone())
            }
        })
    }

    async fn vendors(&self) -> ClientResult<Vec<Vendor>> {
        self.with(|s| {
            s.vendor_calls += 1;
            Ok(s.vendors.clone())
        })
    }

    async fn available_areas(&self) -> ClientResult<Vec<Area>> {
        self.with(|s| Ok(s.areas.clone()))
    }

    async fn assign_area(&self, vendor_id: &str, req: &AssignAreaRequest) -> ClientResult<()> {
        self.with(|s| {
            s.assigned.push((vendor_id.to_string(), req.clone()));
            match &s.assign_error {
                Some(message) => Err(rejected(message)),
                None => Ok(()),
            }
        })
    }

    async fn remove_area(&self, vendor_id: &str, area: &str) -> ClientResult<()> {
        self.with(|s| {
            s.removed.push((vendor_id.to_string(), area.to_string()));
            match &s.remove_error {
                Some(message) => Err(rejected(message)),
                None => Ok(()),
            }
        })
    }
}
