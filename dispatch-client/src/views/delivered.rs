//! Delivered orders view
//!
//! Two polled feeds (orders, stats), a local text search, a server-side
//! date range, and an on-demand detail panel.

use std::sync::Arc;
use std::time::Duration;

use shared::models::{DateFilter, DeliveryStats, Order};
use tokio::sync::watch;

use super::rows::{OrderDetailView, OrderRow, StatsCards};
use crate::api::DeliveryApi;
use crate::filter;
use crate::sync::{CommitOutcome, Feed, Poller, Snapshot};

/// Delivered orders monitoring view
pub struct DeliveredOrdersView<A: DeliveryApi> {
    api: Arc<A>,
    poll_interval: Duration,
    orders: Arc<Feed<Vec<Order>>>,
    stats: Arc<Feed<Option<DeliveryStats>>>,
    date_filter: watch::Sender<DateFilter>,
    search: String,
    detail: Option<Order>,
    orders_poller: Option<Poller>,
    stats_poller: Option<Poller>,
}

/// Fetch the orders feed once. A failed fetch publishes an empty list.
pub async fn sync_orders<A: DeliveryApi + ?Sized>(
    api: &A,
    feed: &Feed<Vec<Order>>,
    date_filter: DateFilter,
) -> CommitOutcome {
    let token = feed.begin();
    let orders = match api.delivered_orders(date_filter).await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::warn!(feed = feed.name(), "Failed to fetch delivered orders: {e}");
            Vec::new()
        }
    };
    feed.commit(token, orders)
}

/// Fetch the stats feed once. A failed fetch keeps the last good value.
pub async fn sync_stats<A: DeliveryApi + ?Sized>(
    api: &A,
    feed: &Feed<Option<DeliveryStats>>,
) -> Option<CommitOutcome> {
    let token = feed.begin();
    match api.delivered_stats().await {
        Ok(stats) => Some(feed.commit(token, Some(stats))),
        Err(e) => {
            tracing::warn!(feed = feed.name(), "Failed to fetch delivery stats: {e}");
            None
        }
    }
}

impl<A: DeliveryApi> DeliveredOrdersView<A> {
    pub fn new(api: Arc<A>, poll_interval: Duration) -> Self {
        let (date_filter, _) = watch::channel(DateFilter::default());
        Self {
            api,
            poll_interval,
            orders: Arc::new(Feed::new("delivered-orders", Vec::new())),
            stats: Arc::new(Feed::new("delivered-stats", None)),
            date_filter,
            search: String::new(),
            detail: None,
            orders_poller: None,
            stats_poller: None,
        }
    }

    /// Start polling both feeds. Must be called within a tokio runtime.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }

        self.orders_poller = Some(Poller::spawn("delivered-orders", self.poll_interval, {
            let api = self.api.clone();
            let feed = self.orders.clone();
            let date_filter = self.date_filter.subscribe();
            move || {
                let api = api.clone();
                let feed = feed.clone();
                let range = *date_filter.borrow();
                async move {
                    sync_orders(api.as_ref(), &feed, range).await;
                }
            }
        }));

        self.stats_poller = Some(Poller::spawn("delivered-stats", self.poll_interval, {
            let api = self.api.clone();
            let feed = self.stats.clone();
            move || {
                let api = api.clone();
                let feed = feed.clone();
                async move {
                    sync_stats(api.as_ref(), &feed).await;
                }
            }
        }));
    }

    /// Stop polling. Responses still in flight are discarded on arrival.
    pub fn unmount(&mut self) {
        if let Some(poller) = self.orders_poller.take() {
            poller.stop();
        }
        if let Some(poller) = self.stats_poller.take() {
            poller.stop();
        }
        self.orders.invalidate();
        self.stats.invalidate();
    }

    pub fn is_mounted(&self) -> bool {
        self.orders_poller.is_some()
    }

    pub fn date_filter(&self) -> DateFilter {
        *self.date_filter.borrow()
    }

    /// Change the server-side date range; refetches orders immediately.
    ///
    /// A fetch for the previous range that is still in flight never commits.
    pub fn set_date_filter(&mut self, range: DateFilter) {
        let changed = self.date_filter.send_if_modified(|current| {
            if *current == range {
                return false;
            }
            *current = range;
            true
        });
        if changed {
            tracing::debug!(date_filter = range.as_str(), "Date filter changed");
            self.orders.invalidate();
            if let Some(poller) = &self.orders_poller {
                poller.refresh();
            }
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Last committed orders, unfiltered
    pub fn orders(&self) -> Vec<Order> {
        self.orders.current()
    }

    /// Orders matching the search query
    pub fn visible_orders(&self) -> Vec<Order> {
        filter::filter_orders(&self.orders.current(), &self.search)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.visible_orders().iter().map(OrderRow::from).collect()
    }

    /// Last good stats, `None` until the first successful poll
    pub fn stats(&self) -> Option<DeliveryStats> {
        self.stats.current()
    }

    pub fn stats_cards(&self) -> StatsCards {
        StatsCards::from(&self.stats().unwrap_or_default())
    }

    /// Notified whenever the orders list actually changes
    pub fn subscribe_orders(&self) -> watch::Receiver<Snapshot<Vec<Order>>> {
        self.orders.subscribe()
    }

    /// Notified whenever the stats actually change
    pub fn subscribe_stats(&self) -> watch::Receiver<Snapshot<Option<DeliveryStats>>> {
        self.stats.subscribe()
    }

    /// Fetch one order's details and open the detail panel.
    ///
    /// Returns whether the panel is open. On failure the panel stays closed.
    pub async fn open_details(&mut self, order_id: &str) -> bool {
        match self.api.order_details(order_id).await {
            Ok(order) => {
                self.detail = Some(order);
                true
            }
            Err(e) => {
                tracing::error!(order_id, "Failed to fetch order details: {e}");
                self.detail = None;
                false
            }
        }
    }

    pub fn close_details(&mut self) {
        self.detail = None;
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn detail(&self) -> Option<OrderDetailView> {
        self.detail.as_ref().map(OrderDetailView::from)
    }
}

impl<A: DeliveryApi> Drop for DeliveredOrdersView<A> {
    fn drop(&mut self) {
        self.unmount();
    }
}
