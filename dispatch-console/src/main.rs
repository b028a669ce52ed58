//! dispatch-console - terminal front end for the delivery dashboard
//!
//! Commands:
//! - `orders [search] [--date all|today|yesterday|week|month]`: watch delivered orders
//! - `detail <orderId>`: show one order
//! - `vendors [search]`: list vendors and area coverage
//! - `assign <vendorId> <areaId> <charge> [eta]`: assign a service area
//! - `remove <vendorId> <area>`: remove a service area

mod config;
mod render;

use std::sync::Arc;

use anyhow::{Context, bail};
use dispatch_client::{
    DateFilter, DeliveredOrdersView, EstimatedDeliveryTime, NetworkHttpClient, VendorAreaView,
};

use config::ConsoleConfig;

const USAGE: &str = "usage: dispatch-console <orders|detail|vendors|assign|remove> [args]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispatch_client=info,dispatch_console=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig::from_env();
    let client_config = config.client_config();
    let api = Arc::new(
        client_config
            .build_http_client()
            .context("invalid DISPATCH_API_URL")?,
    );
    tracing::info!("Using delivery API at {}", config.api_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "orders" => watch_orders(api, client_config.poll_interval, rest).await,
        "detail" => {
            let order_id = rest.first().context("detail needs an order id")?;
            show_detail(api, order_id).await
        }
        "vendors" => list_vendors(api, rest.first().map(String::as_str)).await,
        "assign" => assign(api, rest).await,
        "remove" => {
            let [vendor_id, area] = rest else {
                bail!("usage: dispatch-console remove <vendorId> <area>");
            };
            let mut view = VendorAreaView::new(api);
            view.remove_service_area(vendor_id, area)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("Removed {area} from {vendor_id}");
            Ok(())
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}

async fn watch_orders(
    api: Arc<NetworkHttpClient>,
    poll_interval: std::time::Duration,
    args: &[String],
) -> anyhow::Result<()> {
    let mut search = String::new();
    let mut date_filter = DateFilter::All;
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "--date" {
            let value = args.next().context("--date needs a value")?;
            date_filter = value.parse().map_err(anyhow::Error::msg)?;
        } else {
            search = arg.clone();
        }
    }

    let mut view = DeliveredOrdersView::new(api, poll_interval);
    view.set_search_query(search);
    view.set_date_filter(date_filter);
    let mut orders = view.subscribe_orders();
    let mut stats = view.subscribe_stats();
    view.mount();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = orders.changed() => {
                if changed.is_err() {
                    break;
                }
                orders.borrow_and_update();
                render::orders(&view.rows());
            }
            changed = stats.changed() => {
                if changed.is_err() {
                    break;
                }
                stats.borrow_and_update();
                render::stats(&view.stats_cards());
            }
        }
    }

    view.unmount();
    Ok(())
}

async fn show_detail(api: Arc<NetworkHttpClient>, order_id: &str) -> anyhow::Result<()> {
    let mut view = DeliveredOrdersView::new(api, dispatch_client::config::DEFAULT_POLL_INTERVAL);
    if !view.open_details(order_id).await {
        bail!("could not load order {order_id}");
    }
    if let Some(detail) = view.detail() {
        render::detail(&detail);
    }
    Ok(())
}

async fn list_vendors(api: Arc<NetworkHttpClient>, search: Option<&str>) -> anyhow::Result<()> {
    let mut view = VendorAreaView::new(api);
    view.mount().await;
    if let Some(search) = search {
        view.set_search_query(search);
    }
    render::vendors(&view.vendor_rows());
    render::area_summary(&view.area_summary());
    Ok(())
}

async fn assign(api: Arc<NetworkHttpClient>, args: &[String]) -> anyhow::Result<()> {
    let (vendor_id, area_id, charge, eta) = match args {
        [vendor_id, area_id, charge] => (vendor_id, area_id, charge, None),
        [vendor_id, area_id, charge, eta @ ..] if !eta.is_empty() => {
            (vendor_id, area_id, charge, Some(eta.join(" ")))
        }
        _ => bail!("usage: dispatch-console assign <vendorId> <areaId> <charge> [eta]"),
    };
    let eta = match eta {
        Some(label) => label.parse::<EstimatedDeliveryTime>().map_err(anyhow::Error::msg)?,
        None => EstimatedDeliveryTime::default(),
    };

    let mut view = VendorAreaView::new(api);
    view.mount().await;
    if !view.open_assignment(vendor_id) {
        bail!("unknown vendor {vendor_id}");
    }
    if let Some(dialog) = view.dialog_mut() {
        dialog.area_id = area_id.clone();
        dialog.delivery_charge = charge.clone();
        dialog.estimated_delivery_time = eta;
    }

    view.submit_assignment()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    println!("Assigned {area_id} to {vendor_id} ({eta})");
    if let Some(vendor) = view.vendor_rows().into_iter().find(|v| v.id == *vendor_id) {
        render::vendors(&[vendor]);
    }
    Ok(())
}
