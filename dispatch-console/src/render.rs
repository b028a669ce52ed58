//! Plain-text rendering of the dashboard views

use dispatch_client::views::{AreaSummaryRow, OrderDetailView, OrderRow, StatsCards, VendorRow};

pub fn stats(cards: &StatsCards) {
    println!(
        "Delivered: {} | Today: {} | Revenue: {} | Avg time: {}",
        cards.total_delivered, cards.today_delivered, cards.total_revenue, cards.average_delivery_time
    );
}

pub fn orders(rows: &[OrderRow]) {
    if rows.is_empty() {
        println!("No delivered orders found");
        return;
    }
    println!(
        "{:<14} {:<20} {:<16} {:<16} {:>12} {:<24} {:<14} {}",
        "ORDER", "CUSTOMER", "PHONE", "AREA", "TOTAL", "DELIVERED", "DRIVER", "STATUS"
    );
    for row in rows {
        println!(
            "{:<14} {:<20} {:<16} {:<16} {:>12} {:<24} {:<14} {}",
            row.id, row.customer, row.phone, row.area, row.total, row.delivered_at, row.driver, row.status
        );
    }
}

pub fn detail(detail: &OrderDetailView) {
    let s = &detail.summary;
    println!("Order {} ({})", s.id, s.status);
    println!("  Customer: {} / {} / {}", s.customer, s.phone, detail.email);
    println!("  Address:  {}", detail.address);
    println!("  Driver:   {}   Delivered: {}", s.driver, s.delivered_at);
    println!("  Payment:  {}   Total: {}", detail.payment_method, s.total);
    if !detail.notes.is_empty() {
        println!("  Notes:    {}", detail.notes);
    }
    println!("  Items:");
    for item in &detail.items {
        println!(
            "    {} x{} {} {}",
            item.product, item.quantity, item.weight, item.total
        );
    }
    println!("  Timeline:");
    for event in &detail.timeline {
        match &event.notes {
            Some(notes) => println!("    {} - {} ({})", event.at, event.status, notes),
            None => println!("    {} - {}", event.at, event.status),
        }
    }
}

pub fn vendors(rows: &[VendorRow]) {
    if rows.is_empty() {
        println!("No vendors found");
        return;
    }
    for row in rows {
        println!(
            "[{}] {} ({}) {} - {} products",
            row.id, row.name, row.phone, row.status, row.products
        );
        for area in &row.service_areas {
            println!("    {area}");
        }
    }
}

pub fn area_summary(rows: &[AreaSummaryRow]) {
    println!();
    println!("{:<8} {:<24} {:>12} {:>12}  VENDORS", "ID", "AREA", "TRUCK", "SCOOTER");
    for row in rows {
        let vendors = if row.vendors.is_empty() {
            "-".to_string()
        } else {
            row.vendors.join(", ")
        };
        println!(
            "{:<8} {:<24} {:>12} {:>12}  {}",
            row.area_id, row.area, row.truck_price, row.scooter_price, vendors
        );
    }
}
