//! Dashboard view models

pub mod delivered;
pub mod rows;
pub mod vendors;

#[cfg(test)]
pub(crate) mod testing;

pub use delivered::DeliveredOrdersView;
pub use rows::{AreaSummaryRow, OrderDetailView, OrderRow, StatsCards, VendorRow};
pub use vendors::{AssignmentDialog, BusyFlag, VendorAreaView};
