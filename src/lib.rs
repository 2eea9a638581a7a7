//! E-commerce analytics dashboard over static CSV exports
//!
//! # Architecture
//!
//! ```text
//! CSV sources → loader (Table → records) → OrderStore (denormalized | normalized)
//!     ↓
//! filter (inclusive purchase-date range) → FilteredOrders
//!     ↓
//! aggregator (totals, monthly trend, city / categorical rankings)
//!     ↓
//! dashboard::render → Dashboard → ui (terminal) | JSON snapshot
//! ```

#[cfg(test)]
mod test_support;

pub mod aggregator;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;
pub mod ui;

pub use dashboard::{render, Dashboard, DashboardState};
pub use error::{DashboardError, DashboardResult};
pub use filter::{date_bounds, filter, DateRange, FilteredOrders};
pub use loader::{DataShape, LoaderCache, SourceSet};
pub use store::OrderStore;
