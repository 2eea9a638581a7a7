//! Named input sources and the two supported dataset shapes

use crate::error::{DashboardError, DashboardResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const MAIN_DATA: &str = "main_data";
pub const ORDERS: &str = "orders";
pub const ORDER_ITEMS: &str = "order_items";
pub const CUSTOMERS: &str = "customers";
pub const SELLERS: &str = "sellers";
pub const PAYMENTS: &str = "payments";
pub const PRODUCTS: &str = "products";

/// Sources that may be absent without failing the load
const OPTIONAL_SOURCES: [&str; 1] = [PRODUCTS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataShape {
    /// One pre-joined wide table
    Denormalized,
    /// Separate tables joined on identifiers
    Normalized,
}

impl DataShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataShape::Denormalized => "denormalized",
            DataShape::Normalized => "normalized",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "denormalized" | "wide" => Some(DataShape::Denormalized),
            "normalized" => Some(DataShape::Normalized),
            _ => None,
        }
    }
}

/// Mapping of source name to file path
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceSet {
    sources: BTreeMap<String, PathBuf>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.sources.insert(name.to_string(), path.into());
        self
    }

    /// Standard file set for a shape under `dir`
    pub fn for_shape(shape: DataShape, dir: &Path) -> Self {
        match shape {
            DataShape::Denormalized => Self::denormalized(dir),
            DataShape::Normalized => Self::normalized(dir),
        }
    }

    pub fn denormalized(dir: &Path) -> Self {
        Self::new().with(MAIN_DATA, dir.join("main_data.csv"))
    }

    pub fn normalized(dir: &Path) -> Self {
        Self::new()
            .with(ORDERS, dir.join("orders_dataset.csv"))
            .with(ORDER_ITEMS, dir.join("order_items_dataset.csv"))
            .with(CUSTOMERS, dir.join("customers_dataset.csv"))
            .with(SELLERS, dir.join("sellers_dataset.csv"))
            .with(PAYMENTS, dir.join("order_payments_dataset.csv"))
            .with(PRODUCTS, dir.join("products_dataset.csv"))
    }

    /// Path of a source that must exist on disk
    pub fn required(&self, name: &str) -> DashboardResult<&Path> {
        match self.sources.get(name) {
            Some(path) if path.is_file() => Ok(path),
            Some(path) => Err(DashboardError::FileNotFound {
                source: name.to_string(),
                path: path.clone(),
            }),
            None => Err(DashboardError::FileNotFound {
                source: name.to_string(),
                path: PathBuf::new(),
            }),
        }
    }

    /// Path of a source that may be skipped when missing
    pub fn optional(&self, name: &str) -> Option<&Path> {
        debug_assert!(OPTIONAL_SOURCES.contains(&name));
        match self.sources.get(name) {
            Some(path) if path.is_file() => Some(path),
            Some(path) => {
                log::warn!("Optional source '{}' not found: {}", name, path.display());
                None
            }
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.sources
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_str() {
        assert_eq!(DataShape::from_str("normalized"), Some(DataShape::Normalized));
        assert_eq!(DataShape::from_str(" Denormalized "), Some(DataShape::Denormalized));
        assert_eq!(DataShape::from_str("wide"), Some(DataShape::Denormalized));
        assert_eq!(DataShape::from_str("sqlite"), None);
    }

    #[test]
    fn test_required_source_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sources = SourceSet::normalized(temp_dir.path());

        match sources.required(ORDERS) {
            Err(DashboardError::FileNotFound { source, path }) => {
                assert_eq!(source, ORDERS);
                assert!(path.ends_with("orders_dataset.csv"));
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
        assert!(sources.optional(PRODUCTS).is_none());
        assert_eq!(sources.iter().count(), 6);
    }
}
