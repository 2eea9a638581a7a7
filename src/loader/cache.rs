use super::{load_store, DataShape, SourceSet};
use crate::error::DashboardResult;
use crate::store::OrderStore;
use std::collections::HashMap;
use std::rc::Rc;

/// Memoizes loaded stores per (shape, source set)
///
/// A hit returns the same store without touching the files again. Errors are
/// not cached, so a failed load is retried on the next call.
#[derive(Default)]
pub struct LoaderCache {
    entries: HashMap<(DataShape, SourceSet), Rc<dyn OrderStore>>,
}

impl LoaderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(
        &mut self,
        shape: DataShape,
        sources: &SourceSet,
    ) -> DashboardResult<Rc<dyn OrderStore>> {
        let key = (shape, sources.clone());
        if let Some(store) = self.entries.get(&key) {
            log::debug!("Loader cache hit ({})", shape.as_str());
            return Ok(Rc::clone(store));
        }

        let store = load_store(shape, sources)?;
        self.entries.insert(key, Rc::clone(&store));
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sources::MAIN_DATA;

    const MAIN_CSV: &str = "order_id,customer_id,order_status,order_purchase_timestamp,seller_id,price,customer_city,seller_city,payment_type\n\
                            o1,c1,delivered,2017-01-05 09:00:00,s1,10.0,sao paulo,curitiba,boleto\n";

    #[test]
    fn test_cache_returns_same_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("main_data.csv");
        std::fs::write(&path, MAIN_CSV).unwrap();
        let sources = SourceSet::new().with(MAIN_DATA, &path);

        let mut cache = LoaderCache::new();
        let first = cache.load(DataShape::Denormalized, &sources).unwrap();

        // Removing the file proves the second call does not re-read it
        std::fs::remove_file(&path).unwrap();
        let second = cache.load(DataShape::Denormalized, &sources).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(second.orders().len(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sources = SourceSet::denormalized(temp_dir.path());

        let mut cache = LoaderCache::new();
        assert!(cache.load(DataShape::Denormalized, &sources).is_err());
        assert!(cache.is_empty());
    }
}
