//! Data Loader - CSV sources into immutable order stores
//!
//! # Architecture
//!
//! ```text
//! SourceSet (name → path) → Table (header + records) → *Columns decoders
//!     ↓
//! DenormalizedStore | NormalizedStore
//!     ↓
//! LoaderCache (memoized per shape + source set)
//! ```

pub mod cache;
pub mod records;
pub mod sources;
pub mod table;
pub mod timestamp;

pub use cache::LoaderCache;
pub use sources::{DataShape, SourceSet};
pub use table::{Row, Table};
pub use timestamp::{parse_date, parse_timestamp};

use crate::error::DashboardResult;
use crate::store::{DenormalizedStore, NormalizedStore, OrderStore};
use std::rc::Rc;

/// Load a store of the given shape, reading every file of the source set
pub fn load_store(shape: DataShape, sources: &SourceSet) -> DashboardResult<Rc<dyn OrderStore>> {
    log::info!("📥 Loading {} dataset", shape.as_str());
    for (name, path) in sources.iter() {
        log::debug!("   {}: {}", name, path.display());
    }

    let store: Rc<dyn OrderStore> = match shape {
        DataShape::Denormalized => Rc::new(DenormalizedStore::load(sources)?),
        DataShape::Normalized => Rc::new(NormalizedStore::load(sources)?),
    };
    Ok(store)
}
