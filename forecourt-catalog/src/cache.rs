//! Process-wide memoization of loaded catalogs.
//!
//! One lazily-initialized cache keyed by source path, living for the whole
//! process. Entries are never invalidated: a file edited after first load
//! keeps serving its original snapshot.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use moka::sync::Cache;
use tracing::debug;

use forecourt_core::errors::LoadError;

use crate::store::Catalog;

fn catalog_cache() -> &'static Cache<PathBuf, Arc<Catalog>> {
    static CACHE: OnceLock<Cache<PathBuf, Arc<Catalog>>> = OnceLock::new();
    // Unbounded: entries live for the process, per the one-load contract.
    CACHE.get_or_init(|| Cache::builder().build())
}

pub(crate) fn open(path: &Path) -> Result<Arc<Catalog>, LoadError> {
    let key = path.to_path_buf();
    let cache = catalog_cache();
    if let Some(hit) = cache.get(&key) {
        debug!(path = %key.display(), "catalog cache hit");
        return Ok(hit);
    }
    // try_get_with coalesces concurrent first loads and drops failures,
    // so a bad path can be retried after the file is fixed.
    cache
        .try_get_with(key, || Catalog::load(path).map(Arc::new))
        .map_err(|err: Arc<LoadError>| (*err).clone())
}
