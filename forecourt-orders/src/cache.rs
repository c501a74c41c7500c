//! Process-wide memoization of loaded order logs, mirroring the catalog
//! cache contract: parse once per path, share forever, never invalidate.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use moka::sync::Cache;
use tracing::debug;

use forecourt_core::errors::LoadError;

use crate::store::OrderLog;

fn order_log_cache() -> &'static Cache<PathBuf, Arc<OrderLog>> {
    static CACHE: OnceLock<Cache<PathBuf, Arc<OrderLog>>> = OnceLock::new();
    CACHE.get_or_init(|| Cache::builder().build())
}

pub(crate) fn open(path: &Path) -> Result<Arc<OrderLog>, LoadError> {
    let key = path.to_path_buf();
    let cache = order_log_cache();
    if let Some(hit) = cache.get(&key) {
        debug!(path = %key.display(), "order log cache hit");
        return Ok(hit);
    }
    cache
        .try_get_with(key, || OrderLog::load(path).map(Arc::new))
        .map_err(|err: Arc<LoadError>| (*err).clone())
}
