//! Service wiring behind the HTTP handlers.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use stocklens_aggregation::{summarize, AggregateSnapshot, Predicate};
use stocklens_store::{CatalogSource, StoreError};

/// A successfully computed snapshot plus when it was computed.
#[derive(Debug, Clone)]
pub struct TimedSnapshot {
    pub snapshot: AggregateSnapshot,
    pub refreshed_at: DateTime<Utc>,
}

/// Application services shared by all handlers.
pub struct AppServices {
    source: Arc<dyn CatalogSource>,
    // Last successfully computed snapshot. A failed refresh leaves this
    // untouched, so readers can distinguish "stale data" from "no data yet".
    last_snapshot: RwLock<Option<TimedSnapshot>>,
}

impl AppServices {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            last_snapshot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &dyn CatalogSource {
        self.source.as_ref()
    }

    /// Fetch everything the engine needs and compute a fresh snapshot.
    ///
    /// The three reads have no mutual ordering requirement and are issued
    /// concurrently; the engine only runs once all of them have completed.
    pub async fn refresh_snapshot(&self) -> Result<TimedSnapshot, StoreError> {
        let (products, variants, categories) = tokio::try_join!(
            self.source.products(&Predicate::Any),
            self.source.variants(),
            self.source.categories(),
        )?;

        let timed = TimedSnapshot {
            snapshot: summarize(&products, &variants, &categories),
            refreshed_at: Utc::now(),
        };

        // A poisoned lock only means a past writer panicked; the data it
        // guards is a plain Option, so recover and overwrite it.
        let mut last = self
            .last_snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *last = Some(timed.clone());
        drop(last);

        tracing::info!(
            products = timed.snapshot.total_products,
            variants = timed.snapshot.total_variants,
            low_stock = timed.snapshot.low_stock_variant_count,
            "dashboard snapshot refreshed"
        );
        Ok(timed)
    }

    /// The last successfully computed snapshot, if any.
    pub fn latest_snapshot(&self) -> Option<TimedSnapshot> {
        self.last_snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stocklens_store::InMemoryCatalog;

    #[tokio::test]
    async fn refresh_persists_snapshot_after_lock_poisoning() {
        let services = Arc::new(AppServices::new(Arc::new(InMemoryCatalog::new())));

        // Poison the snapshot lock by panicking while holding the write guard.
        let poisoner = Arc::clone(&services);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.last_snapshot.write().unwrap();
            panic!("poison the snapshot lock");
        })
        .join();
        assert!(services.last_snapshot.is_poisoned());

        let refreshed = services.refresh_snapshot().await.unwrap();
        let latest = services
            .latest_snapshot()
            .expect("refresh must persist the snapshot even after poisoning");
        assert_eq!(latest.refreshed_at, refreshed.refreshed_at);
        assert_eq!(latest.snapshot, refreshed.snapshot);
    }
}
