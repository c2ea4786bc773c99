//! Search-as-you-type over the catalog.

use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::{Catalog, ProductId};
use crate::coalesce::Coalescer;
use crate::SearchOptions;

/// Runs catalog searches as the user types, at most once per quiet period.
///
/// Results are published as product ids on a watch channel, so a late
/// subscriber always sees the latest result set.
#[derive(Debug)]
pub struct LiveSearch<C: Catalog> {
    catalog: Arc<C>,
    coalescer: Coalescer,
    results: Arc<watch::Sender<Vec<ProductId>>>,
}

impl<C: Catalog> LiveSearch<C> {
    pub fn new(catalog: Arc<C>, options: SearchOptions) -> Self {
        let (results, _) = watch::channel(Vec::new());
        Self {
            catalog,
            coalescer: Coalescer::new(options.quiet_period),
            results: Arc::new(results),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ProductId>> {
        self.results.subscribe()
    }

    /// The most recently published results.
    pub fn results(&self) -> Vec<ProductId> {
        self.results.borrow().clone()
    }

    /// A keystroke: search for `query` once typing pauses.
    pub fn input(&self, query: impl Into<String>) {
        let query = query.into();
        let catalog = self.catalog.clone();
        let results = self.results.clone();
        self.coalescer.trigger(move || {
            publish(catalog.as_ref(), &results, &query);
        });
    }

    /// An explicit submit: cancel any pending search and run this one now.
    pub fn submit(&self, query: &str) -> Vec<ProductId> {
        self.coalescer.cancel();
        publish(self.catalog.as_ref(), &self.results, query)
    }
}

#[tracing::instrument(name = "searching catalog", skip(catalog, results))]
fn publish<C: Catalog>(
    catalog: &C,
    results: &watch::Sender<Vec<ProductId>>,
    query: &str,
) -> Vec<ProductId> {
    let found: Vec<ProductId> = catalog
        .search(query)
        .iter()
        .map(|product| product.id)
        .collect();
    tracing::debug!(matches = found.len(), "search finished");
    results.send_replace(found.clone());
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use std::time::Duration;
    use tokio::time::sleep;

    fn live_search() -> LiveSearch<StaticCatalog> {
        LiveSearch::new(Arc::new(StaticCatalog::shinelix()), SearchOptions::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_publishes_after_quiet_period() {
        let search = live_search();
        let mut rx = search.subscribe();

        search.input("pe");
        sleep(Duration::from_millis(100)).await;
        search.input("pea");
        sleep(Duration::from_millis(100)).await;
        search.input("pearl");
        sleep(Duration::from_millis(100)).await;
        assert!(search.results().is_empty());

        sleep(Duration::from_millis(250)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![ProductId(2), ProductId(11)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_cancels_pending_input() {
        let search = live_search();

        search.input("ring");
        let found = search.submit("hoop");
        assert_eq!(found, vec![ProductId(3)]);

        sleep(Duration::from_secs(1)).await;
        assert_eq!(search.results(), vec![ProductId(3)]);
    }

    #[tokio::test]
    async fn test_short_query_clears_results() {
        let search = live_search();
        assert!(!search.submit("gold").is_empty());
        assert!(search.submit("g").is_empty());
        assert!(search.results().is_empty());
    }
}
