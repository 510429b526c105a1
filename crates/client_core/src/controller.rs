use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use futures::future::try_join_all;
use shared::{
    domain::{CreatureRecord, ListingState, SearchQuery},
    error::FetchError,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{
    config::Settings,
    source::{CreatureSource, HttpCreatureSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The operation's records were published.
    Committed,
    /// A newer operation started first; the result was dropped.
    Superseded,
}

/// Owns the listing state and turns user actions into fetch operations.
///
/// Every operation takes a sequence number when it flips `is_loading` on. Only
/// the operation holding the latest number may publish its records, so a slow
/// response never overwrites the result of a request started after it.
pub struct PokemonListController {
    source: Arc<dyn CreatureSource>,
    page_size: u32,
    state: watch::Sender<ListingState>,
    latest_operation: AtomicU64,
    initialized: AtomicBool,
}

impl PokemonListController {
    pub fn new(source: Arc<dyn CreatureSource>, page_size: u32) -> Self {
        let (state, _) = watch::channel(ListingState::default());
        Self {
            source,
            page_size: page_size.max(1),
            state,
            latest_operation: AtomicU64::new(0),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let source = HttpCreatureSource::new(settings)?;
        Ok(Self::new(Arc::new(source), settings.page_size))
    }

    /// Loads the default listing.
    pub async fn initialize(&self) -> FetchOutcome {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("listing controller initialized more than once; reloading default listing");
        }
        self.run(SearchQuery::default()).await
    }

    /// Looks up `term` after trimming and lower-casing it. A blank term
    /// reloads the default listing.
    pub async fn search(&self, term: &str) -> FetchOutcome {
        self.run(SearchQuery::new(term)).await
    }

    pub fn state(&self) -> ListingState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListingState> {
        self.state.subscribe()
    }

    async fn run(&self, query: SearchQuery) -> FetchOutcome {
        let operation = self.begin();
        info!(operation, query = query.as_str(), "creature fetch started");

        let records = match self.resolve(&query).await {
            Ok(records) => records,
            Err(err) => {
                error!(
                    operation,
                    query = query.as_str(),
                    kind = err.kind(),
                    error = %err,
                    "creature fetch failed; showing empty result"
                );
                Vec::new()
            }
        };

        self.commit(operation, records)
    }

    fn begin(&self) -> u64 {
        let mut operation = 0;
        self.state.send_modify(|state| {
            operation = self.latest_operation.fetch_add(1, Ordering::SeqCst) + 1;
            state.is_loading = true;
        });
        operation
    }

    fn commit(&self, operation: u64, records: Vec<CreatureRecord>) -> FetchOutcome {
        let count = records.len();
        let committed = self.state.send_if_modified(|state| {
            if self.latest_operation.load(Ordering::SeqCst) != operation {
                return false;
            }
            state.records = records;
            state.is_loading = false;
            true
        });

        if committed {
            info!(operation, count, "creature listing updated");
            FetchOutcome::Committed
        } else {
            debug!(operation, "discarding stale creature fetch result");
            FetchOutcome::Superseded
        }
    }

    async fn resolve(&self, query: &SearchQuery) -> Result<Vec<CreatureRecord>, FetchError> {
        if query.is_empty() {
            let summaries = self.source.list_page(self.page_size).await?;
            debug!(count = summaries.len(), "resolving creature details");
            try_join_all(
                summaries
                    .iter()
                    .map(|summary| self.source.fetch_detail(&summary.url)),
            )
            .await
        } else {
            let record = self.source.fetch_by_name(query.as_str()).await?;
            Ok(vec![record])
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
