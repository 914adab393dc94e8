//! Fetch-once product store.
//!
//! Holds the full fetched set and the derived view. The full set is only ever
//! replaced wholesale by a successful fetch; the view is replaced by query
//! results and is always drawn from the full set.

use shelf_client::{ClientError, ProductSource};
use shelf_core::Product;

/// Lifecycle of the one-shot product fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    InFlight,
    Loaded,
    /// The last attempt failed; a new fetch may be issued.
    Failed,
}

/// Result of a call to [`ProductStore::fetch_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch is already in flight or has already succeeded.
    Skipped,
    /// Products were loaded; carries the product count.
    Loaded(usize),
    /// The fetch failed; carries a human-readable message.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ProductStore {
    state: FetchState,
    full: Vec<Product>,
    view: Vec<Product>,
}

impl ProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fetch_state(&self) -> FetchState {
        self.state
    }

    #[must_use]
    pub fn full(&self) -> &[Product] {
        &self.full
    }

    #[must_use]
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// Replaces the view with a query result derived from [`Self::full`].
    pub fn set_view(&mut self, view: Vec<Product>) {
        self.view = view;
    }

    /// Claims the right to fetch.
    ///
    /// Returns `true` and enters [`FetchState::InFlight`] from `Idle` or
    /// `Failed`. Returns `false` without changing anything while a fetch is in
    /// flight or after one has succeeded.
    pub fn begin_fetch(&mut self) -> bool {
        match self.state {
            FetchState::Idle | FetchState::Failed => {
                self.state = FetchState::InFlight;
                true
            }
            FetchState::InFlight | FetchState::Loaded => false,
        }
    }

    /// Records the result of a fetch claimed with [`Self::begin_fetch`].
    ///
    /// Success replaces both the full set and the view. Failure keeps whatever
    /// was loaded before and re-opens the store for a retry.
    pub fn complete_fetch(&mut self, result: Result<Vec<Product>, ClientError>) -> FetchOutcome {
        debug_assert_eq!(self.state, FetchState::InFlight);
        match result {
            Ok(products) => {
                let count = products.len();
                tracing::info!(count, "loaded products");
                self.view.clone_from(&products);
                self.full = products;
                self.state = FetchState::Loaded;
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product fetch failed");
                self.state = FetchState::Failed;
                FetchOutcome::Failed(err.to_string())
            }
        }
    }

    /// Fetches the product collection from `source` unless a fetch is already
    /// in flight or has succeeded.
    pub async fn fetch_all<S: ProductSource>(&mut self, source: &S) -> FetchOutcome {
        if !self.begin_fetch() {
            tracing::debug!(state = ?self.state, "products already fetched, skipping");
            return FetchOutcome::Skipped;
        }
        tracing::info!("fetching products");
        let result = source.fetch_products().await;
        self.complete_fetch(result)
    }
}
