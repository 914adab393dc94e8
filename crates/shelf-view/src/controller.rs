//! Wires user events to the store, query engine, and paginator.
//!
//! Every handler runs to completion and recomputes the view and page before
//! returning a freshly rendered [`Screen`].

use std::str::FromStr;

use shelf_client::ProductSource;

use crate::error::ParseEventError;
use crate::pagination::{self, parse_page_size, PaginationState};
use crate::query;
use crate::render::{self, Screen};
use crate::state::{SearchTerm, SortConfig, SortKey};
use crate::store::{FetchOutcome, ProductStore};

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Page load, or a retry after a failed fetch.
    Load,
    /// The search box changed to this raw input.
    Search(String),
    /// A column header was clicked.
    SortBy(SortKey),
    /// The page-size selector changed to this raw value.
    PageSize(String),
    Previous,
    Next,
    GoTo(usize),
}

impl FromStr for UiEvent {
    type Err = ParseEventError;

    /// Parses a command line such as `search shirt`, `sort price`, `size 20`,
    /// `prev`, `next`, `page 3`, or `reload`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let require = |expected: &'static str| {
            if rest.is_empty() {
                Err(ParseEventError::MissingArgument {
                    command: command.to_owned(),
                    expected,
                })
            } else {
                Ok(rest)
            }
        };

        match command.to_ascii_lowercase().as_str() {
            "" => Err(ParseEventError::Empty),
            "load" | "reload" => Ok(UiEvent::Load),
            // An empty search clears the filter.
            "search" | "find" => Ok(UiEvent::Search(rest.to_owned())),
            "sort" => Ok(UiEvent::SortBy(require("a column: title or price")?.parse()?)),
            "size" => Ok(UiEvent::PageSize(require("a page size")?.to_owned())),
            "prev" | "previous" | "p" => Ok(UiEvent::Previous),
            "next" | "n" => Ok(UiEvent::Next),
            "page" | "goto" => {
                let raw = require("a page number")?;
                raw.parse::<usize>()
                    .map(UiEvent::GoTo)
                    .map_err(|_| ParseEventError::InvalidPage(raw.to_owned()))
            }
            other => Err(ParseEventError::UnknownCommand(other.to_owned())),
        }
    }
}

/// Owns the catalog state for one viewer session.
pub struct Controller<S> {
    source: S,
    store: ProductStore,
    term: SearchTerm,
    sort: SortConfig,
    pagination: PaginationState,
}

impl<S: ProductSource> Controller<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: ProductStore::new(),
            term: SearchTerm::default(),
            sort: SortConfig::default(),
            pagination: PaginationState::default(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    #[must_use]
    pub fn search_term(&self) -> &SearchTerm {
        &self.term
    }

    #[must_use]
    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    #[must_use]
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Dispatches `event` to its handler.
    pub async fn handle(&mut self, event: UiEvent) -> Screen {
        match event {
            UiEvent::Load => self.load().await,
            UiEvent::Search(raw) => self.search(&raw),
            UiEvent::SortBy(key) => self.sort_by(key),
            UiEvent::PageSize(raw) => self.set_page_size(&raw),
            UiEvent::Previous => self.previous_page(),
            UiEvent::Next => self.next_page(),
            UiEvent::GoTo(page) => self.go_to_page(page),
        }
    }

    /// Fetches the catalog once. After a failure, calling again retries.
    ///
    /// Only the screen returned for a failed fetch carries the error row; the
    /// next event re-renders the table from the (empty) view.
    pub async fn load(&mut self) -> Screen {
        match self.store.fetch_all(&self.source).await {
            FetchOutcome::Loaded(_) => {
                self.pagination.reset();
                self.screen()
            }
            FetchOutcome::Failed(message) => Screen {
                body: render::render_error(&message),
                pagination: render::render_pagination(&self.pagination, self.store.view().len()),
            },
            FetchOutcome::Skipped => self.screen(),
        }
    }

    /// Filters the full catalog by title. Clears any active sort.
    pub fn search(&mut self, raw: &str) -> Screen {
        self.term = SearchTerm::new(raw);
        self.sort = SortConfig::default();
        let view = query::filter(self.store.full(), &self.term).into_owned();
        tracing::debug!(term = self.term.as_str(), matches = view.len(), "search");
        self.store.set_view(view);
        self.pagination.reset();
        self.screen()
    }

    /// Sorts the current view by `key`, toggling the order on repeat clicks.
    /// The search filter is kept.
    pub fn sort_by(&mut self, key: SortKey) -> Screen {
        self.sort.toggle(key);
        tracing::debug!(%key, order = %self.sort.order, "sort");
        let view = query::sort(self.store.view(), self.sort);
        self.store.set_view(view);
        self.pagination.reset();
        self.screen()
    }

    /// Applies page-size selector input. Invalid input selects the default size.
    pub fn set_page_size(&mut self, raw: &str) -> Screen {
        let page_size = parse_page_size(raw);
        tracing::debug!(page_size, "page size changed");
        self.pagination.set_page_size(page_size);
        self.screen()
    }

    pub fn previous_page(&mut self) -> Screen {
        self.pagination.previous();
        self.screen()
    }

    pub fn next_page(&mut self) -> Screen {
        self.pagination.next(self.store.view().len());
        self.screen()
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) -> Screen {
        self.pagination.go_to(page, self.store.view().len());
        tracing::debug!(requested = page, page = self.pagination.page(), "go to page");
        self.screen()
    }

    /// Renders the current state without changing it.
    #[must_use]
    pub fn screen(&self) -> Screen {
        let view = self.store.view();
        Screen {
            body: render::render_rows(pagination::slice(
                view,
                self.pagination.page(),
                self.pagination.page_size(),
            )),
            pagination: render::render_pagination(&self.pagination, view.len()),
        }
    }
}
