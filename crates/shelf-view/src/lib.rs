//! In-memory catalog view: fetch-once product store, search, column sort,
//! pagination, and presentation rows.
//!
//! Data flows one way: [`store::ProductStore`] holds the fetched set,
//! [`query`] derives the view, [`pagination`] slices it, and [`render`]
//! projects the slice into rows. [`controller::Controller`] ties the steps
//! to user events.

pub mod controller;
mod error;
pub mod pagination;
pub mod query;
pub mod render;
pub mod state;
pub mod store;

pub use controller::{Controller, UiEvent};
pub use error::ParseEventError;
pub use pagination::{PageControl, PaginationState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use render::{PaginationView, ProductRow, Screen, TableBody};
pub use state::{SearchTerm, SortConfig, SortKey, SortOrder};
pub use store::{FetchOutcome, FetchState, ProductStore};
