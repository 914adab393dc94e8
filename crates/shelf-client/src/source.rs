//! The seam between the catalog view and wherever products come from.

use std::future::Future;

use shelf_core::Product;

use crate::client::ProductsClient;
use crate::error::ClientError;

/// A read-only collection of products that can be fetched as a whole.
///
/// [`ProductsClient`] is the HTTP implementation; tests substitute in-memory
/// sources.
pub trait ProductSource {
    /// Fetches the complete product collection.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;
}

impl ProductSource for ProductsClient {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send {
        ProductsClient::fetch_products(self)
    }
}

impl<S: ProductSource + Sync> ProductSource for &S {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send {
        (**self).fetch_products()
    }
}
