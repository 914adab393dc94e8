pub mod client;
pub mod error;
mod retry;
pub mod source;

pub use client::ProductsClient;
pub use error::ClientError;
pub use source::ProductSource;
