mod client;
pub use client::ProductsClient;
