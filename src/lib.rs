//! Build, parse and run product listing queries.
//!
//! `ProductQuery` holds the filters of a product search and writes them
//! as a URL query string, `ProductsClient` runs the search against the
//! products service and returns `ProductView`s.
//!
//! Feature Flags:
//! - `serde`: Enables serde support for `ProductView`.
//! - `client`: Enables `ProductsClient`, implies `serde`. (default)

pub mod config;
mod product_view;
mod query;
#[cfg(feature = "client")]
mod search;
#[cfg(feature = "client")]
use header::{HeaderMap, HeaderValue};
pub use product_view::ProductView;
pub use query::{
    Category, Ddr, Field, LaptopsQuery, Presence, ProductQuery, QueryError, QueryValue,
    QueryVariant, RamQuery,
};
#[cfg(feature = "client")]
use reqwest::header;
#[cfg(feature = "client")]
pub use search::ProductsClient;
pub use url::Url;

/// Builds the default headers for the client.
#[cfg(feature = "client")]
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        )),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}
