use eyre::{bail, eyre, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::{Presence, ProductQuery, ProductView};

/// Client for the products service.
///
/// ```rust,no_run
/// use product_query::{LaptopsQuery, ProductQuery, ProductsClient};
///
/// #[tokio::main]
/// async fn main() -> eyre::Result<()> {
///     let client = ProductsClient::new("http://localhost:8080")?;
///     let query = ProductQuery::new(LaptopsQuery::default().with_ram(16)).with_max_price(1500);
///     for product in client.search(&query).await? {
///         println!("{} {}", product.product_name, product.price);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProductsClient {
    client: Client,
    base_url: Url,
    presence: Presence,
}

impl ProductsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&Config {
            api_url: base_url.into(),
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .default_headers(crate::build_headers())
            .timeout(config.timeout)
            .build()?;

        let mut base_url = Url::parse(&config.api_url)?;
        if base_url.cannot_be_a_base() {
            bail!("{base_url} can't be used as a base URL");
        }
        // keep any path prefix when joining
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            presence: Presence::default(),
        })
    }

    /// Sets which filter values are sent, see [`Presence`].
    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/products/search/{category}?{query}`, values percent-encoded.
    pub fn search_url(&self, query: &ProductQuery) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("products/search/{}", query.category()))?;
        let pairs = query.pairs(self.presence);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// `{base}/products/{product_id}`.
    pub fn product_url(&self, product_id: &str) -> Result<Url> {
        // `push` drops dot segments
        if matches!(product_id, "" | "." | "..") {
            bail!("Invalid product id: {product_id:?}");
        }
        let mut url = self.base_url.join("products/")?;
        url.path_segments_mut()
            .map_err(|_| eyre!("{} can't be used as a base URL", self.base_url))?
            .pop_if_empty()
            .push(product_id);
        Ok(url)
    }

    /// Searches the products matching `query`.
    pub async fn search(&self, query: &ProductQuery) -> Result<Vec<ProductView>> {
        let url = self.search_url(query)?;
        debug!(%url, "searching products");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "product search failed");
            bail!("Product search failed with status {status}");
        }

        let products: Vec<ProductView> = response.json().await?;
        debug!(count = products.len(), "products found");
        Ok(products)
    }

    /// Fetches a single product. `None` when the service doesn't know the id.
    pub async fn find_by_id(&self, product_id: &str) -> Result<Option<ProductView>> {
        let url = self.product_url(product_id)?;
        debug!(%url, "fetching product");

        let response = self.client.get(url.clone()).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                warn!(%url, %status, "product lookup failed");
                bail!("Product lookup failed with status {status}");
            }
        }
    }
}
