#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Default, Debug, Clone, PartialEq)]
/// A product as shown on a listing page.
///
/// Returned by `ProductsClient::search` and `ProductsClient::find_by_id`.
pub struct ProductView {
    /// Unique identifier of the product.
    pub product_id: String,
    /// Display name of the product.
    pub product_name: String,
    /// Current price of the product.
    pub price: f64,
    /// URL or path to the product image.
    pub image: String,
}
