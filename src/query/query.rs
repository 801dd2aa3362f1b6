use crate::query::{Category, Field, LaptopsQuery, Presence, QueryValue, RamQuery};

/// Category specific part of a `ProductQuery`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryVariant {
    Laptops(LaptopsQuery),
    Ram(RamQuery),
}

impl QueryVariant {
    /// A variant of the given category with none of its filters set.
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Laptop => QueryVariant::Laptops(LaptopsQuery::default()),
            Category::Ram => QueryVariant::Ram(RamQuery::default()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            QueryVariant::Laptops(_) => LaptopsQuery::CATEGORY,
            QueryVariant::Ram(_) => RamQuery::CATEGORY,
        }
    }

    fn fields(&self) -> Vec<Field> {
        match self {
            QueryVariant::Laptops(laptops) => laptops.fields(),
            QueryVariant::Ram(ram) => ram.fields(),
        }
    }
}

impl From<LaptopsQuery> for QueryVariant {
    fn from(query: LaptopsQuery) -> Self {
        QueryVariant::Laptops(query)
    }
}

impl From<RamQuery> for QueryVariant {
    fn from(query: RamQuery) -> Self {
        QueryVariant::Ram(query)
    }
}

/// Filter criteria for a product search.
///
/// Shared bounds live here, category specific filters in `variant`.
///
/// ```rust
/// use product_query::{LaptopsQuery, ProductQuery};
///
/// let query = ProductQuery::new(LaptopsQuery::default().with_ram(8)).with_min_price(500);
/// assert_eq!(query.to_url_query(), "minPrice=500&ram=8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Lower price bound, `None` is unbounded.
    pub min_price: Option<u32>,
    /// Upper price bound, `None` is unbounded.
    pub max_price: Option<u32>,
    /// Accepted brands, empty accepts any brand.
    pub brand: Vec<String>,
    /// Id of the last product of the previous page.
    pub last_id: Option<String>,
    pub variant: QueryVariant,
}

impl ProductQuery {
    pub fn new(variant: impl Into<QueryVariant>) -> Self {
        Self {
            min_price: None,
            max_price: None,
            brand: Vec::new(),
            last_id: None,
            variant: variant.into(),
        }
    }

    /// A query of the given category with no filter set.
    pub fn empty(category: Category) -> Self {
        Self::new(QueryVariant::empty(category))
    }

    pub fn with_min_price(mut self, min_price: u32) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand.push(brand.into());
        self
    }

    pub fn with_last_id(mut self, last_id: impl Into<String>) -> Self {
        self.last_id = Some(last_id.into());
        self
    }

    pub fn category(&self) -> Category {
        self.variant.category()
    }

    /// All fields in serialization order: shared fields, then the variant's.
    /// The category is not a field.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            ("minPrice", self.min_price.map(QueryValue::from)),
            ("maxPrice", self.max_price.map(QueryValue::from)),
            ("brand", Some(QueryValue::from(self.brand.clone()))),
            ("lastId", self.last_id.clone().map(QueryValue::from)),
        ];
        fields.extend(self.variant.fields());
        fields
    }

    /// Writes the truthy fields as `key=value` pairs joined by `&`.
    ///
    /// Values are not percent-encoded. A bound of `0` is treated as unset;
    /// use [`ProductQuery::to_url_query_with`] with [`Presence::Defined`] to keep it.
    pub fn to_url_query(&self) -> String {
        self.to_url_query_with(Presence::Truthy)
    }

    pub fn to_url_query_with(&self, presence: Presence) -> String {
        self.pairs(presence)
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The `(key, value)` pairs `to_url_query_with` writes, in order.
    pub fn pairs(&self, presence: Presence) -> Vec<(&'static str, String)> {
        self.fields()
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.filter(|value| value.is_emitted(presence))?;
                Some((key, value.to_string()))
            })
            .collect()
    }
}
