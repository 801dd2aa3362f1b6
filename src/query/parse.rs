use std::collections::HashMap;

use tracing::debug;

use crate::query::{Category, LaptopsQuery, ProductQuery, QueryError, QueryVariant, RamQuery};

/// Keys understood for any category.
const SHARED_KEYS: [&str; 4] = ["minPrice", "maxPrice", "brand", "lastId"];

/// Query parameters, every value kept per key.
struct Params(HashMap<String, Vec<String>>);

impl Params {
    fn collect<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            params
                .entry(key.as_ref().to_string())
                .or_default()
                .push(value.as_ref().to_string());
        }
        Params(params)
    }

    /// The single value of `key`. Only keys that are read can be duplicates.
    fn get(&self, key: &str) -> Result<Option<&str>, QueryError> {
        match self.0.get(key).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value.as_str())),
            Some(_) => Err(QueryError::DuplicateKey(key.into())),
        }
    }

    fn unsigned(&self, key: &str) -> Result<Option<u32>, QueryError> {
        self.get(key)?
            .map(|value| {
                value.parse::<u32>().map_err(|_| QueryError::InvalidInteger {
                    key: key.into(),
                    value: value.into(),
                })
            })
            .transpose()
    }

    fn list(&self, key: &str) -> Result<Vec<String>, QueryError> {
        Ok(self
            .get(key)?
            .map(|value| {
                value
                    .split(',')
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn variant_keys(category: Category) -> &'static [&'static str] {
    match category {
        Category::Laptop => &["ram"],
        Category::Ram => &["capacity", "ddr"],
    }
}

impl ProductQuery {
    /// Parses a raw, percent-encoded query string (without the leading `?`).
    ///
    /// ```rust
    /// use product_query::{Category, ProductQuery};
    ///
    /// let query = ProductQuery::parse(Category::Laptop, "minPrice=500&ram=8").unwrap();
    /// assert_eq!(query.min_price, Some(500));
    /// assert_eq!(query.to_url_query(), "minPrice=500&ram=8");
    /// ```
    pub fn parse(category: Category, raw: &str) -> Result<Self, QueryError> {
        Self::from_pairs(category, url::form_urlencoded::parse(raw.as_bytes()))
    }

    /// Builds a query from already decoded key/value pairs.
    ///
    /// Unknown keys, and keys of other categories, are ignored.
    pub fn from_pairs<I, K, V>(category: Category, pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params = Params::collect(pairs);
        let known = |key: &str| SHARED_KEYS.contains(&key) || variant_keys(category).contains(&key);
        for key in params.0.keys().filter(|key| !known(key)) {
            debug!(key = %key, %category, "ignoring query parameter");
        }

        let min_price = params.unsigned("minPrice")?;
        let max_price = params.unsigned("maxPrice")?;
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                return Err(QueryError::PriceRange { min, max });
            }
        }

        let variant = match category {
            Category::Laptop => QueryVariant::Laptops(LaptopsQuery {
                ram: params.unsigned("ram")?,
            }),
            Category::Ram => QueryVariant::Ram(RamQuery {
                capacity: params.unsigned("capacity")?,
                ddr: params.get("ddr")?.map(str::parse).transpose()?,
            }),
        };

        Ok(ProductQuery {
            min_price,
            max_price,
            brand: params.list("brand")?,
            last_id: params.get("lastId")?.map(String::from),
            variant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Ddr;

    #[test]
    fn empty_query() {
        let query =
            ProductQuery::from_pairs(Category::Laptop, Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(query, ProductQuery::empty(Category::Laptop));
    }

    #[test]
    fn prices_must_be_unsigned_ints() {
        for price in ["invalid", "15.5", "-10", "2348324821848324321", ""] {
            for key in ["minPrice", "maxPrice"] {
                assert_eq!(
                    ProductQuery::from_pairs(Category::Laptop, [(key, price)]),
                    Err(QueryError::InvalidInteger {
                        key: key.into(),
                        value: price.into()
                    })
                );
            }
        }
    }

    #[test]
    fn min_price_must_not_exceed_max_price() {
        assert_eq!(
            ProductQuery::parse(Category::Laptop, "minPrice=50&maxPrice=40"),
            Err(QueryError::PriceRange { min: 50, max: 40 })
        );
        assert!(ProductQuery::parse(Category::Laptop, "minPrice=40&maxPrice=40").is_ok());
    }

    #[test]
    fn laptop_ram_must_be_unsigned() {
        for ram in ["-5", "15.5", "asdfs", "47537513949824891"] {
            assert!(matches!(
                ProductQuery::from_pairs(Category::Laptop, [("ram", ram)]),
                Err(QueryError::InvalidInteger { .. })
            ));
        }
    }

    #[test]
    fn repeated_key_is_rejected() {
        assert_eq!(
            ProductQuery::parse(Category::Laptop, "ram=8&ram=16"),
            Err(QueryError::DuplicateKey("ram".into()))
        );
    }

    #[test]
    fn repeated_unread_key_is_ignored() {
        let query = ProductQuery::parse(Category::Laptop, "sort=asc&sort=desc&ram=8").unwrap();
        assert_eq!(query.variant, QueryVariant::Laptops(LaptopsQuery { ram: Some(8) }));

        let query = ProductQuery::parse(Category::Laptop, "ddr=DDR4&ddr=DDR5").unwrap();
        assert_eq!(query, ProductQuery::empty(Category::Laptop));
        assert_eq!(
            ProductQuery::parse(Category::Ram, "ddr=DDR4&ddr=DDR5"),
            Err(QueryError::DuplicateKey("ddr".into()))
        );
    }

    #[test]
    fn ram_query_fields() {
        let query =
            ProductQuery::parse(Category::Ram, "capacity=32&ddr=DDR5&brand=corsair,,gskill")
                .unwrap();
        assert_eq!(query.brand, ["corsair", "gskill"]);
        assert_eq!(
            query.variant,
            QueryVariant::Ram(RamQuery {
                capacity: Some(32),
                ddr: Some(Ddr::DDR5)
            })
        );
        assert_eq!(
            ProductQuery::parse(Category::Ram, "ddr=SDRAM"),
            Err(QueryError::InvalidDdr("SDRAM".into()))
        );
    }

    #[test]
    fn other_category_keys_are_ignored() {
        let query = ProductQuery::parse(Category::Laptop, "ddr=bogus&capacity=x&sort=asc").unwrap();
        assert_eq!(query, ProductQuery::empty(Category::Laptop));
    }

    #[test]
    fn values_are_percent_decoded() {
        let query = ProductQuery::parse(Category::Laptop, "lastId=a%20b&brand=h%26m").unwrap();
        assert_eq!(query.last_id.as_deref(), Some("a b"));
        assert_eq!(query.brand, ["h&m"]);
    }
}
