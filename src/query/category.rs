use std::fmt;
use std::str::FromStr;

use crate::query::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Product category a query searches in.
///
/// The lowercase name is the path segment of the search endpoint,
/// e.g. `/products/search/laptop`.
pub enum Category {
    Laptop,
    Ram,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Laptop, Category::Ram];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Laptop => "laptop",
            Category::Ram => "ram",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| QueryError::UnknownCategory(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_names_only() {
        assert_eq!("laptop".parse::<Category>(), Ok(Category::Laptop));
        assert_eq!("ram".parse::<Category>(), Ok(Category::Ram));
        assert_eq!(
            "Laptop".parse::<Category>(),
            Err(QueryError::UnknownCategory("Laptop".into()))
        );
        assert!("phone".parse::<Category>().is_err());
    }

    #[test]
    fn display_matches_path_segment() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
