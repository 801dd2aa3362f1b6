use std::fmt;
use std::str::FromStr;

use crate::query::{Category, Field, QueryError, QueryValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Memory module generation.
pub enum Ddr {
    DDR3,
    DDR4,
    DDR5,
}

impl Ddr {
    pub const ALL: [Ddr; 3] = [Ddr::DDR3, Ddr::DDR4, Ddr::DDR5];

    pub fn as_str(self) -> &'static str {
        match self {
            Ddr::DDR3 => "DDR3",
            Ddr::DDR4 => "DDR4",
            Ddr::DDR5 => "DDR5",
        }
    }
}

impl fmt::Display for Ddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ddr {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ddr::ALL
            .into_iter()
            .find(|ddr| ddr.as_str() == s)
            .ok_or_else(|| QueryError::InvalidDdr(s.into()))
    }
}

/// Filters specific to the `ram` category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RamQuery {
    /// Module capacity in GB.
    pub capacity: Option<u32>,
    pub ddr: Option<Ddr>,
}

impl RamQuery {
    pub const CATEGORY: Category = Category::Ram;

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_ddr(mut self, ddr: Ddr) -> Self {
        self.ddr = Some(ddr);
        self
    }

    pub(crate) fn fields(&self) -> Vec<Field> {
        vec![
            ("capacity", self.capacity.map(QueryValue::from)),
            ("ddr", self.ddr.map(|ddr| QueryValue::Text(ddr.to_string()))),
        ]
    }
}
