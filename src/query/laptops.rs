use crate::query::{Category, Field, QueryValue};

/// Filters specific to the `laptop` category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LaptopsQuery {
    /// Installed memory in GB.
    pub ram: Option<u32>,
}

impl LaptopsQuery {
    pub const CATEGORY: Category = Category::Laptop;

    pub fn with_ram(mut self, ram: u32) -> Self {
        self.ram = Some(ram);
        self
    }

    pub(crate) fn fields(&self) -> Vec<Field> {
        vec![("ram", self.ram.map(QueryValue::from))]
    }
}
