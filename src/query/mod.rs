mod category;
mod error;
mod laptops;
mod parse;
mod query;
mod ram;
mod value;
pub use category::Category;
pub use error::QueryError;
pub use laptops::LaptopsQuery;
pub use query::{ProductQuery, QueryVariant};
pub use ram::{Ddr, RamQuery};
pub use value::{Field, Presence, QueryValue};
