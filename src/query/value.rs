use std::fmt;

/// A named query field and its value, if set.
pub type Field = (&'static str, Option<QueryValue>);

/// Value of a single query field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Number(u32),
    Text(String),
    /// Written as its items joined by `,`.
    List(Vec<String>),
}

/// Which set values the serializer writes out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Drop `0`, empty strings and empty lists: a zero bound means "no filter".
    #[default]
    Truthy,
    /// Keep every set value, including `0` and empty strings.
    /// Empty lists are still dropped.
    Defined,
}

impl QueryValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            QueryValue::Number(n) => *n != 0,
            QueryValue::Text(text) => !text.is_empty(),
            QueryValue::List(items) => !items.is_empty(),
        }
    }

    pub fn is_emitted(&self, presence: Presence) -> bool {
        match presence {
            Presence::Truthy => self.is_truthy(),
            Presence::Defined => !matches!(self, QueryValue::List(items) if items.is_empty()),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Number(n) => write!(f, "{n}"),
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Number(n)
    }
}

impl From<String> for QueryValue {
    fn from(text: String) -> Self {
        QueryValue::Text(text)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(items: Vec<String>) -> Self {
        QueryValue::List(items)
    }
}
