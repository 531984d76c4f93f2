//! Search queries

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Reserved selector value meaning "no constraint on this field"
pub const ANY: &str = "any";

/// An author or genre constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    /// Unconstrained
    #[default]
    Any,

    /// Exact directory id
    Id(String),
}

impl Selector {
    /// Constrain to an exact id
    pub fn id(id: impl Into<String>) -> Self {
        Selector::from(id.into())
    }

    /// Whether `id` satisfies this selector
    pub fn admits(&self, id: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Id(wanted) => wanted == id,
        }
    }

    /// Whether any of `ids` satisfies this selector
    pub fn admits_any<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        match self {
            Selector::Any => true,
            Selector::Id(wanted) => ids.iter().any(|id| id.as_ref() == wanted),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        if value == ANY {
            Selector::Any
        } else {
            Selector::Id(value)
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Selector::from(value.to_string())
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::Any => ANY.to_string(),
            Selector::Id(id) => id,
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::from(s))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str(ANY),
            Selector::Id(id) => f.write_str(id),
        }
    }
}

/// One search submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    /// Title substring; empty (after trimming) matches every title
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: Selector,

    #[serde(default)]
    pub genre: Selector,
}

impl Query {
    /// A query that matches the whole catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<Selector>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<Selector>) -> Self {
        self.genre = genre.into();
        self
    }

    /// True when no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }
}
