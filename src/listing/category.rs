use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::listing::Error;

/// The closed set of things the marketplace lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[serde(alias = "property", alias = "properties")]
    ResidentialSale,
    #[serde(alias = "hotels")]
    Hotel,
    #[serde(alias = "shortlet", alias = "shortlets")]
    ShortTermRental,
    Land,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ResidentialSale,
        Category::Hotel,
        Category::ShortTermRental,
        Category::Land,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::ResidentialSale => "residential-sale",
            Category::Hotel => "hotel",
            Category::ShortTermRental => "short-term-rental",
            Category::Land => "land",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential-sale" | "property" | "properties" => Ok(Category::ResidentialSale),
            "hotel" | "hotels" => Ok(Category::Hotel),
            "short-term-rental" | "shortlet" | "shortlets" => Ok(Category::ShortTermRental),
            "land" => Ok(Category::Land),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Either every category or exactly one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Anything that belongs to a listing category.
pub trait Categorized {
    fn category(&self) -> Category;
}

impl<T: Categorized> Categorized for &T {
    fn category(&self) -> Category {
        (**self).category()
    }
}
