//! The read-only product catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Money;

mod query;
mod seed;

pub use query::{CatalogQuery, PriceRange, SortOrder};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown category: {0}")]
    Category(String),
    #[error("invalid price range: {0}")]
    PriceRange(String),
    #[error("unknown sort order: {0}")]
    SortOrder(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rings,
    Necklaces,
    Earrings,
    Bracelets,
    Other,
}

impl Category {
    /// The lowercase tag used in filters and search.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rings => "rings",
            Category::Necklaces => "necklaces",
            Category::Earrings => "earrings",
            Category::Bracelets => "bracelets",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rings" => Ok(Category::Rings),
            "necklaces" => Ok(Category::Necklaces),
            "earrings" => Ok(Category::Earrings),
            "bracelets" => Ok(Category::Bracelets),
            "other" => Ok(Category::Other),
            _ => Err(ParseError::Category(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Money,
    pub description: String,
    pub featured: bool,
    pub in_stock: bool,
}

impl Product {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().contains(needle)
    }
}

/// Queries shorter than this, after trimming, return no search results.
pub const MIN_SEARCH_LEN: usize = 2;

/// Read access to the product list.
///
/// The cart never mutates a catalog; it only resolves ids to products for
/// names and prices.
pub trait Catalog: Send + Sync + 'static {
    /// Gets the product with `id`, if any.
    fn get_by_id(&self, id: ProductId) -> Option<&Product>;

    /// All products in catalog order.
    fn list(&self) -> &[Product];

    /// Products for which `predicate` holds, in catalog order.
    fn filter(&self, predicate: &dyn Fn(&Product) -> bool) -> Vec<&Product> {
        self.list().iter().filter(|&product| predicate(product)).collect()
    }

    fn featured(&self) -> Vec<&Product> {
        self.filter(&|product| product.featured)
    }

    /// Case-insensitive match against name, description and category.
    ///
    /// Returns nothing for queries shorter than [`MIN_SEARCH_LEN`].
    fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }
        self.filter(&|product| product.matches(&needle))
    }
}

/// A catalog backed by a fixed in-memory list.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's twelve seed products.
    pub fn shinelix() -> Self {
        Self::new(seed::products())
    }
}

impl Catalog for StaticCatalog {
    fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    fn list(&self) -> &[Product] {
        &self.products
    }
}
