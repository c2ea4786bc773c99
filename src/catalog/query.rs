use std::str::FromStr;

use super::{Catalog, Category, ParseError, Product};
use crate::Money;

/// An inclusive price band in whole major units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PriceRange {
    Between { min: Money, max: Money },
    AtLeast(Money),
}

impl PriceRange {
    pub fn contains(&self, price: Money) -> bool {
        match *self {
            PriceRange::Between { min, max } => price >= min && price <= max,
            PriceRange::AtLeast(min) => price >= min,
        }
    }
}

/// Parses `"min-max"` or `"min+"`.
impl FromStr for PriceRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::PriceRange(s.to_string());
        let major = |part: &str| part.trim().parse::<u64>().map(Money::from_major);
        let s_trimmed = s.trim();

        if let Some(min) = s_trimmed.strip_suffix('+') {
            return major(min).map(PriceRange::AtLeast).map_err(|_| invalid());
        }

        let (min, max) = s_trimmed.split_once('-').ok_or_else(invalid)?;
        let (min, max) = (major(min).map_err(|_| invalid())?, major(max).map_err(|_| invalid())?);
        if min > max {
            return Err(invalid());
        }
        Ok(PriceRange::Between { min, max })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
    PriceLow,
    PriceHigh,
    Name,
    /// Highest id first.
    Newest,
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "name" => Ok(SortOrder::Name),
            "newest" => Ok(SortOrder::Newest),
            _ => Err(ParseError::SortOrder(s.to_string())),
        }
    }
}

/// The listing page's filter bar: every field is optional and unset fields
/// do not constrain the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: Option<Category>,
    pub price: Option<PriceRange>,
    pub sort: Option<SortOrder>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price(mut self, price: PriceRange) -> Self {
        self.price = Some(price);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    fn admits(&self, product: &Product) -> bool {
        self.category.is_none_or(|category| product.category == category)
            && self.price.is_none_or(|range| range.contains(product.price))
    }

    #[tracing::instrument(name = "filtering catalog", skip(catalog))]
    pub fn apply<'a, C>(&self, catalog: &'a C) -> Vec<&'a Product>
    where
        C: Catalog + ?Sized,
    {
        let mut products = catalog.filter(&|product| self.admits(product));

        match self.sort {
            Some(SortOrder::PriceLow) => products.sort_by_key(|product| product.price),
            Some(SortOrder::PriceHigh) => {
                products.sort_by(|a, b| b.price.cmp(&a.price));
            }
            Some(SortOrder::Name) => {
                products.sort_by_cached_key(|product| product.name.to_lowercase());
            }
            Some(SortOrder::Newest) => products.sort_by(|a, b| b.id.cmp(&a.id)),
            None => {}
        }

        tracing::debug!(matches = products.len(), "catalog filtered");
        products
    }
}
