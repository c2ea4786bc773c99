mod common;

#[cfg(test)]
mod tests {
    use super::*;

    use common::*;
    use shinelix::catalog::{CatalogQuery, PriceRange, SortOrder};
    use shinelix::{Catalog, Category, Money, Product, ProductId, StaticCatalog};

    fn product(id: u32, name: &str, category: Category, price: u64) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category,
            price: Money::from_major(price),
            description: format!("{name} in sterling silver"),
            featured: id % 2 == 0,
            in_stock: true,
        }
    }

    #[test]
    fn test_seed_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.list().len(), 12);
        assert!(catalog.list().iter().all(|product| product.in_stock));
        assert_eq!(
            catalog.get_by_id(ProductId(5)).map(|product| product.price),
            Some(Money::from_major(175_999))
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = StaticCatalog::new(vec![
            product(1, "Opal Ring", Category::Rings, 300),
            product(2, "Amber Pendant", Category::Necklaces, 120),
            product(3, "Jade Cuff", Category::Bracelets, 950),
        ]);

        let featured: Vec<ProductId> = catalog.featured().iter().map(|p| p.id).collect();
        assert_eq!(featured, vec![ProductId(2)]);

        let query = CatalogQuery::new()
            .price(PriceRange::AtLeast(Money::from_major(200)))
            .sort(SortOrder::Name);
        let names: Vec<&str> = query
            .apply(&catalog)
            .iter()
            .map(|product| product.name.as_str())
            .collect();
        assert_eq!(names, vec!["Jade Cuff", "Opal Ring"]);

        assert_eq!(catalog.search("silver").len(), 3);
        assert_eq!(catalog.search("cuff").len(), 1);
    }

    #[test]
    fn test_filter_bar_values_parse() {
        let query = CatalogQuery {
            category: Some("necklaces".parse().unwrap()),
            price: Some("30000-60000".parse().unwrap()),
            sort: Some("price-low".parse().unwrap()),
        };
        let ids: Vec<u32> = query.apply(catalog().as_ref()).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![6, 9]);

        assert!("cheapest".parse::<SortOrder>().is_err());
    }
}
