use crate::Money;

use super::{Category, Product, ProductId};

fn product(
    id: u32,
    name: &str,
    category: Category,
    price: u64,
    description: &str,
    featured: bool,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category,
        price: Money::from_major(price),
        description: description.to_string(),
        featured,
        in_stock: true,
    }
}

pub(super) fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Diamond Solitaire Ring",
            Category::Rings,
            99_999,
            "Elegant 1-carat diamond solitaire ring in 14k white gold. Perfect for engagements and special occasions.",
            true,
        ),
        product(
            2,
            "Pearl Necklace Classic",
            Category::Necklaces,
            22_999,
            "Timeless freshwater pearl necklace with sterling silver clasp. A classic piece for any jewelry collection.",
            true,
        ),
        product(
            3,
            "Gold Hoop Earrings",
            Category::Earrings,
            14_999,
            "14k gold hoop earrings with a brushed finish. Lightweight and perfect for everyday wear.",
            true,
        ),
        product(
            4,
            "Tennis Bracelet",
            Category::Bracelets,
            69_999,
            "Sparkling tennis bracelet with cubic zirconia stones in sterling silver setting.",
            true,
        ),
        product(
            5,
            "Emerald Cocktail Ring",
            Category::Rings,
            175_999,
            "Stunning 3-carat emerald cocktail ring surrounded by diamonds in 18k yellow gold.",
            false,
        ),
        product(
            6,
            "Statement Necklace",
            Category::Necklaces,
            35_999,
            "Bold statement necklace with mixed gemstones and gold-plated chain.",
            false,
        ),
        product(
            7,
            "Diamond Stud Earrings",
            Category::Earrings,
            62_999,
            "Classic diamond stud earrings, 0.5 carat each, in 14k white gold settings.",
            false,
        ),
        product(
            8,
            "Charm Bracelet",
            Category::Bracelets,
            11_999,
            "Sterling silver charm bracelet with heart charm. Add your own charms to personalize.",
            false,
        ),
        product(
            9,
            "Sapphire Pendant",
            Category::Necklaces,
            52_999,
            "Beautiful blue sapphire pendant with diamond accents on a delicate gold chain.",
            false,
        ),
        product(
            10,
            "Wedding Band Set",
            Category::Rings,
            47_999,
            "Matching wedding band set in 14k rose gold with subtle diamond details.",
            false,
        ),
        product(
            11,
            "Vintage Brooch",
            Category::Other,
            15_999,
            "Vintage-inspired brooch with intricate filigree work and pearl center.",
            false,
        ),
        product(
            12,
            "Chain Bracelet",
            Category::Bracelets,
            18_999,
            "Delicate chain bracelet in 14k gold with adjustable length closure.",
            false,
        ),
    ]
}
