//! # Product Catalog
//!
//! The catalog collaborator at its interface boundary: name→price→category
//! lookup tables plus a case-insensitive search. The session never sees
//! where the data comes from; this build ships a static in-memory table.

use cedar_core::Money;

/// Read-only catalog interface consumed by the session.
pub trait Catalog: Send + Sync {
    /// Price of a product, `None` when the name is unknown.
    fn price_of(&self, name: &str) -> Option<Money>;

    /// Category names in display order.
    fn categories(&self) -> Vec<String>;

    /// Product names within one category, in display order.
    fn products_in(&self, category: &str) -> Vec<String>;

    /// Case-insensitive substring match across all categories.
    fn filter(&self, search: &str) -> Vec<String>;
}

/// A fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<(String, Vec<(String, i64)>)>,
}

impl StaticCatalog {
    /// Builds a catalog from `(category, [(name, price_cents)])` rows.
    pub fn new(categories: Vec<(String, Vec<(String, i64)>)>) -> Self {
        StaticCatalog { categories }
    }

    /// The demo menu used by the seeded terminal.
    pub fn demo_menu() -> Self {
        let menu: &[(&str, &[(&str, i64)])] = &[
            (
                "Hot Drinks",
                &[
                    ("Espresso", 250),
                    ("Turkish Coffee", 300),
                    ("Coffee", 350),
                    ("Cappuccino", 450),
                    ("Tea", 200),
                ],
            ),
            (
                "Cold Drinks",
                &[
                    ("Iced Latte", 500),
                    ("Lemonade", 400),
                    ("Water", 100),
                    ("Soda", 150),
                ],
            ),
            (
                "Food",
                &[
                    ("Manakish Zaatar", 300),
                    ("Cheese Manakish", 400),
                    ("Croissant", 350),
                    ("Cake", 500),
                ],
            ),
        ];

        StaticCatalog::new(
            menu.iter()
                .map(|(category, products)| {
                    (
                        category.to_string(),
                        products
                            .iter()
                            .map(|(name, cents)| (name.to_string(), *cents))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

impl Catalog for StaticCatalog {
    fn price_of(&self, name: &str) -> Option<Money> {
        self.categories
            .iter()
            .flat_map(|(_, products)| products.iter())
            .find(|(product, _)| product == name)
            .map(|(_, cents)| Money::from_cents(*cents))
    }

    fn categories(&self) -> Vec<String> {
        self.categories.iter().map(|(name, _)| name.clone()).collect()
    }

    fn products_in(&self, category: &str) -> Vec<String> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, products)| products.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    fn filter(&self, search: &str) -> Vec<String> {
        let needle = search.trim().to_lowercase();
        self.categories
            .iter()
            .flat_map(|(_, products)| products.iter())
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
