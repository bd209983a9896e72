// src/model/catalog.rs

use crate::error::ConfigError;
use std::collections::HashMap;

/// The fixed, sorted list of product identifiers for one run.
///
/// Every per-order vector (ordered / allocated / backorder) is indexed by
/// catalog position.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<String>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog from a set of product ids. The ids are sorted
    /// lexicographically; duplicates and empty ids are rejected.
    pub fn new<I, S>(products: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut products: Vec<String> = products.into_iter().map(Into::into).collect();
        if products.is_empty() {
            return Err(ConfigError::EmptyInventory);
        }
        if products.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::EmptyProductId);
        }

        products.sort();
        if let Some(dup) = products.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicateProduct(dup[0].clone()));
        }

        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        Ok(Self { products, index })
    }

    pub fn index_of(&self, product: &str) -> Option<usize> {
        self.index.get(product).copied()
    }

    pub fn product(&self, index: usize) -> &str {
        &self.products[index]
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_products_and_indexes_them() {
        let catalog = Catalog::new(["E", "A", "C"]).unwrap();
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["A", "C", "E"]);
        assert_eq!(catalog.index_of("C"), Some(1));
        assert_eq!(catalog.index_of("Z"), None);
        assert_eq!(catalog.product(2), "E");
    }

    #[test]
    fn rejects_empty_and_duplicate_products() {
        assert!(matches!(
            Catalog::new(Vec::<String>::new()),
            Err(ConfigError::EmptyInventory)
        ));
        assert!(matches!(
            Catalog::new(["B", "A", "B"]),
            Err(ConfigError::DuplicateProduct(p)) if p == "B"
        ));
        assert!(matches!(
            Catalog::new(["A", ""]),
            Err(ConfigError::EmptyProductId)
        ));
    }
}
