// src/model/inventory.rs

use crate::model::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// One entry of a starting inventory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product: String,
    pub quantity: u32,
}

impl StockLevel {
    pub fn new(product: impl Into<String>, quantity: u32) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }
}

/// Outcome of reconciling one product's demand against stock on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub allocated: u32,
    pub backorder: u32,
}

/// Quantities on hand, indexed by catalog position.
///
/// Stock only ever goes down: there is no way to add units after
/// construction.
#[derive(Debug, Clone)]
pub struct Inventory {
    on_hand: Vec<u32>,
}

impl Inventory {
    /// Lays the snapshot out in catalog order. Every snapshot product must
    /// be in the catalog; the catalog is built from the same snapshot.
    pub(crate) fn new(catalog: &Catalog, snapshot: &[StockLevel]) -> Self {
        let mut on_hand = vec![0; catalog.len()];
        for level in snapshot {
            if let Some(i) = catalog.index_of(&level.product) {
                on_hand[i] = level.quantity;
            }
        }
        Self { on_hand }
    }

    pub fn quantity(&self, index: usize) -> u32 {
        self.on_hand[index]
    }

    pub fn is_exhausted(&self) -> bool {
        self.on_hand.iter().all(|&q| q == 0)
    }

    pub fn total(&self) -> u64 {
        self.on_hand.iter().map(|&q| u64::from(q)).sum()
    }

    /// Current stock as `(product, quantity)` pairs in catalog order.
    pub fn snapshot(&self, catalog: &Catalog) -> Vec<StockLevel> {
        catalog
            .iter()
            .zip(&self.on_hand)
            .map(|(p, &q)| StockLevel::new(p, q))
            .collect()
    }

    /// Takes as much of `want` as is on hand for one product.
    ///
    /// Full fill when stock covers the demand; otherwise everything left is
    /// allocated (possibly nothing), stock drops to zero and the rest is
    /// backordered.
    pub(crate) fn reconcile(&mut self, index: usize, want: u32) -> Reconciliation {
        let have = self.on_hand[index];

        if have >= want {
            self.on_hand[index] = have - want;
            Reconciliation {
                allocated: want,
                backorder: 0,
            }
        } else {
            self.on_hand[index] = 0;
            Reconciliation {
                allocated: have,
                backorder: want - have,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(levels: &[(&str, u32)]) -> (Catalog, Inventory) {
        let snapshot: Vec<StockLevel> = levels.iter().map(|&(p, q)| StockLevel::new(p, q)).collect();
        let catalog = Catalog::new(snapshot.iter().map(|l| l.product.clone())).unwrap();
        let inventory = Inventory::new(&catalog, &snapshot);
        (catalog, inventory)
    }

    #[test]
    fn full_fill_when_stock_covers_demand() {
        let (_, mut inv) = inventory(&[("A", 5)]);
        let r = inv.reconcile(0, 5);
        assert_eq!(r, Reconciliation { allocated: 5, backorder: 0 });
        assert_eq!(inv.quantity(0), 0);
    }

    #[test]
    fn partial_fill_drains_stock_and_backorders_the_rest() {
        let (_, mut inv) = inventory(&[("A", 2)]);
        let r = inv.reconcile(0, 3);
        assert_eq!(r, Reconciliation { allocated: 2, backorder: 1 });
        assert_eq!(inv.quantity(0), 0);
    }

    #[test]
    fn empty_stock_backorders_everything() {
        let (_, mut inv) = inventory(&[("A", 0), ("B", 4)]);
        let r = inv.reconcile(0, 4);
        assert_eq!(r, Reconciliation { allocated: 0, backorder: 4 });
        assert_eq!(inv.quantity(0), 0);
        assert!(!inv.is_exhausted());
    }

    #[test]
    fn snapshot_is_in_catalog_order() {
        let (catalog, inv) = inventory(&[("B", 1), ("A", 7)]);
        assert_eq!(
            inv.snapshot(&catalog),
            vec![StockLevel::new("A", 7), StockLevel::new("B", 1)]
        );
        assert_eq!(inv.total(), 8);
    }
}
