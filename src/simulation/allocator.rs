// src/simulation/allocator.rs

use crate::error::{ConfigError, OrderError};
use crate::model::catalog::Catalog;
use crate::model::inventory::{Inventory, StockLevel};
use crate::model::order::{Order, StreamId};
use crate::simulation::config::SimulationConfig;
use std::fmt;
use tracing::{debug, info};

/// Outcome of one processed order. All three vectors are indexed by
/// catalog position and satisfy `allocated[i] + backorder[i] == ordered[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    pub header: StreamId,
    pub ordered: Vec<u32>,
    pub allocated: Vec<u32>,
    pub backorder: Vec<u32>,
}

/// Comma-joined quantities, e.g. `1,2,0`.
pub(crate) fn join_quantities(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for LedgerRecord {
    /// `2: 1,2,2,5,1::0,2,0,0,1::1,0,2,5,0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}::{}::{}",
            self.header,
            join_quantities(&self.ordered),
            join_quantities(&self.allocated),
            join_quantities(&self.backorder)
        )
    }
}

/// Owns the inventory and the order ledger for a single run.
pub struct InventoryAllocator {
    catalog: Catalog,
    inventory: Inventory,
    ledger: Vec<LedgerRecord>,
}

impl InventoryAllocator {
    pub fn new(starting_inventory: Vec<StockLevel>) -> Result<Self, ConfigError> {
        let catalog = Catalog::new(starting_inventory.iter().map(|l| l.product.clone()))?;
        let inventory = Inventory::new(&catalog, &starting_inventory);

        info!(
            products = catalog.len(),
            units = inventory.total(),
            "inventory allocator ready"
        );

        Ok(Self {
            catalog,
            inventory,
            ledger: Vec::new(),
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.starting_inventory.clone())
    }

    /// True when no product has any stock left.
    pub fn is_exhausted(&self) -> bool {
        self.inventory.is_exhausted()
    }

    /// Allocates one order against the inventory and records the outcome.
    ///
    /// Returns `Ok(false)` without touching any state once the inventory is
    /// exhausted. A malformed order is rejected before anything is mutated.
    pub fn process(&mut self, order: &Order) -> Result<bool, OrderError> {
        if self.is_exhausted() {
            debug!(header = order.header, "inventory exhausted, order not processed");
            return Ok(false);
        }

        let ordered = self.project_demand(order)?;

        let n = self.catalog.len();
        let mut allocated = vec![0; n];
        let mut backorder = vec![0; n];

        for (i, &want) in ordered.iter().enumerate() {
            if want == 0 {
                continue;
            }
            let outcome = self.inventory.reconcile(i, want);
            allocated[i] = outcome.allocated;
            backorder[i] = outcome.backorder;
            if outcome.backorder > 0 {
                debug!(
                    product = self.catalog.product(i),
                    backorder = outcome.backorder,
                    "demand exceeds stock"
                );
            }
        }

        let record = LedgerRecord {
            header: order.header,
            ordered,
            allocated,
            backorder,
        };
        debug!(seq = self.ledger.len() + 1, record = %record, "order processed");
        self.ledger.push(record);

        if self.is_exhausted() {
            info!(orders = self.ledger.len(), "last unit of stock allocated");
        }

        Ok(true)
    }

    /// Validates the order and lays its demand out in catalog order.
    fn project_demand(&self, order: &Order) -> Result<Vec<u32>, OrderError> {
        let mut ordered = vec![0; self.catalog.len()];

        for line in &order.lines {
            let i = self
                .catalog
                .index_of(&line.product)
                .ok_or_else(|| OrderError::UnknownProduct(line.product.clone()))?;
            if line.quantity == 0 {
                return Err(OrderError::NonPositiveQuantity(line.product.clone()));
            }
            if ordered[i] != 0 {
                return Err(OrderError::DuplicateProduct(line.product.clone()));
            }
            ordered[i] = line.quantity;
        }

        Ok(ordered)
    }

    pub fn ledger(&self) -> &[LedgerRecord] {
        &self.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}
