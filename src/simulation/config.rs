// src/simulation/config.rs

use crate::error::ConfigError;
use crate::model::inventory::StockLevel;
use crate::model::order::StreamId;
use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub starting_inventory: Vec<StockLevel>,
    /// Upper bound for the quantity on a single order line.
    pub max_quantity: u32,
    pub streams: RangeInclusive<StreamId>,
    /// Fixed seed for the order source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            starting_inventory: vec![
                StockLevel::new("A", 150),
                StockLevel::new("B", 150),
                StockLevel::new("C", 100),
                StockLevel::new("D", 100),
                StockLevel::new("E", 200),
            ],
            max_quantity: 5,
            streams: 1..=5,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Checks the run settings. The starting inventory itself is checked
    /// when the allocator builds its catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::InvalidMaxQuantity);
        }
        if self.streams.is_empty() {
            return Err(ConfigError::NoStreams);
        }
        Ok(())
    }
}
