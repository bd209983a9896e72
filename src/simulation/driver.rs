// src/simulation/driver.rs

use crate::error::OrderError;
use crate::model::order::Order;
use crate::simulation::allocator::InventoryAllocator;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Orders processed before the loop stopped.
    pub orders_served: usize,
    /// False only when the order stream ran dry first.
    pub exhausted: bool,
}

/// Feeds orders to the allocator until it reports exhaustion.
///
/// The order that hits the exhausted inventory is not counted. A malformed
/// order aborts the run.
pub fn run<I>(allocator: &mut InventoryAllocator, orders: I) -> Result<RunSummary, OrderError>
where
    I: IntoIterator<Item = Order>,
{
    let mut served = 0;

    for order in orders {
        if !allocator.process(&order)? {
            info!(orders_served = served, "inventory exhausted, stopping");
            return Ok(RunSummary {
                orders_served: served,
                exhausted: true,
            });
        }
        served += 1;
    }

    info!(orders_served = served, "order stream ended before exhaustion");
    Ok(RunSummary {
        orders_served: served,
        exhausted: allocator.is_exhausted(),
    })
}
