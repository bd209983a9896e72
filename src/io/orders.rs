// src/io/orders.rs

use crate::model::catalog::Catalog;
use crate::model::order::{Order, OrderLine, StreamId};
use crate::simulation::config::SimulationConfig;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Endless supply of synthetic orders.
///
/// Each order picks a stream, a non-empty random subset of the catalog
/// (each product at most once) and a quantity in `1..=max_quantity` for
/// every picked product.
pub struct OrderSource {
    products: Vec<String>,
    streams: Uniform<StreamId>,
    quantities: Uniform<u32>,
    rng: StdRng,
}

impl OrderSource {
    /// # Arguments
    /// * `catalog` - Products that orders may reference.
    /// * `streams` - Inclusive range of stream ids to draw headers from (e.g. 1..=5).
    /// * `max_quantity` - Largest quantity on a single line; at least 1.
    /// * `seed` - Fixed seed for a reproducible run, or `None` for entropy.
    pub fn new(
        catalog: &Catalog,
        streams: (StreamId, StreamId),
        max_quantity: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            products: catalog.iter().map(str::to_owned).collect(),
            streams: Uniform::new_inclusive(streams.0, streams.1),
            quantities: Uniform::new_inclusive(1, max_quantity),
            rng,
        }
    }

    /// Expects a config that passed `SimulationConfig::validate`.
    pub fn from_config(catalog: &Catalog, config: &SimulationConfig) -> Self {
        Self::new(
            catalog,
            (*config.streams.start(), *config.streams.end()),
            config.max_quantity,
            config.seed,
        )
    }

    fn next_order(&mut self) -> Order {
        let header = self.streams.sample(&mut self.rng);

        let n = self.products.len();
        let picked = self.rng.gen_range(1..=n);

        let mut lines: Vec<OrderLine> = index::sample(&mut self.rng, n, picked)
            .into_iter()
            .map(|i| {
                let quantity = self.quantities.sample(&mut self.rng);
                OrderLine::new(self.products[i].clone(), quantity)
            })
            .collect();
        lines.sort_by(|a, b| a.product.cmp(&b.product));

        Order::new(header, lines)
    }
}

impl Iterator for OrderSource {
    type Item = Order;

    fn next(&mut self) -> Option<Order> {
        Some(self.next_order())
    }
}
