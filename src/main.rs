mod error;
mod io;
mod model;
mod simulation;

use crate::io::orders::OrderSource;
use crate::io::{inventory, reporting};
use crate::simulation::allocator::InventoryAllocator;
use crate::simulation::config::SimulationConfig;
use crate::simulation::driver;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Simulates order fulfillment against a fixed inventory until every
/// product runs out, then prints the order ledger.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with a `product,quantity` header; defaults to the built-in A..E stock
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Largest quantity on a single order line
    #[arg(long, default_value_t = 5)]
    max_quantity: u32,

    /// Seed for the order generator, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the ledger to this CSV file
    #[arg(long)]
    export: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // 1. SETUP CONFIGURATION
    let mut config = SimulationConfig {
        max_quantity: args.max_quantity,
        seed: args.seed,
        ..Default::default()
    };
    if let Some(path) = &args.inventory {
        config.starting_inventory = inventory::read_starting_inventory(path)
            .with_context(|| format!("loading starting inventory from {}", path.display()))?;
    }

    // 2. INITIALIZE ALLOCATOR AND ORDER SOURCE
    let mut allocator =
        InventoryAllocator::from_config(&config).context("invalid simulation configuration")?;
    let orders = OrderSource::from_config(allocator.catalog(), &config);

    // 3. RUN UNTIL INVENTORY IS EXHAUSTED
    info!(
        stock = ?allocator.inventory().snapshot(allocator.catalog()),
        "starting inventory"
    );
    info!(seed = ?config.seed, max_quantity = config.max_quantity, "starting simulation");
    let summary = driver::run(&mut allocator, orders).context("order rejected by allocator")?;

    // 4. REPORT
    print!("{}", reporting::render_summary(&summary, allocator.ledger()));

    if let Some(path) = &args.export {
        reporting::write_ledger_csv(path, allocator.ledger())
            .map_err(|e| anyhow!("writing ledger to {path}: {e}"))?;
        info!(path = %path, rows = allocator.ledger().len(), "ledger exported");
    }

    Ok(())
}
