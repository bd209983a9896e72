// src/io/reporting.rs

use crate::simulation::allocator::{join_quantities, LedgerRecord};
use crate::simulation::driver::RunSummary;
use serde::Serialize;
use std::error::Error;
use std::fmt::Write;
use std::path::Path;

/// Flattened ledger row for CSV export.
#[derive(Debug, Serialize)]
struct LedgerRow {
    position: usize,
    header: u8,
    ordered: String,
    allocated: String,
    backorder: String,
}

/// Renders the run summary followed by every ledger record, numbered from 1.
pub fn render_summary(summary: &RunSummary, ledger: &[LedgerRecord]) -> String {
    let mut out = String::new();

    if summary.exhausted {
        let _ = writeln!(
            out,
            "{} orders were served before inventory dropped to zero",
            summary.orders_served
        );
    } else {
        let _ = writeln!(
            out,
            "{} orders were served; inventory was not exhausted",
            summary.orders_served
        );
    }
    out.push('\n');

    for (i, record) in ledger.iter().enumerate() {
        let _ = writeln!(out, "{:>6}  {}", i + 1, record);
    }
    out
}

/// Writes the ledger to a CSV file, one row per record.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/ledger.csv").
/// * `ledger` - The records from the allocator, in arrival order.
pub fn write_ledger_csv(file_path: &str, ledger: &[LedgerRecord]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(Path::new(file_path))?;

    for (i, record) in ledger.iter().enumerate() {
        wtr.serialize(LedgerRow {
            position: i + 1,
            header: record.header,
            ordered: join_quantities(&record.ordered),
            allocated: join_quantities(&record.allocated),
            backorder: join_quantities(&record.backorder),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Vec<LedgerRecord> {
        vec![
            LedgerRecord {
                header: 1,
                ordered: vec![3, 1],
                allocated: vec![2, 0],
                backorder: vec![1, 1],
            },
            LedgerRecord {
                header: 4,
                ordered: vec![0, 2],
                allocated: vec![0, 0],
                backorder: vec![0, 2],
            },
        ]
    }

    #[test]
    fn summary_lists_records_from_one() {
        let summary = RunSummary {
            orders_served: 2,
            exhausted: true,
        };
        let text = render_summary(&summary, &ledger());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2 orders were served before inventory dropped to zero");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2].trim(), "1  1: 3,1::2,0::1,1");
        assert_eq!(lines[3].trim(), "2  4: 0,2::0,0::0,2");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn csv_export_has_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let path = path.to_str().unwrap();

        write_ledger_csv(path, &ledger()).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "position,header,ordered,allocated,backorder");
        assert_eq!(lines[1], "1,1,\"3,1\",\"2,0\",\"1,1\"");
        assert_eq!(lines.len(), 3);
    }
}
