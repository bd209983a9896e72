// src/io/inventory.rs

use crate::error::ConfigError;
use crate::model::inventory::StockLevel;
use std::path::Path;

/// Reads a starting inventory snapshot from a CSV file with a
/// `product,quantity` header row.
///
/// Duplicates are kept as-is so that the allocator can reject them.
pub fn read_starting_inventory(file_path: impl AsRef<Path>) -> Result<Vec<StockLevel>, ConfigError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)?;

    let mut levels = Vec::new();
    for row in rdr.deserialize() {
        let level: StockLevel = row?;
        levels.push(level);
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_product_quantity_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "product,quantity\nA, 10\nB,15\nC,5").unwrap();

        let levels = read_starting_inventory(file.path()).unwrap();
        assert_eq!(
            levels,
            vec![
                StockLevel::new("A", 10),
                StockLevel::new("B", 15),
                StockLevel::new("C", 5),
            ]
        );
    }

    #[test]
    fn negative_quantity_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "product,quantity\nA,-3").unwrap();

        assert!(matches!(
            read_starting_inventory(file.path()),
            Err(ConfigError::Csv(_))
        ));
    }
}
