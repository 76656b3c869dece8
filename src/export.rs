// src/export.rs
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::reshape::PivotTable;

/// Writes the pivoted table exactly as displayed: a `Company` column plus one
/// column per calendar year, one record per company, blank fields where the
/// company has no data for that year.
pub fn write_pivot_csv(pivot: &PivotTable, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    let mut header = vec!["Company".to_string()];
    header.extend(pivot.years.iter().map(|year| year.to_string()));
    writer.write_record(&header)?;

    for row in &pivot.rows {
        let mut record = vec![row.company.clone()];
        record.extend(row.cells.iter().map(|cell| match cell {
            Some(value) => format!("{:.0}", value),
            None => String::new(),
        }));
        writer.write_record(&record)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Metric;
    use crate::reshape::PivotRow;

    #[test]
    fn writes_displayed_table_with_blank_missing_cells() {
        let pivot = PivotTable {
            metric: Metric::NetIncome,
            years: vec![2020, 2021],
            rows: vec![
                PivotRow {
                    company: "Apple".to_string(),
                    cells: vec![Some(57411.0), Some(94680.0)],
                },
                PivotRow {
                    company: "Tesla".to_string(),
                    cells: vec![None, Some(5519.0)],
                },
            ],
        };

        let path = std::env::temp_dir().join("stockdash_export_test.csv");
        write_pivot_csv(&pivot, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(contents, "Company,2020,2021\nApple,57411,94680\nTesla,,5519\n");
    }
}
