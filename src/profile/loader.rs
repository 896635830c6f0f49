//! Load batches of profiles from CSV
//!
//! The header row uses the field-map keys (`age,sex,income,...`). Rows are
//! returned as raw field maps so each one can be validated on its own.

use super::FieldMap;
use crate::error::LoadError;
use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::path::Path;

/// One CSV row of raw form values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    /// 1-based line number in the source file
    pub line: u64,
    pub fields: FieldMap,
}

/// Load all rows from a CSV file
pub fn load_field_maps<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileRow>, LoadError> {
    let path = path.as_ref();
    let rows = load_field_maps_from_reader(File::open(path)?)?;
    info!("Loaded {} profile rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load rows from any reader (e.g., string buffer, stdin)
pub fn load_field_maps_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ProfileRow>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields = FieldMap::from_pairs(headers.iter().zip(record.iter()));
        rows.push(ProfileRow { line, fields });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Field;
    use std::io::Write;

    const BATCH: &str = "\
age,sex,income,dependents,smoker,occupation,hospital,homeDebt,carDebt,priority
38,male,20000,1,no,low,public,800000,250000,risk
28,na,9000,0,no,med,public,0,0,risk
";

    #[test]
    fn test_load_from_reader() {
        let rows = load_field_maps_from_reader(BATCH.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].fields.get(Field::HomeDebt), Some("800000"));
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].fields.get(Field::Occupation), Some("med"));
        assert_eq!(rows[1].fields.get(Field::BudgetMode), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BATCH.as_bytes()).unwrap();

        let rows = load_field_maps(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields.get(Field::Age), Some("38"));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let result = load_field_maps_from_reader("age,income\n38,20000,extra\n".as_bytes());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }
}
