//! CSV ingestion for the EV population dataset.

use anyhow::Result;
use tracing::{debug, warn};

use crate::record::Record;

/// Parses header-mode CSV bytes into records.
///
/// Rows whose tracked fields are all blank are dropped (trailing junk
/// lines in the published dataset). A row that fails to deserialize is
/// logged and skipped rather than failing the whole load.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in reader.deserialize::<Record>() {
        match result {
            Ok(record) => {
                if record.is_blank() {
                    skipped += 1;
                } else {
                    records.push(record);
                }
            }
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "Skipping unreadable CSV row");
            }
        }
    }

    debug!(rows = records.len(), skipped, "CSV parsed");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_mode_csv() {
        let csv = "Model Year,Electric Range,County,Electric Vehicle Type,Make\n\
                   2020,100,King,Battery Electric Vehicle (BEV),TESLA\n\
                   2021,30,Pierce,Plug-in Hybrid Electric Vehicle (PHEV),TOYOTA\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model_year, "2020");
        assert_eq!(records[1].make, "TOYOTA");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "VIN (1-10),Model Year,Electric Range,County,Electric Vehicle Type,Make\n\
                   5YJ3E1EA0K,2019,220,King,Battery Electric Vehicle (BEV),TESLA\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].electric_range, "220");
    }

    #[test]
    fn test_blank_rows_dropped() {
        let csv = "Model Year,Electric Range,County,Electric Vehicle Type,Make\n\
                   2020,100,King,BEV,TESLA\n\
                   ,,,,\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let records = parse_records(b"").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_fields_survive_parsing() {
        // Field-level garbage is the validators' problem, not the loader's.
        let csv = "Model Year,Electric Range,County,Electric Vehicle Type,Make\n\
                   not-a-year,not-a-range,King,BEV,TESLA\n";

        let records = parse_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year(), None);
        assert_eq!(records[0].range(), None);
        assert_eq!(records[0].county(), Some("King"));
    }
}
