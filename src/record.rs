//! Raw registration records and per-field validation.
//!
//! A [`Record`] keeps the consumed columns as raw strings exactly as they
//! appeared in the dataset. Validation accessors turn each field into a
//! typed value or `None`; they never panic, so a malformed field only
//! excludes its row from the computations that needed it.

use serde::Deserialize;

/// A single row of the EV population dataset.
///
/// Only the columns the aggregation pipeline consumes are retained; any
/// other columns in the source are ignored, and missing columns
/// deserialize as empty strings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "Model Year", default)]
    pub model_year: String,

    #[serde(rename = "Electric Range", default)]
    pub electric_range: String,

    #[serde(rename = "County", default)]
    pub county: String,

    #[serde(rename = "Electric Vehicle Type", default)]
    pub vehicle_type: String,

    #[serde(rename = "Make", default)]
    pub make: String,
}

impl Record {
    /// The model year as a validated label.
    ///
    /// Valid iff the raw string parses as an integer; the original string
    /// is returned so it can key a bucket verbatim.
    pub fn year(&self) -> Option<&str> {
        if self.model_year.parse::<i64>().is_ok() {
            Some(&self.model_year)
        } else {
            None
        }
    }

    /// The electric range as a finite number, including zero and negative
    /// values. `None` when the field is missing or not a number.
    pub fn range(&self) -> Option<f64> {
        self.electric_range
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
    }

    /// The electric range restricted to strictly positive values.
    ///
    /// Unknown ranges are recorded as 0 in the dataset; they stay in the
    /// population count but must not pull the fleet-wide average down.
    pub fn positive_range(&self) -> Option<f64> {
        self.range().filter(|r| *r > 0.0)
    }

    /// The county as an opaque category key, `None` when blank.
    pub fn county(&self) -> Option<&str> {
        category(&self.county)
    }

    /// The manufacturer name, `None` when blank.
    pub fn make(&self) -> Option<&str> {
        category(&self.make)
    }

    /// The raw vehicle-type label, `None` when blank.
    pub fn vehicle_type(&self) -> Option<&str> {
        category(&self.vehicle_type)
    }

    /// True when every tracked field is empty. Used by the loader to drop
    /// junk rows (e.g. a trailing blank line in the source CSV).
    pub fn is_blank(&self) -> bool {
        self.model_year.is_empty()
            && self.electric_range.is_empty()
            && self.county.is_empty()
            && self.vehicle_type.is_empty()
            && self.make.is_empty()
    }
}

/// Category fields are opaque strings: whitespace-only counts as missing,
/// but the raw value (untrimmed, case-sensitive) is the bucket key.
fn category(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, range: &str, county: &str, vtype: &str, make: &str) -> Record {
        Record {
            model_year: year.to_string(),
            electric_range: range.to_string(),
            county: county.to_string(),
            vehicle_type: vtype.to_string(),
            make: make.to_string(),
        }
    }

    #[test]
    fn test_year_valid_integer() {
        let r = record("2020", "", "", "", "");
        assert_eq!(r.year(), Some("2020"));
    }

    #[test]
    fn test_year_rejects_empty_and_non_numeric() {
        assert_eq!(record("", "", "", "", "").year(), None);
        assert_eq!(record("20x0", "", "", "", "").year(), None);
        assert_eq!(record("2020.5", "", "", "", "").year(), None);
    }

    #[test]
    fn test_range_accepts_zero_and_negative() {
        assert_eq!(record("", "0", "", "", "").range(), Some(0.0));
        assert_eq!(record("", "-5", "", "", "").range(), Some(-5.0));
        assert_eq!(record("", "100.5", "", "", "").range(), Some(100.5));
    }

    #[test]
    fn test_range_rejects_malformed() {
        assert_eq!(record("", "bad", "", "", "").range(), None);
        assert_eq!(record("", "", "", "", "").range(), None);
        assert_eq!(record("", "NaN", "", "", "").range(), None);
    }

    #[test]
    fn test_positive_range_excludes_zero() {
        assert_eq!(record("", "0", "", "", "").positive_range(), None);
        assert_eq!(record("", "100", "", "", "").positive_range(), Some(100.0));
    }

    #[test]
    fn test_category_fields_keep_raw_value() {
        let r = record("", "", " King ", "", "");
        // Whitespace-only would be rejected, but padding is preserved.
        assert_eq!(r.county(), Some(" King "));
        assert_eq!(record("", "", "   ", "", "").county(), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(Record::default().is_blank());
        assert!(!record("2020", "", "", "", "").is_blank());
    }
}
