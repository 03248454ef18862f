// The fixed stat schema and the tagged stat value type.
//
// Every player carries the same ordered set of stat fields; missing data is
// represented as zero, never as absence. Values are loosely typed (numbers
// and text share a column), so edits go through a single coercion rule
// applied once at write time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed, ordered stat schema shared by every catalog player.
///
/// External data files must supply columns matching these names (or accept
/// zero-fill). The order here is the display order for stat tables.
pub const STAT_FIELDS: [&str; 23] = [
    "Total Points (Prev Year)",
    "Projected Points",
    "Rush Yards",
    "Receiving Yards",
    "Passing Yards",
    "Pass TD",
    "Rush Att",
    "Rush TD",
    "Receptions",
    "Rec TD",
    "2-PT",
    "Fumble Lost",
    "Targets",
    "Fumble Return TD",
    "Team",
    "Position",
    "Target Share",
    "Fantasy PPG",
    "Games",
    "Bye Week",
    "Matchups",
    "ADP",
    "WR ADP",
];

/// Index of a field name within `STAT_FIELDS`, or `None` if the field is
/// not part of the schema.
pub fn field_index(field: &str) -> Option<usize> {
    STAT_FIELDS.iter().position(|f| *f == field)
}

/// A single stat cell. Numbers and text share columns (e.g. `Team` holds
/// text while `ADP` holds a number), so the value is a tagged variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// The zero default used for every field with no authoritative data.
    pub fn zero() -> Self {
        StatValue::Int(0)
    }

    /// Coerce a raw edit string into a stat value.
    ///
    /// A value that parses fully as a number with no fractional remainder
    /// becomes an integer; a non-integral number becomes a float; anything
    /// else is stored verbatim as text. So `"12.0"` -> `Int(12)`,
    /// `"12.5"` -> `Float(12.5)`, `"twelve"` -> `Text("twelve")`.
    pub fn coerce(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 => {
                StatValue::Int(n as i64)
            }
            Ok(n) if n.is_finite() => StatValue::Float(n),
            _ => StatValue::Text(raw.to_string()),
        }
    }

    /// Numeric view of the value, if it has one. Text is not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Int(n) => Some(*n as f64),
            StatValue::Float(n) => Some(*n),
            StatValue::Text(_) => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(n) => write!(f, "{n}"),
            StatValue::Float(n) => write!(f, "{n}"),
            StatValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A full stat record: one value per schema field, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    values: Vec<StatValue>,
}

impl StatRecord {
    /// A record with every field zeroed.
    pub fn zeroed() -> Self {
        StatRecord {
            values: vec![StatValue::zero(); STAT_FIELDS.len()],
        }
    }

    /// Value of a field by name. `None` if the field is not in the schema.
    pub fn get(&self, field: &str) -> Option<&StatValue> {
        field_index(field).map(|i| &self.values[i])
    }

    /// Overwrite a field by name. Returns `false` if the field is unknown.
    pub fn set(&mut self, field: &str, value: StatValue) -> bool {
        match field_index(field) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// All values in schema order.
    pub fn values(&self) -> &[StatValue] {
        &self.values
    }

    /// (field name, value) pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StatValue)> {
        STAT_FIELDS.iter().copied().zip(self.values.iter())
    }
}

impl Default for StatRecord {
    fn default() -> Self {
        StatRecord::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_23_fields() {
        assert_eq!(STAT_FIELDS.len(), 23);
    }

    #[test]
    fn field_index_known_fields() {
        assert_eq!(field_index("Total Points (Prev Year)"), Some(0));
        assert_eq!(field_index("ADP"), Some(21));
        assert_eq!(field_index("WR ADP"), Some(22));
    }

    #[test]
    fn field_index_unknown_field() {
        assert_eq!(field_index("Batting Average"), None);
        assert_eq!(field_index(""), None);
        assert_eq!(field_index("adp"), None); // case-sensitive, matches column headers
    }

    #[test]
    fn coerce_integral_string() {
        assert_eq!(StatValue::coerce("12"), StatValue::Int(12));
        assert_eq!(StatValue::coerce("12.0"), StatValue::Int(12));
        assert_eq!(StatValue::coerce("-3"), StatValue::Int(-3));
        assert_eq!(StatValue::coerce("0"), StatValue::Int(0));
    }

    #[test]
    fn coerce_fractional_string() {
        assert_eq!(StatValue::coerce("12.5"), StatValue::Float(12.5));
        assert_eq!(StatValue::coerce("-0.25"), StatValue::Float(-0.25));
    }

    #[test]
    fn coerce_text_string() {
        assert_eq!(
            StatValue::coerce("twelve"),
            StatValue::Text("twelve".to_string())
        );
        assert_eq!(StatValue::coerce("KC"), StatValue::Text("KC".to_string()));
        assert_eq!(StatValue::coerce(""), StatValue::Text(String::new()));
    }

    #[test]
    fn coerce_trims_before_parsing() {
        assert_eq!(StatValue::coerce(" 7 "), StatValue::Int(7));
        assert_eq!(StatValue::coerce(" 7.25 "), StatValue::Float(7.25));
    }

    #[test]
    fn coerce_non_finite_is_text() {
        // "inf"/"NaN" parse as f64 but are not storable numbers
        assert_eq!(StatValue::coerce("inf"), StatValue::Text("inf".to_string()));
        assert_eq!(StatValue::coerce("NaN"), StatValue::Text("NaN".to_string()));
    }

    #[test]
    fn as_f64_views() {
        assert_eq!(StatValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(StatValue::Float(4.5).as_f64(), Some(4.5));
        assert_eq!(StatValue::Text("x".into()).as_f64(), None);
    }

    #[test]
    fn zeroed_record_covers_schema() {
        let rec = StatRecord::zeroed();
        assert_eq!(rec.values().len(), STAT_FIELDS.len());
        assert!(rec.values().iter().all(|v| *v == StatValue::Int(0)));
    }

    #[test]
    fn record_get_set_roundtrip() {
        let mut rec = StatRecord::zeroed();
        assert!(rec.set("ADP", StatValue::Float(1.5)));
        assert_eq!(rec.get("ADP"), Some(&StatValue::Float(1.5)));
        assert_eq!(rec.get("Receptions"), Some(&StatValue::Int(0)));
    }

    #[test]
    fn record_set_unknown_field_rejected() {
        let mut rec = StatRecord::zeroed();
        assert!(!rec.set("Home Runs", StatValue::Int(40)));
    }

    #[test]
    fn record_iter_in_schema_order() {
        let rec = StatRecord::zeroed();
        let names: Vec<&str> = rec.iter().map(|(name, _)| name).collect();
        assert_eq!(names, STAT_FIELDS.to_vec());
    }

    #[test]
    fn display_formats() {
        assert_eq!(StatValue::Int(12).to_string(), "12");
        assert_eq!(StatValue::Float(12.5).to_string(), "12.5");
        assert_eq!(StatValue::Text("BUF".into()).to_string(), "BUF");
    }
}
