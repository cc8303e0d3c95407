use serde::{Deserialize, Serialize};

use crate::core::{Cell, SeriesPoint};

use super::options::parse_leading_int;

/// Coordinate-extraction function bound onto the chart by the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateAccessor {
    /// Shared-axis column (column 0) verbatim.
    XValue,
    /// Shared-axis column reinterpreted as a Unix timestamp: seconds become
    /// milliseconds by appending three zero digits to the integer string.
    /// Deliberately simplistic unit conversion, not date parsing.
    XTimestampMillis,
    /// Value column (column 1) verbatim.
    YValue,
}

impl CoordinateAccessor {
    #[must_use]
    pub fn extract(self, point: &SeriesPoint) -> Cell {
        match self {
            Self::XValue => point.x.clone(),
            Self::XTimestampMillis => seconds_to_millis(&point.x),
            Self::YValue => point.y.clone(),
        }
    }
}

fn seconds_to_millis(cell: &Cell) -> Cell {
    let mut raw = cell.to_string();
    raw.push_str("000");
    Cell::Number(parse_leading_int(&raw))
}
