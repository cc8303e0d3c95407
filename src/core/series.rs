use serde::{Deserialize, Serialize, Serializer, de::Deserializer};

use crate::core::{Cell, Table};

/// One sample of a series: the shared-axis value and this series' value.
///
/// Serializes as a `[x, y]` pair, the point shape the external charting
/// library consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub x: Cell,
    pub y: Cell,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(x: Cell, y: Cell) -> Self {
        Self { x, y }
    }
}

impl Serialize for SeriesPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SeriesPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(Cell, Cell)>::deserialize(deserializer)?;
        Ok(Self { x, y })
    }
}

/// A named value-series keyed by the shared first column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub values: Vec<SeriesPoint>,
}

/// Reshapes a headered table into one series per value column.
///
/// Header cell 0 is the category-axis label and is ignored; each header cell
/// at position i >= 1 names the series whose samples are `(row[0], row[i])`
/// for every data row. Series order follows header column order, sample order
/// follows row order.
///
/// A header of width W+1 yields exactly W series regardless of data row
/// count. A data row shorter than i+1 contributes the missing-value sentinel
/// for y rather than an error; rendering gaps is the charting library's
/// concern.
#[must_use]
pub fn multi_series(table: &Table) -> Vec<Series> {
    let Some(header) = table.header() else {
        return Vec::new();
    };

    header
        .iter()
        .skip(1)
        .enumerate()
        .map(|(index, label)| Series {
            key: label.to_string(),
            values: table
                .data_rows()
                .iter()
                .map(|row| {
                    SeriesPoint::new(
                        row.first().cloned().unwrap_or_else(Cell::missing),
                        row.get(index + 1).cloned().unwrap_or_else(Cell::missing),
                    )
                })
                .collect(),
        })
        .collect()
}
