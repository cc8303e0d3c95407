use serde::{Deserialize, Serialize};

/// A typed table cell: numeric when the whole trimmed token parses as a
/// number, otherwise the original text.
///
/// Serialization is untagged so numbers serialize as JSON numbers, text as
/// JSON strings, and the missing-value sentinel as JSON `null` — the gap
/// representation downstream charting libraries consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            // JSON null is the serialized form of the missing sentinel.
            Missing(Option<()>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::Number(n),
            Raw::Text(s) => Self::Text(s),
            Raw::Missing(_) => Self::missing(),
        })
    }
}

impl Cell {
    /// The missing-value sentinel. Distinct from `0`: an empty cell means
    /// "no sample here", not "a sample of zero".
    #[must_use]
    pub fn missing() -> Self {
        Self::Number(f64::NAN)
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// Coerces one raw comma-separated token.
    ///
    /// Empty-after-trim tokens become the missing sentinel, never `0`.
    /// Coercion is per-cell; mixed rows are legal.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::missing();
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(raw.to_owned()),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Cell {
    /// Renders the cell the way a loosely-typed host would stringify it:
    /// integral numbers without a fractional part, NaN as `NaN`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if n.is_nan() => write!(f, "NaN"),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Ordered cells from one comma-separated record. Equal row lengths across a
/// table are conventional, not checked.
pub type Row = Vec<Cell>;

/// Ordered typed rows. Row 0 is a header only when multi-series reshaping is
/// applied to this table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row under the multi-series convention, if any.
    #[must_use]
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Rows after the header under the multi-series convention.
    #[must_use]
    pub fn data_rows(&self) -> &[Row] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}
