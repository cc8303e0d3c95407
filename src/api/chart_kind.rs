use serde::{Deserialize, Serialize};

/// Chart kinds accepted by the `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Pie,
    /// Stacked area.
    Stacked,
    /// Discrete categorical bars.
    Bar,
}

impl ChartKind {
    /// Parses the `type` attribute value. Unrecognized values yield `None`;
    /// the runtime turns that into a diagnostic and skips the chart.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "line" => Some(Self::Line),
            "pie" => Some(Self::Pie),
            "stacked" => Some(Self::Stacked),
            "bar" => Some(Self::Bar),
            _ => None,
        }
    }

    /// Whether datasets for this kind go through multi-series reshaping.
    /// Single-series kinds consume the extracted table directly.
    #[must_use]
    pub fn is_multi_series(self) -> bool {
        match self {
            Self::Line | Self::Stacked | Self::Bar => true,
            Self::Pie => false,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Stacked => "stacked",
            Self::Bar => "bar",
        }
    }
}
