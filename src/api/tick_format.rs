use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tick formatter bound onto a chart axis.
///
/// The date side treats the incoming axis value as Unix milliseconds: by the
/// time a formatter sees an x value, the coordinate extractor has already
/// reinterpreted timestamp columns from seconds to milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickFormatter {
    Numeric(NumberFormat),
    Date { pattern: String },
}

impl TickFormatter {
    #[must_use]
    pub fn numeric(spec: &str) -> Self {
        Self::Numeric(NumberFormat::parse(spec))
    }

    #[must_use]
    pub fn date(pattern: impl Into<String>) -> Self {
        Self::Date {
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Numeric(format) => format.format(value),
            Self::Date { pattern } => format_date_millis(value, pattern),
        }
    }
}

fn format_date_millis(value: f64, pattern: &str) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(value.round() as i64) else {
        return "nan".to_owned();
    };

    // chrono surfaces unknown strftime specifiers as a fmt error; treat a
    // bad host-supplied pattern like an unformattable value.
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        return "nan".to_owned();
    }
    out
}

/// Numeric tick format: a minimal subset of the d3-style pattern grammar,
/// `[$][,][.N][f|%|d]`.
///
/// Unrecognized patterns fall back to plain stringification rather than
/// erroring; a bad format attribute should degrade the labels, not the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    currency: bool,
    grouping: bool,
    precision: Option<usize>,
    kind: NumberFormatKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum NumberFormatKind {
    /// Fixed decimal places (`f`).
    Fixed,
    /// Value scaled by 100 with a trailing percent sign (`%`).
    Percent,
    /// Rounded integer (`d`).
    Integer,
    /// No conversion applied.
    Plain,
}

impl NumberFormat {
    fn plain() -> Self {
        Self {
            currency: false,
            grouping: false,
            precision: None,
            kind: NumberFormatKind::Plain,
        }
    }

    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut rest = spec;

        let currency = rest.starts_with('$');
        if currency {
            rest = &rest[1..];
        }
        let grouping = rest.starts_with(',');
        if grouping {
            rest = &rest[1..];
        }

        let mut precision = None;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let digits: String = after_dot
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            let Ok(parsed) = digits.parse::<usize>() else {
                return Self::plain();
            };
            precision = Some(parsed);
            rest = &after_dot[digits.len()..];
        }

        let kind = match rest {
            "" if precision.is_some() => NumberFormatKind::Fixed,
            "" => NumberFormatKind::Plain,
            "f" => NumberFormatKind::Fixed,
            "%" => NumberFormatKind::Percent,
            "d" => NumberFormatKind::Integer,
            _ => return Self::plain(),
        };

        Self {
            currency,
            grouping,
            precision,
            kind,
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }

        let (mut body, suffix) = match self.kind {
            NumberFormatKind::Fixed => {
                (format!("{:.*}", self.precision.unwrap_or(6), value), "")
            }
            NumberFormatKind::Percent => (
                format!("{:.*}", self.precision.unwrap_or(0), value * 100.0),
                "%",
            ),
            NumberFormatKind::Integer => (format!("{}", value.round() as i64), ""),
            NumberFormatKind::Plain => {
                if value.fract() == 0.0 && value.abs() < 9.0e15 {
                    (format!("{}", value as i64), "")
                } else {
                    (format!("{value}"), "")
                }
            }
        };

        if self.grouping {
            body = group_thousands(&body);
        }
        if self.currency {
            if let Some(rest) = body.strip_prefix('-') {
                body = format!("-${rest}");
            } else {
                body = format!("${body}");
            }
        }
        body.push_str(suffix);
        body
    }
}

/// Inserts `,` separators into the integer part of an already-formatted
/// decimal string.
fn group_thousands(body: &str) -> String {
    let (sign, unsigned) = match body.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", body),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (pos, digit) in digits.iter().enumerate() {
        if pos > 0 && (digits.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
