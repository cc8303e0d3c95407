use serde::{Deserialize, Serialize};

use crate::markup::{
    ATTR_CLIP, ATTR_HEIGHT, ATTR_LEGEND, ATTR_TITLE, ATTR_TOOLTIPS, ATTR_WIDTH, ATTR_X_DATE_FORMAT,
    ATTR_X_END, ATTR_X_FORMAT, ATTR_X_START, ATTR_Y_DATE_FORMAT, ATTR_Y_END, ATTR_Y_FORMAT,
    ATTR_Y_START, ChartElement,
};

fn default_title() -> String {
    "Untitled".to_owned()
}

/// Structured per-chart option set.
///
/// Built fresh from markup attributes for each declaration, immutable once
/// constructed, consumed once by the configurator. Every attribute is parsed
/// exactly once here at the boundary; `None` means the attribute was absent,
/// which is meaningful (library defaults apply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub title: String,
    /// Pixel width. Malformed attribute text parses to NaN and is passed
    /// through to the backend uncomplained.
    pub width: Option<f64>,
    /// Pixel height, same parse behavior as `width`.
    pub height: Option<f64>,
    pub tooltips: Option<bool>,
    pub legend: Option<bool>,
    pub clip: Option<bool>,
    pub x_format: Option<String>,
    pub x_date_format: Option<String>,
    pub y_format: Option<String>,
    pub y_date_format: Option<String>,
    pub x_start: Option<f64>,
    pub x_end: Option<f64>,
    pub y_start: Option<f64>,
    pub y_end: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: None,
            height: None,
            tooltips: None,
            legend: None,
            clip: None,
            x_format: None,
            x_date_format: None,
            y_format: None,
            y_date_format: None,
            x_start: None,
            x_end: None,
            y_start: None,
            y_end: None,
        }
    }
}

impl ChartOptions {
    /// Reads the recognized attribute set off a chart-declaring element.
    #[must_use]
    pub fn from_element(element: &dyn ChartElement) -> Self {
        Self {
            title: element
                .attr(ATTR_TITLE)
                .map_or_else(default_title, str::to_owned),
            width: element.attr(ATTR_WIDTH).map(parse_pixel),
            height: element.attr(ATTR_HEIGHT).map(parse_pixel),
            tooltips: element.attr(ATTR_TOOLTIPS).map(parse_bool_strict),
            legend: element.attr(ATTR_LEGEND).map(parse_bool_strict),
            clip: element.attr(ATTR_CLIP).map(parse_bool_strict),
            x_format: element.attr(ATTR_X_FORMAT).map(str::to_owned),
            x_date_format: element.attr(ATTR_X_DATE_FORMAT).map(str::to_owned),
            y_format: element.attr(ATTR_Y_FORMAT).map(str::to_owned),
            y_date_format: element.attr(ATTR_Y_DATE_FORMAT).map(str::to_owned),
            x_start: element.attr(ATTR_X_START).map(parse_bound),
            x_end: element.attr(ATTR_X_END).map(parse_bound),
            y_start: element.attr(ATTR_Y_START).map(parse_bound),
            y_end: element.attr(ATTR_Y_END).map(parse_bound),
        }
    }
}

/// Strict boolean attribute rule: the literal string `"true"` is true,
/// everything else (including `"1"`, `"false"`, `""`) is false.
#[must_use]
pub fn parse_bool_strict(value: &str) -> bool {
    value == "true"
}

/// Integer-prefix parse with loosely-typed host semantics: optional sign,
/// then leading decimal digits; anything else yields NaN.
#[must_use]
pub(crate) fn parse_leading_int(value: &str) -> f64 {
    let trimmed = value.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefix: String = digits.chars().take_while(char::is_ascii_digit).collect();
    match prefix.parse::<f64>() {
        Ok(n) => sign * n,
        Err(_) => f64::NAN,
    }
}

/// Pixel dimensions parse as integers; malformed text becomes NaN.
#[must_use]
fn parse_pixel(value: &str) -> f64 {
    parse_leading_int(value)
}

/// Axis bounds parse as floats; malformed text becomes NaN and flows through
/// to the backend unvalidated.
#[must_use]
fn parse_bound(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}
