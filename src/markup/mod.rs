//! Seam between the pipeline and whatever holds the chart-declaring markup.
//!
//! DOM traversal itself is an external collaborator; the pipeline only needs
//! string attribute lookup and the text of the nested data child. Hosts with
//! a real document tree implement [`ChartElement`] over their node type;
//! [`MarkupElement`] is the in-memory implementation used by tests and
//! document-less hosts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute written onto each processed element so its mount point can be
/// addressed by a unique identifier.
pub const CHART_ID_ATTR: &str = "chart-id";

pub const ATTR_TYPE: &str = "type";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_WIDTH: &str = "width";
pub const ATTR_HEIGHT: &str = "height";
pub const ATTR_X_START: &str = "x-start";
pub const ATTR_X_END: &str = "x-end";
pub const ATTR_X_FORMAT: &str = "x-format";
pub const ATTR_X_DATE_FORMAT: &str = "x-date-format";
pub const ATTR_Y_START: &str = "y-start";
pub const ATTR_Y_END: &str = "y-end";
pub const ATTR_Y_FORMAT: &str = "y-format";
pub const ATTR_Y_DATE_FORMAT: &str = "y-date-format";
pub const ATTR_TOOLTIPS: &str = "tooltips";
pub const ATTR_LEGEND: &str = "legend";
pub const ATTR_CLIP: &str = "clip";

/// Contract implemented by any chart-declaring element.
///
/// Attributes are string-valued; numeric and boolean attributes are parsed by
/// this crate, never by the element.
pub trait ChartElement {
    /// Returns the attribute value, or `None` when the attribute is absent.
    /// Absent and present-but-empty are distinct.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Sets (or replaces) an attribute. Used by the runtime to tag the
    /// element with its generated chart identifier.
    fn set_attr(&mut self, name: &str, value: String);

    /// Raw text content of the nested data child.
    fn data_text(&self) -> &str;
}

/// In-memory chart-declaring element.
///
/// Attribute order is preserved (document order), matching how a markup
/// parser would surface them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkupElement {
    attrs: IndexMap<String, String>,
    data: String,
}

impl MarkupElement {
    #[must_use]
    pub fn new(data_text: impl Into<String>) -> Self {
        Self {
            attrs: IndexMap::new(),
            data: data_text.into(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

impl ChartElement for MarkupElement {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn set_attr(&mut self, name: &str, value: String) {
        self.attrs.insert(name.to_owned(), value);
    }

    fn data_text(&self) -> &str {
        &self.data
    }
}
