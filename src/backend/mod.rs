//! Seam to the external charting library.
//!
//! The library's object model (chart construction, axis objects, render and
//! transition calls) is an external collaborator; this module only fixes the
//! mutating configuration surface the pipeline drives. A real binding
//! implements [`ChartBackend`] over the library's chart handle;
//! [`RecordingBackend`] captures the calls for tests and headless use.

mod recording;

pub use recording::{RecordingBackend, RecordingState};

use serde::{Deserialize, Serialize};

use crate::api::{CoordinateAccessor, TickFormatter};
use crate::core::{Series, Table};
use crate::error::ChartResult;

/// Dataset bound to a chart: either the extracted table directly
/// (single-series kinds) or the reshaped named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Series(Vec<Series>),
    Table(Table),
}

/// Where and how large a rendered chart attaches.
///
/// The chart id addresses the element the runtime tagged; the optional pixel
/// dimensions are applied to the mount point itself, mirroring the explicit
/// width/height attributes the original markup put on its drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountTarget {
    pub chart_id: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Contract implemented by a charting-library binding.
///
/// All setters mutate the handle in place; the handle identity never changes
/// across configuration. Settings never applied stay at the library default.
pub trait ChartBackend {
    fn set_width(&mut self, px: f64);
    fn set_height(&mut self, px: f64);
    fn set_tooltips(&mut self, enabled: bool);
    fn set_show_legend(&mut self, visible: bool);
    fn set_clip_edge(&mut self, enabled: bool);
    fn set_x_tick_formatter(&mut self, formatter: TickFormatter);
    fn set_y_tick_formatter(&mut self, formatter: TickFormatter);
    fn force_x_domain(&mut self, start: f64, end: f64);
    fn force_y_domain(&mut self, start: f64, end: f64);
    fn set_x_accessor(&mut self, accessor: CoordinateAccessor);
    fn set_y_accessor(&mut self, accessor: CoordinateAccessor);
    fn bind_dataset(&mut self, dataset: Dataset);

    /// Draws the configured chart at the mount point.
    fn render(&mut self, mount: &MountTarget) -> ChartResult<()>;
}
