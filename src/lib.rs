//! chart-tags: declarative chart markup pipeline.
//!
//! Charts are declared by a markup element carrying comma-separated data in a
//! nested text child and presentation options as string attributes. This
//! crate turns each declaration into a typed table, reshapes it into named
//! series when the chart kind calls for it, and applies a structured option
//! set to an external charting backend behind the [`backend::ChartBackend`]
//! seam. Rendering is deferred through an explicit [`RenderScheduler`] that
//! the host flushes once layout has settled.
//!
//! Processing is single-threaded and synchronous. Declarations are handled
//! independently in document order; malformed data degrades the one chart it
//! belongs to and never the rest of the page.

pub mod api;
pub mod backend;
pub mod core;
pub mod error;
pub mod markup;
pub mod telemetry;

pub use api::{
    ChartKind, ChartOptions, CoordinateAccessor, NumberFormat, RenderScheduler, TickFormatter,
    configure_chart, render_all, render_chart,
};
pub use backend::{ChartBackend, Dataset, MountTarget, RecordingBackend};
pub use core::{Cell, Series, SeriesPoint, Table, extract_table, multi_series};
pub use error::{ChartError, ChartResult};
pub use markup::{ChartElement, MarkupElement};
