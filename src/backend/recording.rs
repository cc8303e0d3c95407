use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{CoordinateAccessor, TickFormatter};
use crate::error::{ChartError, ChartResult};

use super::{ChartBackend, Dataset, MountTarget};

/// Everything a [`RecordingBackend`] has been asked to do.
///
/// `None` fields were never set, so the library default would apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingState {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub tooltips: Option<bool>,
    pub legend: Option<bool>,
    pub clip: Option<bool>,
    pub x_tick_formatter: Option<TickFormatter>,
    pub y_tick_formatter: Option<TickFormatter>,
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub x_accessor: Option<CoordinateAccessor>,
    pub y_accessor: Option<CoordinateAccessor>,
    pub dataset: Option<Dataset>,
    pub rendered: Vec<MountTarget>,
}

/// Call-capturing backend used by tests and headless hosts.
///
/// Clones share one underlying record (the processing model is
/// single-threaded), so the handle moved into a deferred render job and the
/// clone kept by the observer see the same state.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current record.
    #[must_use]
    pub fn snapshot(&self) -> RecordingState {
        self.state.borrow().clone()
    }
}

impl ChartBackend for RecordingBackend {
    fn set_width(&mut self, px: f64) {
        self.state.borrow_mut().width = Some(px);
    }

    fn set_height(&mut self, px: f64) {
        self.state.borrow_mut().height = Some(px);
    }

    fn set_tooltips(&mut self, enabled: bool) {
        self.state.borrow_mut().tooltips = Some(enabled);
    }

    fn set_show_legend(&mut self, visible: bool) {
        self.state.borrow_mut().legend = Some(visible);
    }

    fn set_clip_edge(&mut self, enabled: bool) {
        self.state.borrow_mut().clip = Some(enabled);
    }

    fn set_x_tick_formatter(&mut self, formatter: TickFormatter) {
        self.state.borrow_mut().x_tick_formatter = Some(formatter);
    }

    fn set_y_tick_formatter(&mut self, formatter: TickFormatter) {
        self.state.borrow_mut().y_tick_formatter = Some(formatter);
    }

    fn force_x_domain(&mut self, start: f64, end: f64) {
        self.state.borrow_mut().x_domain = Some((start, end));
    }

    fn force_y_domain(&mut self, start: f64, end: f64) {
        self.state.borrow_mut().y_domain = Some((start, end));
    }

    fn set_x_accessor(&mut self, accessor: CoordinateAccessor) {
        self.state.borrow_mut().x_accessor = Some(accessor);
    }

    fn set_y_accessor(&mut self, accessor: CoordinateAccessor) {
        self.state.borrow_mut().y_accessor = Some(accessor);
    }

    fn bind_dataset(&mut self, dataset: Dataset) {
        self.state.borrow_mut().dataset = Some(dataset);
    }

    fn render(&mut self, mount: &MountTarget) -> ChartResult<()> {
        if mount.chart_id.is_empty() {
            return Err(ChartError::InvalidMount("empty chart id".to_owned()));
        }
        self.state.borrow_mut().rendered.push(mount.clone());
        Ok(())
    }
}
