use tracing::{debug, warn};

use crate::backend::{ChartBackend, Dataset, MountTarget};
use crate::core::{extract_table, multi_series};
use crate::markup::{ATTR_TYPE, CHART_ID_ATTR, ChartElement};

use super::{ChartKind, ChartOptions, RenderScheduler, configure_chart};

/// Processes one chart-declaring element.
///
/// Tags the element with its generated chart id, reads the option set,
/// extracts the table, reshapes it when the kind calls for it, builds a chart
/// handle through the host factory, configures it, and defers the render with
/// the scheduler. The host flushes the scheduler once layout has settled.
///
/// An unrecognized (or absent) `type` attribute produces a diagnostic and no
/// chart; the caller moves on to the next declaration. Returns whether a
/// render was queued.
pub fn render_chart<B, F>(
    element: &mut dyn ChartElement,
    chart_index: usize,
    make_chart: &mut F,
    scheduler: &mut RenderScheduler,
) -> bool
where
    B: ChartBackend + 'static,
    F: FnMut(ChartKind) -> B,
{
    element.set_attr(CHART_ID_ATTR, chart_index.to_string());

    let type_attr = element.attr(ATTR_TYPE).unwrap_or_default();
    let Some(kind) = ChartKind::parse(type_attr) else {
        warn!(chart_type = type_attr, "unknown chart type");
        return false;
    };

    let options = ChartOptions::from_element(element);
    let table = extract_table(element.data_text());
    let dataset = if kind.is_multi_series() {
        Dataset::Series(multi_series(&table))
    } else {
        Dataset::Table(table)
    };

    let mut chart = make_chart(kind);
    configure_chart(&mut chart, &options);
    chart.bind_dataset(dataset);

    let mount = MountTarget {
        chart_id: chart_index.to_string(),
        width: options.width,
        height: options.height,
    };
    debug!(chart_id = %mount.chart_id, kind = kind.as_str(), "deferred chart render");
    scheduler.defer(Box::new(move || chart.render(&mount)));
    true
}

/// Processes every chart declaration in document order.
///
/// Declarations are independent; one bad declaration never prevents the rest
/// from rendering. Returns the number of renders queued. Flushing stays with
/// the host so it happens at a single documented point.
pub fn render_all<E, B, F>(
    elements: &mut [E],
    make_chart: &mut F,
    scheduler: &mut RenderScheduler,
) -> usize
where
    E: ChartElement,
    B: ChartBackend + 'static,
    F: FnMut(ChartKind) -> B,
{
    let mut queued = 0;
    for (index, element) in elements.iter_mut().enumerate() {
        if render_chart(element, index, make_chart, scheduler) {
            queued += 1;
        }
    }
    queued
}
