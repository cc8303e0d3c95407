use tracing::debug;

use crate::backend::ChartBackend;

use super::{ChartOptions, CoordinateAccessor, TickFormatter};

/// Applies an option set to a chart handle.
///
/// Mutation-in-place: the handle identity never changes, mirroring the
/// external library's fluent configuration calls. Absent options leave the
/// corresponding setting at the library default; NaN dimensions and bounds
/// from malformed attributes flow through uncomplained.
///
/// `x_format` takes precedence over `x_date_format` for the tick formatter
/// when both are present (likewise for y). The x accessor, however, switches
/// to the seconds-to-milliseconds reinterpretation whenever `x_date_format`
/// is set, independent of which formatter won.
pub fn configure_chart<B: ChartBackend + ?Sized>(chart: &mut B, options: &ChartOptions) {
    if let Some(width) = options.width {
        chart.set_width(width);
    }
    if let Some(height) = options.height {
        chart.set_height(height);
    }
    if let Some(tooltips) = options.tooltips {
        chart.set_tooltips(tooltips);
    }
    if let Some(legend) = options.legend {
        chart.set_show_legend(legend);
    }
    if let Some(clip) = options.clip {
        chart.set_clip_edge(clip);
    }

    if let Some(spec) = &options.x_format {
        chart.set_x_tick_formatter(TickFormatter::numeric(spec));
    } else if let Some(pattern) = &options.x_date_format {
        chart.set_x_tick_formatter(TickFormatter::date(pattern.clone()));
    }

    if let Some(spec) = &options.y_format {
        chart.set_y_tick_formatter(TickFormatter::numeric(spec));
    } else if let Some(pattern) = &options.y_date_format {
        chart.set_y_tick_formatter(TickFormatter::date(pattern.clone()));
    }

    // Domain forcing only engages when both ends are declared; a lone bound
    // leaves the axis auto-scaling.
    if let (Some(start), Some(end)) = (options.x_start, options.x_end) {
        chart.force_x_domain(start, end);
    }
    if let (Some(start), Some(end)) = (options.y_start, options.y_end) {
        chart.force_y_domain(start, end);
    }

    let x_accessor = if options.x_date_format.is_some() {
        CoordinateAccessor::XTimestampMillis
    } else {
        CoordinateAccessor::XValue
    };
    chart.set_x_accessor(x_accessor);
    chart.set_y_accessor(CoordinateAccessor::YValue);

    debug!(title = %options.title, "configured chart");
}
