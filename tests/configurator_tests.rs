use chart_tags::api::{ChartOptions, CoordinateAccessor, TickFormatter, configure_chart};
use chart_tags::backend::RecordingBackend;
use chart_tags::core::{Cell, SeriesPoint};
use chart_tags::markup::MarkupElement;

fn configured(element: MarkupElement) -> chart_tags::backend::RecordingState {
    let options = ChartOptions::from_element(&element);
    let mut chart = RecordingBackend::new();
    configure_chart(&mut chart, &options);
    chart.snapshot()
}

fn element() -> MarkupElement {
    MarkupElement::new("1,2\n3,4")
}

#[test]
fn width_attribute_sets_pixel_width() {
    let state = configured(element().with_attr("width", "400"));
    assert_eq!(state.width, Some(400.0));
}

#[test]
fn absent_dimensions_stay_at_library_default() {
    let state = configured(element());
    assert_eq!(state.width, None);
    assert_eq!(state.height, None);
}

#[test]
fn toggles_apply_only_when_present() {
    let state = configured(
        element()
            .with_attr("tooltips", "true")
            .with_attr("clip", "false"),
    );

    assert_eq!(state.tooltips, Some(true));
    assert_eq!(state.clip, Some(false));
    assert_eq!(state.legend, None);
}

#[test]
fn paired_bounds_force_the_axis_domain() {
    let state = configured(element().with_attr("x-start", "0").with_attr("x-end", "10"));
    assert_eq!(state.x_domain, Some((0.0, 10.0)));
    assert_eq!(state.y_domain, None);
}

#[test]
fn lone_bound_leaves_the_axis_auto_scaling() {
    let state = configured(element().with_attr("x-start", "0"));
    assert_eq!(state.x_domain, None);

    let state = configured(element().with_attr("y-end", "5"));
    assert_eq!(state.y_domain, None);
}

#[test]
fn numeric_format_installs_numeric_tick_formatter() {
    let state = configured(element().with_attr("y-format", ".2f"));

    let formatter = state.y_tick_formatter.expect("formatter installed");
    assert_eq!(formatter.format(1.005), "1.00");
    assert_eq!(state.x_tick_formatter, None);
}

#[test]
fn date_format_installs_date_tick_formatter() {
    let state = configured(element().with_attr("x-date-format", "%Y-%m-%d"));

    let formatter = state.x_tick_formatter.expect("formatter installed");
    assert_eq!(formatter.format(1_577_836_800_000.0), "2020-01-01");
}

#[test]
fn numeric_format_takes_precedence_over_date_format() {
    let state = configured(
        element()
            .with_attr("x-format", ".1f")
            .with_attr("x-date-format", "%Y"),
    );

    assert_eq!(
        state.x_tick_formatter,
        Some(TickFormatter::numeric(".1f")),
        "x_format wins the tick-formatter slot"
    );
    // The accessor still reinterprets timestamps whenever x-date-format is set.
    assert_eq!(state.x_accessor, Some(CoordinateAccessor::XTimestampMillis));
}

#[test]
fn default_accessors_read_columns_verbatim() {
    let state = configured(element());

    assert_eq!(state.x_accessor, Some(CoordinateAccessor::XValue));
    assert_eq!(state.y_accessor, Some(CoordinateAccessor::YValue));

    let point = SeriesPoint::new(Cell::Number(7.0), Cell::Number(9.0));
    assert_eq!(state.x_accessor.unwrap().extract(&point), Cell::Number(7.0));
    assert_eq!(state.y_accessor.unwrap().extract(&point), Cell::Number(9.0));
}

#[test]
fn date_axis_accessor_converts_seconds_to_milliseconds() {
    let state = configured(element().with_attr("x-date-format", "%Y-%m-%d"));

    let point = SeriesPoint::new(Cell::Number(1_577_836_800.0), Cell::Number(1.0));
    assert_eq!(
        state.x_accessor.unwrap().extract(&point),
        Cell::Number(1_577_836_800_000.0)
    );
}

#[test]
fn malformed_width_flows_through_as_nan() {
    let state = configured(element().with_attr("width", "wide"));
    assert!(state.width.is_some_and(f64::is_nan));
}

#[test]
fn handle_is_mutated_in_place() {
    let options = ChartOptions::from_element(&element().with_attr("width", "320"));
    let mut chart = RecordingBackend::new();
    let observer = chart.clone();

    configure_chart(&mut chart, &options);

    // The clone shares the record: the same handle was mutated, not replaced.
    assert_eq!(observer.snapshot().width, Some(320.0));
}
