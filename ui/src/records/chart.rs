use dioxus::prelude::*;

use crate::core::chart::{chart_points, ChartPoint};
use crate::core::format;
use crate::core::grouping::{GroupMode, MeasurementGroup};

/// How chart points spread along the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Positions proportional to elapsed minutes.
    TimeProportional,
    /// Equal spacing per reading.
    Uniform,
}

const VIEW_WIDTH: f64 = 720.0;
const VIEW_HEIGHT: f64 = 260.0;
const MARGIN_X: f64 = 42.0;
const MARGIN_Y: f64 = 26.0;

const LEFT_COLOR: &str = "#5b8def";
const RIGHT_COLOR: &str = "#e0716c";
const AVERAGE_COLOR: &str = "#3dbd8a";

#[component]
pub fn PressureChart(group: MeasurementGroup) -> Element {
    let mode = group.mode;

    let mut show_left = use_signal(|| true);
    let mut show_right = use_signal(|| true);
    let mut show_average = use_signal(|| true);
    // Continuous runs default to a time-true axis; the all-time regular group
    // would degenerate into one cramped cluster there, so it starts uniform.
    let mut axis_mode = use_signal(move || match mode {
        GroupMode::Continuous => AxisMode::TimeProportional,
        GroupMode::Regular => AxisMode::Uniform,
    });
    let mut fullscreen = use_signal(|| false);

    let points = chart_points(&group);
    let xs = x_positions(&points, axis_mode());
    let range = y_range(&points, show_left(), show_right(), show_average());
    let (y_min, y_max) = range;

    let left_values = series(&points, |p| p.left);
    let right_values = series(&points, |p| p.right);
    let average_values = series(&points, |p| p.average);

    let left_line = show_left().then(|| series_polyline(&xs, &left_values, range));
    let right_line = show_right().then(|| series_polyline(&xs, &right_values, range));
    let average_line = show_average().then(|| series_polyline(&xs, &average_values, range));

    let mut markers: Vec<(String, String, &'static str)> = Vec::new();
    if show_left() {
        markers.extend(series_markers(&xs, &left_values, range, LEFT_COLOR));
    }
    if show_right() {
        markers.extend(series_markers(&xs, &right_values, range, RIGHT_COLOR));
    }
    if show_average() {
        markers.extend(series_markers(&xs, &average_values, range, AVERAGE_COLOR));
    }

    let first_label = points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = points.last().map(|p| p.label.clone()).unwrap_or_default();
    let span_label = points
        .last()
        .map(|p| format::format_minutes(p.minutes_from_start))
        .unwrap_or_default();

    let section_class = if fullscreen() {
        "pressure-chart pressure-chart--fullscreen"
    } else {
        "pressure-chart"
    };
    let axis_label = match axis_mode() {
        AxisMode::TimeProportional => "Time scale",
        AxisMode::Uniform => "Even spacing",
    };
    let fullscreen_label = if fullscreen() {
        "Exit fullscreen"
    } else {
        "Fullscreen"
    };

    let frame_left = MARGIN_X;
    let frame_right = VIEW_WIDTH - MARGIN_X;
    let frame_top = MARGIN_Y;
    let frame_bottom = VIEW_HEIGHT - MARGIN_Y;
    let tick_top = MARGIN_Y + 4.0;

    rsx! {
        div { class: "{section_class}",
            div { class: "pressure-chart__controls",
                button {
                    r#type: "button",
                    class: toggle_class(show_left()),
                    onclick: move |_| {
                        let visible = show_left();
                        show_left.set(!visible);
                    },
                    "Left"
                }
                button {
                    r#type: "button",
                    class: toggle_class(show_right()),
                    onclick: move |_| {
                        let visible = show_right();
                        show_right.set(!visible);
                    },
                    "Right"
                }
                button {
                    r#type: "button",
                    class: toggle_class(show_average()),
                    onclick: move |_| {
                        let visible = show_average();
                        show_average.set(!visible);
                    },
                    "Average"
                }
                button {
                    r#type: "button",
                    class: "pressure-chart__control",
                    onclick: move |_| {
                        let next = match axis_mode() {
                            AxisMode::TimeProportional => AxisMode::Uniform,
                            AxisMode::Uniform => AxisMode::TimeProportional,
                        };
                        axis_mode.set(next);
                    },
                    "{axis_label}"
                }
                button {
                    r#type: "button",
                    class: "pressure-chart__control",
                    onclick: move |_| {
                        let active = fullscreen();
                        fullscreen.set(!active);
                    },
                    "{fullscreen_label}"
                }
            }

            if points.is_empty() {
                p { class: "group-card__placeholder", "Nothing to plot for this group yet." }
            } else {
                svg {
                    class: "pressure-chart__canvas",
                    view_box: "0 0 720 260",
                    preserve_aspect_ratio: "none",

                    line {
                        x1: "{frame_left}",
                        y1: "{frame_bottom}",
                        x2: "{frame_right}",
                        y2: "{frame_bottom}",
                        class: "pressure-chart__frame",
                    }
                    line {
                        x1: "{frame_left}",
                        y1: "{frame_top}",
                        x2: "{frame_left}",
                        y2: "{frame_bottom}",
                        class: "pressure-chart__frame",
                    }

                    text {
                        x: "6",
                        y: "{tick_top}",
                        class: "pressure-chart__tick",
                        "{y_max:.0}"
                    }
                    text {
                        x: "6",
                        y: "{frame_bottom}",
                        class: "pressure-chart__tick",
                        "{y_min:.0}"
                    }

                    if let Some(line) = left_line {
                        polyline { points: "{line}", fill: "none", stroke: LEFT_COLOR, stroke_width: "2" }
                    }
                    if let Some(line) = right_line {
                        polyline { points: "{line}", fill: "none", stroke: RIGHT_COLOR, stroke_width: "2" }
                    }
                    if let Some(line) = average_line {
                        polyline {
                            points: "{line}",
                            fill: "none",
                            stroke: AVERAGE_COLOR,
                            stroke_width: "2",
                            stroke_dasharray: "5 3",
                        }
                    }

                    for (cx, cy, color) in markers.into_iter() {
                        circle { key: "{cx}-{cy}-{color}", cx: "{cx}", cy: "{cy}", r: "3", fill: color }
                    }
                }

                div { class: "pressure-chart__axis",
                    span { "{first_label}" }
                    span { class: "pressure-chart__axis-span", "{span_label}" }
                    span { "{last_label}" }
                }
            }
        }
    }
}

fn toggle_class(active: bool) -> String {
    if active {
        "pressure-chart__control pressure-chart__control--active".to_string()
    } else {
        "pressure-chart__control".to_string()
    }
}

fn series(points: &[ChartPoint], value: impl Fn(&ChartPoint) -> f64) -> Vec<f64> {
    points.iter().map(value).collect()
}

/// Normalized X position (0..=1) per point. A lone reading sits centered.
fn x_positions(points: &[ChartPoint], axis: AxisMode) -> Vec<f64> {
    let len = points.len();
    if len == 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![0.5];
    }

    match axis {
        AxisMode::Uniform => (0..len).map(|i| i as f64 / (len - 1) as f64).collect(),
        AxisMode::TimeProportional => {
            let total = points.last().map(|p| p.minutes_from_start).unwrap_or(0);
            if total <= 0 {
                // Every reading shares one timestamp; spread evenly instead
                // of stacking them on the left edge.
                return (0..len).map(|i| i as f64 / (len - 1) as f64).collect();
            }
            points
                .iter()
                .map(|p| p.minutes_from_start.max(0) as f64 / total as f64)
                .collect()
        }
    }
}

/// Y range covering every visible series, padded so lines don't hug the frame.
fn y_range(points: &[ChartPoint], show_left: bool, show_right: bool, show_average: bool) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for point in points {
        for (visible, value) in [
            (show_left, point.left),
            (show_right, point.right),
            (show_average, point.average),
        ] {
            if visible {
                min = min.min(value);
                max = max.max(value);
            }
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }

    let pad = (max - min) * 0.1;
    (min - pad, max + pad)
}

fn series_polyline(xs: &[f64], values: &[f64], range: (f64, f64)) -> String {
    xs.iter()
        .zip(values)
        .map(|(x, value)| {
            let (px, py) = project(*x, *value, range);
            format!("{px:.1},{py:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn series_markers(
    xs: &[f64],
    values: &[f64],
    range: (f64, f64),
    color: &'static str,
) -> Vec<(String, String, &'static str)> {
    xs.iter()
        .zip(values)
        .map(|(x, value)| {
            let (px, py) = project(*x, *value, range);
            (format!("{px:.1}"), format!("{py:.1}"), color)
        })
        .collect()
}

fn project(x: f64, value: f64, (y_min, y_max): (f64, f64)) -> (f64, f64) {
    let px = MARGIN_X + x * (VIEW_WIDTH - 2.0 * MARGIN_X);
    let norm = (value - y_min) / (y_max - y_min);
    let py = VIEW_HEIGHT - MARGIN_Y - norm * (VIEW_HEIGHT - 2.0 * MARGIN_Y);
    (px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(minutes: i64, left: f64, right: f64) -> ChartPoint {
        ChartPoint {
            label: format!("{minutes}"),
            left,
            right,
            average: (left + right) / 2.0,
            measured_at: format!("2026-01-03T08:{minutes:02}:00Z"),
            minutes_from_start: minutes,
        }
    }

    #[test]
    fn uniform_positions_are_equally_spaced() {
        let points = vec![point(0, 14.0, 15.0), point(30, 14.0, 15.0), point(300, 14.0, 15.0)];
        let xs = x_positions(&points, AxisMode::Uniform);
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn proportional_positions_follow_elapsed_minutes() {
        let points = vec![point(0, 14.0, 15.0), point(30, 14.0, 15.0), point(120, 14.0, 15.0)];
        let xs = x_positions(&points, AxisMode::TimeProportional);
        assert_eq!(xs, vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn zero_span_falls_back_to_uniform_spread() {
        let points = vec![point(0, 14.0, 15.0), point(0, 16.0, 17.0)];
        let xs = x_positions(&points, AxisMode::TimeProportional);
        assert_eq!(xs, vec![0.0, 1.0]);
    }

    #[test]
    fn lone_reading_sits_centered() {
        let points = vec![point(0, 14.0, 15.0)];
        assert_eq!(x_positions(&points, AxisMode::TimeProportional), vec![0.5]);
        assert_eq!(x_positions(&points, AxisMode::Uniform), vec![0.5]);
    }

    #[test]
    fn y_range_ignores_hidden_series() {
        let points = vec![point(0, 10.0, 40.0)];

        let (min, max) = y_range(&points, true, false, false);
        assert!(min < 10.0 && min > 5.0);
        assert!(max > 10.0 && max < 40.0);
    }

    #[test]
    fn y_range_pads_a_flat_series() {
        let points = vec![point(0, 16.0, 16.0), point(10, 16.0, 16.0)];
        let (min, max) = y_range(&points, true, true, true);
        assert_eq!((min, max), (15.0, 17.0));
    }

    #[test]
    fn y_range_with_everything_hidden_is_benign() {
        let points = vec![point(0, 16.0, 18.0)];
        assert_eq!(y_range(&points, false, false, false), (0.0, 1.0));
    }

    #[test]
    fn polyline_emits_one_coordinate_pair_per_point() {
        let points = vec![point(0, 14.0, 15.0), point(30, 15.0, 16.0), point(60, 16.0, 17.0)];
        let xs = x_positions(&points, AxisMode::Uniform);
        let values = series(&points, |p| p.left);

        let line = series_polyline(&xs, &values, y_range(&points, true, true, true));
        assert_eq!(line.split(' ').count(), 3);
        assert!(line.split(' ').all(|pair| pair.contains(',')));
    }
}
