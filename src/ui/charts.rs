//! Text charts for the analytics and performance views.

/// Glyphs used by [`sparkline`], lowest to highest.
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Default width of the bars drawn by [`bar_chart`].
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Draws a horizontal bar chart, one line per item.
///
/// Bars are scaled so the largest value fills `width` cells. Labels are
/// padded to a common width. Each line ends with the raw value and its share
/// of the total.
///
/// # Example
///
/// ```
/// use transform_dashboard::ui::charts::bar_chart;
///
/// let lines = bar_chart(&[("Reverse".to_string(), 3.0), ("Count".to_string(), 1.0)], 4);
/// assert_eq!(lines[0], "Reverse │████ 3 (75.0%)");
/// assert_eq!(lines[1], "Count   │█ 1 (25.0%)");
/// ```
pub fn bar_chart(items: &[(String, f64)], width: usize) -> Vec<String> {
    let label_width = items
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = items.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let total: f64 = items.iter().map(|(_, v)| *v).sum();

    items
        .iter()
        .map(|(label, value)| {
            let cells = if max_value > 0.0 {
                ((value / max_value) * width as f64).round() as usize
            } else {
                0
            };
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            format!(
                "{:<label_width$} │{} {} ({:.1}%)",
                label,
                "█".repeat(cells),
                format_value(*value),
                share,
                label_width = label_width
            )
        })
        .collect()
}

/// Draws a one-line sparkline scaled between the minimum and maximum value.
///
/// A flat series is drawn at mid height.
pub fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let top = SPARK_LEVELS.len() - 1;

    values
        .iter()
        .map(|value| {
            let level = if span > 0.0 {
                (((value - min) / span) * top as f64).round() as usize
            } else {
                top / 2
            };
            SPARK_LEVELS[level.min(top)]
        })
        .collect()
}

/// Integers print without decimals, everything else with three.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.3}", value)
    }
}
