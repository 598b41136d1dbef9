//! Horizontal bar chart of a trajectory

use super::currency::format_currency;
use crate::projection::TrajectoryPoint;

pub const DEFAULT_CHART_WIDTH: usize = 40;

/// One line per period: `year | ####### $1,100.00`.
/// Bars are scaled so the largest value spans `width` characters.
pub fn render_chart(points: &[TrajectoryPoint], width: usize) -> String {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let label_width = points.last().map(|p| p.period.to_string().len()).unwrap_or(1);

    let mut out = String::new();
    for point in points {
        let bar_len = if max > 0.0 && max.is_finite() {
            ((point.value / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:>lw$} | {:<bw$} {}\n",
            point.period,
            "#".repeat(bar_len),
            format_currency(point.value),
            lw = label_width,
            bw = width,
        ));
    }
    out
}
