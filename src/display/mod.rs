//! Presentation helpers: currency formatting, text charts and result export

mod currency;
mod chart;
mod export;

pub use currency::{format_currency, NOT_A_NUMBER, TOO_LARGE_TO_DISPLAY};
pub use chart::{render_chart, DEFAULT_CHART_WIDTH};
pub use export::{result_to_json, write_trajectory_csv};
