//! Chapter navigation, instructional text and chapter prose

mod chapter;
mod content;
pub mod loader;
pub mod render;
pub mod worked_example;

pub use chapter::Chapter;
pub use loader::{load_instructions, load_default_instructions, default_instructions_path};
pub use render::{render, RenderContext};
pub use worked_example::{lending_example, row_for_year, ComparisonRow, LENDING_PRINCIPAL, LENDING_RATE};
