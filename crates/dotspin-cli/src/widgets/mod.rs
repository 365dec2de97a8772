//! Reusable TUI widgets

mod footer;
mod header;
mod indicator;
mod status_bar;

pub use footer::render_footer;
pub use header::render_header;
pub use indicator::IndicatorWidget;
pub use status_bar::render_status_bar;
