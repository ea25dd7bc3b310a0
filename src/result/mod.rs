//! Turning a search result into what the play page shows.

pub mod graph_data;
pub mod legend;
pub mod summary;
mod view;

pub use graph_data::get_graph_data;
pub use legend::{color_for, get_graph_legend};
pub use summary::ResultSummary;
pub use view::ResultSection;
