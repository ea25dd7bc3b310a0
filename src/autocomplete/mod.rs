//! Title autocomplete for the start and target fields.

mod input;
pub mod popup;
pub mod query;

pub use input::WikipediaInput;
pub use popup::Autocomplete;
pub use query::{QueryTable, SuggestionView};
