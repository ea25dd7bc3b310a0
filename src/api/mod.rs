//! Network clients and the wire types they exchange.

pub mod play;
pub mod types;
pub mod wikipedia;

pub use play::{HttpPathSearch, PathSearch};
pub use types::{
	Algorithm, Article, ArticleId, ErrorResponse, FieldError, FormField, Path, PathSolutionOption,
	PlayRequest, Recommendation, ResultResponse,
};
pub use wikipedia::WikipediaClient;
