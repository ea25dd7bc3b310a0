//! Wire types shared with the search backend and the Wikipedia API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend article id. Numeric from the search service, string (`"Q1"`) from fixtures.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
	/// Numeric id.
	Num(i64),
	/// Opaque string id.
	Str(String),
}

impl From<i64> for ArticleId {
	fn from(id: i64) -> Self {
		ArticleId::Num(id)
	}
}

impl From<&str> for ArticleId {
	fn from(id: &str) -> Self {
		ArticleId::Str(id.to_string())
	}
}

impl fmt::Display for ArticleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ArticleId::Num(id) => write!(f, "{id}"),
			ArticleId::Str(id) => f.write_str(id),
		}
	}
}

/// One article of the reference corpus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
	/// Backend-assigned id, unique within one response.
	pub id: ArticleId,
	/// Page title.
	pub title: String,
	/// Short description, empty when Wikipedia has none.
	pub description: String,
	/// Thumbnail image URL, empty when the article has none.
	pub thumbnail: String,
	/// Canonical article URL.
	pub url: String,
}

/// Indices into [`ResultResponse::articles`], start first and target last.
pub type Path = Vec<usize>;

/// Successful body of `POST /play`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
	/// Articles visited by the backend search.
	pub total_traversed: u64,
	/// Number of articles on the shortest path (hops + 1).
	pub shortest_path_length: usize,
	/// Search time in seconds.
	pub duration: f64,
	/// Every article referenced by `paths`.
	pub articles: Vec<Article>,
	/// Shortest paths found; the first is shown in the message.
	pub paths: Vec<Path>,
}

impl ResultResponse {
	/// Fails with the first path index that does not point into `articles`.
	pub fn check_indices(&self) -> Result<(), String> {
		for (p, path) in self.paths.iter().enumerate() {
			if let Some(&bad) = path.iter().find(|&&idx| idx >= self.articles.len()) {
				return Err(format!(
					"path {p} references article {bad} but only {} were returned",
					self.articles.len()
				));
			}
		}
		Ok(())
	}

	/// First and last article of the first path.
	pub fn endpoints(&self) -> Option<(&Article, &Article)> {
		let path = self.paths.first()?;
		let start = self.articles.get(*path.first()?)?;
		let target = self.articles.get(*path.last()?)?;
		Some((start, target))
	}

	/// Articles of one path in order, skipping dangling indices.
	pub fn path_articles(&self, path: &[usize]) -> Vec<Article> {
		path.iter()
			.filter_map(|&idx| self.articles.get(idx).cloned())
			.collect()
	}
}

/// Search algorithm run by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
	/// Iterative deepening search.
	#[serde(rename = "IDS")]
	Ids,
	/// Breadth-first search.
	#[serde(rename = "BFS")]
	Bfs,
}

impl Algorithm {
	/// Every option, in the order the form lists them.
	pub const ALL: [Algorithm; 2] = [Algorithm::Ids, Algorithm::Bfs];

	/// Wire and display value.
	pub fn as_str(self) -> &'static str {
		match self {
			Algorithm::Ids => "IDS",
			Algorithm::Bfs => "BFS",
		}
	}

	/// Parse a `<select>` value.
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|a| a.as_str() == value)
	}
}

/// Whether the backend should return one path or all shortest paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathSolutionOption {
	/// Stop at the first shortest path.
	Single,
	/// Return every shortest path.
	Multiple,
}

impl PathSolutionOption {
	/// Every option, in the order the form lists them.
	pub const ALL: [PathSolutionOption; 2] =
		[PathSolutionOption::Single, PathSolutionOption::Multiple];

	/// Wire value.
	pub fn as_str(self) -> &'static str {
		match self {
			PathSolutionOption::Single => "single",
			PathSolutionOption::Multiple => "multiple",
		}
	}

	/// Label shown in the form.
	pub fn label(self) -> &'static str {
		match self {
			PathSolutionOption::Single => "Single",
			PathSolutionOption::Multiple => "Multiple",
		}
	}

	/// Parse a `<select>` value.
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|o| o.as_str() == value)
	}
}

/// Form-encoded body of `POST /play`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
	/// Search to run.
	pub algorithm: Algorithm,
	/// One path or all of them.
	pub path_solution_option: PathSolutionOption,
	/// Title of the start page.
	pub start: String,
	/// Title of the target page.
	pub target: String,
}

/// Name of a play form control, as used on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
	/// `algorithm` select.
	Algorithm,
	/// `pathSolutionOption` select.
	PathSolutionOption,
	/// Start title input.
	Start,
	/// Target title input.
	Target,
}

impl FormField {
	/// Controls in the order they appear in the form.
	pub const ALL: [FormField; 4] = [
		FormField::Algorithm,
		FormField::PathSolutionOption,
		FormField::Start,
		FormField::Target,
	];
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			FormField::Algorithm => "algorithm",
			FormField::PathSolutionOption => "pathSolutionOption",
			FormField::Start => "start",
			FormField::Target => "target",
		};
		write!(f, "{}", s)
	}
}

/// Backend blame attached to one form control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	/// Control the message belongs to.
	pub field: FormField,
	/// Text shown under the control.
	pub message: String,
}

/// Non-success body of `POST /play`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
	/// Short error title, e.g. `Bad Request`.
	pub error: String,
	/// Human-readable explanation.
	pub message: String,
	/// Controls the backend blames, if any.
	#[serde(default)]
	pub error_fields: Option<Vec<FieldError>>,
}

/// A title suggestion from the Wikipedia prefix search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
	/// Wikipedia page id.
	pub id: i64,
	/// Page title.
	pub title: String,
	/// Wikidata short description, empty when missing.
	pub description: String,
	/// Thumbnail URL, empty when missing.
	pub thumbnail: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn article(id: i64, title: &str) -> Article {
		Article {
			id: id.into(),
			title: title.into(),
			description: String::new(),
			thumbnail: String::new(),
			url: format!("https://en.wikipedia.org/wiki/{title}"),
		}
	}

	#[test]
	fn decodes_camel_case_result() {
		let body = r#"{
			"totalTraversed": 500,
			"shortestPathLength": 4,
			"duration": 5.73,
			"articles": [
				{"id": 0, "title": "Cars (film)", "description": "2006 film", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_(film)"},
				{"id": 3, "title": "Cars (franchise)", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_(franchise)"}
			],
			"paths": [[0, 1]]
		}"#;
		let res: ResultResponse = serde_json::from_str(body).unwrap();
		assert_eq!(res.total_traversed, 500);
		assert_eq!(res.shortest_path_length, 4);
		assert_eq!(res.paths, vec![vec![0, 1]]);
		assert!(res.check_indices().is_ok());
		let (start, target) = res.endpoints().unwrap();
		assert_eq!(start.title, "Cars (film)");
		assert_eq!(target.title, "Cars (franchise)");
	}

	#[test]
	fn decodes_string_article_id() {
		let body = r#"{
			"totalTraversed": 2,
			"shortestPathLength": 2,
			"duration": 0.5,
			"articles": [
				{"id": "Q1", "title": "Cars", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars"},
				{"id": 2, "title": "Cars 2", "description": "", "thumbnail": "", "url": "https://en.wikipedia.org/wiki/Cars_2"}
			],
			"paths": [[0, 1]]
		}"#;
		let res: ResultResponse = serde_json::from_str(body).unwrap();
		assert_eq!(res.articles[0].id, ArticleId::from("Q1"));
		assert_eq!(res.articles[1].id, ArticleId::Num(2));
		assert_eq!(res.articles[0].id.to_string(), "Q1");
		assert!(res.check_indices().is_ok());
	}

	#[test]
	fn dangling_index_is_reported() {
		let res = ResultResponse {
			total_traversed: 1,
			shortest_path_length: 2,
			duration: 0.1,
			articles: vec![article(0, "A")],
			paths: vec![vec![0], vec![0, 7]],
		};
		let err = res.check_indices().unwrap_err();
		assert!(err.contains("path 1"));
		assert!(err.contains("article 7"));
		assert_eq!(res.path_articles(&[0, 7]).len(), 1);
	}

	#[test]
	fn error_fields_are_optional() {
		let body = r#"{"error": "Bad Request", "message": "Invalid algorithm"}"#;
		let err: ErrorResponse = serde_json::from_str(body).unwrap();
		assert_eq!(err.error_fields, None);

		let body = r#"{"error": "Not Found", "message": "x", "errorFields": [{"field": "pathSolutionOption", "message": "bad"}]}"#;
		let err: ErrorResponse = serde_json::from_str(body).unwrap();
		assert_eq!(
			err.error_fields.unwrap()[0].field,
			FormField::PathSolutionOption
		);
	}

	#[test]
	fn select_values_round_trip_through_parse() {
		assert_eq!(Algorithm::parse("BFS"), Some(Algorithm::Bfs));
		assert_eq!(Algorithm::parse("DFS"), None);
		assert_eq!(
			PathSolutionOption::parse("multiple"),
			Some(PathSolutionOption::Multiple)
		);
		assert_eq!(FormField::PathSolutionOption.to_string(), "pathSolutionOption");
	}
}
