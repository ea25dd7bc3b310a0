//! Figures for the result message.

use crate::api::{Article, ResultResponse};

/// Numbers and endpoints shown in the result message.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
	/// Paths returned.
	pub solutions: usize,
	/// Articles the backend visited.
	pub traversed: u64,
	/// Seconds, already formatted to two decimals.
	pub duration: String,
	/// Links followed on the shortest path.
	pub hops: usize,
	/// First article of the first path.
	pub start: Article,
	/// Last article of the first path.
	pub target: Article,
}

impl ResultSummary {
	/// `None` when the response holds no path.
	pub fn from_response(res: &ResultResponse) -> Option<Self> {
		let (start, target) = res.endpoints()?;
		Some(Self {
			solutions: res.paths.len(),
			traversed: res.total_traversed,
			duration: format!("{:.2}", res.duration),
			hops: res.shortest_path_length.saturating_sub(1),
			start: start.clone(),
			target: target.clone(),
		})
	}

	/// `1 solution`, `2 solutions`.
	pub fn solutions_text(&self) -> String {
		plural(self.solutions as u64, "solution", "solutions")
	}

	/// `1 article`, `500 articles`.
	pub fn traversed_text(&self) -> String {
		plural(self.traversed, "article", "articles")
	}

	/// Links on the shortest path, pluralised.
	pub fn hops_text(&self) -> String {
		plural(self.hops as u64, "link", "links")
	}

	/// The whole message as plain text.
	pub fn sentence(&self) -> String {
		format!(
			"Found {} after traversing {} in {} seconds. The shortest path from {} to {} takes {}.",
			self.solutions_text(),
			self.traversed_text(),
			self.duration,
			self.start.title,
			self.target.title,
			self.hops_text()
		)
	}
}

fn plural(n: u64, one: &str, many: &str) -> String {
	format!("{} {}", n, if n == 1 { one } else { many })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn article(title: &str) -> Article {
		Article {
			id: 0.into(),
			title: title.into(),
			description: String::new(),
			thumbnail: String::new(),
			url: String::new(),
		}
	}

	#[test]
	fn summary_counts_links_not_articles() {
		let res = ResultResponse {
			total_traversed: 500,
			shortest_path_length: 4,
			duration: 5.731,
			articles: vec![article("Cars (film)"), article("Cars (franchise)")],
			paths: vec![vec![0, 1, 1, 1], vec![0, 1, 1, 1]],
		};
		let summary = ResultSummary::from_response(&res).unwrap();
		assert_eq!(summary.hops_text(), "3 links");
		assert_eq!(summary.duration, "5.73");
		assert_eq!(summary.solutions_text(), "2 solutions");
		assert_eq!(summary.traversed_text(), "500 articles");
		assert_eq!(summary.target.title, "Cars (franchise)");
	}

	#[test]
	fn sentence_reads_found_after_traversing() {
		let res = ResultResponse {
			total_traversed: 500,
			shortest_path_length: 3,
			duration: 1.0,
			articles: vec![article("Cars"), article("Cars 3")],
			paths: vec![vec![0, 1, 1]],
		};
		let summary = ResultSummary::from_response(&res).unwrap();
		assert_eq!(
			summary.sentence(),
			"Found 1 solution after traversing 500 articles in 1.00 seconds. \
			 The shortest path from Cars to Cars 3 takes 2 links."
		);
	}

	#[test]
	fn singular_forms() {
		let res = ResultResponse {
			total_traversed: 1,
			shortest_path_length: 2,
			duration: 0.0,
			articles: vec![article("A"), article("B")],
			paths: vec![vec![0, 1]],
		};
		let summary = ResultSummary::from_response(&res).unwrap();
		assert_eq!(summary.solutions_text(), "1 solution");
		assert_eq!(summary.traversed_text(), "1 article");
		assert_eq!(summary.hops_text(), "1 link");
	}

	#[test]
	fn no_paths_no_summary() {
		let res = ResultResponse {
			total_traversed: 0,
			shortest_path_length: 0,
			duration: 0.0,
			articles: vec![],
			paths: vec![],
		};
		assert!(ResultSummary::from_response(&res).is_none());
	}
}
