//! Merging solution paths into one graph.

use std::collections::HashSet;

use crate::api::{Article, Path};
use crate::components::force_graph::{GraphData, GraphLink, GraphNode};

/// Merge every path into one node/link graph.
///
/// A node is created the first time its index is seen and keeps the depth it had in that
/// path. Links are emitted per path step, so a step shared by two paths appears twice.
pub fn get_graph_data(articles: &[Article], paths: &[Path]) -> GraphData {
	let mut data = GraphData::default();
	let mut seen = HashSet::new();

	for path in paths {
		for (degree, &id) in path.iter().enumerate() {
			if seen.insert(id) {
				let (title, url) = articles
					.get(id)
					.map(|a| (a.title.clone(), a.url.clone()))
					.unwrap_or_default();
				data.nodes.push(GraphNode {
					id,
					title,
					url,
					degree,
				});
			}
			if degree > 0 {
				data.links.push(GraphLink {
					source: path[degree - 1],
					target: id,
				});
			}
		}
	}

	data
}
