/// An article drawn on the canvas, keyed by its index in the response's articles.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: usize,
	pub title: String,
	pub url: String,
	/// Degree of separation from the start page along the first path that reached it.
	pub degree: usize,
}

/// A directed link between two [`GraphNode`] ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
