//! Title suggestions from the Wikipedia prefix search.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;
use url::Url;

use super::types::Recommendation;
use crate::config::AppConfig;
use crate::error::{ApiError, Result};

#[derive(Debug, Deserialize)]
struct SearchResponse {
	query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
	#[serde(default)]
	pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
	pageid: i64,
	title: String,
	/// Rank within the prefix search.
	index: Option<u32>,
	thumbnail: Option<Thumbnail>,
	terms: Option<Terms>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
	source: String,
}

#[derive(Debug, Deserialize)]
struct Terms {
	#[serde(default)]
	description: Vec<String>,
}

/// HTTP client for the Wikipedia action API.
#[derive(Clone, Debug)]
pub struct WikipediaClient {
	client: reqwest::Client,
	endpoint: String,
	limit: u32,
}

impl WikipediaClient {
	/// Client for `config`'s search endpoint and suggestion limit.
	pub fn new(config: &AppConfig) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint: config.wikipedia_api.clone(),
			limit: config.suggestion_limit,
		}
	}

	/// The prefix search URL for `search`.
	pub fn search_url(&self, search: &str) -> Result<Url> {
		let limit = self.limit.to_string();
		Ok(Url::parse_with_params(
			&self.endpoint,
			&[
				("action", "query"),
				("format", "json"),
				("gpssearch", search),
				("generator", "prefixsearch"),
				("prop", "pageprops|pageimages|pageterms"),
				("redirects", ""),
				("ppprop", "displaytitle"),
				("piprop", "thumbnail"),
				("pithumbsize", "160"),
				("pilimit", "30"),
				("wbptterms", "description"),
				("gpsnamespace", "0"),
				("gpslimit", limit.as_str()),
				("origin", "*"),
			],
		)?)
	}

	/// Up to `suggestion_limit` titles starting with `search`.
	pub async fn search(&self, search: &str) -> Result<Vec<Recommendation>> {
		let url = self.search_url(search)?;
		debug!("fetching suggestions for {:?}", search);

		let res = self.client.get(url).send().await?;
		if !res.status().is_success() {
			return Err(ApiError::Status(res.status().as_u16()));
		}
		let body = res.text().await?;
		parse_search_response(&body)
	}
}

/// Flatten a prefix search body into suggestions ordered by search rank.
pub fn parse_search_response(body: &str) -> Result<Vec<Recommendation>> {
	let res: SearchResponse = serde_json::from_str(body)?;
	let Some(query) = res.query else {
		return Ok(Vec::new());
	};

	let mut pages: Vec<Page> = query.pages.into_values().collect();
	pages.sort_by_key(|p| (p.index.unwrap_or(u32::MAX), p.pageid));

	Ok(pages
		.into_iter()
		.map(|page| Recommendation {
			id: page.pageid,
			title: page.title,
			description: page
				.terms
				.and_then(|t| t.description.into_iter().next())
				.unwrap_or_default(),
			thumbnail: page.thumbnail.map(|t| t.source).unwrap_or_default(),
		})
		.collect())
}
