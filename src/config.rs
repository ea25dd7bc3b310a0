//! Build-time configuration of the endpoints and input timings.

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, Result};

/// Backend used when `WIKIRACE_BE_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
/// Public Wikipedia action API.
pub const DEFAULT_WIKIPEDIA_API: &str = "https://en.wikipedia.org/w/api.php";

/// Endpoints and tunables shared by the whole app.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Base URL of the path search service, without the `/play` suffix.
	pub backend_url: String,
	/// Wikipedia action API endpoint used for title suggestions.
	pub wikipedia_api: String,
	/// Quiet period before a typed title is searched.
	pub debounce: Duration,
	/// Maximum number of suggestions requested per query.
	pub suggestion_limit: u32,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			backend_url: option_env!("WIKIRACE_BE_URL")
				.unwrap_or(DEFAULT_BACKEND_URL)
				.to_string(),
			wikipedia_api: DEFAULT_WIKIPEDIA_API.to_string(),
			debounce: Duration::from_millis(500),
			suggestion_limit: 5,
		}
	}
}

impl AppConfig {
	/// Configuration pointing both clients at the given base URLs.
	pub fn with_endpoints(backend_url: impl Into<String>, wikipedia_api: impl Into<String>) -> Self {
		Self {
			backend_url: backend_url.into(),
			wikipedia_api: wikipedia_api.into(),
			..Self::default()
		}
	}

	/// The `/play` endpoint of the backend.
	pub fn play_url(&self) -> Result<Url> {
		let base = self.backend_url.trim_end_matches('/');
		Ok(Url::parse(&format!("{base}/play"))?)
	}

	/// Check that both endpoints parse and the tunables are usable.
	pub fn validate(&self) -> Result<()> {
		self.play_url()?;
		Url::parse(&self.wikipedia_api)?;
		if self.suggestion_limit == 0 {
			return Err(ApiError::Config("suggestion_limit must be greater than 0".into()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn play_url_joins_without_double_slash() {
		let config = AppConfig::with_endpoints("http://be.local:9000/", DEFAULT_WIKIPEDIA_API);
		assert_eq!(config.play_url().unwrap().as_str(), "http://be.local:9000/play");
	}

	#[test]
	fn defaults_are_valid() {
		let config = AppConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.debounce, Duration::from_millis(500));
		assert_eq!(config.suggestion_limit, 5);
	}

	#[test]
	fn rejects_unparsable_backend() {
		let config = AppConfig::with_endpoints("not a url", DEFAULT_WIKIPEDIA_API);
		assert!(matches!(config.validate(), Err(ApiError::InvalidUrl(_))));
	}
}
