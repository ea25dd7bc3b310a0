//! Client for the backend's `POST /play` path search.

use async_trait::async_trait;
use log::{debug, warn};

use super::types::{ErrorResponse, PlayRequest, ResultResponse};
use crate::config::AppConfig;
use crate::error::{ApiError, Result};

/// Something that can answer a path search request.
#[async_trait(?Send)]
pub trait PathSearch {
	/// Run one search and return every path found.
	async fn play(&self, request: &PlayRequest) -> Result<ResultResponse>;
}

/// [`PathSearch`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpPathSearch {
	client: reqwest::Client,
	config: AppConfig,
}

impl HttpPathSearch {
	/// Client posting to `config`'s backend.
	pub fn new(config: AppConfig) -> Self {
		Self {
			client: reqwest::Client::new(),
			config,
		}
	}
}

#[async_trait(?Send)]
impl PathSearch for HttpPathSearch {
	async fn play(&self, request: &PlayRequest) -> Result<ResultResponse> {
		let url = self.config.play_url()?;
		debug!(
			"POST {} ({} -> {}, {})",
			url,
			request.start,
			request.target,
			request.algorithm.as_str()
		);

		let res = self.client.post(url).form(request).send().await?;
		let status = res.status();
		let body = res.text().await?;
		decode_play_response(status.as_u16(), &body)
	}
}

/// Turn a `/play` status and body into a result or a typed error.
pub fn decode_play_response(status: u16, body: &str) -> Result<ResultResponse> {
	if (200..300).contains(&status) {
		let result: ResultResponse = serde_json::from_str(body)?;
		result.check_indices().map_err(ApiError::Decode)?;
		return Ok(result);
	}

	match serde_json::from_str::<ErrorResponse>(body) {
		Ok(err) => {
			warn!("search rejected ({}): {} - {}", status, err.error, err.message);
			Err(ApiError::Backend {
				error: err.error,
				message: err.message,
				fields: err.error_fields.unwrap_or_default(),
			})
		}
		Err(_) => {
			warn!("search failed with status {} and no error payload", status);
			Err(ApiError::Status(status))
		}
	}
}
