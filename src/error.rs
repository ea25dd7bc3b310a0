//! Errors raised while talking to the search backend or the Wikipedia API.

use thiserror::Error;

use crate::api::types::FieldError;

/// Failure of one network round trip.
#[derive(Error, Debug)]
pub enum ApiError {
	/// The request never produced a response (offline, DNS, CORS, timeout).
	#[error("{0}")]
	Network(#[from] reqwest::Error),

	/// The backend rejected the request with a structured payload.
	#[error("{error}: {message}")]
	Backend {
		/// Short error title.
		error: String,
		/// Human readable explanation.
		message: String,
		/// Per-field attribution, possibly empty.
		fields: Vec<FieldError>,
	},

	/// Non-success status without a usable error payload.
	#[error("Request failed with status {0}")]
	Status(u16),

	/// The body could not be decoded, or broke a response invariant.
	#[error("Malformed response: {0}")]
	Decode(String),

	/// An endpoint could not be built from the configuration.
	#[error("Invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),

	/// A configuration value is out of range.
	#[error("Invalid configuration: {0}")]
	Config(String),
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}

impl ApiError {
	/// Title and description for an error notification.
	pub fn toast_text(&self) -> (String, String) {
		match self {
			Self::Backend { error, message, .. } => (error.clone(), message.clone()),
			Self::Network(err) => ("Error".into(), err.to_string()),
			other => ("Error".into(), other.to_string()),
		}
	}
}

/// Result alias for network calls.
pub type Result<T> = std::result::Result<T, ApiError>;
