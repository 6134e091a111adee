use crate::player::Id;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while talking to the roster service or handling a form.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request never completed, or the service answered with a non-success status.
	#[error("Request to `{url}` failed: {source}")]
	Network {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	/// The response body was not in the expected shape.
	#[error("Unexpected response from `{url}`: {source}")]
	Parse {
		url: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Player #{0} does not exist (anymore).")]
	PlayerNotFound(Id),

	/// The service answered, but reported `success: false`.
	#[error("The roster service rejected the request: {0}")]
	Rejected(String),

	#[error("`{0}` is required.")]
	MissingField(&'static str),
}
