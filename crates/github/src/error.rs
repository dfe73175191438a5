#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	#[error(transparent)]
	Request(std::sync::Arc<reqwest::Error>),
	#[error(transparent)]
	Deserialization(std::sync::Arc<serde_json::Error>),
	#[error("{0:?}")]
	InvalidResponse(std::sync::Arc<String>),
	#[error("Unexpected response status {0}")]
	Status(u16),
}
impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(std::sync::Arc::new(value))
	}
}
impl From<serde_json::Error> for Error {
	fn from(value: serde_json::Error) -> Self {
		Self::Deserialization(std::sync::Arc::new(value))
	}
}

/// Fails with [`Error::Status`] for any non-success response.
pub(crate) fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
	let status = response.status();
	if !status.is_success() {
		log::warn!(target: "github", "{} responded with {status}", response.url());
		return Err(Error::Status(status.as_u16()));
	}
	Ok(response)
}
