/// The repository url is not in a recognized `<host>/<owner>/<name>` form.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Unrecognized repository url {0:?}")]
pub struct ParseError(pub String);

#[derive(thiserror::Error, Debug, Clone)]
pub enum ListingError {
	#[error("Failed to list {path:?}: {error}")]
	Request { path: String, error: github::Error },
	#[error("Failed to resolve the default branch of {owner}/{name}: {error}")]
	Repository {
		owner: String,
		name: String,
		error: github::Error,
	},
	#[error("No folder at {0:?} in the file tree")]
	UnknownPath(String),
}

/// The inline body of a file could not be decoded.
/// Never surfaced to callers, resolved into [`DECODE_FAILED_TEXT`](super::DECODE_FAILED_TEXT).
#[derive(thiserror::Error, Debug, Clone)]
#[error("Failed to decode {path:?}: {error}")]
pub struct ContentDecodeError {
	pub path: String,
	pub error: github::DecodeError,
}

/// Neither the inline body nor the raw content of a file could be obtained.
/// Never surfaced to callers, resolved into [`UNAVAILABLE_TEXT`](super::UNAVAILABLE_TEXT).
#[derive(thiserror::Error, Debug, Clone)]
#[error("Content of {path:?} is not available: {error}")]
pub struct ContentUnavailable {
	pub path: String,
	pub error: github::Error,
}
