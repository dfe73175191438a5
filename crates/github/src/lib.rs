//! Read-only access to repository contents through the github REST api.
//! Inspired by https://github.com/XAMPPRocky/octocrab, which does not support WASM.

mod error;
pub use error::*;
mod requests;
pub use requests::*;
mod repository;
pub use repository::*;
mod content;
pub use content::*;

pub(crate) static GITHUB_API: &'static str = "https://api.github.com";

#[derive(Clone)]
pub struct GithubClient {
	pub(crate) client: reqwest::Client,
	pub(crate) auth_header: Option<String>,
}

impl GithubClient {
	/// Creates a client for the public REST api.
	/// Anonymous requests are rate limited by github, providing a token lifts that limit.
	pub fn new(token: Option<&str>, user_agent: &'static str) -> Result<Self, Error> {
		use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
		let auth_header = token.map(|token| format!("Bearer {token}"));
		if let Some(auth_header) = &auth_header {
			HeaderValue::from_str(auth_header)
				.map_err(|err| Error::InvalidResponse(format!("invalid token: {err}").into()))?;
		}
		let mut headers = HeaderMap::new();
		headers.insert(USER_AGENT, HeaderValue::from_static(user_agent));
		let client = reqwest::Client::builder().default_headers(headers).build()?;
		Ok(Self { client, auth_header })
	}

	pub(crate) fn insert_rest_headers(
		&self,
		builder: reqwest::RequestBuilder,
		media_type: Option<&'static str>,
	) -> reqwest::RequestBuilder {
		use reqwest::header::*;
		let accept = match media_type {
			None => format!("application/vnd.github+json"),
			Some(media) => format!("application/vnd.github.{media}+json"),
		};
		let mut builder = builder.header(ACCEPT, accept);
		if let Some(auth_header) = &self.auth_header {
			builder = builder.header(AUTHORIZATION, auth_header.clone());
		}
		builder.header("X-Github-Api-Version", "2022-11-28")
	}
}

/// Builds the url of the contents endpoint for a path in a repository.
/// An empty path addresses the root of the repository.
pub(crate) fn contents_url(owner: &str, repo: &str, path: &str, version: &str) -> String {
	let path = path
		.split('/')
		.filter(|segment| !segment.is_empty())
		.map(|segment| urlencoding::encode(segment).into_owned())
		.collect::<Vec<_>>()
		.join("/");
	let version = urlencoding::encode(version);
	match path.is_empty() {
		true => format!("{GITHUB_API}/repos/{owner}/{repo}/contents?ref={version}"),
		false => format!("{GITHUB_API}/repos/{owner}/{repo}/contents/{path}?ref={version}"),
	}
}
