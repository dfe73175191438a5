use crate::{check_status, contents_url, Error};
use futures_util::future::LocalBoxFuture;

pub struct Args<'a> {
	pub owner: &'a str,
	pub repo: &'a str,
	/// The path to the file in the repository.
	pub path: &'a str,
	pub version: &'a str,
}

impl crate::GithubClient {
	/// Fetches the raw content of a file in a repository.
	pub fn get_file_content(&self, request: Args<'_>) -> LocalBoxFuture<'static, Result<String, Error>> {
		// https://docs.github.com/en/rest/repos/contents?apiVersion=2022-11-28#get-repository-content
		// https://docs.github.com/en/rest/overview/media-types?apiVersion=2022-11-28
		let url = contents_url(request.owner, request.repo, request.path, request.version);
		let builder = self.client.get(url);
		let builder = self.insert_rest_headers(builder, Some("raw"));
		Box::pin(async move {
			let response = check_status(builder.send().await?)?;
			Ok(response.text().await?)
		})
	}
}
